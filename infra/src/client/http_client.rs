//! `reqwest` implementation of `VerificationClientTrait`

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use validator::Validate;

use vc_core::domain::entities::VerificationCode;
use vc_core::form::{ClientError, VerificationClientTrait};
use vc_shared::config::ClientConfig;
use vc_shared::types::{VerifyRequest, VerifyResponse};

use crate::InfrastructureResult;

/// HTTP client for the verification service
#[derive(Debug, Clone)]
pub struct HttpVerificationClient {
    client: reqwest::Client,
    config: ClientConfig,
    verify_url: String,
}

impl HttpVerificationClient {
    /// Create a new client; the configuration is validated first
    pub fn new(config: ClientConfig) -> InfrastructureResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let verify_url = config.verify_url();

        debug!(url = %verify_url, timeout_secs = config.timeout_secs, "Verification client ready");

        Ok(Self {
            client,
            config,
            verify_url,
        })
    }

    /// Create from `VERIFY_API_URL` / `VERIFY_API_TIMEOUT_SECS`
    pub fn from_env() -> InfrastructureResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL requests are sent to
    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }
}

#[async_trait]
impl VerificationClientTrait for HttpVerificationClient {
    async fn verify(&self, code: &VerificationCode) -> Result<VerifyResponse, ClientError> {
        let response = self
            .client
            .post(&self.verify_url)
            .json(&VerifyRequest::new(code.as_str()))
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.verify_url, error = %e, "Verification request failed");
                ClientError::Transport {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ClientError::Transport {
            message: e.to_string(),
        })?;

        let verdict = serde_json::from_slice::<VerifyResponse>(&body).map_err(|e| {
            warn!(status = status.as_u16(), error = %e, "Verification response is not a verdict");
            ClientError::MalformedResponse {
                status: status.as_u16(),
                message: e.to_string(),
            }
        })?;

        debug!(
            status = status.as_u16(),
            success = verdict.success,
            "Verification response received"
        );
        Ok(verdict)
    }
}
