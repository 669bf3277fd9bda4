//! Mock verification client for driving the form without a server

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vc_shared::types::VerifyResponse;

use crate::domain::entities::VerificationCode;

use super::client::{ClientError, VerificationClientTrait};

/// Answers every call with a fixed result and records the codes it saw
#[derive(Clone)]
pub struct MockVerificationClient {
    pub sent_codes: Arc<Mutex<Vec<String>>>,
    reply: Result<VerifyResponse, ClientError>,
}

impl MockVerificationClient {
    pub fn new(reply: Result<VerifyResponse, ClientError>) -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(Vec::new())),
            reply,
        }
    }

    pub fn accepting() -> Self {
        Self::new(Ok(VerifyResponse::success()))
    }

    pub fn rejecting(message: impl Into<String>) -> Self {
        Self::new(Ok(VerifyResponse::failure(message)))
    }

    pub fn unreachable() -> Self {
        Self::new(Err(ClientError::Transport {
            message: "connection refused".to_string(),
        }))
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent_codes
            .lock()
            .map(|codes| codes.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl VerificationClientTrait for MockVerificationClient {
    async fn verify(&self, code: &VerificationCode) -> Result<VerifyResponse, ClientError> {
        if let Ok(mut codes) = self.sent_codes.lock() {
            codes.push(code.to_string());
        }
        self.reply.clone()
    }
}
