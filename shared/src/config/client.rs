//! Verification client configuration module

use serde::{Deserialize, Serialize};
use std::env;
use validator::Validate;

use super::parse_env;
use crate::errors::ConfigResult;

/// Path of the verification endpoint relative to the service base URL
pub const VERIFY_PATH: &str = "/api/verify";

/// Where and how the entry form reaches the verification service
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ClientConfig {
    /// Base URL of the verification service, without the endpoint path
    #[validate(url)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:5000"),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load from `VERIFY_API_URL` and `VERIFY_API_TIMEOUT_SECS`, then validate
    pub fn from_env() -> ConfigResult<Self> {
        let defaults = Self::default();
        let config = Self {
            base_url: env::var("VERIFY_API_URL").unwrap_or(defaults.base_url),
            timeout_secs: parse_env(&["VERIFY_API_TIMEOUT_SECS"])?
                .unwrap_or(defaults.timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Full URL of `POST /api/verify`
    pub fn verify_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), VERIFY_PATH)
    }
}

fn default_timeout_secs() -> u64 {
    10
}
