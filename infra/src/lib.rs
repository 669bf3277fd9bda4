//! # Infrastructure Layer
//!
//! Concrete adapters for the VerifyCode workspace:
//! - **Client**: `reqwest` implementation of the form's verification client
//! - **Terminal**: a line-driven front end for the code entry form
//!
//! The domain rules and form state live in `vc_core`; this crate only moves
//! bytes between them and the outside world.

/// HTTP client for `POST /api/verify`
pub mod client;

/// Line-driven terminal front end for the entry form
pub mod terminal;

pub use client::HttpVerificationClient;

use vc_shared::ConfigError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ConfigError> for InfrastructureError {
    fn from(error: ConfigError) -> Self {
        InfrastructureError::Config(error.to_string())
    }
}

impl From<validator::ValidationErrors> for InfrastructureError {
    fn from(errors: validator::ValidationErrors) -> Self {
        InfrastructureError::Config(errors.to_string())
    }
}

/// Result type for infrastructure operations
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
