//! Shared utilities and common types for the VerifyCode server and clients
//!
//! This crate provides functionality used across all workspace members:
//! - Configuration types loaded from the environment
//! - Error types for configuration loading
//! - Wire types for the verification endpoint
//! - User-visible message catalogue

pub mod config;
pub mod errors;
pub mod messages;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ClientConfig, CorsConfig, Environment, LoggingConfig, ServerConfig,
};
pub use errors::{ConfigError, ConfigResult};
pub use types::{HealthResponse, VerifyRequest, VerifyResponse};
