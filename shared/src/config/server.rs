//! Server configuration module

use serde::{Deserialize, Serialize};
use std::env;

use validator::ValidateUrl;

use super::parse_env;
use crate::errors::{ConfigError, ConfigResult};

/// Default listening port of the verification service
pub const DEFAULT_PORT: u16 = 5000;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
            workers: 0, // Use all CPU cores
        }
    }
}

impl ServerConfig {
    /// Load from `SERVER_HOST`, `PORT` (or `SERVER_PORT`) and `SERVER_WORKERS`
    pub fn from_env() -> ConfigResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_env(&["PORT", "SERVER_PORT"])?.unwrap_or(defaults.port),
            workers: parse_env(&["SERVER_WORKERS"])?.unwrap_or(defaults.workers),
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; empty or `*` allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Load from `ALLOWED_ORIGINS` (comma separated) and `CORS_MAX_AGE`.
    ///
    /// Every listed origin must be `*` or `scheme://host[:port]`.
    pub fn from_env() -> ConfigResult<Self> {
        let allowed_origins: Vec<String> = env::var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        if let Some(bad) = allowed_origins.iter().find(|origin| !is_valid_origin(origin)) {
            return Err(ConfigError::invalid("ALLOWED_ORIGINS", bad.as_str()));
        }

        Ok(Self {
            allowed_origins,
            max_age: parse_env(&["CORS_MAX_AGE"])?.unwrap_or_else(default_max_age),
        })
    }

    /// Whether requests from every origin are accepted
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// `*`, or an absolute URL made of a scheme and an authority only
fn is_valid_origin(origin: &str) -> bool {
    if origin == "*" {
        return true;
    }
    match origin.split_once("://") {
        Some((scheme, authority)) => {
            !scheme.is_empty()
                && !authority.is_empty()
                && !authority.contains('/')
                && origin.validate_url()
        }
        None => false,
    }
}

fn default_max_age() -> usize {
    3600 // 1 hour
}
