//! Configuration module with sub-modules per concern
//!
//! - `client` - Where the entry form sends codes
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod client;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::errors::{ConfigError, ConfigResult};

pub use client::ClientConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete server-side configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> ConfigResult<Self> {
        let environment = Environment::from_env();
        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env()?,
            logging: LoggingConfig::from_env(environment),
        })
    }
}

/// Read the first variable in `keys` that is set and parse it.
///
/// Unset variables fall through to the next key and finally to `None`;
/// a set but unparsable value is an error.
pub(crate) fn parse_env<T: FromStr>(keys: &[&str]) -> ConfigResult<Option<T>> {
    for key in keys {
        if let Ok(raw) = env::var(key) {
            let trimmed = raw.trim();
            return trimmed
                .parse::<T>()
                .map(Some)
                .map_err(|_| ConfigError::invalid(*key, raw.clone()));
        }
    }
    Ok(None)
}

/// Serialises tests that touch process-wide environment variables
#[cfg(test)]
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Run `f` with `vars` set (`Some`) or removed (`None`), restoring the
/// previous values afterwards.
#[cfg(test)]
pub(crate) fn with_env<R>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), env::var(key).ok()))
        .collect();
    for (key, value) in vars {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }

    let result = f();

    for (key, value) in saved {
        match value {
            Some(value) => env::set_var(&key, value),
            None => env::remove_var(&key),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 5000);
        assert!(config.cors.allows_any_origin());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_env_falls_through_unset_keys() {
        env::set_var("VC_TEST_PARSE_SECOND", "42");
        let value: Option<u16> =
            parse_env(&["VC_TEST_PARSE_FIRST_UNSET", "VC_TEST_PARSE_SECOND"]).unwrap();
        assert_eq!(value, Some(42));
        env::remove_var("VC_TEST_PARSE_SECOND");
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        env::set_var("VC_TEST_PARSE_GARBAGE", "forty-two");
        let result: ConfigResult<Option<u16>> = parse_env(&["VC_TEST_PARSE_GARBAGE"]);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::invalid("VC_TEST_PARSE_GARBAGE", "forty-two")
        );
        env::remove_var("VC_TEST_PARSE_GARBAGE");
    }

    #[test]
    fn test_app_config_from_env_surfaces_bad_port() {
        let result = with_env(&[("PORT", Some("http")), ("SERVER_PORT", None)], AppConfig::from_env);
        assert_eq!(result.unwrap_err(), ConfigError::invalid("PORT", "http"));
    }

    #[test]
    fn test_parse_env_all_unset() {
        let value: Option<u16> = parse_env(&["VC_TEST_PARSE_NEVER_SET"]).unwrap();
        assert_eq!(value, None);
    }
}
