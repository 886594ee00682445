//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `VERDEMAR_DATA_DIR` - Directory for durable client-side storage (cart
//!   state and session token)
//!
//! ## Optional
//! - `VERDEMAR_API_URL` - Backend REST API base URL (default:
//!   `http://localhost:3000`)
//! - `VERDEMAR_STOCK_REFRESH_SECS` - Stock reconciliation period in seconds
//!   (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default reconciliation period.
const DEFAULT_STOCK_REFRESH_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Backend REST API base URL
    pub api_url: Url,
    /// Directory holding durable client-side state
    pub data_dir: PathBuf,
    /// How often to reconcile quantities against authoritative stock
    pub stock_refresh: Duration,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("VERDEMAR_API_URL", "http://localhost:3000");
        let api_url = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("VERDEMAR_API_URL".to_string(), e.to_string()))?;

        let data_dir = PathBuf::from(get_required_env("VERDEMAR_DATA_DIR")?);

        let refresh_secs = get_env_or_default(
            "VERDEMAR_STOCK_REFRESH_SECS",
            &DEFAULT_STOCK_REFRESH_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("VERDEMAR_STOCK_REFRESH_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_url,
            data_dir,
            stock_refresh: Duration::from_secs(refresh_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_refresh_period_is_thirty_seconds() {
        assert_eq!(DEFAULT_STOCK_REFRESH_SECS, 30);
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_from_env_rejects_malformed_api_url() {
        // SAFETY: single-threaded access to these process-wide variables;
        // no other test in the workspace touches them.
        unsafe {
            std::env::set_var("VERDEMAR_DATA_DIR", "/tmp/verdemar-config-test");
            std::env::set_var("VERDEMAR_API_URL", "not a url");
        }

        let result = CartConfig::from_env();
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar(ref var, _)) if var == "VERDEMAR_API_URL")
        );

        unsafe {
            std::env::remove_var("VERDEMAR_API_URL");
            std::env::remove_var("VERDEMAR_DATA_DIR");
        }
    }

    #[test]
    fn test_config_construction() {
        let config = CartConfig {
            api_url: Url::parse("http://localhost:3000").unwrap(),
            data_dir: PathBuf::from("/tmp/verdemar"),
            stock_refresh: Duration::from_secs(30),
        };
        assert_eq!(config.api_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.stock_refresh, Duration::from_secs(30));
    }
}
