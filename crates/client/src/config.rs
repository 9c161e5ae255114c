//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPDESK_API_URL` - Base URL of the shop admin API
//!   (default: `http://127.0.0.1:8000/api`)
//! - `SHOPDESK_TOKEN_DIR` - Directory holding the persisted session
//!   token (default: `$HOME/.shopdesk`, falling back to `./.shopdesk`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default API base URL, matching the backend's development bind address.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Directory name for the token store when `SHOPDESK_TOKEN_DIR` is unset.
const TOKEN_DIR_NAME: &str = ".shopdesk";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the shop admin API.
    pub api_url: Url,
    /// Directory holding the persisted session token.
    pub token_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SHOPDESK_API_URL` is present but not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("SHOPDESK_API_URL", DEFAULT_API_URL)
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPDESK_API_URL".to_string(), e.to_string()))?;

        let token_dir = get_optional_env("SHOPDESK_TOKEN_DIR").map_or_else(default_token_dir, PathBuf::from);

        Ok(Self { api_url, token_dir })
    }

    /// Build a configuration directly, bypassing the environment.
    #[must_use]
    pub const fn new(api_url: Url, token_dir: PathBuf) -> Self {
        Self { api_url, token_dir }
    }
}

/// Resolve the default token directory: `$HOME/.shopdesk`, else a
/// `.shopdesk` directory relative to the working directory.
fn default_token_dir() -> PathBuf {
    get_optional_env("HOME").map_or_else(
        || PathBuf::from(TOKEN_DIR_NAME),
        |home| PathBuf::from(home).join(TOKEN_DIR_NAME),
    )
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
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
    fn test_default_api_url_parses() {
        let url: Url = DEFAULT_API_URL.parse().unwrap();
        assert_eq!(url.path(), "/api");
    }

    #[test]
    fn test_new_keeps_fields() {
        let url: Url = "http://localhost:9000/api".parse().unwrap();
        let config = ClientConfig::new(url.clone(), PathBuf::from("/tmp/tokens"));
        assert_eq!(config.api_url, url);
        assert_eq!(config.token_dir, PathBuf::from("/tmp/tokens"));
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        let value = get_env_or_default("SHOPDESK_TEST_UNSET_VAR", "fallback");
        assert_eq!(value, "fallback");
    }
}
