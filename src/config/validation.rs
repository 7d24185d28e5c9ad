//! Configuration validation.
//!
//! Range checks applied after loading, so a bad value fails at startup
//! instead of at the first collaborator call.

use super::{Config, SentimentBackendKind};
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Maximum allowed retry count.
pub const MAX_RETRIES: u32 = 10;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequired`] if the HTTP sentiment backend
/// is selected with an empty `SENTIMENT_API_URL`, and
/// [`ConfigError::InvalidValue`] if:
/// - `REQUEST_TIMEOUT_MS` is outside 1000..=300000
/// - `MAX_RETRIES` is above 10
/// - `SENTIMENT_API_URL` is not an http(s) URL while the HTTP backend is selected
/// - `RESULTS_DIR` is empty
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.request_timeout_ms < MIN_TIMEOUT_MS || config.request_timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    if config.max_retries > MAX_RETRIES {
        return Err(ConfigError::InvalidValue {
            var: "MAX_RETRIES".into(),
            reason: format!("must be between 0 and {MAX_RETRIES}"),
        });
    }

    if config.sentiment_backend == SentimentBackendKind::Http
        && config.sentiment_api_url.trim().is_empty()
    {
        return Err(ConfigError::MissingRequired {
            var: "SENTIMENT_API_URL".into(),
        });
    }

    if config.sentiment_backend == SentimentBackendKind::Http
        && !(config.sentiment_api_url.starts_with("http://")
            || config.sentiment_api_url.starts_with("https://"))
    {
        return Err(ConfigError::InvalidValue {
            var: "SENTIMENT_API_URL".into(),
            reason: "must be an http(s) URL".into(),
        });
    }

    if config.results_dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "RESULTS_DIR".into(),
            reason: "must not be empty".into(),
        });
    }

    Ok(())
}
