//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with `.env` support)
//! - Configuration validation
//! - Collaborator selection
//! - Secure token storage via [`SecretString`]
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use persona_assessment::config::{Config, SecretString, SentimentBackendKind};
//!
//! let config = Config {
//!     log_level: "info".to_string(),
//!     results_dir: PathBuf::from("./results"),
//!     sentiment_backend: SentimentBackendKind::Http,
//!     sentiment_api_url: "https://example.test/model".to_string(),
//!     sentiment_api_token: Some(SecretString::new("hf_example_token")),
//!     anthropic_api_key: None,
//!     model: "claude-sonnet-4-20250514".to_string(),
//!     request_timeout_ms: 30_000,
//!     max_retries: 3,
//! };
//!
//! let debug = format!("{config:?}");
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("hf_example_token"));
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{validate_config, MAX_RETRIES, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use crate::anthropic::DEFAULT_MODEL;
pub use crate::sentiment::DEFAULT_SENTIMENT_URL;
use crate::error::ConfigError;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default directory for exported records.
pub const DEFAULT_RESULTS_DIR: &str = "./results";

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Default maximum retry attempts.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Which sentiment estimator to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBackendKind {
    /// Hosted classification model.
    Http,
    /// Offline word counting.
    Lexicon,
    /// No sentiment; keyword-only scoring.
    None,
}

impl FromStr for SentimentBackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "lexicon" => Ok(Self::Lexicon),
            "none" | "off" => Ok(Self::None),
            other => Err(ConfigError::InvalidValue {
                var: "SENTIMENT_BACKEND".into(),
                reason: format!("unknown backend '{other}' (expected http, lexicon or none)"),
            }),
        }
    }
}

impl fmt::Display for SentimentBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => f.write_str("http"),
            Self::Lexicon => f.write_str("lexicon"),
            Self::None => f.write_str("none"),
        }
    }
}

/// Application configuration.
///
/// Use [`Config::from_env`] to load it. Tokens are wrapped in
/// [`SecretString`] so the struct can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level filter (error, warn, info, debug, trace).
    pub log_level: String,
    /// Directory exported records are written to.
    pub results_dir: PathBuf,
    /// Sentiment estimator selection.
    pub sentiment_backend: SentimentBackendKind,
    /// Sentiment endpoint for the HTTP backend.
    pub sentiment_api_url: String,
    /// Bearer token for the sentiment endpoint.
    pub sentiment_api_token: Option<SecretString>,
    /// Anthropic API key; the insight generator is disabled without it.
    pub anthropic_api_key: Option<SecretString>,
    /// Anthropic model for insights.
    pub model: String,
    /// Per-request timeout for collaborator calls.
    pub request_timeout_ms: u64,
    /// Retry attempts for collaborator calls.
    pub max_retries: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional:
    /// - `LOG_LEVEL` (default `info`)
    /// - `RESULTS_DIR` (default `./results`)
    /// - `SENTIMENT_BACKEND`: `http`, `lexicon` or `none` (default `http`
    ///   when `SENTIMENT_API_TOKEN` is set, otherwise `none`)
    /// - `SENTIMENT_API_URL` (default: hosted SST-2 model)
    /// - `SENTIMENT_API_TOKEN`
    /// - `ANTHROPIC_API_KEY`
    /// - `ANTHROPIC_MODEL` (default `claude-sonnet-4-20250514`)
    /// - `REQUEST_TIMEOUT_MS` (default `30000`)
    /// - `MAX_RETRIES` (default `3`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a numeric variable does not parse, the
    /// backend name is unknown, or [`validate_config`] rejects a value.
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let log_level = env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL);
        let results_dir = PathBuf::from(env_or("RESULTS_DIR", DEFAULT_RESULTS_DIR));

        let sentiment_api_token = env_secret("SENTIMENT_API_TOKEN");
        let sentiment_backend = match std::env::var("SENTIMENT_BACKEND") {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            _ if sentiment_api_token.is_some() => SentimentBackendKind::Http,
            _ => SentimentBackendKind::None,
        };
        let sentiment_api_url = env_or("SENTIMENT_API_URL", DEFAULT_SENTIMENT_URL);

        let anthropic_api_key = env_secret("ANTHROPIC_API_KEY");
        let model = env_or("ANTHROPIC_MODEL", DEFAULT_MODEL);

        let request_timeout_ms = parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;
        let max_retries = parse_env_u32("MAX_RETRIES", DEFAULT_MAX_RETRIES)?;

        let config = Self {
            log_level,
            results_dir,
            sentiment_backend,
            sentiment_api_url,
            sentiment_api_token,
            anthropic_api_key,
            model,
            request_timeout_ms,
            max_retries,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Whether the insight generator can run.
    #[must_use]
    pub const fn insight_enabled(&self) -> bool {
        self.anthropic_api_key.is_some()
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

fn env_secret(name: &str) -> Option<SecretString> {
    std::env::var(name).ok().and_then(SecretString::non_blank)
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a non-negative integer".into(),
        })
    })
}

/// A valid configuration with every collaborator switched off.
#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        log_level: DEFAULT_LOG_LEVEL.to_string(),
        results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
        sentiment_backend: SentimentBackendKind::None,
        sentiment_api_url: DEFAULT_SENTIMENT_URL.to_string(),
        sentiment_api_token: None,
        anthropic_api_key: None,
        model: DEFAULT_MODEL.to_string(),
        request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        max_retries: DEFAULT_MAX_RETRIES,
    }
}
