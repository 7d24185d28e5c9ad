//! Error types for the persona assessment crate.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`AssessmentError`]: Input and session errors raised by the engine
//! - [`CollaboratorError`]: Failures of the optional sentiment and insight collaborators
//! - [`AnthropicError`]: Anthropic API specific errors
//! - [`ExportError`]: Report export errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by the binary. It wraps all
/// subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Assessment input error.
    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    /// Collaborator error.
    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    /// Anthropic API error.
    #[error("Anthropic API error: {0}")]
    Anthropic(#[from] AnthropicError),

    /// Export error.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session file could not be parsed.
    #[error("Invalid session file: {0}")]
    SessionFile(#[from] serde_json::Error),

    /// Terminal or file I/O outside export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Assessment errors.
///
/// These are precondition violations on the engine's inputs and the
/// session bookkeeping around them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// The response set cannot be analyzed.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },

    /// A response was recorded against a question that does not exist.
    #[error("Question index {index} out of range (question count {count})")]
    QuestionOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of questions in the session.
        count: usize,
    },

    /// Name or age rejected at intake.
    #[error("Invalid {field}: {reason}")]
    InvalidIntake {
        /// The intake field (`name` or `age`).
        field: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl AssessmentError {
    /// Shorthand for [`AssessmentError::InvalidInput`].
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Errors from the best-effort collaborators (sentiment estimator, insight
/// generator).
///
/// None of these are fatal: the assessor logs them and falls back to
/// keyword-only scoring.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The collaborator was switched off at construction time.
    #[error("{collaborator} disabled")]
    Disabled {
        /// Collaborator name.
        collaborator: String,
    },

    /// The collaborator could not be reached or returned an error status.
    #[error("{collaborator} unavailable: {message}")]
    Unavailable {
        /// Collaborator name.
        collaborator: String,
        /// Description of the failure.
        message: String,
    },

    /// The call did not complete in time.
    #[error("{collaborator} timed out after {timeout_ms}ms")]
    Timeout {
        /// Collaborator name.
        collaborator: String,
        /// Timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The collaborator answered with data the engine cannot use.
    #[error("{collaborator} returned malformed output: {message}")]
    Malformed {
        /// Collaborator name.
        collaborator: String,
        /// What was wrong with the output.
        message: String,
    },
}

impl CollaboratorError {
    /// Returns true if the collaborator was deliberately disabled rather
    /// than failing.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled { .. })
    }
}

/// Anthropic API errors.
///
/// These errors represent failures when communicating with the Anthropic API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnthropicError {
    /// Authentication failed due to invalid API key.
    #[error("Authentication failed: invalid API key")]
    AuthenticationFailed,

    /// Request was rate limited.
    #[error("Rate limited: retry after {retry_after_seconds}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_seconds: u64,
    },

    /// The requested model is overloaded.
    #[error("Model overloaded: {model}")]
    ModelOverloaded {
        /// The model that is overloaded.
        model: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Invalid request parameters.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of what's invalid.
        message: String,
    },

    /// Network communication error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// The API answered with a non-success status.
    #[error("Status {status}: {body}")]
    ApiStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Unexpected response from the API.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },
}

impl AnthropicError {
    /// Returns true if this error is retryable.
    ///
    /// Rate limiting and model overload errors are retryable.
    /// Authentication and invalid request errors are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. }
                | Self::ModelOverloaded { .. }
                | Self::Timeout { .. }
                | Self::Network { .. }
        )
    }
}

/// Report export errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// Writing the record to disk failed.
    #[error("Failed to write {path}: {message}")]
    Io {
        /// Target path.
        path: String,
        /// Description of the I/O failure.
        message: String,
    },

    /// The record could not be serialized or parsed.
    #[error("Serialization failed: {message}")]
    Serialize {
        /// Description of the serde failure.
        message: String,
    },
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize {
            message: err.to_string(),
        }
    }
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
