//! Sentiment estimators.
//!
//! Three implementations of [`SentimentEstimator`]:
//! - [`HttpSentimentEstimator`]: hosted text-classification model
//! - [`LexiconSentimentEstimator`]: offline word counting
//! - [`DisabledSentiment`]: always reports itself disabled
//!
//! [`SentimentBackend`] picks one at construction time from [`Config`].

mod disabled;
mod http;
mod lexicon;

pub use disabled::DisabledSentiment;
pub use http::{HttpSentimentConfig, HttpSentimentEstimator, DEFAULT_SENTIMENT_URL, MAX_INPUT_CHARS};
pub use lexicon::{polarity, LexiconSentimentEstimator, MAX_LEXICON_CONFIDENCE};

use async_trait::async_trait;

use crate::config::{Config, SentimentBackendKind};
use crate::error::CollaboratorError;
use crate::traits::{SentimentEstimator, SentimentJudgment};

/// Collaborator name used in errors and logs.
pub const COLLABORATOR: &str = "sentiment";

/// The estimator selected by configuration.
#[derive(Debug)]
pub enum SentimentBackend {
    /// Hosted model.
    Http(HttpSentimentEstimator),
    /// Word counting.
    Lexicon(LexiconSentimentEstimator),
    /// No sentiment.
    Disabled(DisabledSentiment),
}

impl SentimentBackend {
    /// Build the backend named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Unavailable`] if the HTTP client cannot
    /// be created.
    pub fn from_config(config: &Config) -> Result<Self, CollaboratorError> {
        match config.sentiment_backend {
            SentimentBackendKind::Http => {
                let mut http = HttpSentimentConfig::default()
                    .with_url(config.sentiment_api_url.clone())
                    .with_timeout_ms(config.request_timeout_ms)
                    .with_max_retries(config.max_retries);
                if let Some(token) = &config.sentiment_api_token {
                    http = http.with_token(token.clone());
                }
                Ok(Self::Http(HttpSentimentEstimator::new(http)?))
            }
            SentimentBackendKind::Lexicon => Ok(Self::Lexicon(LexiconSentimentEstimator)),
            SentimentBackendKind::None => Ok(Self::Disabled(DisabledSentiment)),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Lexicon(_) => "lexicon",
            Self::Disabled(_) => "none",
        }
    }
}

#[async_trait]
impl SentimentEstimator for SentimentBackend {
    async fn judge(&self, responses: &[String]) -> Result<Vec<SentimentJudgment>, CollaboratorError> {
        match self {
            Self::Http(estimator) => estimator.judge(responses).await,
            Self::Lexicon(estimator) => estimator.judge(responses).await,
            Self::Disabled(estimator) => estimator.judge(responses).await,
        }
    }
}
