//! Trait definitions for mockable dependencies.
//!
//! This module defines traits for:
//! - [`SentimentEstimator`]: Per-response sentiment collaborator
//! - [`InsightGenerator`]: Free-text insight collaborator
//! - [`TimeProvider`]: Time abstraction for testing
//! - [`RandomSource`]: Randomness abstraction for the dimensions table
//!
//! It also re-exports shared types from the `types` submodule.
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.
//!
//! # Example
//!
//! ```
//! use persona_assessment::traits::{RandomSource, SeededRandom};
//!
//! let mut rng = SeededRandom::new(7);
//! let picked = rng.sample_indices(5, 4);
//! assert_eq!(picked.len(), 4);
//! ```

mod types;

pub use types::{SentimentJudgment, SentimentLabel};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::CollaboratorError;

/// Sentiment estimator trait for mocking.
///
/// Implementations return exactly one judgment per input response, in
/// order. The assessor treats any error, and any output that breaks that
/// contract, as "sentiment unavailable".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SentimentEstimator: Send + Sync {
    /// Judge each response.
    ///
    /// # Arguments
    ///
    /// * `responses` - The ordered, non-empty responses
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the estimator is disabled or fails.
    async fn judge(&self, responses: &[String]) -> Result<Vec<SentimentJudgment>, CollaboratorError>;
}

/// Insight generator trait for mocking.
///
/// Produces a short free-text reading of the answers. The combiner only
/// scans it for indicator words.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Generate an insight for the aggregated response text.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the generator is disabled or fails.
    async fn generate_insight(&self, aggregated_text: &str) -> Result<String, CollaboratorError>;
}

/// Time provider trait for deterministic testing.
///
/// This trait abstracts time operations to allow for
/// deterministic testing by providing fixed timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Real time provider using system clock.
///
/// This is the production implementation that returns the actual current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of randomness for unordered sampling.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Pick `amount` distinct indices from `0..len`, in arbitrary order.
    ///
    /// Implementations must return `min(amount, len)` distinct indices.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

/// Production randomness backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut rand::thread_rng(), len, amount.min(len)).into_vec()
    }
}

/// Reproducible randomness from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Create a generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount.min(len)).into_vec()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;
    use std::collections::HashSet;

    assert_impl_all!(RealTimeProvider: Send, Sync, Clone, Copy, Default);
    assert_impl_all!(ThreadRandom: Send, Sync, Clone, Copy, Default);

    #[test]
    fn test_real_time_provider_now() {
        let provider = RealTimeProvider;
        let before = Utc::now();
        let now = provider.now();
        let after = Utc::now();
        assert!(now >= before);
        assert!(now <= after);
    }

    #[test]
    fn test_thread_random_distinct_indices() {
        let mut rng = ThreadRandom;
        for _ in 0..20 {
            let picked = rng.sample_indices(5, 4);
            assert_eq!(picked.len(), 4);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 4);
            assert!(picked.iter().all(|i| *i < 5));
        }
    }

    #[test]
    fn test_sample_clamps_amount() {
        let mut rng = SeededRandom::new(1);
        assert_eq!(rng.sample_indices(3, 10).len(), 3);
        assert!(rng.sample_indices(0, 4).is_empty());
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let first = SeededRandom::new(42).sample_indices(64, 8);
        let second = SeededRandom::new(42).sample_indices(64, 8);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_mock_sentiment_estimator() {
        let mut mock = MockSentimentEstimator::new();
        mock.expect_judge()
            .returning(|responses| Ok(vec![SentimentJudgment::positive(0.9); responses.len()]));

        let responses = vec!["I feel great".to_string(), "Fine".to_string()];
        let result = mock.judge(&responses).await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].label, SentimentLabel::Positive);
    }

    #[tokio::test]
    async fn test_mock_insight_generator_error() {
        let mut mock = MockInsightGenerator::new();
        mock.expect_generate_insight().returning(|_| {
            Err(CollaboratorError::Unavailable {
                collaborator: "insight".into(),
                message: "down".into(),
            })
        });

        let result = mock.generate_insight("text").await;
        assert!(matches!(result, Err(CollaboratorError::Unavailable { .. })));
    }

    #[test]
    fn test_mock_random_source() {
        let mut mock = MockRandomSource::new();
        mock.expect_sample_indices()
            .with(mockall::predicate::eq(5), mockall::predicate::eq(4))
            .returning(|_, _| vec![4, 3, 2, 1]);
        assert_eq!(mock.sample_indices(5, 4), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_mock_time_provider() {
        let fixed_time = Utc::now() - chrono::Duration::days(1);
        let mut mock = MockTimeProvider::new();
        mock.expect_now().return_const(fixed_time);
        assert_eq!(mock.now(), fixed_time);
    }
}
