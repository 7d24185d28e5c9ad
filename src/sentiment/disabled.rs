//! No-op estimator for runs without sentiment.

use async_trait::async_trait;

use crate::error::CollaboratorError;
use crate::traits::{SentimentEstimator, SentimentJudgment};

use super::COLLABORATOR;

/// Estimator that always reports itself disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSentiment;

#[async_trait]
impl SentimentEstimator for DisabledSentiment {
    async fn judge(&self, _responses: &[String]) -> Result<Vec<SentimentJudgment>, CollaboratorError> {
        Err(CollaboratorError::Disabled {
            collaborator: COLLABORATOR.into(),
        })
    }
}
