//! Offline sentiment estimator based on word lists.

use async_trait::async_trait;

use crate::error::CollaboratorError;
use crate::lexicon::{count_hits, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::traits::{SentimentEstimator, SentimentJudgment};

/// Highest confidence the word counter reports.
///
/// Kept below the high-negative cutoff: word counting alone never marks a
/// response as strongly negative.
pub const MAX_LEXICON_CONFIDENCE: f64 = 0.95;

/// Polarity in `[-1, 1]`: `(positive - negative) / (positive + negative)`,
/// `0.0` when neither list matches.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn polarity(response: &str) -> f64 {
    let lowered = response.to_lowercase();
    let positive = count_hits(&lowered, POSITIVE_WORDS) as f64;
    let negative = count_hits(&lowered, NEGATIVE_WORDS) as f64;
    if positive + negative == 0.0 {
        0.0
    } else {
        (positive - negative) / (positive + negative)
    }
}

/// Judge responses by counting positive and negative words.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentimentEstimator;

impl LexiconSentimentEstimator {
    /// Judge one response. Neutral text counts as positive at 0.5.
    #[must_use]
    pub fn judge_one(response: &str) -> SentimentJudgment {
        let polarity = polarity(response);
        let confidence = (0.5 + polarity.abs() / 2.0).min(MAX_LEXICON_CONFIDENCE);
        if polarity < 0.0 {
            SentimentJudgment::negative(confidence)
        } else {
            SentimentJudgment::positive(confidence)
        }
    }
}

#[async_trait]
impl SentimentEstimator for LexiconSentimentEstimator {
    async fn judge(&self, responses: &[String]) -> Result<Vec<SentimentJudgment>, CollaboratorError> {
        Ok(responses.iter().map(|r| Self::judge_one(r)).collect())
    }
}
