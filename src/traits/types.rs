//! Shared types for the traits module.
//!
//! This module defines the data exchanged with the collaborators:
//! - [`SentimentLabel`]: Polarity of a single response
//! - [`SentimentJudgment`]: Label plus confidence for one response

use std::fmt;

use serde::{Deserialize, Serialize};

/// Polarity assigned to a response by a sentiment estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    /// Positive sentiment.
    Positive,
    /// Negative sentiment.
    Negative,
}

impl SentimentLabel {
    /// Parse a model label such as `POSITIVE`, `negative` or `LABEL_1`.
    ///
    /// `LABEL_0`/`LABEL_1` follow the SST-2 convention (0 = negative).
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" | "POS" | "LABEL_1" => Some(Self::Positive),
            "NEGATIVE" | "NEG" | "LABEL_0" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("POSITIVE"),
            Self::Negative => f.write_str("NEGATIVE"),
        }
    }
}

/// One sentiment judgment for one non-empty response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentJudgment {
    /// Polarity.
    pub label: SentimentLabel,
    /// Confidence in `[0, 1]`.
    pub score: f64,
}

impl SentimentJudgment {
    /// Create a new judgment.
    #[must_use]
    pub const fn new(label: SentimentLabel, score: f64) -> Self {
        Self { label, score }
    }

    /// Create a positive judgment.
    #[must_use]
    pub const fn positive(score: f64) -> Self {
        Self::new(SentimentLabel::Positive, score)
    }

    /// Create a negative judgment.
    #[must_use]
    pub const fn negative(score: f64) -> Self {
        Self::new(SentimentLabel::Negative, score)
    }

    /// Whether the confidence is a finite number in `[0, 1]`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.score.is_finite() && (0.0..=1.0).contains(&self.score)
    }
}
