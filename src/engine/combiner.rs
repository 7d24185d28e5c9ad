//! Sentiment evaluation and score combination.
//!
//! The combiner has three branches:
//! - sentiment absent: keyword scores pass through unchanged
//! - sentiment present, no concerning pattern: `0.7 * sentiment + 0.3 * keyword`
//! - sentiment present with a concerning pattern: keyword scores pass
//!   through and the aggressive score gets a fixed bonus

use serde::{Deserialize, Serialize};

use crate::lexicon::Category;
use crate::traits::{SentimentJudgment, SentimentLabel};

use super::scorer::concerning_theme_count;
use super::CategoryScores;

/// Weight of the sentiment-derived scores.
pub const SENTIMENT_WEIGHT: f64 = 0.7;

/// Weight of the keyword scores when sentiment is present.
pub const KEYWORD_WEIGHT: f64 = 0.3;

/// Points credited to a category whose indicator appears in the insight.
pub const INSIGHT_INDICATOR_POINTS: f64 = 3.0;

/// Points credited by the positive/negative balance.
pub const SENTIMENT_BIAS_POINTS: f64 = 1.0;

/// Added to the aggressive score when a concerning pattern is detected.
pub const CONCERNING_PATTERN_BONUS: f64 = 15.0;

/// Negative judgments above this confidence count as high-negative.
pub const HIGH_NEGATIVE_CONFIDENCE: f64 = 0.99;

/// High-negative judgments needed for a concerning pattern.
pub const MIN_HIGH_NEGATIVE: usize = 2;

/// Distinct concerning themes needed for a concerning pattern.
pub const MIN_CONCERNING_THEMES: usize = 2;

/// Counts derived from a list of sentiment judgments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentSignals {
    /// Judgments labelled positive.
    pub positive: usize,
    /// Everything else.
    pub negative: usize,
    /// Summed confidence of the negative judgments.
    pub negative_confidence: f64,
    /// Negative judgments with confidence above [`HIGH_NEGATIVE_CONFIDENCE`].
    pub high_negative: usize,
}

impl SentimentSignals {
    /// Summarize judgments.
    #[must_use]
    pub fn from_judgments(judgments: &[SentimentJudgment]) -> Self {
        let mut signals = Self::default();
        for judgment in judgments {
            match judgment.label {
                SentimentLabel::Positive => signals.positive += 1,
                SentimentLabel::Negative => {
                    signals.negative += 1;
                    signals.negative_confidence += judgment.score;
                    if judgment.score > HIGH_NEGATIVE_CONFIDENCE {
                        signals.high_negative += 1;
                    }
                }
            }
        }
        signals
    }
}

/// What the sentiment stage contributes to the combiner.
#[derive(Debug, Clone, PartialEq)]
pub enum SentimentOutcome {
    /// No usable sentiment judgments.
    Absent,
    /// Sentiment-derived category scores.
    Scored {
        /// Derived scores before weighting.
        scores: CategoryScores,
        /// Signals they were derived from.
        signals: SentimentSignals,
    },
    /// Strongly negative answers around failure/power themes.
    ConcerningPattern {
        /// Signals that triggered the pattern.
        signals: SentimentSignals,
    },
}

impl SentimentOutcome {
    /// Whether a concerning pattern was raised.
    #[must_use]
    pub const fn is_concerning(&self) -> bool {
        matches!(self, Self::ConcerningPattern { .. })
    }

    /// Whether sentiment judgments were available at all.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Turn sentiment judgments (and an optional insight) into category
/// evidence.
///
/// `aggregated_text` is the lowercased response text used for the theme
/// check; `insight` is scanned case-insensitively for each category's
/// indicator words.
#[must_use]
pub fn evaluate_sentiment(
    judgments: Option<&[SentimentJudgment]>,
    aggregated_text: &str,
    insight: Option<&str>,
) -> SentimentOutcome {
    let Some(judgments) = judgments else {
        return SentimentOutcome::Absent;
    };

    let signals = SentimentSignals::from_judgments(judgments);

    if signals.high_negative >= MIN_HIGH_NEGATIVE {
        let themes = concerning_theme_count(aggregated_text);
        if themes >= MIN_CONCERNING_THEMES {
            tracing::debug!(
                high_negative = signals.high_negative,
                themes,
                "concerning pattern detected"
            );
            return SentimentOutcome::ConcerningPattern { signals };
        }
    }

    let mut scores = CategoryScores::zero();

    if let Some(insight) = insight {
        let insight = insight.to_lowercase();
        for category in Category::ALL {
            if category
                .insight_indicators()
                .iter()
                .any(|word| insight.contains(*word))
            {
                scores.add(category, INSIGHT_INDICATOR_POINTS);
            }
        }
    }

    if signals.positive > signals.negative {
        scores.add(Category::Empathetic, SENTIMENT_BIAS_POINTS);
        scores.add(Category::Resilient, SENTIMENT_BIAS_POINTS);
    } else if signals.negative > signals.positive {
        scores.add(Category::Analytical, SENTIMENT_BIAS_POINTS);
    }

    SentimentOutcome::Scored { scores, signals }
}

/// Result of combining keyword and sentiment evidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combined {
    /// Final per-category scores.
    pub scores: CategoryScores,
    /// Amount to add to the aggressive score.
    pub aggressive_bonus: f64,
    /// Whether the sentiment stage raised a concerning pattern.
    pub concerning_pattern_detected: bool,
}

/// Merge keyword scores with the sentiment outcome.
#[must_use]
pub fn combine(keyword_scores: &CategoryScores, outcome: &SentimentOutcome) -> Combined {
    match outcome {
        SentimentOutcome::Absent => Combined {
            scores: *keyword_scores,
            aggressive_bonus: 0.0,
            concerning_pattern_detected: false,
        },
        SentimentOutcome::Scored { scores, .. } => Combined {
            scores: scores.weighted_sum(SENTIMENT_WEIGHT, keyword_scores, KEYWORD_WEIGHT),
            aggressive_bonus: 0.0,
            concerning_pattern_detected: false,
        },
        SentimentOutcome::ConcerningPattern { .. } => Combined {
            scores: *keyword_scores,
            aggressive_bonus: CONCERNING_PATTERN_BONUS,
            concerning_pattern_detected: true,
        },
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keyword() -> CategoryScores {
        CategoryScores::zero()
            .with(Category::Analytical, 4.0)
            .with(Category::Creative, 2.0)
    }

    #[test]
    fn test_signals_count_labels() {
        let judgments = [
            SentimentJudgment::positive(0.8),
            SentimentJudgment::negative(0.995),
            SentimentJudgment::negative(0.6),
            SentimentJudgment::negative(0.999),
        ];
        let signals = SentimentSignals::from_judgments(&judgments);
        assert_eq!(signals.positive, 1);
        assert_eq!(signals.negative, 3);
        assert_eq!(signals.high_negative, 2);
        assert!((signals.negative_confidence - 2.594).abs() < 1e-9);
    }

    #[test]
    fn test_high_negative_threshold_is_strict() {
        let signals = SentimentSignals::from_judgments(&[SentimentJudgment::negative(0.99)]);
        assert_eq!(signals.high_negative, 0);
    }

    #[test]
    fn test_absent_passes_keywords_through() {
        let outcome = evaluate_sentiment(None, "anything", Some("logical"));
        assert_eq!(outcome, SentimentOutcome::Absent);
        let combined = combine(&keyword(), &outcome);
        assert_eq!(combined.scores, keyword());
        assert_eq!(combined.aggressive_bonus, 0.0);
        assert!(!combined.concerning_pattern_detected);
    }

    #[test]
    fn test_concerning_pattern_needs_two_high_negatives_and_two_themes() {
        let judgments = [
            SentimentJudgment::negative(0.999),
            SentimentJudgment::negative(0.998),
        ];
        let outcome = evaluate_sentiment(Some(&judgments), "weakness and failure", None);
        assert!(outcome.is_concerning());

        let combined = combine(&keyword(), &outcome);
        assert_eq!(combined.scores, keyword());
        assert_eq!(combined.aggressive_bonus, CONCERNING_PATTERN_BONUS);
        assert!(combined.concerning_pattern_detected);
    }

    #[test]
    fn test_one_theme_is_not_concerning() {
        let judgments = [
            SentimentJudgment::negative(0.999),
            SentimentJudgment::negative(0.998),
        ];
        let outcome = evaluate_sentiment(Some(&judgments), "i hate failure", None);
        // "failure" also contains "fail": two themes
        assert!(outcome.is_concerning());

        let outcome = evaluate_sentiment(Some(&judgments), "i feel weak today", None);
        assert!(!outcome.is_concerning());
    }

    #[test]
    fn test_one_high_negative_is_not_concerning() {
        let judgments = [
            SentimentJudgment::negative(0.999),
            SentimentJudgment::negative(0.5),
        ];
        let outcome = evaluate_sentiment(Some(&judgments), "weakness failure power", None);
        assert!(!outcome.is_concerning());
        assert!(outcome.is_present());
    }

    #[test]
    fn test_positive_majority_bias() {
        let judgments = [
            SentimentJudgment::positive(0.9),
            SentimentJudgment::positive(0.9),
            SentimentJudgment::negative(0.9),
        ];
        let SentimentOutcome::Scored { scores, .. } =
            evaluate_sentiment(Some(&judgments), "", None)
        else {
            unreachable!("expected scored outcome");
        };
        assert_eq!(
            scores,
            CategoryScores::zero()
                .with(Category::Empathetic, 1.0)
                .with(Category::Resilient, 1.0)
        );
    }

    #[test]
    fn test_negative_majority_bias() {
        let judgments = [SentimentJudgment::negative(0.7)];
        let SentimentOutcome::Scored { scores, .. } =
            evaluate_sentiment(Some(&judgments), "", None)
        else {
            unreachable!("expected scored outcome");
        };
        assert_eq!(scores, CategoryScores::zero().with(Category::Analytical, 1.0));
    }

    #[test]
    fn test_tied_sentiment_has_no_bias() {
        let judgments = [
            SentimentJudgment::positive(0.7),
            SentimentJudgment::negative(0.7),
        ];
        let SentimentOutcome::Scored { scores, .. } =
            evaluate_sentiment(Some(&judgments), "", None)
        else {
            unreachable!("expected scored outcome");
        };
        assert_eq!(scores, CategoryScores::zero());
    }

    #[test]
    fn test_insight_indicators_credit_categories_once() {
        let judgments = [
            SentimentJudgment::positive(0.7),
            SentimentJudgment::negative(0.7),
        ];
        let insight = "A Logical, STRUCTURED and caring person; very logical.";
        let SentimentOutcome::Scored { scores, .. } =
            evaluate_sentiment(Some(&judgments), "", Some(insight))
        else {
            unreachable!("expected scored outcome");
        };
        assert_eq!(scores.analytical, 3.0);
        assert_eq!(scores.empathetic, 3.0);
        assert_eq!(scores.creative, 0.0);
    }

    #[test]
    fn test_weighted_combination() {
        let judgments = [SentimentJudgment::positive(0.9)];
        let outcome = evaluate_sentiment(Some(&judgments), "", Some("a creative mind"));
        let combined = combine(&keyword(), &outcome);
        // creative: 0.7 * 3 + 0.3 * 2
        assert!((combined.scores.creative - 2.7).abs() < 1e-9);
        // analytical: 0.7 * 0 + 0.3 * 4
        assert!((combined.scores.analytical - 1.2).abs() < 1e-9);
        // empathetic: 0.7 * 1
        assert!((combined.scores.empathetic - 0.7).abs() < 1e-9);
        assert_eq!(combined.aggressive_bonus, 0.0);
        assert!(!combined.concerning_pattern_detected);
    }
}
