//! Response analysis and classification engine.
//!
//! The engine is a pure function of its inputs:
//!
//! ```text
//! responses ──▶ keyword scorer ──┐
//!     │                          ├──▶ combiner ──▶ classifier ──▶ narrative composer
//!     └──▶ (sentiment, insight) ─┘
//! ```
//!
//! Collaborator results arrive as plain values; calling the collaborators
//! is the job of [`crate::assessor::Assessor`].
//!
//! # Example
//!
//! ```
//! use persona_assessment::engine::{analyze, PersonalityType};
//! use persona_assessment::lexicon::Category;
//!
//! let responses = vec!["I rely on logical, systematic use of data and evidence".to_string()];
//! let analysis = analyze(&responses, None, None).unwrap();
//! assert_eq!(
//!     analysis.classification.personality,
//!     PersonalityType::Category(Category::Analytical)
//! );
//! ```

mod classifier;
mod combiner;
mod narrative;
mod scorer;
mod scores;
mod wellness;

pub use classifier::{
    classify, Classification, ClassificationPath, PersonalityType, COMPETITIVE_THRESHOLD,
    HIGH_INTENSITY_THRESHOLD, VERBOSE_MEAN_WORDS,
};
pub use combiner::{
    combine, evaluate_sentiment, Combined, SentimentOutcome, SentimentSignals,
    CONCERNING_PATTERN_BONUS, HIGH_NEGATIVE_CONFIDENCE, KEYWORD_WEIGHT, SENTIMENT_WEIGHT,
};
pub use narrative::{
    age_insight, compose, NarrativeInput, PersonalityReport, DIMENSION_ROWS, DIMENSION_ROWS_SHOWN,
};
pub use scorer::{aggregate, aggressive_score, concerning_theme_count, keyword_scores};
pub use scores::CategoryScores;
pub use wellness::{distress_flags, RiskLevel};

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::traits::{RandomSource, SentimentJudgment};

/// Scores and classification for one response set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Keyword-only category scores.
    pub keyword_scores: CategoryScores,
    /// Combined category scores used for classification and narrative.
    pub final_scores: CategoryScores,
    /// Aggressive score including any concerning-pattern bonus.
    pub aggressive_score: f64,
    /// Whether sentiment raised a concerning pattern.
    pub concerning_pattern_detected: bool,
    /// Whether usable sentiment judgments were available.
    pub sentiment_used: bool,
    /// Mean whitespace-separated words per response.
    pub mean_word_count: f64,
    /// Classifier output.
    pub classification: Classification,
}

/// Mean word count over all responses, `0.0` for none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_word_count(responses: &[String]) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }
    let words: usize = responses.iter().map(|r| r.split_whitespace().count()).sum();
    words as f64 / responses.len() as f64
}

/// Number of responses a sentiment estimator is expected to judge.
#[must_use]
pub fn non_empty_count(responses: &[String]) -> usize {
    responses.iter().filter(|r| !r.trim().is_empty()).count()
}

fn usable_judgments<'a>(
    judgments: Option<&'a [SentimentJudgment]>,
    expected: usize,
) -> Option<&'a [SentimentJudgment]> {
    let judgments = judgments?;
    if judgments.len() != expected {
        tracing::warn!(
            expected,
            received = judgments.len(),
            "sentiment judgment count mismatch, ignoring sentiment"
        );
        return None;
    }
    if !judgments.iter().all(SentimentJudgment::is_well_formed) {
        tracing::warn!("sentiment judgment out of range, ignoring sentiment");
        return None;
    }
    Some(judgments)
}

/// Score and classify a response set.
///
/// `judgments`, when present, must hold one judgment per non-empty
/// response; anything else is treated as if sentiment were absent.
///
/// # Errors
///
/// Returns [`AssessmentError::InvalidInput`] when `responses` is empty or
/// every response is blank.
pub fn analyze(
    responses: &[String],
    judgments: Option<&[SentimentJudgment]>,
    insight: Option<&str>,
) -> Result<Analysis, AssessmentError> {
    if responses.is_empty() {
        return Err(AssessmentError::invalid_input("no responses to analyze"));
    }
    let answered = non_empty_count(responses);
    if answered == 0 {
        return Err(AssessmentError::invalid_input("all responses are blank"));
    }

    let text = aggregate(responses.iter().map(String::as_str));
    let keyword = keyword_scores(&text);
    let base_aggressive = aggressive_score(&text);

    let judgments = usable_judgments(judgments, answered);
    let outcome = evaluate_sentiment(judgments, &text, insight);
    let combined = combine(&keyword, &outcome);

    let aggressive = base_aggressive + combined.aggressive_bonus;
    let mean_words = mean_word_count(responses);
    let classification = classify(&combined.scores, aggressive, mean_words);

    tracing::debug!(
        responses = responses.len(),
        aggressive_score = aggressive,
        sentiment_used = outcome.is_present(),
        concerning = combined.concerning_pattern_detected,
        "analysis complete"
    );

    Ok(Analysis {
        keyword_scores: keyword,
        final_scores: combined.scores,
        aggressive_score: aggressive,
        concerning_pattern_detected: combined.concerning_pattern_detected,
        sentiment_used: outcome.is_present(),
        mean_word_count: mean_words,
        classification,
    })
}

/// Compose the narrative report for an analysis.
pub fn generate_report<R>(
    analysis: &Analysis,
    name: &str,
    age: &str,
    responses: &[String],
    rng: &mut R,
) -> PersonalityReport
where
    R: RandomSource + ?Sized,
{
    let input = NarrativeInput {
        classification: analysis.classification,
        final_scores: &analysis.final_scores,
        aggressive_score: analysis.aggressive_score,
        name,
        age,
        responses,
    };
    compose(&input, rng)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::lexicon::Category;
    use crate::traits::SeededRandom;
    use pretty_assertions::assert_eq;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_set_is_invalid_input() {
        let err = analyze(&[], None, None).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidInput { .. }));
    }

    #[test]
    fn test_blank_set_is_invalid_input() {
        let err = analyze(&owned(&["  ", "\n"]), None, None).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidInput { .. }));
    }

    #[test]
    fn test_high_intensity_example() {
        let responses = owned(&[
            "fight dominate crush",
            "fight dominate crush",
            "fight dominate crush",
        ]);
        let analysis = analyze(&responses, None, None).unwrap();
        assert!(analysis.aggressive_score >= 18.0);
        assert_eq!(
            analysis.classification.personality,
            PersonalityType::HighIntensityIndividual
        );
    }

    #[test]
    fn test_thoughtful_reflector_example() {
        let long = "i usually sit with the question for a while and then talk it over \
                    with someone close before i settle on anything at all";
        let responses = vec![long.to_string(); 8];
        let analysis = analyze(&responses, None, None).unwrap();
        assert_eq!(analysis.final_scores.max(), 0.0);
        assert!(analysis.mean_word_count > 15.0);
        assert_eq!(
            analysis.classification.personality,
            PersonalityType::ThoughtfulReflector
        );
    }

    #[test]
    fn test_mismatched_judgments_are_ignored() {
        let responses = owned(&["logical data", "more evidence"]);
        let judgments = [SentimentJudgment::positive(0.9)];
        let analysis = analyze(&responses, Some(&judgments), Some("very creative")).unwrap();
        assert!(!analysis.sentiment_used);
        assert_eq!(analysis.final_scores, analysis.keyword_scores);
    }

    #[test]
    fn test_out_of_range_judgments_are_ignored() {
        let responses = owned(&["logical data"]);
        let judgments = [SentimentJudgment::negative(1.5)];
        let analysis = analyze(&responses, Some(&judgments), None).unwrap();
        assert!(!analysis.sentiment_used);
    }

    #[test]
    fn test_judgments_count_only_non_empty_responses() {
        let responses = owned(&["logical data", "", "i help others"]);
        let judgments = [
            SentimentJudgment::positive(0.9),
            SentimentJudgment::positive(0.8),
        ];
        let analysis = analyze(&responses, Some(&judgments), None).unwrap();
        assert!(analysis.sentiment_used);
    }

    #[test]
    fn test_concerning_pattern_adds_bonus() {
        let responses = owned(&["i hate weakness", "failure everywhere"]);
        let judgments = [
            SentimentJudgment::negative(0.999),
            SentimentJudgment::negative(0.995),
        ];
        let analysis = analyze(&responses, Some(&judgments), None).unwrap();
        assert!(analysis.concerning_pattern_detected);
        assert!(analysis.aggressive_score >= CONCERNING_PATTERN_BONUS);
        assert_eq!(
            analysis.classification.personality,
            PersonalityType::HighIntensityIndividual
        );
    }

    #[test]
    fn test_deterministic_without_sentiment() {
        let responses = owned(&["I imagine new designs", "I help others", "I plan"]);
        let first = analyze(&responses, None, None).unwrap();
        let second = analyze(&responses, None, None).unwrap();
        assert_eq!(first, second);

        let a = generate_report(&first, "Ada", "30", &responses, &mut SeededRandom::new(1));
        let b = generate_report(&second, "Ada", "30", &responses, &mut SeededRandom::new(2));
        assert_eq!(a.primary_type, b.primary_type);
        assert_eq!(a.strengths, b.strengths);
        assert_eq!(a.future_path, b.future_path);
    }

    #[test]
    fn test_generate_report_carries_type() {
        let responses = owned(&["logical systematic data evidence"]);
        let analysis = analyze(&responses, None, None).unwrap();
        let report = generate_report(&analysis, "Ada", "17", &responses, &mut SeededRandom::new(3));
        assert_eq!(
            report.primary_type,
            PersonalityType::Category(Category::Analytical)
        );
        assert!(report.age_insights.starts_with("At 17,"));
    }

    #[test]
    fn test_mean_word_count() {
        assert_eq!(mean_word_count(&owned(&["a b", "c d e f", ""])), 2.0);
        assert_eq!(mean_word_count(&[]), 0.0);
    }
}
