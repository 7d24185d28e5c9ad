//! Threshold-ladder classifier.
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. aggressive score above 8: `High-Intensity Individual`
//! 2. aggressive score above 3: `Intense Competitor`
//! 3. every final score zero: `Thoughtful Reflector` if the mean response
//!    length exceeds 15 words, otherwise `Balanced Pragmatist`
//! 4. otherwise the top-scoring category

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::lexicon::Category;

use super::CategoryScores;

/// Aggressive score above which the high-intensity type is assigned.
pub const HIGH_INTENSITY_THRESHOLD: f64 = 8.0;

/// Aggressive score above which the competitor type is assigned.
pub const COMPETITIVE_THRESHOLD: f64 = 3.0;

/// Mean words per response above which the reflector type is assigned.
pub const VERBOSE_MEAN_WORDS: f64 = 15.0;

/// Primary personality type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PersonalityType {
    /// One of the five scored categories.
    Category(Category),
    /// Moderate aggressive signal.
    IntenseCompetitor,
    /// Strong aggressive or concerning signal.
    HighIntensityIndividual,
    /// No keyword evidence, long answers.
    ThoughtfulReflector,
}

impl PersonalityType {
    /// Every tag, in a fixed order.
    pub const ALL: [Self; 8] = [
        Self::Category(Category::Analytical),
        Self::Category(Category::Creative),
        Self::Category(Category::Empathetic),
        Self::Category(Category::Resilient),
        Self::Category(Category::Balanced),
        Self::IntenseCompetitor,
        Self::HighIntensityIndividual,
        Self::ThoughtfulReflector,
    ];

    /// Display tag, e.g. `Intense Competitor`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Category(category) => category.name(),
            Self::IntenseCompetitor => "Intense Competitor",
            Self::HighIntensityIndividual => "High-Intensity Individual",
            Self::ThoughtfulReflector => "Thoughtful Reflector",
        }
    }

    /// Fixed description paired with the tag.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::HighIntensityIndividual => {
                "Your responses suggest very intense, competitive patterns with focus on \
                 dominance and power. This may indicate underlying stress, burnout, or \
                 interpersonal challenges that could benefit from professional support."
            }
            Self::IntenseCompetitor => {
                "You demonstrate high intensity and competitive drive. You approach challenges \
                 with strong determination and aren't afraid of conflict when pursuing your \
                 goals. Consider balancing this drive with empathy and collaboration."
            }
            Self::ThoughtfulReflector => {
                "You provide detailed, thoughtful responses and take time to consider multiple \
                 aspects of situations. You value depth and nuance in your thinking."
            }
            Self::Category(Category::Analytical) => {
                "You demonstrate strong analytical capabilities and prefer structured, logical \
                 approaches to problem-solving. You value accuracy, detail-oriented work, and \
                 evidence-based decision making."
            }
            Self::Category(Category::Creative) => {
                "You show high creativity and original thinking. You enjoy exploring new ideas, \
                 thinking outside the box, and approaching challenges with innovative solutions."
            }
            Self::Category(Category::Empathetic) => {
                "You demonstrate strong emotional intelligence and interpersonal skills. You \
                 value relationships, show genuine care for others, and excel in collaborative \
                 environments."
            }
            Self::Category(Category::Resilient) => {
                "You display strong determination and goal-oriented behavior. You persevere \
                 through challenges and maintain focus on achieving your objectives."
            }
            Self::Category(Category::Balanced) => {
                "You show a well-rounded approach to life, balancing logic and emotion, work and \
                 personal time, and individual goals with social connections."
            }
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PersonalityType {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| AssessmentError::invalid_input(format!("unknown personality type: {s}")))
    }
}

impl From<PersonalityType> for String {
    fn from(value: PersonalityType) -> Self {
        value.name().to_string()
    }
}

impl TryFrom<String> for PersonalityType {
    type Error = AssessmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which ladder rule produced the classification.
///
/// `Balanced Pragmatist` can come from either [`ClassificationPath::VerbosityFallback`]
/// or [`ClassificationPath::TopCategory`]; the two are kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationPath {
    /// Rule 1.
    HighIntensity,
    /// Rule 2.
    Competitive,
    /// Rule 3.
    VerbosityFallback,
    /// Rule 4.
    TopCategory,
}

/// Classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Assigned type.
    pub personality: PersonalityType,
    /// Rule that assigned it.
    pub path: ClassificationPath,
}

impl Classification {
    /// Description of the assigned type.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.personality.description()
    }
}

/// Apply the threshold ladder.
#[must_use]
pub fn classify(
    final_scores: &CategoryScores,
    aggressive_score: f64,
    mean_word_count: f64,
) -> Classification {
    let (personality, path) = if aggressive_score > HIGH_INTENSITY_THRESHOLD {
        (
            PersonalityType::HighIntensityIndividual,
            ClassificationPath::HighIntensity,
        )
    } else if aggressive_score > COMPETITIVE_THRESHOLD {
        (
            PersonalityType::IntenseCompetitor,
            ClassificationPath::Competitive,
        )
    } else if final_scores.max() <= 0.0 {
        let personality = if mean_word_count > VERBOSE_MEAN_WORDS {
            PersonalityType::ThoughtfulReflector
        } else {
            PersonalityType::Category(Category::Balanced)
        };
        (personality, ClassificationPath::VerbosityFallback)
    } else {
        (
            PersonalityType::Category(final_scores.top()),
            ClassificationPath::TopCategory,
        )
    };

    tracing::debug!(
        personality = %personality,
        path = ?path,
        aggressive_score,
        "classified responses"
    );

    Classification { personality, path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    fn analytical_max() -> CategoryScores {
        CategoryScores::zero().with(Category::Analytical, 12.0)
    }

    #[test]
    fn test_high_intensity_wins_over_categories() {
        let result = classify(&analytical_max(), 8.5, 3.0);
        assert_eq!(result.personality, PersonalityType::HighIntensityIndividual);
        assert_eq!(result.path, ClassificationPath::HighIntensity);
    }

    #[test_case(8.0, PersonalityType::IntenseCompetitor ; "eight is competitor")]
    #[test_case(3.5, PersonalityType::IntenseCompetitor ; "above three")]
    #[test_case(3.0, PersonalityType::Category(Category::Analytical) ; "three is not competitive")]
    fn test_aggressive_thresholds(aggressive: f64, expected: PersonalityType) {
        assert_eq!(classify(&analytical_max(), aggressive, 3.0).personality, expected);
    }

    #[test]
    fn test_verbose_fallback_is_reflector() {
        let result = classify(&CategoryScores::zero(), 0.0, 20.0);
        assert_eq!(result.personality, PersonalityType::ThoughtfulReflector);
        assert_eq!(result.path, ClassificationPath::VerbosityFallback);
    }

    #[test]
    fn test_terse_fallback_is_balanced_but_distinct_path() {
        let fallback = classify(&CategoryScores::zero(), 0.0, 15.0);
        assert_eq!(
            fallback.personality,
            PersonalityType::Category(Category::Balanced)
        );
        assert_eq!(fallback.path, ClassificationPath::VerbosityFallback);

        let scored = classify(
            &CategoryScores::zero().with(Category::Balanced, 1.0),
            0.0,
            15.0,
        );
        assert_eq!(scored.personality, fallback.personality);
        assert_eq!(scored.path, ClassificationPath::TopCategory);
        assert_eq!(scored.description(), fallback.description());
    }

    #[test]
    fn test_tie_breaks_by_category_order() {
        let scores = CategoryScores::zero()
            .with(Category::Resilient, 4.0)
            .with(Category::Empathetic, 4.0);
        assert_eq!(
            classify(&scores, 0.0, 5.0).personality,
            PersonalityType::Category(Category::Empathetic)
        );
    }

    #[test]
    fn test_type_tag_round_trip() {
        for personality in PersonalityType::ALL {
            let parsed: PersonalityType = personality.name().parse().unwrap_or(
                PersonalityType::ThoughtfulReflector,
            );
            assert_eq!(parsed, personality);
        }
        assert!("Grumpy Cat".parse::<PersonalityType>().is_err());
    }

    #[test]
    fn test_type_serializes_as_tag() {
        let json = serde_json::to_string(&PersonalityType::HighIntensityIndividual)
            .unwrap_or_default();
        assert_eq!(json, "\"High-Intensity Individual\"");
        let back: Result<PersonalityType, _> = serde_json::from_str("\"Creative Innovator\"");
        assert_eq!(
            back.ok(),
            Some(PersonalityType::Category(Category::Creative))
        );
    }

    proptest! {
        #[test]
        fn prop_high_intensity_dominates(
            aggressive in 8.0001f64..1000.0,
            a in 0.0f64..50.0,
            c in 0.0f64..50.0,
            mean in 0.0f64..100.0,
        ) {
            let scores = CategoryScores::zero()
                .with(Category::Analytical, a)
                .with(Category::Creative, c);
            prop_assert_eq!(
                classify(&scores, aggressive, mean).personality,
                PersonalityType::HighIntensityIndividual
            );
        }

        #[test]
        fn prop_always_one_known_tag(
            aggressive in 0.0f64..20.0,
            values in proptest::collection::vec(0.0f64..10.0, 5),
            mean in 0.0f64..40.0,
        ) {
            let mut scores = CategoryScores::zero();
            for (category, value) in Category::ALL.into_iter().zip(values) {
                scores.add(category, value);
            }
            let result = classify(&scores, aggressive, mean);
            prop_assert!(PersonalityType::ALL.contains(&result.personality));
        }
    }
}
