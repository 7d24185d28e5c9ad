//! Keyword and aggressive-pattern scoring.
//!
//! Both scorers work on the aggregated text: the responses passed to
//! [`aggregate`] joined with a single space and lowercased. Blank strings
//! are joined too; callers decide which responses to pass. Matching is plain substring search,
//! so "analysis" also hits inside "overanalysis". That false positive is
//! accepted; the lists are tuned for recall, not precision.

use crate::lexicon::{
    count_hits, Category, AGGRESSIVE_KEYWORDS, CONCERNING_PHRASES, CONCERNING_THEMES,
};

use super::CategoryScores;

/// Keywords longer than this many characters are worth double.
pub const LONG_KEYWORD_CHARS: usize = 6;

/// Points per aggressive keyword occurrence.
pub const AGGRESSIVE_KEYWORD_POINTS: f64 = 2.0;

/// Points per concerning phrase occurrence.
pub const CONCERNING_PHRASE_POINTS: f64 = 3.0;

/// Join responses with a space and lowercase the result.
pub fn aggregate<'a>(responses: impl IntoIterator<Item = &'a str>) -> String {
    responses
        .into_iter()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Points a single keyword is worth when present.
#[must_use]
pub fn keyword_weight(keyword: &str) -> f64 {
    if keyword.chars().count() > LONG_KEYWORD_CHARS {
        2.0
    } else {
        1.0
    }
}

/// Score one category: the weights of every list entry found in `text`.
///
/// An entry contributes once no matter how often it occurs.
#[must_use]
pub fn category_score(text: &str, category: Category) -> f64 {
    category
        .keywords()
        .iter()
        .filter(|keyword| text.contains(**keyword))
        .map(|keyword| keyword_weight(keyword))
        .sum()
}

/// Keyword scores for all five categories.
#[must_use]
pub fn keyword_scores(text: &str) -> CategoryScores {
    let mut scores = CategoryScores::zero();
    for category in Category::ALL {
        scores.add(category, category_score(text, category));
    }
    scores
}

/// Aggressive/concerning score of the aggregated text.
///
/// Every occurrence of an aggressive keyword adds 2 points and every
/// occurrence of a concerning phrase adds 3. Occurrences are counted
/// without overlap, per list entry, so "weakness" scores both `weak`
/// and `weakness`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aggressive_score(text: &str) -> f64 {
    let keyword_hits: usize = AGGRESSIVE_KEYWORDS
        .iter()
        .map(|keyword| text.matches(*keyword).count())
        .sum();
    let phrase_hits: usize = CONCERNING_PHRASES
        .iter()
        .map(|phrase| text.matches(*phrase).count())
        .sum();

    tracing::trace!(keyword_hits, phrase_hits, "aggressive pattern hits");

    (keyword_hits as f64).mul_add(
        AGGRESSIVE_KEYWORD_POINTS,
        phrase_hits as f64 * CONCERNING_PHRASE_POINTS,
    )
}

/// Number of distinct concerning themes present in `text`.
#[must_use]
pub fn concerning_theme_count(text: &str) -> usize {
    count_hits(text, CONCERNING_THEMES)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test]
    fn test_aggregate_joins_and_lowercases() {
        assert_eq!(aggregate(["I Plan", "LOGIC"]), "i plan logic");
        assert_eq!(aggregate(Vec::<&str>::new()), "");
    }

    #[test_case("data", 1.0 ; "short keyword")]
    #[test_case("planning", 2.0 ; "long keyword")]
    #[test_case("analyze", 2.0 ; "seven chars")]
    #[test_case("unique", 1.0 ; "exactly six chars")]
    fn test_keyword_weight(keyword: &str, expected: f64) {
        assert_eq!(keyword_weight(keyword), expected);
    }

    #[test]
    fn test_analytical_example() {
        // "logical" also contains "logic"
        let scores = keyword_scores("logical systematic data evidence");
        assert_eq!(scores.analytical, 8.0);
        assert_eq!(scores.creative, 0.0);
        assert_eq!(scores.empathetic, 0.0);
        assert_eq!(scores.resilient, 0.0);
        assert_eq!(scores.balanced, 0.0);
        assert_eq!(scores.top(), Category::Analytical);
    }

    #[test]
    fn test_keyword_counted_once_per_entry() {
        let once = keyword_scores("data");
        let thrice = keyword_scores("data data data");
        assert_eq!(once, thrice);
    }

    #[test]
    fn test_substring_false_positive_is_kept() {
        // "overanalysis" is not the word "analysis" but still matches it
        let scores = keyword_scores("decision paralysis from overanalysis");
        assert_eq!(scores.analytical, 2.0);
    }

    #[test]
    fn test_multi_word_keywords() {
        let scores = keyword_scores("i like to help others and never give up");
        assert_eq!(scores.empathetic, 2.0);
        assert_eq!(scores.resilient, 2.0);
    }

    #[test]
    fn test_aggressive_score_counts_occurrences() {
        let text = "fight dominate crush fight dominate crush fight dominate crush";
        assert_eq!(aggressive_score(text), 18.0);
    }

    #[test]
    fn test_aggressive_score_phrases() {
        // phrase (3) + "power" (2)
        assert_eq!(aggressive_score("i focus on my own power"), 5.0);
    }

    #[test]
    fn test_aggressive_score_empty() {
        assert_eq!(aggressive_score("i enjoy quiet mornings with tea"), 0.0);
    }

    #[test]
    fn test_concerning_theme_count() {
        assert_eq!(concerning_theme_count("i hate weakness"), 2);
        assert_eq!(concerning_theme_count("all good"), 0);
    }

    proptest! {
        #[test]
        fn prop_keyword_scores_monotonic(
            base in "[a-z ]{0,60}",
            category_index in 0usize..5,
            keyword_index in 0usize..16,
        ) {
            let category = Category::ALL[category_index];
            let keywords = category.keywords();
            let keyword = keywords[keyword_index % keywords.len()];
            let before = category_score(&base, category);
            let after = category_score(&format!("{base} {keyword}"), category);
            prop_assert!(after >= before);
        }

        #[test]
        fn prop_aggressive_score_non_negative(text in ".{0,120}") {
            prop_assert!(aggressive_score(&text.to_lowercase()) >= 0.0);
        }
    }
}
