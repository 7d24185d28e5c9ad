//! Static keyword and phrase tables.
//!
//! Everything the engine matches against lives here. The lists are plain
//! lowercase strings and are matched as substrings of the aggregated,
//! lowercased response text, so multi-word entries ("help others") work
//! the same way as single words.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five scored personality categories.
///
/// Declaration order is the tie-break order used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Structured, evidence-driven thinking.
    #[serde(rename = "Analytical Thinker")]
    Analytical,
    /// Original, exploratory thinking.
    #[serde(rename = "Creative Innovator")]
    Creative,
    /// Relationship- and emotion-oriented.
    #[serde(rename = "Empathetic Connector")]
    Empathetic,
    /// Goal-driven and persistent.
    #[serde(rename = "Resilient Achiever")]
    Resilient,
    /// Flexible and moderate.
    #[serde(rename = "Balanced Pragmatist")]
    Balanced,
}

impl Category {
    /// All categories in tie-break order.
    pub const ALL: [Self; 5] = [
        Self::Analytical,
        Self::Creative,
        Self::Empathetic,
        Self::Resilient,
        Self::Balanced,
    ];

    /// Position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Analytical => 0,
            Self::Creative => 1,
            Self::Empathetic => 2,
            Self::Resilient => 3,
            Self::Balanced => 4,
        }
    }

    /// Display name, e.g. `Analytical Thinker`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analytical => "Analytical Thinker",
            Self::Creative => "Creative Innovator",
            Self::Empathetic => "Empathetic Connector",
            Self::Resilient => "Resilient Achiever",
            Self::Balanced => "Balanced Pragmatist",
        }
    }

    /// Keywords scored by the keyword scorer.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Analytical => ANALYTICAL_KEYWORDS,
            Self::Creative => CREATIVE_KEYWORDS,
            Self::Empathetic => EMPATHETIC_KEYWORDS,
            Self::Resilient => RESILIENT_KEYWORDS,
            Self::Balanced => BALANCED_KEYWORDS,
        }
    }

    /// Words that, found in a generated insight, credit this category.
    #[must_use]
    pub const fn insight_indicators(self) -> &'static [&'static str] {
        match self {
            Self::Analytical => &["logical", "analytical", "systematic", "structured"],
            Self::Creative => &["creative", "innovative", "imaginative", "original"],
            Self::Empathetic => &["empathetic", "caring", "supportive", "emotional"],
            Self::Resilient => &["resilient", "determined", "strong", "persistent"],
            Self::Balanced => &["balanced", "practical", "moderate", "flexible"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Analytical category keywords.
pub const ANALYTICAL_KEYWORDS: &[&str] = &[
    "analysis",
    "analyze",
    "logical",
    "logic",
    "systematic",
    "methodical",
    "structured",
    "organized",
    "planning",
    "research",
    "data",
    "facts",
    "evidence",
    "rational",
    "objective",
];

/// Creative category keywords.
pub const CREATIVE_KEYWORDS: &[&str] = &[
    "creative",
    "creativity",
    "artistic",
    "imaginative",
    "innovative",
    "original",
    "unique",
    "inspiration",
    "design",
    "experiment",
    "brainstorm",
    "invent",
    "express",
    "aesthetic",
];

/// Empathetic category keywords.
pub const EMPATHETIC_KEYWORDS: &[&str] = &[
    "empathy",
    "compassion",
    "caring",
    "supportive",
    "understanding",
    "listening",
    "emotional",
    "relationships",
    "connect",
    "help others",
    "teamwork",
    "collaborate",
];

/// Resilient category keywords.
pub const RESILIENT_KEYWORDS: &[&str] = &[
    "challenge",
    "overcome",
    "persist",
    "persevere",
    "determined",
    "resilient",
    "strong",
    "achieve",
    "goals",
    "success",
    "push through",
    "never give up",
    "endure",
];

/// Balanced category keywords.
pub const BALANCED_KEYWORDS: &[&str] = &[
    "balance",
    "moderate",
    "flexible",
    "adaptable",
    "practical",
    "reasonable",
    "compromise",
    "adjust",
    "consider both",
    "depends on",
    "varies",
];

/// Hostility, domination and failure language. Each hit is worth 2 points.
pub const AGGRESSIVE_KEYWORDS: &[&str] = &[
    "angry",
    "hate",
    "fight",
    "argue",
    "aggressive",
    "intense",
    "furious",
    "rage",
    "conflict",
    "confrontation",
    "competitive",
    "destroy",
    "dominate",
    "weakness",
    "weak",
    "pathetic",
    "power",
    "powerful",
    "superior",
    "ignore",
    "worthless",
    "useless",
    "inferior",
    "crush",
    "defeat",
    "control",
    "manipulate",
    "exploit",
    "domination",
    "fail",
    "failure",
    "failing",
];

/// Multi-word concerning phrases. Each hit is worth 3 points.
pub const CONCERNING_PHRASES: &[&str] = &[
    "weakness in others",
    "weak around me",
    "pathetic weakness",
    "focus on my own power",
    "showing my power",
    "become the best",
    "higher than others",
    "see other people fail",
    "see failure in people",
    "makes me feel powerful",
    "grow my power",
    "my responsibilities and power",
];

/// Themes that, together with strongly negative sentiment, mark a
/// concerning pattern.
pub const CONCERNING_THEMES: &[&str] = &["fail", "failure", "power", "powerful", "weak", "weakness"];

/// Distress phrases scanned per response for wellness flags.
pub const DISTRESS_PHRASES: &[&str] = &[
    "want to hurt myself",
    "thoughts of death",
    "end it all",
    "no point",
    "can't cope",
    "overwhelming",
    "panic",
    "can't sleep",
    "don't eat",
];

/// Words the offline sentiment estimator counts as positive.
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "positive",
    "excited",
    "confident",
    "optimistic",
    "grateful",
];

/// Words the offline sentiment estimator counts as negative.
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "bad",
    "negative",
    "anxious",
    "depressed",
    "worried",
    "stressed",
];

/// Number of entries in `list` that occur in `text` as substrings.
///
/// Each entry counts at most once, however often it appears.
#[must_use]
pub fn count_hits(text: &str, list: &[&str]) -> usize {
    list.iter().filter(|entry| text.contains(**entry)).count()
}
