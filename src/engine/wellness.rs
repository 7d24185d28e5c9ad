//! Distress-phrase flags and the risk level derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::DISTRESS_PHRASES;

/// Overall wellness risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// No flags.
    Low,
    /// One or two flags.
    Moderate,
    /// More than two flags.
    High,
}

impl RiskLevel {
    /// Risk level for a number of flags.
    #[must_use]
    pub const fn from_flag_count(count: usize) -> Self {
        match count {
            0 => Self::Low,
            1 | 2 => Self::Moderate,
            _ => Self::High,
        }
    }

    /// One-line explanation shown next to the level.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "No significant mental health concerns detected",
            Self::Moderate => "Some areas of concern - consider self-care strategies",
            Self::High => "Multiple concerns detected - professional consultation recommended",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("Low"),
            Self::Moderate => f.write_str("Moderate"),
            Self::High => f.write_str("High"),
        }
    }
}

/// Flag every distress phrase found in every response.
///
/// A phrase repeated across two responses is flagged twice.
pub fn distress_flags<'a>(responses: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut flags = Vec::new();
    for response in responses {
        let lowered = response.to_lowercase();
        for phrase in DISTRESS_PHRASES {
            if lowered.contains(phrase) {
                flags.push(format!("Concerning phrase detected: '{phrase}'"));
            }
        }
    }
    flags
}
