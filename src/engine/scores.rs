//! Per-category score map.

use serde::{Deserialize, Serialize};

use crate::lexicon::Category;

/// One non-negative score per [`Category`].
///
/// All five keys are always present; serialized with the category display
/// names as keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// Analytical Thinker.
    #[serde(rename = "Analytical Thinker")]
    pub analytical: f64,
    /// Creative Innovator.
    #[serde(rename = "Creative Innovator")]
    pub creative: f64,
    /// Empathetic Connector.
    #[serde(rename = "Empathetic Connector")]
    pub empathetic: f64,
    /// Resilient Achiever.
    #[serde(rename = "Resilient Achiever")]
    pub resilient: f64,
    /// Balanced Pragmatist.
    #[serde(rename = "Balanced Pragmatist")]
    pub balanced: f64,
}

impl CategoryScores {
    /// All-zero scores.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            analytical: 0.0,
            creative: 0.0,
            empathetic: 0.0,
            resilient: 0.0,
            balanced: 0.0,
        }
    }

    /// Score for one category.
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Analytical => self.analytical,
            Category::Creative => self.creative,
            Category::Empathetic => self.empathetic,
            Category::Resilient => self.resilient,
            Category::Balanced => self.balanced,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::Analytical => &mut self.analytical,
            Category::Creative => &mut self.creative,
            Category::Empathetic => &mut self.empathetic,
            Category::Resilient => &mut self.resilient,
            Category::Balanced => &mut self.balanced,
        }
    }

    /// Add `points` to one category.
    pub fn add(&mut self, category: Category, points: f64) {
        *self.slot_mut(category) += points;
    }

    /// Builder-style variant of [`CategoryScores::add`].
    #[must_use]
    pub fn with(mut self, category: Category, points: f64) -> Self {
        self.add(category, points);
        self
    }

    /// Iterate `(category, score)` in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Highest score, `0.0` when all are zero.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.iter().map(|(_, s)| s).fold(0.0, f64::max)
    }

    /// Category with the strictly highest score; ties keep the earlier one.
    #[must_use]
    pub fn top(&self) -> Category {
        let mut best = Category::Analytical;
        for (category, score) in self.iter() {
            if score > self.get(best) {
                best = category;
            }
        }
        best
    }

    /// Combine two maps as `self_weight * self + other_weight * other`.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn weighted_sum(&self, self_weight: f64, other: &Self, other_weight: f64) -> Self {
        let mut out = Self::zero();
        for category in Category::ALL {
            *out.slot_mut(category) =
                self.get(category) * self_weight + other.get(category) * other_weight;
        }
        out
    }

    /// Integer part of a score, used to index narrative fragments.
    ///
    /// Truncates toward zero; negative or NaN scores map to `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn truncated(&self, category: Category) -> usize {
        let score = self.get(category);
        if score.is_finite() && score > 0.0 {
            score.trunc() as usize
        } else {
            0
        }
    }
}
