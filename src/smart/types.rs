//! Core data model: criteria, candidates, and calculation results.
//!
//! Criteria and candidates are caller-owned reference data. The engine only
//! borrows them; results are produced fresh for every calculation.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    /// Higher raw score is better (e.g., throughput).
    #[default]
    Benefit,

    /// Lower raw score is better (e.g., price).
    Cost,
}

/// A weighted evaluation dimension.
///
/// # Examples
///
/// ```
/// use u_smart::smart::{Criterion, Polarity};
///
/// let price = Criterion::new("price", "Price", 2.0, Polarity::Cost);
/// assert_eq!(price.polarity, Polarity::Cost);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Criterion {
    /// Opaque identifier, unique within a calculation.
    pub id: String,

    /// Display label. Not used in computation.
    pub name: String,

    /// Caller-supplied importance. Must be positive and finite.
    pub weight: f64,

    pub polarity: Polarity,
}

impl Criterion {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        weight: f64,
        polarity: Polarity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            polarity,
        }
    }

    /// Shorthand for a [`Polarity::Benefit`] criterion named after its id.
    pub fn benefit(id: impl Into<String>, weight: f64) -> Self {
        let id = id.into();
        Self::new(id.clone(), id, weight, Polarity::Benefit)
    }

    /// Shorthand for a [`Polarity::Cost`] criterion named after its id.
    pub fn cost(id: impl Into<String>, weight: f64) -> Self {
        let id = id.into();
        Self::new(id.clone(), id, weight, Polarity::Cost)
    }

    /// Label for this criterion's weight on the 1–5 importance scale.
    pub fn importance(&self) -> Importance {
        Importance::from_weight(self.weight)
    }
}

/// An alternative being evaluated, with raw scores keyed by criterion id.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    pub id: String,
    pub name: String,

    /// Raw score per criterion id. Missing entries are read as `0.0`.
    pub scores: HashMap<String, f64>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scores: HashMap::new(),
        }
    }

    /// Sets the raw score for a criterion.
    pub fn with_score(mut self, criterion_id: impl Into<String>, score: f64) -> Self {
        self.scores.insert(criterion_id.into(), score);
        self
    }

    /// Returns the recorded raw score, if any.
    pub fn score(&self, criterion_id: &str) -> Option<f64> {
        self.scores.get(criterion_id).copied()
    }

    /// Returns the raw score used in computation: a missing entry counts as `0.0`.
    pub fn score_or_zero(&self, criterion_id: &str) -> f64 {
        self.score(criterion_id).unwrap_or(0.0)
    }
}

/// Observed raw-score range of one criterion across all candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range (`max - min`).
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when every candidate scored the same on this criterion.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Utility of one candidate before ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UtilityScore {
    pub candidate_id: String,

    /// Weighted sum of normalized scores, in `[0, 1]`.
    pub utility_score: f64,
}

/// Final per-candidate output of a calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalculationResult {
    pub candidate_id: String,

    /// Utility as a fraction in `[0, 1]`.
    pub utility_score: f64,

    /// 1-based position; 1 is best.
    pub rank: usize,
}

impl CalculationResult {
    /// Utility rescaled to a percentage in `[0, 100]` for display.
    pub fn utility_percent(&self) -> f64 {
        self.utility_score * 100.0
    }

    /// True for the top-ranked candidate.
    pub fn is_winner(&self) -> bool {
        self.rank == 1
    }
}

/// Verbal importance level for integer weights on a 1–5 scale.
///
/// Data-entry tools conventionally restrict weights to this scale; the
/// engine itself accepts any positive weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Importance {
    NotImportant,
    LessImportant,
    FairlyImportant,
    Important,
    VeryImportant,
}

impl Importance {
    /// Maps a weight to its importance level.
    ///
    /// Only the exact values `1.0..=5.0` map to distinct levels; anything
    /// else (fractional or out of scale) reads as [`Importance::FairlyImportant`].
    pub fn from_weight(weight: f64) -> Self {
        match weight {
            w if w == 1.0 => Self::NotImportant,
            w if w == 2.0 => Self::LessImportant,
            w if w == 4.0 => Self::Important,
            w if w == 5.0 => Self::VeryImportant,
            _ => Self::FairlyImportant,
        }
    }

    /// Integer weight on the 1–5 scale.
    pub fn weight(self) -> f64 {
        match self {
            Self::NotImportant => 1.0,
            Self::LessImportant => 2.0,
            Self::FairlyImportant => 3.0,
            Self::Important => 4.0,
            Self::VeryImportant => 5.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotImportant => "Not important",
            Self::LessImportant => "Less important",
            Self::FairlyImportant => "Fairly important",
            Self::Important => "Important",
            Self::VeryImportant => "Very important",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_score_reads_as_zero() {
        let c = Candidate::new("a", "A").with_score("price", 42.0);
        assert_eq!(c.score("price"), Some(42.0));
        assert_eq!(c.score("quality"), None);
        assert!((c.score_or_zero("quality") - 0.0).abs() < 1e-15);
    }

    #[test]
    fn test_criterion_shorthands() {
        let b = Criterion::benefit("speed", 3.0);
        let c = Criterion::cost("price", 2.0);
        assert_eq!(b.polarity, Polarity::Benefit);
        assert_eq!(c.polarity, Polarity::Cost);
        assert_eq!(b.name, "speed");
    }

    #[test]
    fn test_bounds_degenerate() {
        assert!(Bounds::new(5.0, 5.0).is_degenerate());
        assert!(!Bounds::new(5.0, 6.0).is_degenerate());
        assert!((Bounds::new(40.0, 80.0).span() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_utility_percent() {
        let r = CalculationResult {
            candidate_id: "x".into(),
            utility_score: 0.6,
            rank: 1,
        };
        assert!((r.utility_percent() - 60.0).abs() < 1e-10);
        assert!(r.is_winner());
    }

    #[test]
    fn test_importance_scale() {
        assert_eq!(Importance::from_weight(1.0), Importance::NotImportant);
        assert_eq!(Importance::from_weight(5.0), Importance::VeryImportant);
        assert_eq!(Importance::from_weight(3.0), Importance::FairlyImportant);
        assert_eq!(Importance::from_weight(2.5), Importance::FairlyImportant);
        assert_eq!(Importance::from_weight(9.0), Importance::FairlyImportant);
        assert_eq!(Importance::Important.label(), "Important");
        assert!((Importance::LessImportant.weight() - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_criterion_importance() {
        let c = Criterion::benefit("quality", 4.0);
        assert_eq!(c.importance(), Importance::Important);
    }
}
