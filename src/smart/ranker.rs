//! Descending-utility ranking with an explicit tie-break policy.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{CalculationResult, UtilityScore};

/// Strategy for ordering candidates whose utilities are exactly equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TieBreaker {
    /// Earlier position in the input ranks higher.
    #[default]
    InputOrder,

    /// Lexicographically smaller candidate id ranks higher; input order
    /// decides between equal ids.
    ById,
}

/// Sorts by descending utility and assigns dense ranks `1..=n`.
///
/// Ties (bitwise-equal utilities) are resolved by `tie_breaker`, so the
/// output is fully determined by the input.
///
/// # Examples
///
/// ```
/// use u_smart::smart::{rank, TieBreaker, UtilityScore};
///
/// let scores = vec![
///     UtilityScore { candidate_id: "A".into(), utility_score: 0.2 },
///     UtilityScore { candidate_id: "B".into(), utility_score: 0.9 },
/// ];
/// let ranked = rank(scores, TieBreaker::InputOrder);
/// assert_eq!(ranked[0].candidate_id, "B");
/// assert_eq!(ranked[0].rank, 1);
/// ```
pub fn rank(scores: Vec<UtilityScore>, tie_breaker: TieBreaker) -> Vec<CalculationResult> {
    let mut indexed: Vec<(usize, UtilityScore)> = scores.into_iter().enumerate().collect();

    indexed.sort_by(|(ia, a), (ib, b)| {
        match sort_key(b.utility_score).total_cmp(&sort_key(a.utility_score)) {
            Ordering::Equal => {}
            ord => return ord,
        }

        match tie_breaker {
            TieBreaker::InputOrder => ia.cmp(ib),
            TieBreaker::ById => a.candidate_id.cmp(&b.candidate_id).then(ia.cmp(ib)),
        }
    });

    indexed
        .into_iter()
        .enumerate()
        .map(|(pos, (_, s))| CalculationResult {
            candidate_id: s.candidate_id,
            utility_score: s.utility_score,
            rank: pos + 1,
        })
        .collect()
}

/// Folds `-0.0` into `0.0` so signed zeros tie.
fn sort_key(utility: f64) -> f64 {
    if utility == 0.0 {
        0.0
    } else {
        utility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us(id: &str, u: f64) -> UtilityScore {
        UtilityScore {
            candidate_id: id.into(),
            utility_score: u,
        }
    }

    fn ids(results: &[CalculationResult]) -> Vec<&str> {
        results.iter().map(|r| r.candidate_id.as_str()).collect()
    }

    #[test]
    fn test_descending_dense_ranks() {
        let ranked = rank(
            vec![us("A", 0.0), us("B", 0.5), us("C", 1.0)],
            TieBreaker::InputOrder,
        );

        assert_eq!(ids(&ranked), vec!["C", "B", "A"]);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_empty() {
        assert!(rank(Vec::new(), TieBreaker::ById).is_empty());
    }

    #[test]
    fn test_tie_input_order() {
        let ranked = rank(
            vec![us("z", 0.5), us("a", 0.5), us("m", 0.9), us("b", 0.5)],
            TieBreaker::InputOrder,
        );
        assert_eq!(ids(&ranked), vec!["m", "z", "a", "b"]);
        // Ties still get distinct ranks
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_tie_by_id() {
        let ranked = rank(
            vec![us("z", 0.5), us("a", 0.5), us("m", 0.9), us("b", 0.5)],
            TieBreaker::ById,
        );
        assert_eq!(ids(&ranked), vec!["m", "a", "b", "z"]);
    }

    #[test]
    fn test_by_id_only_applies_to_ties() {
        let ranked = rank(vec![us("a", 0.1), us("z", 0.2)], TieBreaker::ById);
        assert_eq!(ids(&ranked), vec!["z", "a"]);
    }

    #[test]
    fn test_signed_zeros_tie() {
        let ranked = rank(vec![us("neg", -0.0), us("pos", 0.0)], TieBreaker::InputOrder);
        assert_eq!(ids(&ranked), vec!["neg", "pos"]);
    }

    #[test]
    fn test_near_equal_is_not_a_tie() {
        let ranked = rank(
            vec![us("first", 0.5), us("second", 0.5 + 1e-15)],
            TieBreaker::InputOrder,
        );
        assert_eq!(ids(&ranked), vec!["second", "first"]);
    }
}
