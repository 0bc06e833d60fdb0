//! Weight normalization.

use std::collections::HashMap;

use super::types::Criterion;
use crate::error::InvalidInputError;

/// Rescales criterion weights so they sum to 1.
///
/// Every weight must be positive and finite. Returns a map from criterion id
/// to `weight / total_weight`.
///
/// # Errors
///
/// - [`InvalidInputError::EmptyCriteria`] if `criteria` is empty.
/// - [`InvalidInputError::NonPositiveWeight`] if any weight is `<= 0`, NaN, or infinite.
/// - [`InvalidInputError::ZeroTotalWeight`] if the weights sum to zero.
/// - [`InvalidInputError::DuplicateCriterion`] if two criteria share an id.
///
/// # Examples
///
/// ```
/// use u_smart::smart::{normalize_weights, Criterion};
///
/// let criteria = vec![Criterion::cost("price", 2.0), Criterion::benefit("quality", 3.0)];
/// let weights = normalize_weights(&criteria).unwrap();
/// assert!((weights["price"] - 0.4).abs() < 1e-12);
/// assert!((weights["quality"] - 0.6).abs() < 1e-12);
/// ```
pub fn normalize_weights(criteria: &[Criterion]) -> Result<HashMap<String, f64>, InvalidInputError> {
    if criteria.is_empty() {
        return Err(InvalidInputError::EmptyCriteria);
    }

    for c in criteria {
        if !(c.weight.is_finite() && c.weight > 0.0) {
            return Err(InvalidInputError::NonPositiveWeight {
                criterion_id: c.id.clone(),
                weight: c.weight,
            });
        }
    }

    // Relative to the largest weight, so the total cannot overflow.
    let max_weight = criteria.iter().map(|c| c.weight).fold(0.0, f64::max);
    let total_weight: f64 = criteria.iter().map(|c| c.weight / max_weight).sum();
    if total_weight == 0.0 || !total_weight.is_finite() {
        return Err(InvalidInputError::ZeroTotalWeight);
    }

    let mut weights = HashMap::with_capacity(criteria.len());
    for c in criteria {
        let normalized = c.weight / max_weight / total_weight;
        if weights.insert(c.id.clone(), normalized).is_some() {
            return Err(InvalidInputError::DuplicateCriterion {
                criterion_id: c.id.clone(),
            });
        }
    }

    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let criteria = vec![
            Criterion::benefit("a", 1.0),
            Criterion::benefit("b", 2.0),
            Criterion::cost("c", 4.0),
        ];
        let w = normalize_weights(&criteria).unwrap();
        let sum: f64 = w.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((w["a"] - 1.0 / 7.0).abs() < 1e-12);
        assert!((w["c"] - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_criterion() {
        let w = normalize_weights(&[Criterion::benefit("only", 5.0)]).unwrap();
        assert!((w["only"] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_fractional_weights() {
        let criteria = vec![Criterion::benefit("a", 0.25), Criterion::benefit("b", 0.75)];
        let w = normalize_weights(&criteria).unwrap();
        assert!((w["a"] - 0.25).abs() < 1e-12);
        assert!((w["b"] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let criteria = vec![
            Criterion::benefit("a", f64::MAX),
            Criterion::benefit("b", f64::MAX),
            Criterion::cost("c", f64::MAX / 2.0),
        ];
        let w = normalize_weights(&criteria).unwrap();
        let sum: f64 = w.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((w["a"] - 0.4).abs() < 1e-12);
        assert!((w["c"] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_weights() {
        let criteria = vec![
            Criterion::benefit("a", f64::MIN_POSITIVE),
            Criterion::benefit("b", 3.0 * f64::MIN_POSITIVE),
        ];
        let w = normalize_weights(&criteria).unwrap();
        assert!((w["a"] - 0.25).abs() < 1e-12);
        assert!((w["b"] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_empty_criteria() {
        assert_eq!(normalize_weights(&[]), Err(InvalidInputError::EmptyCriteria));
    }

    #[test]
    fn test_zero_weight_rejected() {
        let criteria = vec![Criterion::benefit("a", 1.0), Criterion::benefit("b", 0.0)];
        let err = normalize_weights(&criteria).unwrap_err();
        assert!(matches!(
            err,
            InvalidInputError::NonPositiveWeight { ref criterion_id, .. } if criterion_id == "b"
        ));
    }

    #[test]
    fn test_negative_and_nan_weight_rejected() {
        assert!(normalize_weights(&[Criterion::benefit("a", -2.0)]).is_err());
        assert!(normalize_weights(&[Criterion::benefit("a", f64::NAN)]).is_err());
        assert!(normalize_weights(&[Criterion::benefit("a", f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let criteria = vec![Criterion::benefit("a", 1.0), Criterion::cost("a", 2.0)];
        assert_eq!(
            normalize_weights(&criteria),
            Err(InvalidInputError::DuplicateCriterion {
                criterion_id: "a".into()
            })
        );
    }
}
