//! Weighted aggregation of scaled scores into a single utility.

use std::collections::HashMap;

use super::scaler::normalize_score;
use super::types::{Bounds, Candidate, Criterion};
use crate::error::InvalidInputError;

/// Computes a candidate's utility: `Σ normalized_score(c) × normalized_weight(c)`.
///
/// With weights from [`normalize_weights`](super::normalize_weights) and
/// bounds from [`compute_bounds`](super::compute_bounds) the result lies in
/// `[0, 1]`.
///
/// # Errors
///
/// [`InvalidInputError::MissingWeight`] or [`InvalidInputError::MissingBounds`]
/// when a criterion has no entry in the supplied maps.
pub fn utility(
    candidate: &Candidate,
    criteria: &[Criterion],
    normalized_weights: &HashMap<String, f64>,
    bounds: &HashMap<String, Bounds>,
) -> Result<f64, InvalidInputError> {
    let mut total = 0.0;

    for c in criteria {
        let weight = *normalized_weights
            .get(&c.id)
            .ok_or_else(|| InvalidInputError::MissingWeight {
                criterion_id: c.id.clone(),
            })?;
        let b = *bounds
            .get(&c.id)
            .ok_or_else(|| InvalidInputError::MissingBounds {
                criterion_id: c.id.clone(),
            })?;

        total += normalize_score(candidate.score_or_zero(&c.id), b, c.polarity) * weight;
    }

    // Summation error can push a perfect candidate a hair past 1.
    Ok(total.clamp(0.0, 1.0))
}
