//! Direction-aware min-max scaling of raw scores.
//!
//! Bounds are taken per criterion over the candidate set being evaluated,
//! so every scaled score lands in `[0, 1]`. A criterion on which all
//! candidates tie does not discriminate and scales to `0` for everyone,
//! whatever its polarity.

use std::collections::HashMap;

use super::types::{Bounds, Candidate, Criterion, Polarity};

/// Computes the observed `min`/`max` raw score of every criterion.
///
/// Missing scores count as `0.0`. With no candidates, every criterion gets
/// the degenerate range `[0, 0]`.
pub fn compute_bounds(criteria: &[Criterion], candidates: &[Candidate]) -> HashMap<String, Bounds> {
    criteria
        .iter()
        .map(|c| {
            let bounds = candidates
                .iter()
                .map(|cand| cand.score_or_zero(&c.id))
                .fold(None, |acc: Option<Bounds>, s| match acc {
                    None => Some(Bounds::new(s, s)),
                    Some(b) => Some(Bounds::new(b.min.min(s), b.max.max(s))),
                })
                .unwrap_or(Bounds::new(0.0, 0.0));
            (c.id.clone(), bounds)
        })
        .collect()
}

/// Scales a raw score into `[0, 1]` relative to `bounds`.
///
/// - degenerate bounds (`max == min`) → `0`
/// - [`Polarity::Benefit`] → `(score - min) / (max - min)`
/// - [`Polarity::Cost`] → `(max - score) / (max - min)`
///
/// The result is clamped, so scores outside externally supplied bounds
/// still map into `[0, 1]`. Ranges wider than `f64::MAX` (e.g. `-1e308`
/// to `1e308`) are scaled without overflowing.
///
/// # Examples
///
/// ```
/// use u_smart::smart::{normalize_score, Bounds, Polarity};
///
/// let b = Bounds::new(10.0, 90.0);
/// assert!((normalize_score(50.0, b, Polarity::Benefit) - 0.5).abs() < 1e-12);
/// assert!((normalize_score(10.0, b, Polarity::Cost) - 1.0).abs() < 1e-12);
/// ```
pub fn normalize_score(raw_score: f64, bounds: Bounds, polarity: Polarity) -> f64 {
    if bounds.is_degenerate() {
        return 0.0;
    }

    let span = bounds.span();
    let scaled = if span.is_finite() {
        match polarity {
            Polarity::Benefit => (raw_score - bounds.min) / span,
            Polarity::Cost => (bounds.max - raw_score) / span,
        }
    } else {
        // Range wider than f64::MAX: work on halves so differences stay finite.
        let half_span = bounds.max / 2.0 - bounds.min / 2.0;
        match polarity {
            Polarity::Benefit => (raw_score / 2.0 - bounds.min / 2.0) / half_span,
            Polarity::Cost => (bounds.max / 2.0 - raw_score / 2.0) / half_span,
        }
    };

    // `clamp` passes NaN through; only non-finite external bounds get here.
    if scaled.is_nan() {
        return 0.0;
    }
    scaled.clamp(0.0, 1.0)
}
