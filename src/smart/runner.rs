//! SMART calculation pipeline.
//!
//! [`SmartRunner`] composes the stages in strict order:
//! validation → weight normalization → bounds → aggregation → ranking.
//! A call either returns a complete ranked result set or fails before
//! producing any output.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::aggregator::utility;
use super::config::SmartConfig;
use super::normalizer::normalize_weights;
use super::ranker::rank;
use super::scaler::compute_bounds;
use super::types::{Bounds, CalculationResult, Candidate, Criterion, UtilityScore};
use crate::error::{InvalidInputError, SmartResult};

/// A data-quality issue that does not abort the calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataWarning {
    /// The candidate has no score for this criterion; `0.0` was used.
    MissingScore {
        candidate_id: String,
        criterion_id: String,
    },

    /// The candidate has a score for a criterion outside the active set; it was ignored.
    UnknownCriterion {
        candidate_id: String,
        criterion_id: String,
    },

    /// Every candidate has the same raw score; the criterion contributes nothing.
    DegenerateCriterion { criterion_id: String },
}

/// Full output of a SMART calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmartOutcome {
    /// Ranked results, best first.
    pub results: Vec<CalculationResult>,

    /// Normalized weight per criterion id (sums to 1).
    pub normalized_weights: HashMap<String, f64>,

    /// Observed raw-score range per criterion id.
    pub bounds: HashMap<String, Bounds>,

    /// Data-quality warnings, in criteria/candidate input order.
    pub warnings: Vec<DataWarning>,
}

impl SmartOutcome {
    /// The rank-1 result, or `None` when there were no candidates.
    pub fn winner(&self) -> Option<&CalculationResult> {
        self.results.first()
    }

    /// Looks up the result for a candidate id.
    pub fn result_for(&self, candidate_id: &str) -> Option<&CalculationResult> {
        self.results.iter().find(|r| r.candidate_id == candidate_id)
    }

    /// A criterion's normalized weight as a percentage in `[0, 100]`, for display.
    pub fn weight_percent(&self, criterion_id: &str) -> Option<f64> {
        self.normalized_weights.get(criterion_id).map(|w| w * 100.0)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Executes SMART calculations.
///
/// The runner is stateless; concurrent calls need no coordination and
/// inputs are never mutated.
///
/// # Usage
///
/// ```
/// use u_smart::smart::{Candidate, Criterion, SmartConfig, SmartRunner};
///
/// let criteria = vec![Criterion::cost("price", 2.0), Criterion::benefit("quality", 3.0)];
/// let candidates = vec![
///     Candidate::new("X", "X").with_score("price", 100.0).with_score("quality", 80.0),
///     Candidate::new("Y", "Y").with_score("price", 50.0).with_score("quality", 40.0),
/// ];
///
/// let outcome = SmartRunner::run(&criteria, &candidates, &SmartConfig::default()).unwrap();
/// let winner = outcome.winner().unwrap();
/// assert_eq!(winner.candidate_id, "X");
/// assert!((winner.utility_score - 0.6).abs() < 1e-10);
/// ```
pub struct SmartRunner;

impl SmartRunner {
    /// Runs a calculation with the given configuration.
    ///
    /// # Errors
    ///
    /// [`SmartError::Config`](crate::SmartError::Config) for an invalid
    /// configuration, [`SmartError::InvalidInput`](crate::SmartError::InvalidInput)
    /// for a malformed criteria/candidate snapshot.
    pub fn run(
        criteria: &[Criterion],
        candidates: &[Candidate],
        config: &SmartConfig,
    ) -> SmartResult<SmartOutcome> {
        config.validate()?;
        Self::evaluate(criteria, candidates, config).map_err(Into::into)
    }

    /// Runs the pipeline against an already-validated configuration.
    pub(crate) fn evaluate(
        criteria: &[Criterion],
        candidates: &[Candidate],
        config: &SmartConfig,
    ) -> Result<SmartOutcome, InvalidInputError> {
        tracing::debug!(
            criteria = criteria.len(),
            candidates = candidates.len(),
            "starting SMART calculation"
        );

        check_limits(criteria, candidates, config)?;
        let normalized_weights = normalize_weights(criteria)?;
        check_candidates(criteria, candidates)?;

        let mut warnings = score_warnings(criteria, candidates, &normalized_weights);
        let bounds = compute_bounds(criteria, candidates);

        if !candidates.is_empty() {
            for c in criteria {
                if bounds.get(&c.id).is_some_and(Bounds::is_degenerate) {
                    tracing::debug!(criterion = %c.id, "criterion has no variance, contributes zero");
                    warnings.push(DataWarning::DegenerateCriterion {
                        criterion_id: c.id.clone(),
                    });
                }
            }
        }

        let scores = aggregate(criteria, candidates, &normalized_weights, &bounds, config)?;
        let results = rank(scores, config.tie_breaker);

        if let Some(best) = results.first() {
            tracing::debug!(
                winner = %best.candidate_id,
                utility = best.utility_score,
                warnings = warnings.len(),
                "SMART calculation complete"
            );
        }

        Ok(SmartOutcome {
            results,
            normalized_weights,
            bounds,
            warnings,
        })
    }
}

/// Computes a ranked result set with the default configuration.
///
/// This is the plain `calculate(criteria, candidates)` entry point; use
/// [`SmartRunner::run`] for tie-break control, warnings, and intermediates.
///
/// # Errors
///
/// Any [`InvalidInputError`]; in particular an empty `criteria` slice.
/// An empty `candidates` slice yields `Ok(vec![])`.
///
/// # Examples
///
/// ```
/// use u_smart::{calculate, smart::{Candidate, Criterion}};
///
/// let criteria = vec![Criterion::benefit("q", 1.0)];
/// let candidates = vec![
///     Candidate::new("A", "A").with_score("q", 10.0),
///     Candidate::new("B", "B").with_score("q", 50.0),
///     Candidate::new("C", "C").with_score("q", 90.0),
/// ];
/// let ranked = calculate(&criteria, &candidates).unwrap();
/// let order: Vec<_> = ranked.iter().map(|r| r.candidate_id.as_str()).collect();
/// assert_eq!(order, ["C", "B", "A"]);
/// ```
pub fn calculate(
    criteria: &[Criterion],
    candidates: &[Candidate],
) -> Result<Vec<CalculationResult>, InvalidInputError> {
    SmartRunner::evaluate(criteria, candidates, &SmartConfig::default()).map(|o| o.results)
}

fn check_limits(
    criteria: &[Criterion],
    candidates: &[Candidate],
    config: &SmartConfig,
) -> Result<(), InvalidInputError> {
    if let Some(limit) = config.max_criteria {
        if criteria.len() > limit {
            return Err(InvalidInputError::TooManyCriteria {
                count: criteria.len(),
                limit,
            });
        }
    }
    if let Some(limit) = config.max_candidates {
        if candidates.len() > limit {
            return Err(InvalidInputError::TooManyCandidates {
                count: candidates.len(),
                limit,
            });
        }
    }
    Ok(())
}

/// Rejects duplicate candidate ids and non-finite scores on active criteria.
fn check_candidates(criteria: &[Criterion], candidates: &[Candidate]) -> Result<(), InvalidInputError> {
    let mut seen = HashSet::with_capacity(candidates.len());

    for cand in candidates {
        if !seen.insert(cand.id.as_str()) {
            return Err(InvalidInputError::DuplicateCandidate {
                candidate_id: cand.id.clone(),
            });
        }
        for c in criteria {
            if let Some(score) = cand.score(&c.id) {
                if !score.is_finite() {
                    return Err(InvalidInputError::NonFiniteScore {
                        candidate_id: cand.id.clone(),
                        criterion_id: c.id.clone(),
                        score,
                    });
                }
            }
        }
    }
    Ok(())
}

fn score_warnings(
    criteria: &[Criterion],
    candidates: &[Candidate],
    normalized_weights: &HashMap<String, f64>,
) -> Vec<DataWarning> {
    let mut warnings = Vec::new();

    for cand in candidates {
        for c in criteria {
            if cand.score(&c.id).is_none() {
                tracing::warn!(
                    candidate = %cand.id,
                    criterion = %c.id,
                    "missing score, treating as 0"
                );
                warnings.push(DataWarning::MissingScore {
                    candidate_id: cand.id.clone(),
                    criterion_id: c.id.clone(),
                });
            }
        }

        let mut unknown: Vec<&String> = cand
            .scores
            .keys()
            .filter(|id| !normalized_weights.contains_key(*id))
            .collect();
        unknown.sort();
        for id in unknown {
            tracing::warn!(
                candidate = %cand.id,
                criterion = %id,
                "score for unknown criterion ignored"
            );
            warnings.push(DataWarning::UnknownCriterion {
                candidate_id: cand.id.clone(),
                criterion_id: id.clone(),
            });
        }
    }

    warnings
}

fn aggregate(
    criteria: &[Criterion],
    candidates: &[Candidate],
    normalized_weights: &HashMap<String, f64>,
    bounds: &HashMap<String, Bounds>,
    config: &SmartConfig,
) -> Result<Vec<UtilityScore>, InvalidInputError> {
    let score_one = |cand: &Candidate| {
        utility(cand, criteria, normalized_weights, bounds).map(|u| UtilityScore {
            candidate_id: cand.id.clone(),
            utility_score: u,
        })
    };

    if config.parallel {
        return aggregate_parallel(candidates, &score_one);
    }

    candidates.iter().map(score_one).collect()
}

#[cfg(feature = "parallel")]
fn aggregate_parallel<F>(
    candidates: &[Candidate],
    score_one: F,
) -> Result<Vec<UtilityScore>, InvalidInputError>
where
    F: Fn(&Candidate) -> Result<UtilityScore, InvalidInputError> + Send + Sync,
{
    candidates.par_iter().map(score_one).collect()
}

#[cfg(not(feature = "parallel"))]
fn aggregate_parallel<F>(
    candidates: &[Candidate],
    score_one: F,
) -> Result<Vec<UtilityScore>, InvalidInputError>
where
    F: Fn(&Candidate) -> Result<UtilityScore, InvalidInputError>,
{
    candidates.iter().map(score_one).collect()
}
