//! SMART engine configuration.
//!
//! [`SmartConfig`] controls tie-breaking, input size limits, and parallelism.

use super::ranker::TieBreaker;
use crate::error::ConfigError;

/// Configuration for a SMART calculation.
///
/// # Defaults
///
/// ```
/// use u_smart::smart::{SmartConfig, TieBreaker};
///
/// let config = SmartConfig::default();
/// assert_eq!(config.tie_breaker, TieBreaker::InputOrder);
/// assert_eq!(config.max_criteria, Some(1_000));
/// assert_eq!(config.max_candidates, Some(100_000));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_smart::smart::{SmartConfig, TieBreaker};
///
/// let config = SmartConfig::default()
///     .with_tie_breaker(TieBreaker::ById)
///     .with_max_candidates(500)
///     .without_limits();
/// assert!(config.max_candidates.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartConfig {
    /// How candidates with exactly equal utility are ordered.
    pub tie_breaker: TieBreaker,

    /// Upper bound on the number of criteria. `None` disables the check.
    pub max_criteria: Option<usize>,

    /// Upper bound on the number of candidates. `None` disables the check.
    pub max_candidates: Option<usize>,

    /// Whether to aggregate candidates in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for SmartConfig {
    fn default() -> Self {
        Self {
            tie_breaker: TieBreaker::InputOrder,
            max_criteria: Some(1_000),
            max_candidates: Some(100_000),
            parallel: false,
        }
    }
}

impl SmartConfig {
    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Sets the maximum number of criteria.
    pub fn with_max_criteria(mut self, n: usize) -> Self {
        self.max_criteria = Some(n);
        self
    }

    /// Sets the maximum number of candidates.
    pub fn with_max_candidates(mut self, n: usize) -> Self {
        self.max_candidates = Some(n);
        self
    }

    /// Removes both size limits.
    pub fn without_limits(mut self) -> Self {
        self.max_criteria = None;
        self.max_candidates = None;
        self
    }

    /// Enables or disables parallel aggregation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_criteria == Some(0) {
            return Err(ConfigError::ZeroCriteriaLimit);
        }
        if self.max_candidates == Some(0) {
            return Err(ConfigError::ZeroCandidateLimit);
        }
        Ok(())
    }
}
