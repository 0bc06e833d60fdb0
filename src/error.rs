//! Error types.
//!
//! Input validation failures ([`InvalidInputError`]) are kept distinct from
//! configuration failures ([`ConfigError`]) so callers can tell a malformed
//! criteria/candidate snapshot apart from a misconfigured engine.

use thiserror::Error;

/// The criteria/candidate snapshot passed to a calculation is malformed.
///
/// Any of these aborts the whole calculation before output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("criteria set is empty")]
    EmptyCriteria,

    #[error("criterion `{criterion_id}` has invalid weight {weight} (must be positive and finite)")]
    NonPositiveWeight { criterion_id: String, weight: f64 },

    #[error("total criteria weight is zero")]
    ZeroTotalWeight,

    #[error("duplicate criterion id `{criterion_id}`")]
    DuplicateCriterion { criterion_id: String },

    #[error("duplicate candidate id `{candidate_id}`")]
    DuplicateCandidate { candidate_id: String },

    #[error("candidate `{candidate_id}` has non-finite score {score} for criterion `{criterion_id}`")]
    NonFiniteScore {
        candidate_id: String,
        criterion_id: String,
        score: f64,
    },

    #[error("{count} criteria exceeds the limit of {limit}")]
    TooManyCriteria { count: usize, limit: usize },

    #[error("{count} candidates exceeds the limit of {limit}")]
    TooManyCandidates { count: usize, limit: usize },

    #[error("no normalized weight for criterion `{criterion_id}`")]
    MissingWeight { criterion_id: String },

    #[error("no bounds for criterion `{criterion_id}`")]
    MissingBounds { criterion_id: String },
}

/// A [`SmartConfig`](crate::smart::SmartConfig) parameter is out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_criteria must be positive or None")]
    ZeroCriteriaLimit,

    #[error("max_candidates must be positive or None")]
    ZeroCandidateLimit,
}

/// Any failure of [`SmartRunner::run`](crate::smart::SmartRunner::run).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmartError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type SmartResult<T> = Result<T, SmartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = InvalidInputError::NonPositiveWeight {
            criterion_id: "price".into(),
            weight: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "criterion `price` has invalid weight -1 (must be positive and finite)"
        );

        let err = SmartError::from(InvalidInputError::EmptyCriteria);
        assert_eq!(err.to_string(), "invalid input: criteria set is empty");
    }

    #[test]
    fn test_from_config_error() {
        let err: SmartError = ConfigError::ZeroCandidateLimit.into();
        assert!(matches!(err, SmartError::Config(ConfigError::ZeroCandidateLimit)));
    }
}
