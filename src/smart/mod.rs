//! SMART (Simple Multi-Attribute Rating Technique) scoring engine.
//!
//! Ranks candidates against a set of weighted criteria:
//!
//! 1. **Normalize weights**: each weight divided by the total, so they sum to 1.
//! 2. **Scale scores**: per criterion, min-max rescale raw scores into
//!    `[0, 1]`, inverted for cost criteria.
//! 3. **Aggregate**: utility = Σ scaled score × normalized weight.
//! 4. **Rank**: descending utility, dense ranks `1..=n`, explicit tie-break.
//!
//! # Key Types
//!
//! - [`Criterion`], [`Candidate`]: caller-owned input snapshot
//! - [`SmartConfig`]: tie-break policy, input size limits, parallelism
//! - [`SmartRunner`]: executes the pipeline, returning [`SmartOutcome`]
//! - [`CalculationRun`]: results grouped under a run id and timestamp
//!
//! The stages are also exposed individually ([`normalize_weights`],
//! [`compute_bounds`], [`normalize_score`], [`utility`], [`rank`]).
//!
//! # References
//!
//! - Edwards (1977), "How to Use Multiattribute Utility Measurement for
//!   Social Decisionmaking", *IEEE Trans. Systems, Man, and Cybernetics*
//! - Edwards & Barron (1994), "SMARTS and SMARTER: Improved Simple Methods
//!   for Multiattribute Utility Measurement"

mod aggregator;
mod config;
mod normalizer;
mod ranker;
mod run;
mod runner;
mod scaler;
mod types;

pub use aggregator::utility;
pub use config::SmartConfig;
pub use normalizer::normalize_weights;
pub use ranker::{rank, TieBreaker};
pub use run::{CalculationRun, RunRecord};
pub use runner::{calculate, DataWarning, SmartOutcome, SmartRunner};
pub use scaler::{compute_bounds, normalize_score};
pub use types::{
    Bounds, CalculationResult, Candidate, Criterion, Importance, Polarity, UtilityScore,
};
