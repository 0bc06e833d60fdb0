//! Grouping of one calculation's results under a run identifier.
//!
//! A [`CalculationRun`] is what a persistence collaborator stores when a
//! caller wants to keep a calculation: every result row shares one run id
//! and one timestamp. Storage itself happens outside this crate.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::CalculationResult;

/// One stored row of a calculation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunRecord {
    pub run_id: Uuid,
    pub candidate_id: String,
    pub utility_score: f64,
    pub rank: usize,
    pub calculated_at: DateTime<Utc>,
}

/// Immutable snapshot of a ranked result set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationRun {
    run_id: Uuid,
    calculated_at: DateTime<Utc>,
    results: Vec<CalculationResult>,
}

impl CalculationRun {
    /// Stamps `results` with a fresh random (v4) run id and the current time.
    pub fn new(results: Vec<CalculationResult>) -> Self {
        let run_id = uuid::Builder::from_random_bytes(rand::random()).into_uuid();
        Self::with_id(run_id, Utc::now(), results)
    }

    /// Builds a run with caller-chosen identity, e.g. when reloading a stored run.
    pub fn with_id(
        run_id: Uuid,
        calculated_at: DateTime<Utc>,
        results: Vec<CalculationResult>,
    ) -> Self {
        Self {
            run_id,
            calculated_at,
            results,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn calculated_at(&self) -> DateTime<Utc> {
        self.calculated_at
    }

    pub fn results(&self) -> &[CalculationResult] {
        &self.results
    }

    /// The rank-1 result, if any.
    pub fn winner(&self) -> Option<&CalculationResult> {
        self.results.iter().find(|r| r.is_winner())
    }

    /// Flattens the run into one row per candidate, ordered by rank.
    pub fn records(&self) -> Vec<RunRecord> {
        let mut rows: Vec<RunRecord> = self
            .results
            .iter()
            .map(|r| RunRecord {
                run_id: self.run_id,
                candidate_id: r.candidate_id.clone(),
                utility_score: r.utility_score,
                rank: r.rank,
                calculated_at: self.calculated_at,
            })
            .collect();
        rows.sort_by_key(|row| row.rank);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<CalculationResult> {
        vec![
            CalculationResult {
                candidate_id: "X".into(),
                utility_score: 0.6,
                rank: 1,
            },
            CalculationResult {
                candidate_id: "Y".into(),
                utility_score: 0.4,
                rank: 2,
            },
        ]
    }

    #[test]
    fn test_new_run_is_v4() {
        let run = CalculationRun::new(results());
        assert_eq!(run.run_id().get_version_num(), 4);
        assert_eq!(run.results().len(), 2);
    }

    #[test]
    fn test_distinct_run_ids() {
        let a = CalculationRun::new(results());
        let b = CalculationRun::new(results());
        assert_ne!(a.run_id(), b.run_id());
    }

    #[test]
    fn test_records_share_run_identity() {
        let at = Utc::now();
        let id = Uuid::from_u128(7);
        let run = CalculationRun::with_id(id, at, results());

        let rows = run.records();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.run_id == id && r.calculated_at == at));
        assert_eq!(rows[0].candidate_id, "X");
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn test_records_sorted_by_rank() {
        let mut shuffled = results();
        shuffled.reverse();
        let run = CalculationRun::with_id(Uuid::nil(), Utc::now(), shuffled);
        let ranks: Vec<usize> = run.records().iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn test_winner() {
        let run = CalculationRun::new(results());
        assert_eq!(run.winner().unwrap().candidate_id, "X");
        assert!(CalculationRun::new(Vec::new()).winner().is_none());
    }
}
