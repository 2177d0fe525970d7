//! Per-individual and per-generation records.

use serde::{Deserialize, Serialize};

use crate::fitness::Score;
use crate::space::Candidate;

/// A candidate together with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessRecord {
    /// The evaluated candidate.
    pub candidate: Candidate,
    /// Its score under the run's fitness mode.
    pub score: Score,
}

impl FitnessRecord {
    /// Creates a record.
    pub fn new(candidate: Candidate, score: Score) -> Self {
        Self { candidate, score }
    }
}

/// Statistics for one evaluated generation. Read-only once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    /// Zero-based generation index.
    pub generation: usize,
    /// Highest score in this generation.
    pub best: Score,
    /// Mean score in this generation.
    pub average: f64,
    /// Every individual of the generation, in population order.
    pub records: Vec<FitnessRecord>,
}

impl GenerationSnapshot {
    /// Builds a snapshot from evaluated records.
    ///
    /// `records` must not be empty.
    pub(crate) fn from_records(generation: usize, records: Vec<FitnessRecord>) -> Self {
        let best = records.iter().map(|r| r.score).max().unwrap_or(0);
        let total: u64 = records.iter().map(|r| r.score as u64).sum();
        let average = total as f64 / records.len().max(1) as f64;
        Self {
            generation,
            best,
            average,
            records,
        }
    }

    /// First record holding the generation's best score.
    pub fn best_record(&self) -> Option<&FitnessRecord> {
        self.records.iter().find(|r| r.score == self.best)
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The best score reached the maximum attainable for the mode.
    Solved,
    /// The generation budget ran out.
    BudgetExhausted,
    /// The cancellation flag was raised.
    Cancelled,
    /// The wall-clock limit elapsed.
    TimeLimit,
}
