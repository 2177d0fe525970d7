//! Parent selection.
//!
//! Fitness-proportional (roulette wheel) sampling over the scores of the
//! current generation. When every score is zero the wheel has no area, so
//! the policy switches to uniform sampling instead of dividing by zero. The
//! branch is chosen once per generation by inspecting the total score.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel selection)

use rand::Rng;

use super::types::FitnessRecord;

/// Parent selection policy for one generation.
///
/// # Examples
///
/// ```
/// use u_slotfind::ga::{FitnessRecord, ParentSelection};
/// use u_slotfind::space::Candidate;
///
/// let zeros = vec![FitnessRecord::new(Candidate::new(0, 0), 0); 4];
/// assert_eq!(ParentSelection::for_generation(&zeros), ParentSelection::Uniform);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentSelection {
    /// Probability of picking an individual is `score / total`.
    Proportional {
        /// Sum of all scores; always positive.
        total: u64,
    },
    /// Every individual is equally likely.
    Uniform,
}

impl ParentSelection {
    /// Chooses the policy for a generation's records.
    pub fn for_generation(records: &[FitnessRecord]) -> Self {
        let total: u64 = records.iter().map(|r| r.score as u64).sum();
        if total > 0 {
            ParentSelection::Proportional { total }
        } else {
            ParentSelection::Uniform
        }
    }

    /// Selects a parent index from `records`.
    ///
    /// # Panics
    /// Panics if `records` is empty.
    pub fn select<R: Rng>(&self, records: &[FitnessRecord], rng: &mut R) -> usize {
        assert!(!records.is_empty(), "cannot select from empty population");

        match *self {
            ParentSelection::Proportional { total } => roulette(records, total, rng),
            ParentSelection::Uniform => rng.random_range(0..records.len()),
        }
    }
}

/// Walks the cumulative score until it passes a uniform threshold in `0..total`.
fn roulette<R: Rng>(records: &[FitnessRecord], total: u64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0..total);
    let mut cumulative = 0u64;
    for (i, r) in records.iter().enumerate() {
        cumulative += r.score as u64;
        if cumulative > threshold {
            return i;
        }
    }

    records.len() - 1 // total was stale
}
