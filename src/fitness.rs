//! Candidate scoring.
//!
//! A candidate is resolved to `(day, start, start + slot_duration)` and each
//! professor is checked with [`ProfessorSchedule::is_occupied`]. The score
//! depends on the run-level [`FitnessMode`]:
//!
//! | Mode | Score | Maximum |
//! |------|-------|---------|
//! | [`Counting`](FitnessMode::Counting) | number of free professors | `N` |
//! | [`Binary`](FitnessMode::Binary) | `1` if all are free, else `0` | `1` |
//!
//! Higher is better.

use serde::{Deserialize, Serialize};

use crate::schedule::ProfessorSchedule;
use crate::space::{Candidate, CandidateSpace};

/// Fitness score. Higher is better.
pub type Score = u32;

/// How a candidate's free professors are turned into a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessMode {
    /// Score is the number of free professors; partial slots rank by it.
    #[default]
    Counting,
    /// Score is 1 only when every professor is free.
    Binary,
}

impl FitnessMode {
    /// Highest attainable score with `professors` professors.
    pub fn max_score(self, professors: usize) -> Score {
        match self {
            FitnessMode::Counting => professors as Score,
            FitnessMode::Binary => 1,
        }
    }

    /// Converts a free-professor count into a score.
    pub fn score(self, free: usize, professors: usize) -> Score {
        match self {
            FitnessMode::Counting => free as Score,
            FitnessMode::Binary => Score::from(free == professors),
        }
    }
}

/// Scores candidates against a fixed set of schedules.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    schedules: &'a [ProfessorSchedule],
    space: &'a CandidateSpace,
    mode: FitnessMode,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator.
    pub fn new(
        schedules: &'a [ProfessorSchedule],
        space: &'a CandidateSpace,
        mode: FitnessMode,
    ) -> Self {
        Self {
            schedules,
            space,
            mode,
        }
    }

    /// Active scoring mode.
    pub fn mode(&self) -> FitnessMode {
        self.mode
    }

    /// Number of professors.
    pub fn professor_count(&self) -> usize {
        self.schedules.len()
    }

    /// Highest attainable score for this evaluator.
    pub fn max_score(&self) -> Score {
        self.mode.max_score(self.schedules.len())
    }

    /// Professors free during `candidate`, in schedule order.
    pub fn free_professors(&self, candidate: Candidate) -> Vec<&'a str> {
        let (day, start, end) = self.space.bounds(candidate);
        self.schedules
            .iter()
            .filter(|s| s.is_free(day, start, end))
            .map(|s| s.id.as_str())
            .collect()
    }

    /// Number of professors free during `candidate`.
    pub fn free_count(&self, candidate: Candidate) -> usize {
        let (day, start, end) = self.space.bounds(candidate);
        self.schedules
            .iter()
            .filter(|s| s.is_free(day, start, end))
            .count()
    }

    /// Scores `candidate` under the active mode.
    pub fn evaluate(&self, candidate: Candidate) -> Score {
        self.mode
            .score(self.free_count(candidate), self.schedules.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::demo;
    use crate::space::WorkingWindow;

    fn weekdays() -> Vec<String> {
        ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn space() -> CandidateSpace {
        CandidateSpace::new(&weekdays(), WorkingWindow::new(8.0, 18.0), 0.5, 2.0).unwrap()
    }

    #[test]
    fn test_max_score() {
        assert_eq!(FitnessMode::Counting.max_score(7), 7);
        assert_eq!(FitnessMode::Binary.max_score(7), 1);
    }

    #[test]
    fn test_counting_mode() {
        let profs = demo::four_professors().unwrap();
        let space = space();
        let eval = FitnessEvaluator::new(&profs, &space, FitnessMode::Counting);

        let friday_nine = space.locate("Viernes", "09:00").unwrap();
        assert_eq!(eval.evaluate(friday_nine), 4);
        assert_eq!(
            eval.free_professors(friday_nine),
            vec!["Profesor 1", "Profesor 2", "Profesor 3", "Profesor 4"]
        );

        // Viernes 08:00-10:00 collides with Profesor 1 only
        let friday_eight = space.locate("Viernes", "08:00").unwrap();
        assert_eq!(eval.evaluate(friday_eight), 3);
        assert!(!eval.free_professors(friday_eight).contains(&"Profesor 1"));
    }

    #[test]
    fn test_binary_mode() {
        let profs = demo::four_professors().unwrap();
        let space = space();
        let eval = FitnessEvaluator::new(&profs, &space, FitnessMode::Binary);

        assert_eq!(eval.max_score(), 1);
        assert_eq!(eval.evaluate(space.locate("Viernes", "09:00").unwrap()), 1);
        assert_eq!(eval.evaluate(space.locate("Viernes", "08:00").unwrap()), 0);
        assert_eq!(eval.evaluate(space.locate("Lunes", "09:00").unwrap()), 0);
    }

    #[test]
    fn test_no_professors_is_trivially_free() {
        let space = space();
        let eval = FitnessEvaluator::new(&[], &space, FitnessMode::Binary);
        assert_eq!(eval.evaluate(Candidate::new(0, 0)), 1);
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&FitnessMode::Binary).unwrap();
        assert_eq!(json, "\"binary\"");
        let mode: FitnessMode = serde_json::from_str("\"counting\"").unwrap();
        assert_eq!(mode, FitnessMode::Counting);
    }
}
