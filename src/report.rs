//! Display-ready view of a run.
//!
//! [`SlotReport`] turns a [`RunResult`] into plain serializable values: slot
//! times as `HH:MM` strings, free-professor names, the fitness series for a
//! plotting layer, and the candidate-space parameters a schedule grid needs.
//! It performs no I/O; serialization and rendering belong to the caller.
//!
//! # Outcome
//!
//! | [`Outcome`] | Meaning | `found_slot` |
//! |-------------|---------|--------------|
//! | `CommonSlot` | every professor is free | `Some` |
//! | `PartialSlot` | counting mode, some but not all free | `None` |
//! | `NoSlot` | nothing better than a zero score | `None` |
//!
//! `best_slot` is always filled so the grid can still highlight it.

use serde::Serialize;

use crate::fitness::{FitnessMode, Score};
use crate::ga::{RunResult, Termination};
use crate::schedule::{BusyInterval, ProfessorSchedule};
use crate::space::{format_hour, ResolvedSlot};

/// How good the best slot of a run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// All professors are free in the best slot.
    CommonSlot,
    /// Some, but not all, professors are free (counting mode only).
    PartialSlot,
    /// No acceptable slot was found.
    NoSlot,
}

/// A slot with formatted times and its free professors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    /// Day label.
    pub day: String,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`.
    pub end_time: String,
    /// Number of professors free for the whole slot.
    pub num_professors_free: usize,
    /// Number of professors searched over.
    pub total_professors: usize,
    /// Names of the free professors, in schedule order.
    pub professors_available_in_best_slot: Vec<String>,
}

impl SlotView {
    fn new(slot: &ResolvedSlot, free: &[String], total: usize) -> Self {
        Self {
            day: slot.day.clone(),
            start_time: slot.start_label(),
            end_time: slot.end_label(),
            num_professors_free: free.len(),
            total_professors: total,
            professors_available_in_best_slot: free.to_vec(),
        }
    }
}

/// Per-generation fitness series, for plotting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitnessSeries {
    /// Number of generations run (length of both series).
    pub generations: usize,
    /// Best score of each generation.
    pub best: Vec<Score>,
    /// Mean score of each generation.
    pub average: Vec<f64>,
}

/// One row of the schedule grid: a professor and their busy blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    /// Professor identifier.
    pub name: String,
    /// Busy blocks, in insertion order.
    pub busy: Vec<BusyInterval>,
}

/// Serializable summary of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotReport {
    /// How good the best slot is.
    pub outcome: Outcome,
    /// Present only for [`Outcome::CommonSlot`].
    pub found_slot: Option<SlotView>,
    /// Best slot of the run, whatever the outcome.
    pub best_slot: SlotView,
    /// Score of `best_slot`.
    pub best_score: Score,
    /// Highest attainable score for the mode.
    pub max_score: Score,
    /// Scoring mode of the run.
    pub fitness_mode: FitnessMode,
    /// Slot length in hours.
    pub slot_duration: f64,
    /// Day labels, in order.
    pub days_of_week: Vec<String>,
    /// Every valid start time as `HH:MM`.
    pub possible_start_times: Vec<String>,
    /// Working window start hour.
    pub start_hour_day: f64,
    /// Working window end hour.
    pub end_hour_day: f64,
    /// Granularity in hours.
    pub increment_time: f64,
    /// Number of generations evaluated.
    pub generations_ran: usize,
    /// Why the run stopped.
    pub termination: Termination,
    /// Seed of the run, for replay.
    pub seed: u64,
    /// Best score of each generation.
    pub best_fitness_history: Vec<Score>,
    /// Mean score of each generation.
    pub average_fitness_history: Vec<f64>,
    /// Empty unless attached with [`with_schedules`](Self::with_schedules).
    pub professor_schedules: Vec<ScheduleRow>,
}

impl SlotReport {
    /// Builds the report for `result`.
    pub fn from_result(result: &RunResult) -> Self {
        let best_slot = SlotView::new(
            &result.best_slot,
            &result.free_professors,
            result.total_professors,
        );
        let outcome = if result.is_solved() {
            Outcome::CommonSlot
        } else if result.fitness_mode == FitnessMode::Counting && result.best.score > 0 {
            Outcome::PartialSlot
        } else {
            Outcome::NoSlot
        };
        let space = &result.space;
        let window = space.window();

        Self {
            outcome,
            found_slot: (outcome == Outcome::CommonSlot).then(|| best_slot.clone()),
            best_slot,
            best_score: result.best.score,
            max_score: result.max_score,
            fitness_mode: result.fitness_mode,
            slot_duration: space.slot_duration(),
            days_of_week: space.days().to_vec(),
            possible_start_times: space.start_labels(),
            start_hour_day: window.start_hour,
            end_hour_day: window.end_hour,
            increment_time: space.granularity(),
            generations_ran: result.generations,
            termination: result.termination,
            seed: result.seed,
            best_fitness_history: result.best_fitness_history.clone(),
            average_fitness_history: result.average_fitness_history.clone(),
            professor_schedules: Vec::new(),
        }
    }

    /// Attaches the professors' busy blocks for grid rendering.
    pub fn with_schedules(mut self, schedules: &[ProfessorSchedule]) -> Self {
        self.professor_schedules = schedules
            .iter()
            .map(|s| ScheduleRow {
                name: s.id.clone(),
                busy: s.busy().to_vec(),
            })
            .collect();
        self
    }

    /// The two fitness series and the generation count.
    pub fn fitness_series(&self) -> FitnessSeries {
        FitnessSeries {
            generations: self.generations_ran,
            best: self.best_fitness_history.clone(),
            average: self.average_fitness_history.clone(),
        }
    }

    /// Plain-text summary of the run.
    pub fn summary(&self) -> String {
        let slot = &self.best_slot;
        let headline = match self.outcome {
            Outcome::CommonSlot => format!(
                "Common slot: {} {}-{} ({}h), {}/{} professors free",
                slot.day,
                slot.start_time,
                slot.end_time,
                self.slot_duration,
                slot.num_professors_free,
                slot.total_professors
            ),
            Outcome::PartialSlot => format!(
                "No common slot. Best partial slot: {} {}-{} ({}h), {}/{} professors free: {}",
                slot.day,
                slot.start_time,
                slot.end_time,
                self.slot_duration,
                slot.num_professors_free,
                slot.total_professors,
                slot.professors_available_in_best_slot.join(", ")
            ),
            Outcome::NoSlot => format!(
                "No common slot found for a {}h slot among {} professors",
                self.slot_duration, slot.total_professors
            ),
        };

        let mut lines = vec![
            headline,
            format!(
                "Mode: {:?}, score {}/{}",
                self.fitness_mode, self.best_score, self.max_score
            ),
            format!(
                "Generations: {} ({:?}), seed {}",
                self.generations_ran, self.termination, self.seed
            ),
            format!(
                "Window: {}-{} every {}h over {}",
                format_hour(self.start_hour_day),
                format_hour(self.end_hour_day),
                self.increment_time,
                self.days_of_week.join(", ")
            ),
        ];
        if let (Some(best), Some(avg)) = (
            self.best_fitness_history.last(),
            self.average_fitness_history.last(),
        ) {
            lines.push(format!("Final generation: best {best}, average {avg:.2}"));
        }
        lines.join("\n")
    }
}

impl From<&RunResult> for SlotReport {
    fn from(result: &RunResult) -> Self {
        SlotReport::from_result(result)
    }
}
