//! Busy intervals and per-professor schedules.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A busy block: a day label and a half-open hour range `[start, end)`.
///
/// Immutable once built; `start < end` is checked on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct BusyInterval {
    day: String,
    #[serde(rename = "start_hour")]
    start: f64,
    #[serde(rename = "end_hour")]
    end: f64,
}

#[derive(Deserialize)]
struct RawInterval {
    day: String,
    start_hour: f64,
    end_hour: f64,
}

impl TryFrom<RawInterval> for BusyInterval {
    type Error = SlotError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        BusyInterval::new(raw.day, raw.start_hour, raw.end_hour)
    }
}

impl BusyInterval {
    /// Creates a busy interval.
    ///
    /// # Errors
    /// [`SlotError::InvalidInterval`] if `start >= end` or either bound is
    /// not finite.
    pub fn new(day: impl Into<String>, start: f64, end: f64) -> Result<Self> {
        let day = day.into();
        if !(start.is_finite() && end.is_finite() && start < end) {
            return Err(SlotError::invalid_interval(&day, start, end));
        }
        Ok(Self { day, start, end })
    }

    /// Day label.
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Start hour (inclusive).
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End hour (exclusive).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length in hours.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `[start, end)` shares any time with this interval.
    ///
    /// Ranges that only touch at an endpoint do not overlap.
    #[inline]
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        start.max(self.start) < end.min(self.end)
    }
}

/// A professor identifier and their busy intervals. Order is irrelevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorSchedule {
    /// Professor identifier.
    pub id: String,
    busy: Vec<BusyInterval>,
}

impl ProfessorSchedule {
    /// Creates a schedule with no busy intervals.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            busy: Vec::new(),
        }
    }

    /// Creates a schedule from already-built intervals.
    pub fn with_intervals(id: impl Into<String>, busy: Vec<BusyInterval>) -> Self {
        Self {
            id: id.into(),
            busy,
        }
    }

    /// Adds a busy interval, builder style.
    ///
    /// # Errors
    /// Propagates [`BusyInterval::new`] validation.
    pub fn with_busy(mut self, day: impl Into<String>, start: f64, end: f64) -> Result<Self> {
        self.busy.push(BusyInterval::new(day, start, end)?);
        Ok(self)
    }

    /// Adds a busy interval.
    pub fn push(&mut self, interval: BusyInterval) {
        self.busy.push(interval);
    }

    /// Busy intervals, in insertion order.
    pub fn busy(&self) -> &[BusyInterval] {
        &self.busy
    }

    /// Whether any busy interval on `day` overlaps `[start, end)`.
    pub fn is_occupied(&self, day: &str, start: f64, end: f64) -> bool {
        self.busy
            .iter()
            .any(|b| b.day == day && b.overlaps(start, end))
    }

    /// Negation of [`is_occupied`](Self::is_occupied).
    pub fn is_free(&self, day: &str, start: f64, end: f64) -> bool {
        !self.is_occupied(day, start, end)
    }
}

/// Free-function form of [`ProfessorSchedule::is_occupied`].
pub fn is_occupied(schedule: &ProfessorSchedule, day: &str, start: f64, end: f64) -> bool {
    schedule.is_occupied(day, start, end)
}
