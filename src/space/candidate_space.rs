use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::clock::{format_hour, parse_hour};
use crate::error::ConfigError;

/// Tolerance for comparing fractional hours built from repeated steps.
const HOUR_EPSILON: f64 = 1e-9;

/// Half a minute, in hours. Labels are minute-resolution.
const LABEL_TOLERANCE: f64 = 1.0 / 120.0;

/// Smallest accepted granularity: one minute, so every start time has its
/// own `HH:MM` label.
pub const MIN_GRANULARITY: f64 = 1.0 / 60.0;

/// Hours in a day; the working window must lie in `[0, HOURS_PER_DAY]`.
const HOURS_PER_DAY: f64 = 24.0;

/// Daily span of hours eligible for scheduling, `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkingWindow {
    /// First schedulable hour (inclusive).
    pub start_hour: f64,
    /// Last schedulable hour (exclusive).
    pub end_hour: f64,
}

impl WorkingWindow {
    /// Creates a working window.
    pub fn new(start_hour: f64, end_hour: f64) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Length of the window in hours.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end_hour - self.start_hour
    }

    /// Checks that the window is a non-empty span of one day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.start_hour >= 0.0
            && self.end_hour <= HOURS_PER_DAY
            && self.start_hour < self.end_hour;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::WorkingWindow {
                start: self.start_hour,
                end: self.end_hour,
            })
        }
    }
}

impl Default for WorkingWindow {
    fn default() -> Self {
        Self::new(8.0, 18.0)
    }
}

/// A point in the discretized search space.
///
/// Both fields are indices, not hours: `day` indexes
/// [`CandidateSpace::days`] and `time` indexes [`CandidateSpace::start_times`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Index into the day list.
    pub day: usize,
    /// Index into the start-time list.
    pub time: usize,
}

impl Candidate {
    /// Creates a candidate from raw indices.
    pub fn new(day: usize, time: usize) -> Self {
        Self { day, time }
    }
}

/// A candidate resolved to a concrete day and hour range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSlot {
    /// Day label.
    pub day: String,
    /// Start hour (inclusive).
    pub start: f64,
    /// End hour (exclusive).
    pub end: f64,
}

impl ResolvedSlot {
    /// Start time as `HH:MM`.
    pub fn start_label(&self) -> String {
        format_hour(self.start)
    }

    /// End time as `HH:MM`.
    pub fn end_label(&self) -> String {
        format_hour(self.end)
    }
}

/// The ordered day list and start-time list that together address candidates.
///
/// Start times are every `start_hour + k * granularity` such that a slot of
/// `slot_duration` still ends inside the working window. Fixed for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSpace {
    days: Vec<String>,
    start_times: Vec<f64>,
    window: WorkingWindow,
    granularity: f64,
    slot_duration: f64,
}

impl CandidateSpace {
    /// Builds the candidate space.
    ///
    /// # Errors
    ///
    /// Rejects an empty or duplicated day list, a window outside `0..=24`,
    /// a granularity below [`MIN_GRANULARITY`], a slot duration that is not
    /// positive, exceeds the window or is not a multiple of the granularity,
    /// and any combination that leaves no start time.
    pub fn new(
        days: &[String],
        window: WorkingWindow,
        granularity: f64,
        slot_duration: f64,
    ) -> Result<Self, ConfigError> {
        if days.is_empty() {
            return Err(ConfigError::EmptyDaySet);
        }
        let mut seen = HashSet::new();
        for day in days {
            if !seen.insert(day.as_str()) {
                return Err(ConfigError::DuplicateDay(day.clone()));
            }
        }
        window.validate()?;
        if !(granularity.is_finite() && granularity >= MIN_GRANULARITY - HOUR_EPSILON) {
            return Err(ConfigError::Granularity(granularity));
        }
        if !(slot_duration.is_finite() && slot_duration > 0.0)
            || slot_duration > window.length() + HOUR_EPSILON
        {
            return Err(ConfigError::SlotDuration {
                duration: slot_duration,
                window: window.length(),
            });
        }
        let steps = slot_duration / granularity;
        if (steps - steps.round()).abs() > 1e-6 {
            return Err(ConfigError::MisalignedSlotDuration {
                duration: slot_duration,
                granularity,
            });
        }

        let start_times = enumerate_start_times(window, granularity, slot_duration);
        if start_times.is_empty() {
            return Err(ConfigError::EmptyCandidateSpace {
                duration: slot_duration,
            });
        }

        Ok(Self {
            days: days.to_vec(),
            start_times,
            window,
            granularity,
            slot_duration,
        })
    }

    /// Ordered day labels.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Ordered valid start hours.
    pub fn start_times(&self) -> &[f64] {
        &self.start_times
    }

    /// The working window the space was built from.
    pub fn window(&self) -> WorkingWindow {
        self.window
    }

    /// Time step between consecutive start times.
    pub fn granularity(&self) -> f64 {
        self.granularity
    }

    /// Length of every candidate slot, in hours.
    pub fn slot_duration(&self) -> f64 {
        self.slot_duration
    }

    /// Number of days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of start times per day.
    pub fn slot_count(&self) -> usize {
        self.start_times.len()
    }

    /// Total number of distinct candidates.
    pub fn len(&self) -> usize {
        self.day_count() * self.slot_count()
    }

    /// Always `false`: construction rejects empty spaces.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both indices of `candidate` are in range.
    pub fn contains(&self, candidate: Candidate) -> bool {
        candidate.day < self.day_count() && candidate.time < self.slot_count()
    }

    /// Samples a uniformly random day index.
    pub fn random_day<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.day_count())
    }

    /// Samples a uniformly random start-time index.
    pub fn random_time<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.slot_count())
    }

    /// Samples a uniformly random candidate.
    pub fn random_candidate<R: Rng>(&self, rng: &mut R) -> Candidate {
        Candidate::new(self.random_day(rng), self.random_time(rng))
    }

    /// Day label and hour range of `candidate`, without allocating.
    ///
    /// # Panics
    /// Panics if `candidate` is outside this space.
    pub fn bounds(&self, candidate: Candidate) -> (&str, f64, f64) {
        let start = self.start_times[candidate.time];
        (
            self.days[candidate.day].as_str(),
            start,
            start + self.slot_duration,
        )
    }

    /// Resolves `candidate` into a concrete slot.
    ///
    /// # Panics
    /// Panics if `candidate` is outside this space.
    pub fn resolve(&self, candidate: Candidate) -> ResolvedSlot {
        let (day, start, end) = self.bounds(candidate);
        ResolvedSlot {
            day: day.to_string(),
            start,
            end,
        }
    }

    /// Start times formatted as `HH:MM`, in order.
    pub fn start_labels(&self) -> Vec<String> {
        self.start_times.iter().map(|&t| format_hour(t)).collect()
    }

    /// Finds the candidate for a day label and an `HH:MM` start label.
    ///
    /// Inverse of [`resolve`](Self::resolve) followed by
    /// [`ResolvedSlot::start_label`]. Picks the start time nearest to the
    /// label, provided it rounds to that label.
    pub fn locate(&self, day: &str, start_label: &str) -> Option<Candidate> {
        let day_idx = self.days.iter().position(|d| d == day)?;
        let hour = parse_hour(start_label)?;
        let (time_idx, distance) = self
            .start_times
            .iter()
            .map(|&t| (t - hour).abs())
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))?;
        (distance <= LABEL_TOLERANCE).then(|| Candidate::new(day_idx, time_idx))
    }
}

/// All `start + k * granularity` with `t + duration <= end`.
///
/// The count is computed up front, so it is bounded by the window length
/// over the granularity.
fn enumerate_start_times(window: WorkingWindow, granularity: f64, duration: f64) -> Vec<f64> {
    let room = window.length() - duration + HOUR_EPSILON;
    if room < 0.0 {
        return Vec::new();
    }
    let count = (room / granularity).floor() as usize + 1;
    (0..count)
        .map(|k| window.start_hour + k as f64 * granularity)
        .filter(|&t| t + duration <= window.end_hour + HOUR_EPSILON)
        .collect()
}
