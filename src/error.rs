//! Error types.
//!
//! Configuration problems are reported as [`ConfigError`] and always surface
//! through [`SlotError::InvalidConfig`], before any generation runs.

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, SlotError>;

/// A rejected configuration parameter.
///
/// Values are never clamped into range; the offending value is echoed back.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("PopulationSize: population_size must be at least 1, got {0}")]
    PopulationSize(usize),
    #[error("GenerationBudget: max_generations must be at least 1, got {0}")]
    GenerationBudget(usize),
    #[error("MutationRate: mutation_rate must be within [0, 1], got {0}")]
    MutationRate(f64),
    #[error(
        "WorkingWindow: hours must satisfy 0 <= start_hour < end_hour <= 24. start={start}, end={end}"
    )]
    WorkingWindow { start: f64, end: f64 },
    #[error("Granularity: granularity must be at least one minute (1/60 h), got {0}")]
    Granularity(f64),
    #[error("SlotDuration: slot_duration must be in (0, {window}], got {duration}")]
    SlotDuration { duration: f64, window: f64 },
    #[error(
        "MisalignedSlotDuration: slot_duration must be a multiple of granularity. duration={duration}, granularity={granularity}"
    )]
    MisalignedSlotDuration { duration: f64, granularity: f64 },
    #[error("EmptyDaySet: at least one day is required")]
    EmptyDaySet,
    #[error("DuplicateDay: day {0:?} is listed more than once")]
    DuplicateDay(String),
    #[error("EmptyCandidateSpace: no start time fits a slot of {duration}h")]
    EmptyCandidateSpace { duration: f64 },
    #[error("NoProfessors: at least one professor schedule is required")]
    NoProfessors,
    #[error("UnknownDay: busy day {day:?} of {professor:?} is not in the day set")]
    UnknownDay { professor: String, day: String },
    #[error("TimeLimit: time_limit_ms must be positive or None")]
    TimeLimit,
    #[error("BlockCountRange: min_blocks must not exceed max_blocks. min={min}, max={max}")]
    BlockCountRange { min: usize, max: usize },
    #[error("DurationMenu: block durations must be non-empty and positive")]
    DurationMenu,
}

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SlotError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("InvalidInterval: start must be before end. day={day}, start={start}, end={end}")]
    InvalidInterval { day: String, start: f64, end: f64 },
}

impl SlotError {
    pub(crate) fn invalid_interval(day: &str, start: f64, end: f64) -> Self {
        Self::InvalidInterval {
            day: day.to_string(),
            start,
            end,
        }
    }

    /// Whether this error is a configuration rejection.
    pub fn is_config(&self) -> bool {
        matches!(self, SlotError::InvalidConfig(_))
    }
}
