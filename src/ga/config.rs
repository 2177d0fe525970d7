//! Search configuration.
//!
//! [`SearchConfig`] holds every parameter of one run: GA sizes and rates,
//! the scoring mode, and the shape of the candidate space.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fitness::FitnessMode;
use crate::space::{CandidateSpace, WorkingWindow};

/// Default day labels, Monday to Friday.
pub const DEFAULT_DAYS: [&str; 5] = ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes"];

/// Configuration for one slot search.
///
/// # Defaults
///
/// ```
/// use u_slotfind::ga::SearchConfig;
/// use u_slotfind::fitness::FitnessMode;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 200);
/// assert_eq!(config.fitness_mode, FitnessMode::Counting);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_slotfind::ga::SearchConfig;
/// use u_slotfind::fitness::FitnessMode;
///
/// let config = SearchConfig::default()
///     .with_population_size(80)
///     .with_fitness_mode(FitnessMode::Binary)
///     .with_slot_duration(1.5)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of candidates per generation. Constant for the run.
    pub population_size: usize,

    /// Generation budget.
    pub max_generations: usize,

    /// Per-gene probability of replacing a child's day or time index with a
    /// fresh random one (0.0–1.0).
    pub mutation_rate: f64,

    /// Scoring mode.
    pub fitness_mode: FitnessMode,

    /// Length of the sought slot, in hours.
    pub slot_duration: f64,

    /// Ordered day labels.
    pub days: Vec<String>,

    /// Daily schedulable hours.
    pub window: WorkingWindow,

    /// Step between candidate start times, in hours.
    pub granularity: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed; the one used is reported in the result.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds, checked once per generation.
    pub time_limit_ms: Option<u64>,

    /// Evaluate the population in parallel (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 200,
            mutation_rate: 0.1,
            fitness_mode: FitnessMode::Counting,
            slot_duration: 2.0,
            days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
            window: WorkingWindow::default(),
            granularity: 0.5,
            seed: None,
            time_limit_ms: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation probability. Not clamped; see [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the scoring mode.
    pub fn with_fitness_mode(mut self, mode: FitnessMode) -> Self {
        self.fitness_mode = mode;
        self
    }

    /// Sets the slot length in hours.
    pub fn with_slot_duration(mut self, hours: f64) -> Self {
        self.slot_duration = hours;
        self
    }

    /// Sets the day labels.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the working window.
    pub fn with_window(mut self, start_hour: f64, end_hour: f64) -> Self {
        self.window = WorkingWindow::new(start_hour, end_hour);
        self
    }

    /// Sets the time granularity.
    pub fn with_granularity(mut self, hours: f64) -> Self {
        self.granularity = hours;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the candidate space described by this configuration.
    pub fn candidate_space(&self) -> Result<CandidateSpace, ConfigError> {
        CandidateSpace::new(
            &self.days,
            self.window,
            self.granularity,
            self.slot_duration,
        )
    }

    /// Validates the configuration.
    ///
    /// Checks the GA parameters first, then the candidate space.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::PopulationSize(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::GenerationBudget(self.max_generations));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::TimeLimit);
        }
        self.candidate_space().map(|_| ())
    }
}
