//! Random weekly schedules.
//!
//! Each professor gets between `min_blocks` and `max_blocks` busy blocks.
//! A block lands on a random day, starts on a granularity-aligned hour inside
//! the working window and lasts one of `block_durations` hours, clipped at
//! the window end. Blocks clipped below one granularity unit are dropped.

use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::{BusyInterval, ProfessorSchedule};
use crate::error::ConfigError;
use crate::space::CandidateSpace;

const EPSILON: f64 = 1e-9;

/// Parameters for generating random professor schedules.
///
/// # Defaults
///
/// ```
/// use u_slotfind::schedule::RandomScheduleConfig;
///
/// let config = RandomScheduleConfig::default();
/// assert_eq!(config.professor_count, 4);
/// assert_eq!((config.min_blocks, config.max_blocks), (10, 15));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomScheduleConfig {
    /// Number of professors to generate.
    pub professor_count: usize,
    /// Fewest busy blocks per professor (inclusive).
    pub min_blocks: usize,
    /// Most busy blocks per professor (inclusive).
    pub max_blocks: usize,
    /// Allowed block lengths, in hours.
    pub block_durations: Vec<f64>,
}

impl Default for RandomScheduleConfig {
    fn default() -> Self {
        Self {
            professor_count: 4,
            min_blocks: 10,
            max_blocks: 15,
            block_durations: vec![1.0, 1.5, 2.0],
        }
    }
}

impl RandomScheduleConfig {
    /// Sets the number of professors.
    pub fn with_professor_count(mut self, n: usize) -> Self {
        self.professor_count = n;
        self
    }

    /// Sets the inclusive range of blocks per professor.
    pub fn with_block_range(mut self, min: usize, max: usize) -> Self {
        self.min_blocks = min;
        self.max_blocks = max;
        self
    }

    /// Sets the menu of block lengths.
    pub fn with_block_durations(mut self, durations: Vec<f64>) -> Self {
        self.block_durations = durations;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.professor_count == 0 {
            return Err(ConfigError::NoProfessors);
        }
        if self.min_blocks > self.max_blocks {
            return Err(ConfigError::BlockCountRange {
                min: self.min_blocks,
                max: self.max_blocks,
            });
        }
        if self.block_durations.is_empty()
            || self
                .block_durations
                .iter()
                .any(|d| !(d.is_finite() && *d > 0.0))
        {
            return Err(ConfigError::DurationMenu);
        }
        Ok(())
    }
}

/// Generates random schedules over the days and window of a [`CandidateSpace`].
pub struct ScheduleGenerator<'a> {
    space: &'a CandidateSpace,
    config: &'a RandomScheduleConfig,
}

impl<'a> ScheduleGenerator<'a> {
    /// Creates a generator, validating `config`.
    pub fn new(
        space: &'a CandidateSpace,
        config: &'a RandomScheduleConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { space, config })
    }

    /// Generates `professor_count` schedules named `Profesor 1`, `Profesor 2`, ...
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProfessorSchedule> {
        (1..=self.config.professor_count)
            .map(|i| self.generate_one(format!("Profesor {i}"), rng))
            .collect()
    }

    /// Generates a single schedule.
    pub fn generate_one<R: Rng>(&self, id: String, rng: &mut R) -> ProfessorSchedule {
        let window = self.space.window();
        let granularity = self.space.granularity();
        // aligned starts strictly before the window end
        let positions = ((window.length() / granularity) - EPSILON).ceil() as usize;

        let count = rng.random_range(self.config.min_blocks..=self.config.max_blocks);
        let mut schedule = ProfessorSchedule::new(id);
        let mut dropped = 0usize;

        for _ in 0..count {
            let day = &self.space.days()[self.space.random_day(rng)];
            let start =
                window.start_hour + rng.random_range(0..positions.max(1)) as f64 * granularity;
            let length = self
                .config
                .block_durations
                .choose(rng)
                .copied()
                .unwrap_or(granularity);
            let end = (start + length).min(window.end_hour);

            if end - start < granularity - EPSILON {
                dropped += 1;
                continue;
            }
            match BusyInterval::new(day.as_str(), start, end) {
                Ok(interval) => schedule.push(interval),
                Err(_) => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(
                professor = %schedule.id,
                dropped,
                "dropped busy blocks shorter than one granularity unit"
            );
        }
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::WorkingWindow;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn space(window: WorkingWindow) -> CandidateSpace {
        let days: Vec<String> = ["Lunes", "Martes", "Miércoles"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        CandidateSpace::new(&days, window, 0.5, 1.0).unwrap()
    }

    #[test]
    fn test_generate_respects_bounds() {
        let space = space(WorkingWindow::new(8.0, 18.0));
        let config = RandomScheduleConfig::default().with_professor_count(6);
        let generator = ScheduleGenerator::new(&space, &config).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let schedules = generator.generate(&mut rng);
        assert_eq!(schedules.len(), 6);
        assert_eq!(schedules[0].id, "Profesor 1");
        assert_eq!(schedules[5].id, "Profesor 6");

        for s in &schedules {
            // window length is a multiple of granularity, nothing is dropped
            assert!((10..=15).contains(&s.busy().len()), "{}", s.busy().len());
            for b in s.busy() {
                assert!(space.days().iter().any(|d| d == b.day()));
                assert!(b.start() >= 8.0 && b.end() <= 18.0);
                assert!(b.duration() >= 0.5);
                let k = (b.start() - 8.0) / 0.5;
                assert!((k - k.round()).abs() < 1e-9, "start not aligned: {}", b.start());
            }
        }
    }

    #[test]
    fn test_blocks_clipped_at_window_end() {
        let space = space(WorkingWindow::new(8.0, 10.0));
        let config = RandomScheduleConfig::default()
            .with_professor_count(20)
            .with_block_durations(vec![3.0]);
        let generator = ScheduleGenerator::new(&space, &config).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for s in generator.generate(&mut rng) {
            for b in s.busy() {
                assert!(b.end() <= 10.0);
            }
        }
    }

    #[test]
    fn test_degenerate_blocks_dropped() {
        // 8.0..10.25 with granularity 0.5: a block starting at 10.0 is 0.25h long
        let days = vec!["Lunes".to_string()];
        let space = CandidateSpace::new(&days, WorkingWindow::new(8.0, 10.25), 0.5, 0.5).unwrap();
        let config = RandomScheduleConfig::default().with_professor_count(30);
        let generator = ScheduleGenerator::new(&space, &config).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let schedules = generator.generate(&mut rng);
        let blocks: Vec<&BusyInterval> = schedules.iter().flat_map(|s| s.busy()).collect();
        assert!(blocks.iter().all(|b| b.duration() >= 0.5));
        // one start in five is 10.0, and every such block is dropped
        assert!(blocks.iter().all(|b| b.start() < 10.0 - 1e-9));
        assert!(
            schedules.iter().any(|s| s.busy().len() < config.min_blocks),
            "no professor lost a block"
        );
        // a 9.5 start is clipped to 0.75h and kept
        assert!(blocks
            .iter()
            .any(|b| b.start() == 9.5 && (b.end() - 10.25).abs() < 1e-9));
    }

    #[test]
    fn test_same_seed_same_schedules() {
        let space = space(WorkingWindow::new(8.0, 18.0));
        let config = RandomScheduleConfig::default();
        let generator = ScheduleGenerator::new(&space, &config).unwrap();

        let a = generator.generate(&mut StdRng::seed_from_u64(99));
        let b = generator.generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_validate() {
        assert!(RandomScheduleConfig::default().validate().is_ok());
        assert_eq!(
            RandomScheduleConfig::default()
                .with_professor_count(0)
                .validate(),
            Err(ConfigError::NoProfessors)
        );
        assert!(matches!(
            RandomScheduleConfig::default()
                .with_block_range(5, 2)
                .validate(),
            Err(ConfigError::BlockCountRange { .. })
        ));
        assert_eq!(
            RandomScheduleConfig::default()
                .with_block_durations(vec![])
                .validate(),
            Err(ConfigError::DurationMenu)
        );
        assert_eq!(
            RandomScheduleConfig::default()
                .with_block_durations(vec![1.0, -1.0])
                .validate(),
            Err(ConfigError::DurationMenu)
        );
    }
}
