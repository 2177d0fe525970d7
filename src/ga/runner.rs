//! GA evolutionary loop execution.
//!
//! [`SlotSearchRunner`] drives one run from start to finish:
//! initialization → evaluation → elitism → selection → crossover → mutation
//! → repeat, until the best score reaches the mode's maximum or a budget
//! runs out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use super::config::SearchConfig;
use super::operators::{crossover, mutate};
use super::selection::ParentSelection;
use super::types::{FitnessRecord, GenerationSnapshot, Termination};
use crate::error::{ConfigError, Result};
use crate::fitness::{FitnessEvaluator, FitnessMode, Score};
use crate::schedule::{ProfessorSchedule, RandomScheduleConfig, ScheduleGenerator};
use crate::space::{Candidate, CandidateSpace, ResolvedSlot};

/// Result of a slot search.
///
/// Holds the best candidate ever observed, its resolved slot and free
/// professors, and the per-generation statistics of the whole run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Best candidate observed during the run, with its score.
    pub best: FitnessRecord,

    /// `best` resolved to a day and hour range.
    pub best_slot: ResolvedSlot,

    /// Professors free during `best_slot`, in schedule order.
    pub free_professors: Vec<String>,

    /// Number of professors searched over.
    pub total_professors: usize,

    /// Scoring mode of the run.
    pub fitness_mode: FitnessMode,

    /// Highest attainable score for the mode.
    pub max_score: Score,

    /// Best score of each generation.
    pub best_fitness_history: Vec<Score>,

    /// Mean score of each generation.
    pub average_fitness_history: Vec<f64>,

    /// Full per-generation snapshots.
    pub history: Vec<GenerationSnapshot>,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Seed of the run's random generator.
    pub seed: u64,

    /// Candidate space the run searched.
    pub space: CandidateSpace,
}

impl RunResult {
    /// Whether the best score is the maximum attainable, i.e. every
    /// professor is free in `best_slot`.
    pub fn is_solved(&self) -> bool {
        self.best.score >= self.max_score
    }

    /// The common slot, present only when every professor is free.
    pub fn found_slot(&self) -> Option<&ResolvedSlot> {
        self.is_solved().then_some(&self.best_slot)
    }

    /// Number of professors free in `best_slot`.
    pub fn free_count(&self) -> usize {
        self.free_professors.len()
    }
}

/// Executes the slot search.
///
/// # Usage
///
/// ```
/// use u_slotfind::fitness::FitnessMode;
/// use u_slotfind::ga::{SearchConfig, SlotSearchRunner};
/// use u_slotfind::schedule::demo;
///
/// let schedules = demo::four_professors().unwrap();
/// let config = SearchConfig::default()
///     .with_fitness_mode(FitnessMode::Binary)
///     .with_seed(42);
/// let result = SlotSearchRunner::run(&config, &schedules).unwrap();
/// assert!(result.generations <= 200);
/// ```
pub struct SlotSearchRunner;

impl SlotSearchRunner {
    /// Runs the search over the given schedules.
    ///
    /// # Errors
    /// [`SlotError::InvalidConfig`](crate::error::SlotError::InvalidConfig)
    /// if the configuration is invalid, `schedules` is empty, or a busy
    /// interval falls on a day outside the configured day set.
    pub fn run(config: &SearchConfig, schedules: &[ProfessorSchedule]) -> Result<RunResult> {
        Self::run_with_cancel(config, schedules, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// after the current generation is evaluated and returns the best
    /// candidate found so far.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population = config.population_size,
            generations = config.max_generations,
            mode = ?config.fitness_mode,
            professors = schedules.len(),
        )
    )]
    pub fn run_with_cancel(
        config: &SearchConfig,
        schedules: &[ProfessorSchedule],
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult> {
        let space = prepare(config)?;
        check_schedules(&space, schedules)?;
        let (seed, mut rng) = create_rng(config);
        Ok(evolve(config, space, schedules, seed, &mut rng, cancel))
    }

    /// Generates random schedules from the run's own generator, then searches
    /// over them.
    ///
    /// Returns the generated schedules together with the result, so both
    /// can be reported.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population = config.population_size,
            generations = config.max_generations,
            mode = ?config.fitness_mode,
            professors = professors.professor_count,
        )
    )]
    pub fn run_random(
        config: &SearchConfig,
        professors: &RandomScheduleConfig,
    ) -> Result<(Vec<ProfessorSchedule>, RunResult)> {
        let space = prepare(config)?;
        let generator = ScheduleGenerator::new(&space, professors).inspect_err(|e| {
            warn!(error = %e, "rejected schedule generation parameters");
        })?;
        let (seed, mut rng) = create_rng(config);
        let schedules = generator.generate(&mut rng);
        check_schedules(&space, &schedules)?;
        let result = evolve(config, space.clone(), &schedules, seed, &mut rng, None);
        Ok((schedules, result))
    }
}

/// Validates `config` and builds its candidate space.
fn prepare(config: &SearchConfig) -> std::result::Result<CandidateSpace, ConfigError> {
    config.validate().inspect_err(|e| {
        warn!(error = %e, "rejected search configuration");
    })?;
    if config.parallel && !cfg!(feature = "parallel") {
        warn!("parallel evaluation requested without the `parallel` feature; evaluating sequentially");
    }
    config.candidate_space()
}

/// Rejects an empty schedule list and busy days the space does not know.
///
/// Day labels are matched exactly, so `"viernes"` is not `"Viernes"`.
fn check_schedules(
    space: &CandidateSpace,
    schedules: &[ProfessorSchedule],
) -> std::result::Result<(), ConfigError> {
    if schedules.is_empty() {
        warn!("rejected search with no professor schedules");
        return Err(ConfigError::NoProfessors);
    }
    for schedule in schedules {
        if let Some(interval) = schedule
            .busy()
            .iter()
            .find(|b| !space.days().iter().any(|d| d == b.day()))
        {
            warn!(
                professor = %schedule.id,
                day = interval.day(),
                "rejected schedule with a day outside the day set"
            );
            return Err(ConfigError::UnknownDay {
                professor: schedule.id.clone(),
                day: interval.day().to_string(),
            });
        }
    }
    Ok(())
}

/// Seeds a fresh generator for one run.
fn create_rng(config: &SearchConfig) -> (u64, StdRng) {
    let seed = config.seed.unwrap_or_else(rand::random);
    (seed, StdRng::seed_from_u64(seed))
}

/// The generational loop. `config` is already validated, so the population
/// is never empty.
fn evolve<R: Rng>(
    config: &SearchConfig,
    space: CandidateSpace,
    schedules: &[ProfessorSchedule],
    seed: u64,
    rng: &mut R,
    cancel: Option<Arc<AtomicBool>>,
) -> RunResult {
    let evaluator = FitnessEvaluator::new(schedules, &space, config.fitness_mode);
    let max_score = evaluator.max_score();
    let started = Instant::now();
    let time_limit = config.time_limit_ms.map(Duration::from_millis);

    info!(seed, candidates = space.len(), max_score, "starting slot search");

    // 1. Initialize population
    let mut population: Vec<Candidate> = (0..config.population_size)
        .map(|_| space.random_candidate(rng))
        .collect();

    // Only a strictly better record replaces the first individual evaluated.
    let mut best = FitnessRecord::new(population[0], evaluator.evaluate(population[0]));
    let mut history: Vec<GenerationSnapshot> = Vec::new();
    let mut termination = Termination::BudgetExhausted;

    // 2. Evolutionary loop
    for generation in 0..config.max_generations {
        let records = evaluate_population(&evaluator, &population, config.parallel);
        let snapshot = GenerationSnapshot::from_records(generation, records);

        debug!(
            generation,
            best = snapshot.best,
            average = snapshot.average,
            "generation evaluated"
        );

        if let Some(gen_best) = snapshot.best_record() {
            if gen_best.score > best.score {
                best = *gen_best;
            }
        }

        let stop = if best.score >= max_score {
            Some(Termination::Solved)
        } else if generation + 1 >= config.max_generations {
            Some(Termination::BudgetExhausted)
        } else if cancel.as_ref().is_some_and(|f| f.load(Ordering::Relaxed)) {
            Some(Termination::Cancelled)
        } else if time_limit.is_some_and(|limit| started.elapsed() >= limit) {
            Some(Termination::TimeLimit)
        } else {
            None
        };

        if let Some(reason) = stop {
            history.push(snapshot);
            termination = reason;
            break;
        }

        population = breed(
            &snapshot.records,
            best.candidate,
            &space,
            config.mutation_rate,
            config.population_size,
            rng,
        );
        history.push(snapshot);
    }

    let best_slot = space.resolve(best.candidate);
    let free_professors: Vec<String> = evaluator
        .free_professors(best.candidate)
        .into_iter()
        .map(str::to_string)
        .collect();

    info!(
        ?termination,
        generations = history.len(),
        best = best.score,
        max_score,
        day = %best_slot.day,
        start = %best_slot.start_label(),
        "slot search finished"
    );

    RunResult {
        best,
        best_slot,
        free_professors,
        total_professors: schedules.len(),
        fitness_mode: config.fitness_mode,
        max_score,
        best_fitness_history: history.iter().map(|s| s.best).collect(),
        average_fitness_history: history.iter().map(|s| s.average).collect(),
        generations: history.len(),
        history,
        termination,
        seed,
        space,
    }
}

/// Evaluate all individuals in the population, preserving order.
fn evaluate_population(
    evaluator: &FitnessEvaluator<'_>,
    population: &[Candidate],
    parallel: bool,
) -> Vec<FitnessRecord> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return population
                .par_iter()
                .map(|&c| FitnessRecord::new(c, evaluator.evaluate(c)))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population
        .iter()
        .map(|&c| FitnessRecord::new(c, evaluator.evaluate(c)))
        .collect()
}

/// Builds the next population: the elite first, then crossover children
/// until `size` is reached. The second child of the last pair is dropped
/// when only one slot remains.
fn breed<R: Rng>(
    records: &[FitnessRecord],
    elite: Candidate,
    space: &CandidateSpace,
    mutation_rate: f64,
    size: usize,
    rng: &mut R,
) -> Vec<Candidate> {
    let selection = ParentSelection::for_generation(records);

    let mut next = Vec::with_capacity(size);
    next.push(elite);

    while next.len() < size {
        let p1 = records[selection.select(records, rng)].candidate;
        let p2 = records[selection.select(records, rng)].candidate;

        let (mut c1, mut c2) = crossover(p1, p2, rng);
        mutate(&mut c1, space, mutation_rate, rng);
        mutate(&mut c2, space, mutation_rate, rng);

        next.push(c1);
        if next.len() < size {
            next.push(c2);
        }
    }
    next
}

// ============================================================================
// Tests
// ============================================================================
