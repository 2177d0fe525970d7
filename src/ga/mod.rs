//! Genetic-algorithm slot search.
//!
//! One configurable engine covers every variant of the search: the scoring
//! mode, professor count and slot length are values of [`SearchConfig`], not
//! separate code paths.
//!
//! # Lifecycle
//!
//! 1. **Init**: sample `population_size` uniform random candidates.
//! 2. **Evolve**, once per generation:
//!    evaluate every candidate, record a [`GenerationSnapshot`], update the
//!    best-ever candidate, then stop if the best score is the mode's maximum
//!    or a budget is spent. Otherwise build the next population from the
//!    best-ever candidate (elitism) plus children of roulette-selected
//!    parents ([`ParentSelection`]), crossed over and mutated
//!    ([`operators`]).
//! 3. **Terminate**: return a [`RunResult`].
//!
//! Each run owns its random generator, seeded from [`SearchConfig::seed`].
//!
//! # Key Types
//!
//! - [`SearchConfig`]: run parameters with builder and validation
//! - [`SlotSearchRunner`]: executes the loop
//! - [`RunResult`]: best slot and fitness history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{SearchConfig, DEFAULT_DAYS};
pub use runner::{RunResult, SlotSearchRunner};
pub use selection::ParentSelection;
pub use types::{FitnessRecord, GenerationSnapshot, Termination};
