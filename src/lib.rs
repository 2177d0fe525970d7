//! Genetic-algorithm search for a common free time slot.
//!
//! Given a set of professors' weekly busy intervals, finds a (day, start
//! time) at which a slot of fixed length is free for everyone, or for as
//! many professors as possible.
//!
//! - **Schedule model** ([`schedule`]): busy intervals and the half-open
//!   overlap query, plus random and fixed schedule sources.
//! - **Candidate space** ([`space`]): the discretized (day, start-time)
//!   address space.
//! - **Fitness** ([`fitness`]): counting or all-or-nothing scoring.
//! - **GA engine** ([`ga`]): population lifecycle, elitism, roulette
//!   selection, crossover, mutation, termination.
//! - **Report** ([`report`]): display-ready, serializable view of a run.
//!
//! # Example
//!
//! ```
//! use u_slotfind::fitness::FitnessMode;
//! use u_slotfind::ga::{SearchConfig, SlotSearchRunner};
//! use u_slotfind::report::{Outcome, SlotReport};
//! use u_slotfind::schedule::demo;
//!
//! let schedules = demo::four_professors().unwrap();
//! let config = SearchConfig::default()
//!     .with_fitness_mode(FitnessMode::Binary)
//!     .with_population_size(50)
//!     .with_max_generations(200)
//!     .with_seed(1);
//!
//! let result = SlotSearchRunner::run(&config, &schedules).unwrap();
//! let report = SlotReport::from_result(&result);
//! if report.outcome == Outcome::CommonSlot {
//!     println!("{}", report.summary());
//! }
//! ```
//!
//! Web handlers, plotting and persistence consume [`report::SlotReport`]
//! and are not part of this crate.

pub mod error;
pub mod fitness;
pub mod ga;
pub mod report;
pub mod schedule;
pub mod space;

pub use error::{ConfigError, Result, SlotError};
