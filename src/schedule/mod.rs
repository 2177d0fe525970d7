//! Professor schedules.
//!
//! A [`ProfessorSchedule`] is a set of [`BusyInterval`]s, each a day label and
//! a half-open hour range. The only query the search needs is
//! [`ProfessorSchedule::is_occupied`], using the standard overlap test
//! `max(start, busy.start) < min(end, busy.end)`: ranges that merely touch
//! are not occupied.
//!
//! Schedules are either supplied by the caller, taken from [`demo`], or drawn
//! at random with [`ScheduleGenerator`].

pub mod demo;
mod generator;
mod types;

pub use generator::{RandomScheduleConfig, ScheduleGenerator};
pub use types::{is_occupied, BusyInterval, ProfessorSchedule};
