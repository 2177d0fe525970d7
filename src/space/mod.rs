//! Discretized (day, start-time) search space.
//!
//! The working window of each day is cut into start times spaced by the
//! configured granularity. A [`Candidate`] is a pair of indices into the
//! day list and the start-time list of a [`CandidateSpace`]; it is resolved
//! into concrete hours only when evaluated or reported.
//!
//! # Example
//!
//! ```
//! use u_slotfind::space::{CandidateSpace, WorkingWindow};
//!
//! let days = vec!["Lunes".to_string(), "Martes".to_string()];
//! let space = CandidateSpace::new(&days, WorkingWindow::new(8.0, 18.0), 0.5, 2.0).unwrap();
//! assert_eq!(space.start_times().first(), Some(&8.0));
//! assert_eq!(space.start_times().last(), Some(&16.0));
//! ```

mod candidate_space;
mod clock;

pub use candidate_space::{
    Candidate, CandidateSpace, ResolvedSlot, WorkingWindow, MIN_GRANULARITY,
};
pub use clock::{format_hour, parse_hour};
