//! Genetic operators on (day, time) candidates.
//!
//! A candidate has two genes, so one-point crossover has a single cut
//! between them: each child takes its day from one parent and its start
//! time from the other.
//!
//! # Crossover
//!
//! - [`crossover`]: one-point cut, two children, random child order
//!
//! # Mutation
//!
//! - [`mutate`]: per-gene random reset

use rand::Rng;

use crate::space::{Candidate, CandidateSpace};

/// One-point crossover of two candidates.
///
/// Produces `(p1.day, p2.time)` and `(p2.day, p1.time)`. With probability
/// 0.5 the pair is returned in swapped order, which decides which child is
/// dropped when only one slot is left in the next population.
pub fn crossover<R: Rng>(p1: Candidate, p2: Candidate, rng: &mut R) -> (Candidate, Candidate) {
    let day_from_first = Candidate::new(p1.day, p2.time);
    let day_from_second = Candidate::new(p2.day, p1.time);
    if rng.random_bool(0.5) {
        (day_from_second, day_from_first)
    } else {
        (day_from_first, day_from_second)
    }
}

/// Independently replaces the day and the time index with a fresh random
/// index, each with probability `rate`.
///
/// A replacement may draw the same index again.
pub fn mutate<R: Rng>(candidate: &mut Candidate, space: &CandidateSpace, rate: f64, rng: &mut R) {
    if rng.random_range(0.0..1.0) < rate {
        candidate.day = space.random_day(rng);
    }
    if rng.random_range(0.0..1.0) < rate {
        candidate.time = space.random_time(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::WorkingWindow;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn space() -> CandidateSpace {
        let days: Vec<String> = ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        CandidateSpace::new(&days, WorkingWindow::new(8.0, 18.0), 0.5, 2.0).unwrap()
    }

    #[test]
    fn test_crossover_exchanges_genes() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Candidate::new(1, 10);
        let p2 = Candidate::new(3, 2);

        let mut saw_swapped = false;
        let mut saw_straight = false;
        for _ in 0..200 {
            let (a, b) = crossover(p1, p2, &mut rng);
            let mut pair = [a, b];
            pair.sort_by_key(|c| c.day);
            assert_eq!(pair, [Candidate::new(1, 2), Candidate::new(3, 10)]);
            if a.day == 1 {
                saw_straight = true;
            } else {
                saw_swapped = true;
            }
        }
        assert!(saw_straight && saw_swapped, "both child orders should occur");
    }

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Candidate::new(2, 7);
        assert_eq!(crossover(p, p, &mut rng), (p, p));
    }

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let space = space();
        let mut rng = StdRng::seed_from_u64(42);
        let mut c = Candidate::new(2, 5);
        for _ in 0..100 {
            mutate(&mut c, &space, 0.0, &mut rng);
        }
        assert_eq!(c, Candidate::new(2, 5));
    }

    #[test]
    fn test_mutate_rate_one_stays_in_range_and_moves() {
        let space = space();
        let mut rng = StdRng::seed_from_u64(42);
        let start = Candidate::new(2, 5);
        let mut moved = false;
        for _ in 0..100 {
            let mut c = start;
            mutate(&mut c, &space, 1.0, &mut rng);
            assert!(space.contains(c));
            moved |= c != start;
        }
        assert!(moved);
    }
}
