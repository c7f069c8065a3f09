//! Phase 2: randomized improve-or-revert.
//!
//! # Algorithm
//!
//! Each iteration draws three distinct positions `a`, `b`, `c`:
//!
//! 1. Swap `a` and `b`. If the new total exceeds the settled total, swap
//!    back and settle on the restored tour.
//! 2. Swap `c` with its successor. If the new total exceeds the smaller of
//!    the settled total and the step-1 total, swap back and settle.
//!
//! Every step spends one budget unit, so an iteration costs two. When the
//! budget runs out, the most recent settled, after-pair, and after-adjacent
//! states are compared and the shortest one is returned (ties prefer
//! settled, then after-adjacent, then after-pair).
//!
//! Only those three recent states compete. A shorter tour visited in an
//! earlier iteration is not remembered, so the result is not a best-ever
//! tracker.

use log::{debug, trace};
use rand::seq::index;
use rand::Rng;

use super::SwapBudget;
use crate::error::{Result, TourError};
use crate::models::Tour;

/// A tour together with its total cyclic distance.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// The tour ordering.
    pub tour: Tour,
    /// Total cyclic distance of `tour`.
    pub total: f64,
}

impl SearchState {
    pub fn new(tour: Tour, total: f64) -> Self {
        Self { tour, total }
    }
}

/// Running state of phase 2.
///
/// `working` is mutated in place by the swaps; the three snapshots record
/// the states behind the most recent settled, after-pair, and
/// after-adjacent totals.
#[derive(Debug, Clone)]
struct PhaseTwoState {
    working: Tour,
    settled: SearchState,
    after_pair: Option<SearchState>,
    after_adjacent: Option<SearchState>,
}

impl PhaseTwoState {
    fn new(tour: Tour, total: f64) -> Self {
        Self {
            working: tour.clone(),
            settled: SearchState::new(tour, total),
            after_pair: None,
            after_adjacent: None,
        }
    }

    fn snapshot(&self, total: f64) -> SearchState {
        SearchState::new(self.working.clone(), total)
    }

    /// Smallest of the settled and after-pair totals.
    fn acceptance_bound(&self) -> f64 {
        match &self.after_pair {
            Some(pair) => self.settled.total.min(pair.total),
            None => self.settled.total,
        }
    }

    fn pair_step(mut self, a: usize, b: usize) -> Result<Self> {
        let t_pair = self.working.swap_positions(a, b)?;
        self.after_pair = Some(self.snapshot(t_pair));
        if t_pair > self.settled.total {
            let t = self.working.swap_positions(b, a)?;
            self.settled = self.snapshot(t);
        }
        Ok(self)
    }

    fn adjacent_step(mut self, c: usize) -> Result<Self> {
        let t_adjacent = self.working.swap_adjacent(c)?;
        self.after_adjacent = Some(self.snapshot(t_adjacent));
        if t_adjacent > self.acceptance_bound() {
            let t = self.working.swap_adjacent(c)?;
            self.settled = self.snapshot(t);
        }
        Ok(self)
    }

    fn select(self) -> SearchState {
        let mut best = self.settled;
        for candidate in [self.after_adjacent, self.after_pair].into_iter().flatten() {
            if candidate.total < best.total {
                best = candidate;
            }
        }
        best
    }
}

/// Runs phase 2 on `tour` until `budget` is exhausted.
///
/// Returns the selected state and the number of iterations performed. An
/// already exhausted budget returns `tour` unchanged after zero iterations.
///
/// Returns `InvalidInput` if the tour has fewer than three cities, since
/// each iteration draws three distinct positions.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use swap_tour::models::{CityRecord, Tour};
/// use swap_tour::local_search::{improve_or_revert, SwapBudget};
///
/// let tour = Tour::new(vec![
///     CityRecord::new("R", "A", 0.0, 0.0),
///     CityRecord::new("R", "B", 1.0, 0.0),
///     CityRecord::new("R", "C", 1.0, 1.0),
///     CityRecord::new("R", "D", 0.0, 1.0),
/// ])
/// .unwrap();
/// let mut budget = SwapBudget::new(20);
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let (state, iterations) = improve_or_revert(tour.clone(), &mut budget, &mut rng).unwrap();
/// assert_eq!(iterations, 10);
/// assert!(budget.is_exhausted());
/// assert!((state.total - 4.0).abs() < 1e-10);
/// assert!(state.tour.is_permutation_of(&tour));
/// ```
pub fn improve_or_revert<R: Rng + ?Sized>(
    tour: Tour,
    budget: &mut SwapBudget,
    rng: &mut R,
) -> Result<(SearchState, usize)> {
    let n = tour.len();
    if n < 3 {
        return Err(TourError::invalid_input(format!(
            "random improvement needs at least 3 cities, got {n}"
        )));
    }

    let total = tour.total_distance()?;
    let mut state = PhaseTwoState::new(tour, total);
    let mut iterations = 0;

    while !budget.is_exhausted() {
        let picks = index::sample(rng, n, 3);
        let (a, b, c) = (picks.index(0), picks.index(1), picks.index(2));

        state = state.pair_step(a, b)?;
        budget.spend(1);
        state = state.adjacent_step(c)?;
        budget.spend(1);
        iterations += 1;

        trace!(
            "iteration {iterations}: swap({a}, {b}) adjacent({c}) settled={:.4}",
            state.settled.total
        );
    }

    let best = state.select();
    debug!(
        "improve-or-revert: {iterations} iterations, selected total {:.4}",
        best.total
    );
    Ok((best, iterations))
}
