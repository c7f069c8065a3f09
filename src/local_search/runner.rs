//! Two-phase local search execution.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{improve_or_revert, nearest_successor_sweep, SearchConfig, SwapBudget};
use crate::error::{Result, TourError};
use crate::models::Tour;

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The selected tour, a permutation of the input.
    pub tour: Tour,

    /// Total cyclic distance of `tour`.
    pub total_distance: f64,

    /// Total cyclic distance of the input tour.
    ///
    /// `total_distance` can exceed this: the sweep may lengthen the cycle
    /// and the final selection only compares the last few states.
    pub initial_distance: f64,

    /// Swaps accepted by the nearest-successor sweep.
    pub sweep_swaps: usize,

    /// Iterations of the improve-or-revert phase.
    pub random_iterations: usize,

    /// Budget units left on return. Always zero.
    pub budget_remaining: usize,

    /// Budget units requested across both phases.
    pub budget_spent: usize,
}

/// Executes the nearest-successor sweep followed by improve-or-revert.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Optimizes a copy of `tour`; the input is left untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the configuration is invalid or the tour has
    ///   fewer than three cities.
    /// - `MalformedRecord` if any city has a non-finite coordinate.
    pub fn run(tour: &Tour, config: &SearchConfig) -> Result<SearchResult> {
        config.validate()?;
        if tour.len() < 3 {
            return Err(TourError::invalid_input(format!(
                "tour needs at least 3 cities, got {}",
                tour.len()
            )));
        }
        let initial_distance = tour.total_distance()?;

        let mut rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let mut budget = SwapBudget::new(config.swap_budget);

        info!(
            "local search: n={} budget={} seed={:?} initial={:.4}",
            tour.len(),
            config.swap_budget,
            config.random_seed,
            initial_distance
        );

        let mut working = tour.clone();
        let sweep_swaps = nearest_successor_sweep(&mut working, &mut budget)?;
        let (best, random_iterations) = improve_or_revert(working, &mut budget, &mut rng)?;

        info!(
            "local search done: total={:.4} sweep_swaps={} iterations={}",
            best.total, sweep_swaps, random_iterations
        );

        Ok(SearchResult {
            tour: best.tour,
            total_distance: best.total,
            initial_distance,
            sweep_swaps,
            random_iterations,
            budget_remaining: budget.remaining(),
            budget_spent: budget.spent(),
        })
    }
}

/// Searches for a short cycle through all cities of `tour`.
///
/// Shorthand for [`LocalSearchRunner::run`].
///
/// The result is a heuristic. It is usually shorter than the input but is
/// not guaranteed to be: the nearest-successor sweep accepts swaps without
/// checking the cycle length, and only the three most recent phase-two
/// states compete at the end. Compare `total_distance` with
/// `initial_distance` if the input must never be made worse.
///
/// # Examples
///
/// ```
/// use swap_tour::models::{CityRecord, Tour};
/// use swap_tour::local_search::{find_best_cycle, SearchConfig};
///
/// let tour = Tour::new(vec![
///     CityRecord::new("A", "X", 0.0, 0.0),
///     CityRecord::new("B", "Y", 0.0, 3.0),
///     CityRecord::new("C", "Z", 4.0, 0.0),
/// ])
/// .unwrap();
///
/// let result = find_best_cycle(&tour, &SearchConfig::default()).unwrap();
/// assert!((result.total_distance - 12.0).abs() < 1e-10);
/// assert!(result.tour.is_permutation_of(&tour));
/// assert_eq!(result.budget_remaining, 0);
/// ```
pub fn find_best_cycle(tour: &Tour, config: &SearchConfig) -> Result<SearchResult> {
    LocalSearchRunner::run(tour, config)
}
