//! Phase 1: greedy nearest-successor sweep.
//!
//! # Algorithm
//!
//! For each position `i`, scan every later position `j`. Whenever the city
//! at `j` is strictly closer to `tour[i]` than the best successor seen so far
//! (initially the current successor), swap it into position `i + 1`.
//!
//! Only the raw point distance is compared; the change in total cycle
//! length is never checked. A swap that shortens one edge can lengthen the
//! cycle elsewhere, so this phase is a heuristic, not a strict improvement.
//!
//! # Complexity
//!
//! O(n²) comparisons; each accepted swap also recomputes the O(n) total.

use log::debug;

use super::SwapBudget;
use crate::distance::distance;
use crate::error::Result;
use crate::models::Tour;

/// Runs the nearest-successor sweep in place.
///
/// Spends one budget unit per accepted swap and returns the number of
/// swaps. The sweep always runs to completion; an exhausted budget only
/// means the following phase has nothing left to spend.
///
/// # Examples
///
/// ```
/// use swap_tour::models::{CityRecord, Tour};
/// use swap_tour::local_search::{nearest_successor_sweep, SwapBudget};
///
/// let mut tour = Tour::new(vec![
///     CityRecord::new("R", "P0", 0.0, 0.0),
///     CityRecord::new("R", "P2", 2.0, 0.0),
///     CityRecord::new("R", "P1", 1.0, 0.0),
///     CityRecord::new("R", "P3", 3.0, 0.0),
/// ])
/// .unwrap();
/// let mut budget = SwapBudget::new(100);
///
/// let swaps = nearest_successor_sweep(&mut tour, &mut budget).unwrap();
/// assert_eq!(swaps, 1);
/// assert_eq!(tour.names(), vec!["P0", "P1", "P2", "P3"]);
/// assert_eq!(budget.remaining(), 99);
/// ```
pub fn nearest_successor_sweep(tour: &mut Tour, budget: &mut SwapBudget) -> Result<usize> {
    let n = tour.len();
    let mut swaps = 0;

    for i in 0..n {
        let mut distance_min = distance(&tour[i], &tour[(i + 1) % n])?;
        for j in (i + 1)..n {
            let d = distance(&tour[i], &tour[j])?;
            if d < distance_min {
                distance_min = d;
                tour.swap_positions(i + 1, j)?;
                budget.spend(1);
                swaps += 1;
            }
        }
    }

    debug!(
        "nearest-successor sweep: {swaps} swaps, budget remaining {}",
        budget.remaining()
    );
    Ok(swaps)
}
