//! Budgeted swap-based local search for a single tour.
//!
//! - [`nearest_successor_sweep`] — Phase 1, greedy nearest-successor swaps
//! - [`improve_or_revert`] — Phase 2, random pair/adjacent swaps kept only
//!   when they do not lengthen the tour
//! - [`find_best_cycle`] — Runs both phases under one [`SwapBudget`]

mod budget;
mod config;
mod improve;
mod runner;
mod sweep;

pub use budget::SwapBudget;
pub use config::{SearchConfig, DEFAULT_SEED, DEFAULT_SWAP_BUDGET};
pub use improve::{improve_or_revert, SearchState};
pub use runner::{find_best_cycle, LocalSearchRunner, SearchResult};
pub use sweep::nearest_successor_sweep;
