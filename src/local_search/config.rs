//! Local search configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// Swap budget used when none is configured.
pub const DEFAULT_SWAP_BUDGET: usize = 10_000;

/// Random seed used when none is configured.
pub const DEFAULT_SEED: u64 = 0;

/// Configuration for [`find_best_cycle`](super::find_best_cycle).
///
/// # Examples
///
/// ```
/// use swap_tour::local_search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_swap_budget(2_000)
///     .with_seed(7);
/// assert_eq!(config.swap_budget, 2_000);
/// assert_eq!(config.random_seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Total number of swap attempts across both phases.
    pub swap_budget: usize,

    /// Seed for the phase-two random draws. `None` seeds from entropy.
    pub random_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            swap_budget: DEFAULT_SWAP_BUDGET,
            random_seed: Some(DEFAULT_SEED),
        }
    }
}

impl SearchConfig {
    pub fn with_swap_budget(mut self, budget: usize) -> Self {
        self.swap_budget = budget;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Draws a fresh seed on every run; results are no longer reproducible.
    pub fn without_seed(mut self) -> Self {
        self.random_seed = None;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.swap_budget == 0 {
            return Err(TourError::invalid_input("swap_budget must be > 0"));
        }
        Ok(())
    }
}
