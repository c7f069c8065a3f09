//! Swap budget shared by both search phases.

/// Countdown of permitted swap attempts for one optimization run.
///
/// Spending saturates at zero; [`spent`](Self::spent) keeps the exact number
/// of units requested so callers can audit a run.
///
/// # Examples
///
/// ```
/// use swap_tour::local_search::SwapBudget;
///
/// let mut budget = SwapBudget::new(3);
/// budget.spend(2);
/// assert_eq!(budget.remaining(), 1);
/// budget.spend(2);
/// assert!(budget.is_exhausted());
/// assert_eq!(budget.spent(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapBudget {
    remaining: usize,
    spent: usize,
}

impl SwapBudget {
    pub fn new(total: usize) -> Self {
        Self {
            remaining: total,
            spent: 0,
        }
    }

    /// Units left before the search must stop.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Units requested so far, including any requested past zero.
    pub fn spent(&self) -> usize {
        self.spent
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    pub fn spend(&mut self, units: usize) {
        self.remaining = self.remaining.saturating_sub(units);
        self.spent += units;
    }
}
