//! # swap-tour
//!
//! Approximate travelling-salesman tours over a list of cities, using a
//! Euclidean distance model and a budgeted swap-based local search.
//!
//! ## Modules
//!
//! - [`models`] — City records and tours (with the swap primitives)
//! - [`distance`] — Euclidean distance and total cyclic distance
//! - [`local_search`] — Nearest-successor sweep plus improve-or-revert search
//! - [`io`] — Tab-separated city files, city listing, route report
//! - [`error`] — Error taxonomy
//! - [`logging`] — Logger setup for the binary

pub mod distance;
pub mod error;
pub mod io;
pub mod local_search;
pub mod logging;
pub mod models;

pub use error::{Result, TourError};
