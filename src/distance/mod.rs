//! Distance model.
//!
//! Euclidean distance between two cities and the total length of a tour
//! interpreted as a cycle.

mod euclidean;

pub use euclidean::{distance, total_cyclic_distance};
