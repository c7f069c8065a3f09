//! Domain model types for city tours.
//!
//! Provides the two core abstractions: immutable city records and tours as
//! cyclic orderings of shared records, along with the in-place swap
//! primitives the optimizer is built from.

mod city;
mod tour;

pub use city::CityRecord;
pub use tour::Tour;
