//! City-file loading and text rendering.
//!
//! - [`read_cities`] / [`parse_cities`] — tab-separated city lists
//! - [`CityListing`] — the cities as loaded, coordinates to two decimals
//! - [`RouteReport`] — per-edge distance table with the tour total
//!
//! Rounding happens only here; the distance model and optimizer always
//! work with raw values.

mod listing;
mod reader;
mod report;

pub use listing::CityListing;
pub use reader::{parse_cities, read_cities};
pub use report::{ReportRow, RouteReport};
