//! City record type.

use serde::{Deserialize, Serialize};

/// A city to visit: region label, name, and planar coordinates.
///
/// Records are created once when the city list is loaded and never mutated
/// afterwards. Tours share them through [`std::sync::Arc`].
///
/// # Examples
///
/// ```
/// use swap_tour::models::CityRecord;
///
/// let a = CityRecord::new("Alabama", "Montgomery", 32.36, -86.28);
/// assert_eq!(a.region(), "Alabama");
/// assert_eq!(a.name(), "Montgomery");
/// assert_eq!(a.x(), 32.36);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    region: String,
    name: String,
    x: f64,
    y: f64,
}

impl CityRecord {
    /// Creates a new city record.
    pub fn new(region: impl Into<String>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            region: region.into(),
            name: name.into(),
            x,
            y,
        }
    }

    /// Region (state) label.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// City name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate (latitude in city files).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate (longitude in city files).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Raw Euclidean distance to another city.
    ///
    /// Not checked for finiteness; see [`crate::distance::distance`] for the
    /// checked variant.
    pub fn distance_to(&self, other: &CityRecord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_new() {
        let c = CityRecord::new("Texas", "Austin", 30.27, -97.74);
        assert_eq!(c.region(), "Texas");
        assert_eq!(c.name(), "Austin");
        assert_eq!(c.x(), 30.27);
        assert_eq!(c.y(), -97.74);
        assert!(c.is_finite());
    }

    #[test]
    fn test_city_not_finite() {
        assert!(!CityRecord::new("R", "A", f64::NAN, 0.0).is_finite());
        assert!(!CityRecord::new("R", "A", 0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_city_distance() {
        let a = CityRecord::new("R", "A", 0.0, 0.0);
        let b = CityRecord::new("R", "B", 3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_city_distance_symmetric() {
        let a = CityRecord::new("R", "A", 1.0, 2.0);
        let b = CityRecord::new("R", "B", 4.0, 6.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_city_serde_roundtrip() {
        let a = CityRecord::new("Ohio", "Columbus", 39.96, -83.0);
        let json = serde_json::to_string(&a).expect("serialize");
        let back: CityRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(a, back);
    }
}
