//! Plain listing of cities in load order.

use std::fmt;

use crate::models::CityRecord;

/// Renders cities as `name x y`, one per line, coordinates to two
/// decimals, under a `first version of roadmap` heading.
///
/// # Examples
///
/// ```
/// use swap_tour::io::CityListing;
/// use swap_tour::models::CityRecord;
///
/// let cities = vec![CityRecord::new("Texas", "Austin", 30.2672, -97.7431)];
/// let text = CityListing::new(&cities).to_string();
/// assert_eq!(text, "first version of roadmap\nAustin 30.27 -97.74\n");
/// ```
pub struct CityListing<'a> {
    cities: &'a [CityRecord],
}

impl<'a> CityListing<'a> {
    pub fn new(cities: &'a [CityRecord]) -> Self {
        Self { cities }
    }
}

impl fmt::Display for CityListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "first version of roadmap")?;
        for city in self.cities {
            writeln!(f, "{} {:.2} {:.2}", city.name(), city.x(), city.y())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_empty() {
        assert_eq!(CityListing::new(&[]).to_string(), "first version of roadmap\n");
    }

    #[test]
    fn test_listing_rounds() {
        let cities = vec![
            CityRecord::new("A", "One", 1.005, 2.0),
            CityRecord::new("B", "Two", -3.14159, 10.999),
        ];
        let text = CityListing::new(&cities).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Two -3.14 11.00");
    }
}
