//! Tour type and its swap primitives.

use std::ops::Index;
use std::sync::Arc;

use super::CityRecord;
use crate::distance::total_cyclic_distance;
use crate::error::{Result, TourError};

/// A cyclic ordering of cities: the last city connects back to the first.
///
/// A tour always holds at least one city and is always a permutation of the
/// city set it was created from; the only mutations are the two swap
/// primitives, which exchange positions in place and report the new total
/// cyclic distance.
///
/// # Examples
///
/// ```
/// use swap_tour::models::{CityRecord, Tour};
///
/// let mut tour = Tour::new(vec![
///     CityRecord::new("R", "A", 0.0, 0.0),
///     CityRecord::new("R", "B", 0.0, 3.0),
///     CityRecord::new("R", "C", 4.0, 0.0),
/// ])
/// .unwrap();
/// assert_eq!(tour.len(), 3);
///
/// let total = tour.swap_adjacent(2).unwrap();
/// assert!((total - 12.0).abs() < 1e-10);
/// assert_eq!(tour[0].name(), "C");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    cities: Vec<Arc<CityRecord>>,
}

impl Tour {
    /// Creates a tour visiting `cities` in the given order.
    ///
    /// Returns `InvalidInput` if `cities` is empty.
    pub fn new(cities: Vec<CityRecord>) -> Result<Self> {
        Self::from_shared(cities.into_iter().map(Arc::new).collect())
    }

    /// Creates a tour over already-shared city records.
    pub fn from_shared(cities: Vec<Arc<CityRecord>>) -> Result<Self> {
        if cities.is_empty() {
            return Err(TourError::invalid_input("a tour needs at least one city"));
        }
        Ok(Self { cities })
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour has no cities (never, by construction).
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityRecord> {
        self.cities.iter().map(|c| c.as_ref())
    }

    /// Iterates over the `n` edges of the cycle, wrap-around edge last.
    pub fn edges(&self) -> impl Iterator<Item = (&CityRecord, &CityRecord)> {
        let n = self.cities.len();
        (0..n).map(move |i| (self.cities[i].as_ref(), self.cities[(i + 1) % n].as_ref()))
    }

    /// City names in visiting order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|c| c.name()).collect()
    }

    /// Total cyclic distance of the current ordering.
    pub fn total_distance(&self) -> Result<f64> {
        total_cyclic_distance(self)
    }

    /// Exchanges the cities at `index` and `(index + 1) mod n`, then returns
    /// the new total cyclic distance.
    pub fn swap_adjacent(&mut self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        let next = (index + 1) % self.cities.len();
        self.cities.swap(index, next);
        self.total_distance()
    }

    /// Exchanges the cities at positions `i` and `j` (a no-op when they are
    /// equal), then returns the new total cyclic distance.
    pub fn swap_positions(&mut self, i: usize, j: usize) -> Result<f64> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i != j {
            self.cities.swap(i, j);
        }
        self.total_distance()
    }

    /// Returns the same cycle starting at position `mid`.
    pub fn rotated(&self, mid: usize) -> Self {
        let mut cities = self.cities.clone();
        let n = cities.len();
        cities.rotate_left(mid % n);
        Self { cities }
    }

    /// Returns the same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut cities = self.cities.clone();
        cities.reverse();
        Self { cities }
    }

    /// Returns `true` if both tours visit exactly the same cities, each the
    /// same number of times, regardless of order.
    pub fn is_permutation_of(&self, other: &Tour) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut used = vec![false; other.len()];
        self.cities.iter().all(|city| {
            let found = other
                .cities
                .iter()
                .enumerate()
                .position(|(k, c)| !used[k] && c == city);
            match found {
                Some(k) => {
                    used[k] = true;
                    true
                }
                None => false,
            }
        })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.cities.len() {
            return Err(TourError::invalid_input(format!(
                "position {index} out of range for tour of {} cities",
                self.cities.len()
            )));
        }
        Ok(())
    }
}

impl Index<usize> for Tour {
    type Output = CityRecord;

    fn index(&self, index: usize) -> &CityRecord {
        &self.cities[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Tour {
        Tour::new(vec![
            CityRecord::new("R", "A", 0.0, 0.0),
            CityRecord::new("R", "B", 1.0, 0.0),
            CityRecord::new("R", "C", 1.0, 1.0),
            CityRecord::new("R", "D", 0.0, 1.0),
        ])
        .expect("non-empty")
    }

    #[test]
    fn test_tour_empty_rejected() {
        assert!(matches!(Tour::new(vec![]), Err(TourError::InvalidInput(_))));
    }

    #[test]
    fn test_tour_accessors() {
        let t = square();
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
        assert_eq!(t.names(), vec!["A", "B", "C", "D"]);
        assert_eq!(t[2].name(), "C");
    }

    #[test]
    fn test_tour_edges_wrap() {
        let t = square();
        let edges: Vec<(&str, &str)> = t.edges().map(|(a, b)| (a.name(), b.name())).collect();
        assert_eq!(edges, vec![("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]);
    }

    #[test]
    fn test_swap_adjacent_wraps() {
        let mut t = square();
        let total = t.swap_adjacent(3).expect("in range");
        assert_eq!(t.names(), vec!["D", "B", "C", "A"]);
        assert!((total - t.total_distance().expect("finite")).abs() < 1e-10);
    }

    #[test]
    fn test_swap_positions_crossing() {
        let mut t = square();
        // A C B D crosses itself
        let total = t.swap_positions(1, 2).expect("in range");
        assert_eq!(t.names(), vec!["A", "C", "B", "D"]);
        assert!((total - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-10);
    }

    #[test]
    fn test_swap_positions_same_index() {
        let mut t = square();
        let before = t.clone();
        let total = t.swap_positions(2, 2).expect("in range");
        assert_eq!(t, before);
        assert!((total - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_swap_out_of_range() {
        let mut t = square();
        assert!(matches!(t.swap_adjacent(4), Err(TourError::InvalidInput(_))));
        assert!(matches!(t.swap_positions(0, 9), Err(TourError::InvalidInput(_))));
        assert_eq!(t, square());
    }

    #[test]
    fn test_rotated_and_reversed() {
        let t = square();
        assert_eq!(t.rotated(1).names(), vec!["B", "C", "D", "A"]);
        assert_eq!(t.rotated(5).names(), vec!["B", "C", "D", "A"]);
        assert_eq!(t.reversed().names(), vec!["D", "C", "B", "A"]);
    }

    #[test]
    fn test_is_permutation_of() {
        let t = square();
        let mut shuffled = t.clone();
        shuffled.swap_positions(0, 3).expect("in range");
        assert!(shuffled.is_permutation_of(&t));

        let other = Tour::new(vec![
            CityRecord::new("R", "A", 0.0, 0.0),
            CityRecord::new("R", "A", 0.0, 0.0),
            CityRecord::new("R", "C", 1.0, 1.0),
            CityRecord::new("R", "D", 0.0, 1.0),
        ])
        .expect("non-empty");
        assert!(!other.is_permutation_of(&t));
    }
}
