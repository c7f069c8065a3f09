//! Checked Euclidean distances.

use crate::error::{Result, TourError};
use crate::models::{CityRecord, Tour};

/// Euclidean distance between two cities.
///
/// Returns `MalformedRecord` if either city has a NaN or infinite
/// coordinate, or if the result overflows to infinity.
///
/// # Examples
///
/// ```
/// use swap_tour::models::CityRecord;
/// use swap_tour::distance::distance;
///
/// let a = CityRecord::new("R", "A", 0.0, 0.0);
/// let b = CityRecord::new("R", "B", 3.0, 4.0);
/// assert!((distance(&a, &b).unwrap() - 5.0).abs() < 1e-10);
/// ```
pub fn distance(a: &CityRecord, b: &CityRecord) -> Result<f64> {
    if !a.is_finite() || !b.is_finite() {
        return Err(TourError::MalformedRecord {
            from: a.name().to_string(),
            to: b.name().to_string(),
        });
    }
    let d = a.distance_to(b);
    if !d.is_finite() {
        return Err(TourError::MalformedRecord {
            from: a.name().to_string(),
            to: b.name().to_string(),
        });
    }
    Ok(d)
}

/// Sum of the `n` edge lengths of `tour`, including the wrap-around edge
/// from the last city back to the first.
///
/// A single-city tour has length 0.
pub fn total_cyclic_distance(tour: &Tour) -> Result<f64> {
    let mut total = 0.0;
    for (from, to) in tour.edges() {
        total += distance(from, to)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn triangle() -> Tour {
        Tour::new(vec![
            CityRecord::new("A", "X", 0.0, 0.0),
            CityRecord::new("B", "Y", 0.0, 3.0),
            CityRecord::new("C", "Z", 4.0, 0.0),
        ])
        .expect("non-empty")
    }

    #[test]
    fn test_distance() {
        let t = triangle();
        assert!((distance(&t[0], &t[1]).expect("finite") - 3.0).abs() < 1e-10);
        assert!((distance(&t[1], &t[2]).expect("finite") - 5.0).abs() < 1e-10);
        assert!((distance(&t[2], &t[2]).expect("finite")).abs() < 1e-10);
    }

    #[test]
    fn test_distance_non_finite() {
        let a = CityRecord::new("R", "Nowhere", f64::NAN, 0.0);
        let b = CityRecord::new("R", "Somewhere", 1.0, 1.0);
        match distance(&a, &b) {
            Err(TourError::MalformedRecord { from, to }) => {
                assert_eq!(from, "Nowhere");
                assert_eq!(to, "Somewhere");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }

        let c = CityRecord::new("R", "Far", f64::INFINITY, 0.0);
        assert!(distance(&b, &c).is_err());
    }

    #[test]
    fn test_distance_non_finite_same_point() {
        // inf - inf is NaN, but a lone infinite city must still be rejected
        let a = CityRecord::new("R", "Edge", f64::INFINITY, 0.0);
        assert!(matches!(
            distance(&a, &a),
            Err(TourError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_distance_overflow() {
        let a = CityRecord::new("R", "A", -1e308, 0.0);
        let b = CityRecord::new("R", "B", 1e308, 0.0);
        assert!(a.is_finite() && b.is_finite());
        assert!(matches!(
            distance(&a, &b),
            Err(TourError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_total_triangle() {
        assert!((total_cyclic_distance(&triangle()).expect("finite") - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_single_city() {
        let t = Tour::new(vec![CityRecord::new("R", "Solo", 7.0, -2.0)]).expect("non-empty");
        assert_eq!(total_cyclic_distance(&t).expect("finite"), 0.0);
    }

    #[test]
    fn test_total_two_cities_counts_both_directions() {
        let t = Tour::new(vec![
            CityRecord::new("R", "A", 0.0, 0.0),
            CityRecord::new("R", "B", 0.0, 2.5),
        ])
        .expect("non-empty");
        assert!((total_cyclic_distance(&t).expect("finite") - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_propagates_malformed() {
        let t = Tour::new(vec![
            CityRecord::new("R", "A", 0.0, 0.0),
            CityRecord::new("R", "B", f64::NAN, 1.0),
            CityRecord::new("R", "C", 2.0, 0.0),
        ])
        .expect("non-empty");
        assert!(matches!(
            total_cyclic_distance(&t),
            Err(TourError::MalformedRecord { .. })
        ));
    }

    fn arb_tour() -> impl Strategy<Value = Tour> {
        prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..24).prop_map(|pts| {
            let cities = pts
                .into_iter()
                .enumerate()
                .map(|(i, (x, y))| CityRecord::new("R", format!("c{i}"), x, y))
                .collect();
            Tour::new(cities).expect("non-empty")
        })
    }

    proptest! {
        #[test]
        fn prop_total_invariant_under_rotation(tour in arb_tour(), mid in 0usize..64) {
            let base = total_cyclic_distance(&tour).expect("finite");
            let rotated = total_cyclic_distance(&tour.rotated(mid)).expect("finite");
            prop_assert!((base - rotated).abs() <= 1e-9 * base.max(1.0));
        }

        #[test]
        fn prop_total_invariant_under_reversal(tour in arb_tour()) {
            let base = total_cyclic_distance(&tour).expect("finite");
            let reversed = total_cyclic_distance(&tour.reversed()).expect("finite");
            prop_assert!((base - reversed).abs() <= 1e-9 * base.max(1.0));
        }

        #[test]
        fn prop_total_non_negative(tour in arb_tour()) {
            prop_assert!(total_cyclic_distance(&tour).expect("finite") >= 0.0);
        }
    }
}
