//! Coverage check for vertices between two consecutive passes.

use super::Chord;
use crate::primitives::{Point2, Scalar};

/// Finds the first vertex between `prev` and `current` that neither chord
/// covers.
///
/// `sorted` must be ordered along the sweep axis (see
/// [`sort_vertices_to_line`](super::sort_vertices_to_line)). Vertices
/// strictly behind the previous line are skipped, and the walk stops at the
/// first vertex strictly beyond the current one. A vertex is unobservable
/// when its squared distance to both chords exceeds `offset_sq`.
pub fn check_observability<'a, T: Scalar>(
    prev: &Chord<T>,
    current: &Chord<T>,
    sorted: &'a [Point2<T>],
    offset_sq: &T,
) -> Option<&'a Point2<T>> {
    for v in sorted {
        if prev.line.has_on_negative_side(v) {
            continue;
        }
        if current.line.has_on_positive_side(v) {
            break;
        }

        let to_prev = prev.segment.distance_squared_to_point(v);
        let to_current = current.segment.distance_squared_to_point(v);
        if &to_prev > offset_sq && &to_current > offset_sq {
            return Some(v);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use crate::primitives::{Direction2, Line2};
    use crate::sweep::{find_sweep_segment, sort_vertices_to_line};

    fn spiked() -> Polygon<f64> {
        Polygon::from_coords(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.4),
            (6.0, 1.5),
            (2.0, 1.6),
            (2.0, 2.0),
            (0.0, 2.0),
        ])
        .unwrap()
    }

    fn chord_at(poly: &Polygon<f64>, y: f64) -> Chord<f64> {
        find_sweep_segment(poly, &Line2::new(Point2::new(0.0, y), Direction2::x_axis())).unwrap()
    }

    #[test]
    fn test_spike_tip_is_unobservable() {
        let poly = spiked();
        let sorted = sort_vertices_to_line(&poly, &Line2::new(Point2::origin(), Direction2::x_axis()));
        let hit = check_observability(&chord_at(&poly, 1.0), &chord_at(&poly, 2.0), &sorted, &1.0);
        assert_eq!(hit, Some(&Point2::new(6.0, 1.5)));
    }

    #[test]
    fn test_wide_offset_sees_everything() {
        let poly = spiked();
        let sorted = sort_vertices_to_line(&poly, &Line2::new(Point2::origin(), Direction2::x_axis()));
        let hit = check_observability(&chord_at(&poly, 1.0), &chord_at(&poly, 2.0), &sorted, &25.0);
        assert_eq!(hit, None);
    }

    #[test]
    fn test_vertices_outside_the_band_are_ignored() {
        let poly = spiked();
        let sorted = sort_vertices_to_line(&poly, &Line2::new(Point2::origin(), Direction2::x_axis()));
        // The spike lies beyond both chords.
        let hit = check_observability(&chord_at(&poly, 0.0), &chord_at(&poly, 1.0), &sorted, &0.25);
        assert_eq!(hit, None);
    }
}
