//! Chords cut from the polygon by sweep lines.

use super::Chord;
use crate::polygon::Polygon;
use crate::primitives::{Line2, LineIntersection, Point2, Scalar, Segment2};

/// Intersects `line` with every polygon edge.
///
/// Edges lying on the line contribute both endpoints. The points are sorted
/// along the line, from the end the line heads towards back to the start.
/// Shared vertices show up once per incident edge.
pub fn find_intersections<T: Scalar>(polygon: &Polygon<T>, line: &Line2<T>) -> Vec<Point2<T>> {
    let mut points = Vec::new();
    for edge in polygon.edges() {
        match line.intersect_segment(&edge) {
            LineIntersection::None => {}
            LineIntersection::Point(p) => points.push(p),
            LineIntersection::Segment(s) => {
                points.push(s.start);
                points.push(s.end);
            }
        }
    }

    let across = line.perpendicular(&line.origin);
    points.sort_by(|a, b| across.compare_signed_distance(a, b));
    points
}

/// The chord `line` cuts from the polygon, or `None` if they do not meet.
///
/// A line touching a single vertex yields a degenerate chord. With `f64`
/// coordinates an interpolated end can round to just outside a slanted edge;
/// such an end is moved along the chord until the polygon contains it.
///
/// # Example
///
/// ```
/// use coverage_sweep::polygon::Polygon;
/// use coverage_sweep::primitives::{Direction2, Line2, Point2};
/// use coverage_sweep::sweep::find_sweep_segment;
///
/// let square = Polygon::<f64>::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
/// let line = Line2::new(Point2::new(0.0, 1.0), Direction2::x_axis());
///
/// let chord = find_sweep_segment(&square, &line).unwrap();
/// assert_eq!(chord.segment.start, Point2::new(2.0, 1.0));
/// assert_eq!(chord.segment.end, Point2::new(0.0, 1.0));
///
/// let above = Line2::new(Point2::new(0.0, 3.0), Direction2::x_axis());
/// assert!(find_sweep_segment(&square, &above).is_none());
/// ```
pub fn find_sweep_segment<T: Scalar>(polygon: &Polygon<T>, line: &Line2<T>) -> Option<Chord<T>> {
    let mut points = find_intersections(polygon, line);
    let last = points.pop()?;
    let first = if points.is_empty() {
        last.clone()
    } else {
        points.swap_remove(0)
    };

    let (first, last) = if first == last {
        (first, last)
    } else {
        let settled = settle_inside(polygon, first, &last);
        let last = settle_inside(polygon, last, &settled);
        (settled, last)
    };

    Some(Chord {
        segment: Segment2::new(first, last),
        line: line.clone(),
    })
}

const MAX_SETTLE_STEPS: usize = 40;

/// Pulls `end` towards `other` in doubling steps until it is inside or on the
/// polygon. Exact intersections are returned unchanged.
fn settle_inside<T: Scalar>(
    polygon: &Polygon<T>,
    end: Point2<T>,
    other: &Point2<T>,
) -> Point2<T> {
    if polygon.contains(&end) {
        return end;
    }
    let Some(mut t) = T::from_f64_checked(f64::EPSILON) else {
        return end;
    };

    let along = end.vector_to(other);
    for _ in 0..MAX_SETTLE_STEPS {
        let moved = end.translated(&along.scaled(&t));
        if polygon.contains(&moved) {
            log::trace!("chord end {end} rounded outside, moved to {moved}");
            return moved;
        }
        t = t * T::two();
    }
    end
}
