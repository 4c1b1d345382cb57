//! Vertex ordering along the sweep axis.

use crate::polygon::Polygon;
use crate::primitives::{Line2, Point2, Scalar};

/// Returns the polygon vertices sorted by ascending signed distance to
/// `line`, nearest (rightmost) first.
///
/// The sort is stable, so vertices at equal distance keep their polygon
/// order. The first vertex is where the sweep starts and the last one is
/// where it ends.
///
/// # Example
///
/// ```
/// use coverage_sweep::polygon::Polygon;
/// use coverage_sweep::primitives::{Direction2, Line2, Point2};
/// use coverage_sweep::sweep::sort_vertices_to_line;
///
/// let tri = Polygon::<f64>::from_coords(&[(0.0, 2.0), (1.0, 0.0), (2.0, 1.0)]).unwrap();
/// let line = Line2::new(Point2::origin(), Direction2::x_axis());
/// let sorted = sort_vertices_to_line(&tri, &line);
/// assert_eq!(sorted[0], Point2::new(1.0, 0.0));
/// assert_eq!(sorted[2], Point2::new(0.0, 2.0));
/// ```
pub fn sort_vertices_to_line<T: Scalar>(polygon: &Polygon<T>, line: &Line2<T>) -> Vec<Point2<T>> {
    let mut keyed: Vec<(T, Point2<T>)> = polygon
        .vertices
        .iter()
        .map(|v| (line.side(v), v.clone()))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    keyed.into_iter().map(|(_, v)| v).collect()
}
