//! Core polygon type and exact point/segment location.

use crate::primitives::{Point2, Scalar, Segment2};
use crate::tolerance::{orient2d, point_on_segment, segments_properly_intersect, Orientation};

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// The sweep planner expects counter-clockwise order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<T> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<T>>,
}

/// Where a point lies relative to a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    /// Strictly inside.
    Inside,
    /// On an edge or vertex.
    Boundary,
    /// Strictly outside.
    Outside,
}

impl<T: Scalar> Polygon<T> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<T>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from `f64` coordinate pairs.
    ///
    /// Returns `None` if any coordinate is not finite.
    pub fn from_coords(coords: &[(f64, f64)]) -> Option<Self> {
        coords
            .iter()
            .map(|&(x, y)| Point2::from_f64(x, y))
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// The edge leaving vertex `i`.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment2<T> {
        let n = self.vertices.len();
        Segment2::new(self.vertices[i].clone(), self.vertices[(i + 1) % n].clone())
    }

    /// Iterates over the boundary edges in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<T>> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i))
    }

    /// Twice the signed area (shoelace sum), exact for exact scalars.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area_doubled(&self) -> T {
        if self.vertices.len() < 3 {
            return T::zero();
        }

        let n = self.vertices.len();
        (0..n).fold(T::zero(), |acc, i| {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            acc + a.x.clone() * b.y.clone() - b.x.clone() * a.y.clone()
        })
    }

    /// Returns the signed area of the polygon.
    #[inline]
    pub fn signed_area(&self) -> T {
        self.signed_area_doubled() / T::two()
    }

    /// Returns true if the vertices wind counter-clockwise.
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area_doubled().is_strictly_positive()
    }

    /// Tests if the polygon is convex.
    ///
    /// Collinear vertices are allowed; all turns must share one sign.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }

        let mut sign: Option<Orientation> = None;
        for i in 0..n {
            let turn = orient2d(
                &self.vertices[i],
                &self.vertices[(i + 1) % n],
                &self.vertices[(i + 2) % n],
            );
            if turn == Orientation::Collinear {
                continue;
            }
            match sign {
                None => sign = Some(turn),
                Some(s) if s != turn => return false,
                _ => {}
            }
        }

        true
    }

    /// Locates a point relative to the closed polygon.
    pub fn locate(&self, point: &Point2<T>) -> PointLocation {
        if self.vertices.len() < 3 {
            return PointLocation::Outside;
        }
        if self.edges().any(|e| point_on_segment(point, &e)) {
            return PointLocation::Boundary;
        }

        // Ray casting towards +x; the boundary case is already excluded.
        let mut inside = false;
        for edge in self.edges() {
            let (a, b) = (&edge.start, &edge.end);
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = (b.x.clone() - a.x.clone()) * (point.y.clone() - a.y.clone())
                    / (b.y.clone() - a.y.clone())
                    + a.x.clone();
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }

        if inside {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }

    /// Tests if a point lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: &Point2<T>) -> bool {
        self.locate(point) != PointLocation::Outside
    }

    /// Tests if the closed segment `a`-`b` lies entirely within the closed
    /// polygon, i.e. a straight move from `a` to `b` never leaves it.
    ///
    /// The segment is split at every polygon vertex it touches. With no proper
    /// crossings left, each piece is wholly inside, on, or outside the
    /// boundary, so one midpoint per piece decides it.
    pub fn contains_segment(&self, a: &Point2<T>, b: &Point2<T>) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        let ab = Segment2::new(a.clone(), b.clone());
        if ab.is_degenerate() {
            return true;
        }
        if self.edges().any(|e| segments_properly_intersect(&ab, &e)) {
            return false;
        }

        let dir = ab.direction();
        let len_sq = dir.magnitude_squared();
        let mut cuts: Vec<T> = vec![T::zero(), T::one()];
        cuts.extend(
            self.vertices
                .iter()
                .filter(|v| point_on_segment(v, &ab))
                .map(|v| a.vector_to(v).dot(&dir) / len_sq.clone()),
        );
        cuts.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
        cuts.dedup();

        cuts.windows(2).all(|w| {
            let mid = (w[0].clone() + w[1].clone()) / T::two();
            self.contains(&ab.point_at(&mid))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon<f64> {
        Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap()
    }

    /// Square with a triangular notch cut into the right side.
    fn notched() -> Polygon<f64> {
        Polygon::from_coords(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 1.0),
            (2.0, 2.0),
            (4.0, 3.0),
            (4.0, 4.0),
            (0.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_new() {
        let poly = square();
        assert_eq!(poly.len(), 4);
        assert!(!poly.is_empty());
        assert_eq!(poly.edges().count(), 4);
    }

    #[test]
    fn test_polygon_signed_area_ccw() {
        let poly = square();
        assert_eq!(poly.signed_area(), 4.0);
        assert!(poly.is_counter_clockwise());
    }

    #[test]
    fn test_polygon_signed_area_cw() {
        let mut poly = square();
        poly.vertices.reverse();
        assert_eq!(poly.signed_area(), -4.0);
        assert!(!poly.is_counter_clockwise());
    }

    #[test]
    fn test_polygon_is_convex() {
        assert!(square().is_convex());
        assert!(!notched().is_convex());
    }

    #[test]
    fn test_locate() {
        let poly = square();
        assert_eq!(poly.locate(&Point2::new(1.0, 1.0)), PointLocation::Inside);
        assert_eq!(poly.locate(&Point2::new(2.0, 1.0)), PointLocation::Boundary);
        assert_eq!(poly.locate(&Point2::new(0.0, 0.0)), PointLocation::Boundary);
        assert_eq!(poly.locate(&Point2::new(3.0, 1.0)), PointLocation::Outside);
    }

    #[test]
    fn test_locate_slanted_vertices_on_boundary() {
        let poly =
            Polygon::<f64>::from_coords(&[(0.0, 0.0), (10.0, 1.0), (9.0, 7.0), (1.0, 6.0)])
                .unwrap();
        for v in &poly.vertices {
            assert_eq!(poly.locate(v), PointLocation::Boundary);
        }
        assert_eq!(poly.locate(&Point2::new(5.0, 0.5)), PointLocation::Boundary);
        assert!(poly.contains_segment(&Point2::new(0.0, 0.0), &Point2::new(9.0, 7.0)));
    }

    #[test]
    fn test_flat_polygon_is_not_counter_clockwise() {
        let flat = Polygon::<f64>::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
        assert_eq!(flat.signed_area(), 0.0);
        assert!(!flat.is_counter_clockwise());
    }

    #[test]
    fn test_locate_in_notch() {
        let poly = notched();
        assert_eq!(poly.locate(&Point2::new(3.5, 2.0)), PointLocation::Outside);
        assert_eq!(poly.locate(&Point2::new(1.0, 2.0)), PointLocation::Inside);
    }

    #[test]
    fn test_contains_segment_interior() {
        let poly = notched();
        assert!(poly.contains_segment(&Point2::new(0.5, 0.5), &Point2::new(1.5, 3.5)));
    }

    #[test]
    fn test_contains_segment_along_boundary() {
        let poly = notched();
        assert!(poly.contains_segment(&Point2::new(4.0, 1.0), &Point2::new(2.0, 2.0)));
        assert!(poly.contains_segment(&Point2::new(0.0, 0.0), &Point2::new(0.0, 4.0)));
    }

    #[test]
    fn test_contains_segment_across_notch() {
        let poly = notched();
        // Both endpoints on the boundary, middle outside.
        assert!(!poly.contains_segment(&Point2::new(4.0, 1.0), &Point2::new(4.0, 3.0)));
        // Proper crossing of the notch edges.
        assert!(!poly.contains_segment(&Point2::new(3.0, 0.5), &Point2::new(3.0, 3.5)));
    }

    #[test]
    fn test_contains_segment_through_reflex_vertex() {
        let poly = notched();
        assert!(poly.contains_segment(&Point2::new(0.0, 2.0), &Point2::new(2.0, 2.0)));
        assert!(!poly.contains_segment(&Point2::new(0.0, 2.0), &Point2::new(4.0, 2.0)));
    }
}
