//! 2D infinite line type.

use super::{Direction2, Point2, Scalar, Segment2, Vec2};
use std::cmp::Ordering;

/// A 2D infinite line defined by a point and direction.
///
/// The left side of the direction is the positive side. Side tests compare
/// the raw cross product, which is the signed distance scaled by the
/// direction's length; that factor is shared by every point, so comparisons
/// between points are exact without dividing by a square root.
///
/// # Example
///
/// ```
/// use coverage_sweep::primitives::{Direction2, Line2, Point2};
///
/// let line: Line2<f64> = Line2::new(Point2::new(0.0, 1.0), Direction2::x_axis());
/// assert!(line.has_on_positive_side(&Point2::new(5.0, 3.0)));
/// assert!(line.has_on_negative_side(&Point2::new(5.0, -1.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line2<T> {
    /// A point on the line
    pub origin: Point2<T>,
    /// Heading of the line
    pub direction: Direction2<T>,
}

/// Result of intersecting a line with a segment.
#[derive(Debug, Clone, PartialEq)]
pub enum LineIntersection<T> {
    /// The segment does not meet the line.
    None,
    /// The segment meets the line in one point.
    Point(Point2<T>),
    /// The segment lies on the line.
    Segment(Segment2<T>),
}

impl<T: Scalar> Line2<T> {
    /// Creates a new line from a point and direction.
    #[inline]
    pub fn new(origin: Point2<T>, direction: Direction2<T>) -> Self {
        Self { origin, direction }
    }

    /// Scaled signed distance of `point`: positive left of the direction.
    #[inline]
    pub fn side(&self, point: &Point2<T>) -> T {
        self.direction
            .vector()
            .cross(&self.origin.vector_to(point))
    }

    /// Returns `true` if `point` lies strictly left of the line.
    #[inline]
    pub fn has_on_positive_side(&self, point: &Point2<T>) -> bool {
        self.side(point).is_strictly_positive()
    }

    /// Returns `true` if `point` lies strictly right of the line.
    #[inline]
    pub fn has_on_negative_side(&self, point: &Point2<T>) -> bool {
        self.side(point).is_strictly_negative()
    }

    /// Returns `true` if `point` lies on the line.
    #[inline]
    pub fn contains(&self, point: &Point2<T>) -> bool {
        self.side(point).is_zero()
    }

    /// Orders two points by their signed distance to the line.
    #[inline]
    pub fn compare_signed_distance(&self, a: &Point2<T>, b: &Point2<T>) -> Ordering {
        self.side(a)
            .partial_cmp(&self.side(b))
            .unwrap_or(Ordering::Equal)
    }

    /// The line through `through` perpendicular to this one, heading 90 degrees
    /// counter-clockwise from this line's direction.
    #[inline]
    pub fn perpendicular(&self, through: &Point2<T>) -> Self {
        Self::new(through.clone(), self.direction.perpendicular())
    }

    /// Returns this line moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: &Vec2<T>) -> Self {
        Self::new(self.origin.translated(offset), self.direction.clone())
    }

    /// Intersects the line with a closed segment.
    ///
    /// The intersection point is interpolated from the side values of the
    /// segment's endpoints, so it is exact for exact scalars.
    pub fn intersect_segment(&self, segment: &Segment2<T>) -> LineIntersection<T> {
        let s_start = self.side(&segment.start);
        let s_end = self.side(&segment.end);

        match (s_start.is_zero(), s_end.is_zero()) {
            (true, true) => {
                if segment.is_degenerate() {
                    LineIntersection::Point(segment.start.clone())
                } else {
                    LineIntersection::Segment(segment.clone())
                }
            }
            (true, false) => LineIntersection::Point(segment.start.clone()),
            (false, true) => LineIntersection::Point(segment.end.clone()),
            (false, false) => {
                if s_start.is_strictly_positive() == s_end.is_strictly_positive() {
                    return LineIntersection::None;
                }
                // Solve side(start + t * (end - start)) = 0 for t.
                let t = s_start.clone() / (s_start - s_end);
                LineIntersection::Point(segment.point_at(&t))
            }
        }
    }
}
