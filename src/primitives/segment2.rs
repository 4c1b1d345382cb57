//! 2D line segment type.

use super::{Point2, Scalar, Vec2};
use crate::tolerance::segments_intersect;

/// A 2D line segment defined by two endpoints.
///
/// A segment whose endpoints coincide is degenerate and behaves like a point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2<T> {
    pub start: Point2<T>,
    pub end: Point2<T>,
}

impl<T: Scalar> Segment2<T> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<T>, end: Point2<T>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(&self) -> Vec2<T> {
        self.start.vector_to(&self.end)
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.start.distance_squared(&self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point2<T> {
        self.start.midpoint(&self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    #[inline]
    pub fn point_at(&self, t: &T) -> Point2<T> {
        self.start.translated(&self.direction().scaled(t))
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
        }
    }

    /// Returns `true` if start and end coincide exactly.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is in [0, 1].
    pub fn closest_point(&self, p: &Point2<T>) -> (Point2<T>, T) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        if len_sq.is_zero() {
            return (self.start.clone(), T::zero());
        }

        // Project p onto the supporting line, clamping to [0, 1]
        let t = self.start.vector_to(p).dot(&v) / len_sq;
        let t = if t < T::zero() {
            T::zero()
        } else if t > T::one() {
            T::one()
        } else {
            t
        };

        (self.point_at(&t), t)
    }

    /// Computes the squared distance from a point to this segment.
    #[inline]
    pub fn distance_squared_to_point(&self, p: &Point2<T>) -> T {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(&closest)
    }

    /// Computes the squared distance between two segments.
    ///
    /// Zero when they touch; otherwise the minimum over the four
    /// endpoint-to-segment distances.
    pub fn distance_squared_to_segment(&self, other: &Self) -> T {
        if segments_intersect(self, other) {
            return T::zero();
        }

        [
            self.distance_squared_to_point(&other.start),
            self.distance_squared_to_point(&other.end),
            other.distance_squared_to_point(&self.start),
            other.distance_squared_to_point(&self.end),
        ]
        .into_iter()
        .fold(None, |best: Option<T>, d| match best {
            Some(b) if b <= d => Some(b),
            _ => Some(d),
        })
        .unwrap_or_else(T::zero)
    }
}

impl<T: Scalar> From<(Point2<T>, Point2<T>)> for Segment2<T> {
    fn from((start, end): (Point2<T>, Point2<T>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 3.0, 4.0);
        let r = s.reversed();
        assert_eq!(r.start, s.end);
        assert_eq!(r.end, s.start);
        assert_eq!(s.length_squared(), 25.0);
    }

    #[test]
    fn test_closest_point_clamps() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let (p, t) = s.closest_point(&Point2::new(-5.0, 3.0));
        assert_eq!(p, Point2::new(0.0, 0.0));
        assert_eq!(t, 0.0);

        let (p, t) = s.closest_point(&Point2::new(4.0, 3.0));
        assert_eq!(p, Point2::new(4.0, 0.0));
        assert_eq!(t, 0.4);
    }

    #[test]
    fn test_distance_to_point() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.distance_squared_to_point(&Point2::new(5.0, 3.0)), 9.0);
        assert_eq!(s.distance_squared_to_point(&Point2::new(13.0, 4.0)), 25.0);
    }

    #[test]
    fn test_degenerate_segment() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 1.0, 1.0);
        assert!(s.is_degenerate());
        assert_eq!(s.distance_squared_to_point(&Point2::new(4.0, 5.0)), 25.0);
    }

    #[test]
    fn test_distance_between_parallel_segments() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let b = Segment2::from_coords(10.0, 2.0, 0.0, 2.0);
        assert_eq!(a.distance_squared_to_segment(&b), 4.0);
    }

    #[test]
    fn test_distance_between_crossing_segments() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
        let b = Segment2::from_coords(0.0, 2.0, 2.0, 0.0);
        assert_eq!(a.distance_squared_to_segment(&b), 0.0);
    }
}
