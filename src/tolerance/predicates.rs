//! Exact geometric predicates.
//!
//! None of these take a tolerance. With [`Exact`](crate::primitives::Exact)
//! coordinates they return the mathematically correct answer; with `f64`
//! they are as good as the rounding of a 2x2 determinant.

use crate::primitives::{Point2, Scalar, Segment2};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear.
    Collinear,
}

/// Computes the orientation of three points.
///
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line
#[inline]
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Orientation {
    let cross = a.vector_to(b).cross(&a.vector_to(c));

    if cross.is_strictly_positive() {
        Orientation::CounterClockwise
    } else if cross.is_strictly_negative() {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks if `p` lies on the closed segment.
pub fn point_on_segment<T: Scalar>(p: &Point2<T>, segment: &Segment2<T>) -> bool {
    if orient2d(&segment.start, &segment.end, p) != Orientation::Collinear {
        return false;
    }
    within_box(p, &segment.start, &segment.end)
}

/// Tests if two closed segments share at least one point.
pub fn segments_intersect<T: Scalar>(s1: &Segment2<T>, s2: &Segment2<T>) -> bool {
    let o1 = orient2d(&s1.start, &s1.end, &s2.start);
    let o2 = orient2d(&s1.start, &s1.end, &s2.end);
    let o3 = orient2d(&s2.start, &s2.end, &s1.start);
    let o4 = orient2d(&s2.start, &s2.end, &s1.end);

    if o1 != o2
        && o3 != o4
        && o1 != Orientation::Collinear
        && o2 != Orientation::Collinear
        && o3 != Orientation::Collinear
        && o4 != Orientation::Collinear
    {
        return true;
    }

    point_on_segment(&s2.start, s1)
        || point_on_segment(&s2.end, s1)
        || point_on_segment(&s1.start, s2)
        || point_on_segment(&s1.end, s2)
}

/// Tests if two segments cross at a single point interior to both.
///
/// Touching at an endpoint and collinear overlap do not count.
pub fn segments_properly_intersect<T: Scalar>(s1: &Segment2<T>, s2: &Segment2<T>) -> bool {
    let o1 = orient2d(&s1.start, &s1.end, &s2.start);
    let o2 = orient2d(&s1.start, &s1.end, &s2.end);
    let o3 = orient2d(&s2.start, &s2.end, &s1.start);
    let o4 = orient2d(&s2.start, &s2.end, &s1.end);

    let strict = |o: Orientation| o != Orientation::Collinear;
    strict(o1) && strict(o2) && strict(o3) && strict(o4) && o1 != o2 && o3 != o4
}

/// Returns `true` if a gap is strictly narrower than half the offset.
///
/// Compares `4 * gap_sq < offset^2`, so no square root is involved and the
/// tie `gap == offset / 2` is decided exactly (as "not below").
#[inline]
pub fn gap_below_half_offset<T: Scalar>(gap_sq: &T, offset: &T) -> bool {
    let four = T::two() * T::two();
    four * gap_sq.clone() < offset.clone() * offset.clone()
}

fn within_box<T: Scalar>(p: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> bool {
    let between = |v: &T, lo: &T, hi: &T| {
        if lo <= hi {
            lo <= v && v <= hi
        } else {
            hi <= v && v <= lo
        }
    };
    between(&p.x, &a.x, &b.x) && between(&p.y, &a.y, &b.y)
}
