//! Weak monotonicity with respect to a sweep direction.

use super::core::Polygon;
use crate::primitives::{Line2, Scalar};
use std::cmp::Ordering;

/// Tests whether every line parallel to `line` meets the polygon boundary in
/// at most one connected piece on each side, i.e. the polygon is weakly
/// monotone with respect to the offset axis perpendicular to `line`.
///
/// Walking counter-clockwise from a vertex with the least signed distance
/// to `line`, distances must never decrease until a vertex with the greatest
/// distance is reached, and never increase from there back to the start.
/// Plateaus are allowed, which is what makes the monotonicity weak.
///
/// # Example
///
/// ```
/// use coverage_sweep::polygon::{is_weakly_monotone, Polygon};
/// use coverage_sweep::primitives::{Direction2, Line2, Point2};
///
/// let u_shape = Polygon::<f64>::from_coords(&[
///     (0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (2.0, 3.0),
///     (2.0, 1.0), (1.0, 1.0), (1.0, 3.0), (0.0, 3.0),
/// ]).unwrap();
///
/// // Horizontal sweep lines cut the prongs twice.
/// let horizontal = Line2::new(Point2::origin(), Direction2::x_axis());
/// assert!(!is_weakly_monotone(&u_shape, &horizontal));
///
/// // Vertical sweep lines meet it in one chord each.
/// let vertical = Line2::new(Point2::origin(), Direction2::y_axis());
/// assert!(is_weakly_monotone(&u_shape, &vertical));
/// ```
pub fn is_weakly_monotone<T: Scalar>(polygon: &Polygon<T>, line: &Line2<T>) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let keys: Vec<T> = polygon.vertices.iter().map(|v| line.side(v)).collect();
    let cmp = |a: &T, b: &T| a.partial_cmp(b).unwrap_or(Ordering::Equal);

    let mut min_idx = 0;
    let mut max_idx = 0;
    for i in 1..n {
        if cmp(&keys[i], &keys[min_idx]) == Ordering::Less {
            min_idx = i;
        }
        if cmp(&keys[i], &keys[max_idx]) == Ordering::Greater {
            max_idx = i;
        }
    }

    let chain_is = |from: usize, to: usize, bad: Ordering| {
        let mut i = from;
        while i != to {
            let j = (i + 1) % n;
            if cmp(&keys[j], &keys[i]) == bad {
                return false;
            }
            i = j;
        }
        true
    };

    chain_is(min_idx, max_idx, Ordering::Less) && chain_is(max_idx, min_idx, Ordering::Greater)
}
