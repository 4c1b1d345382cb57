//! Approximate lengths.

use crate::primitives::{Scalar, Vec2};

/// Rescales `v` to the given length.
///
/// Exact when `|v|^2` is a perfect square of the scalar type (axis-aligned
/// vectors, Pythagorean triples); otherwise the length is off by the rounding
/// of one square root. Returns `None` for the zero vector.
pub fn scaled_to_length<T: Scalar>(v: &Vec2<T>, length: &T) -> Option<Vec2<T>> {
    let magnitude = v.magnitude_squared().sqrt_nearest();
    if magnitude.is_zero() {
        return None;
    }
    Some(v.scaled(&(length.clone() / magnitude)))
}

/// Euclidean distance from a squared distance, as `f64`.
#[inline]
pub fn approx_distance<T: Scalar>(distance_squared: &T) -> f64 {
    distance_squared.to_f64_lossy().max(0.0).sqrt()
}
