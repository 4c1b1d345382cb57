//! Polygon validation.
//!
//! # Example
//!
//! ```
//! use coverage_sweep::polygon::{is_simple, Polygon};
//!
//! let square = Polygon::<f64>::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
//! assert!(is_simple(&square));
//!
//! // A figure-8 polygon that crosses itself
//! let figure8 = Polygon::<f64>::from_coords(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]).unwrap();
//! assert!(!is_simple(&figure8));
//! ```

use super::core::Polygon;
use crate::error::Precondition;
use crate::primitives::Scalar;
use crate::tolerance::{point_on_segment, segments_intersect};

/// Checks that no two edges meet except adjacent edges at their shared vertex.
///
/// Repeated consecutive vertices and edges that fold back onto their
/// neighbour are rejected too.
pub fn is_simple<T: Scalar>(polygon: &Polygon<T>) -> bool {
    let n = polygon.vertices.len();
    if n < 3 {
        return false;
    }

    for i in 0..n {
        let a = polygon.edge(i);
        if a.is_degenerate() {
            return false;
        }

        // Adjacent edge: only the shared vertex may be common.
        let next = polygon.edge((i + 1) % n);
        if point_on_segment(&next.end, &a) || point_on_segment(&a.start, &next) {
            return false;
        }

        // Non-adjacent edges must be disjoint.
        for j in (i + 2)..n {
            if (j + 1) % n == i {
                continue;
            }
            if segments_intersect(&a, &polygon.edge(j)) {
                return false;
            }
        }
    }

    true
}

/// Checks the vertex count, simplicity and counter-clockwise winding.
pub fn validate_polygon<T: Scalar>(polygon: &Polygon<T>) -> Result<(), Precondition> {
    if polygon.len() < 3 {
        return Err(Precondition::TooFewVertices {
            count: polygon.len(),
        });
    }
    if !is_simple(polygon) {
        return Err(Precondition::NotSimple);
    }
    if !polygon.is_counter_clockwise() {
        return Err(Precondition::NotCounterClockwise);
    }
    Ok(())
}
