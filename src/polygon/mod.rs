//! Polygon representation and the exact queries the sweep relies on.
//!
//! This module provides:
//! - Signed area, winding and convexity
//! - Closed point location and segment containment
//! - Simplicity and winding validation
//! - Weak monotonicity with respect to a sweep direction
//! - Vertex visibility regions
//!
//! # Example
//!
//! ```
//! use coverage_sweep::polygon::{PointLocation, Polygon};
//! use coverage_sweep::primitives::Point2;
//!
//! let square = Polygon::<f64>::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
//! assert!(square.is_counter_clockwise());
//! assert_eq!(square.locate(&Point2::new(2.0, 1.0)), PointLocation::Boundary);
//! ```

mod core;
mod monotone;
mod validate;
mod visibility;

pub use core::{PointLocation, Polygon};
pub use monotone::is_weakly_monotone;
pub use validate::{is_simple, validate_polygon};
pub use visibility::{compute_visibility_region, VisibilityRegion};
