//! coverage-sweep - Boustrophedon coverage paths for polygonal regions
//!
//! Plans back-and-forth sweeps over weakly monotone polygons so that every
//! point of the region lies within a given offset of the path. Geometry is
//! generic over a [`Scalar`]: plug in `f64` for speed, or [`Exact`] rationals
//! when the topology of the path must not depend on rounding.
//!
//! # Example
//!
//! ```
//! use coverage_sweep::{compute_sweep, Direction2, Polygon, SweepConfig, SweepSegment};
//!
//! let square = Polygon::<f64>::from_coords(&[(0.0, 0.0), (3.0, 0.0), (3.0, 2.0), (0.0, 2.0)]).unwrap();
//! let config = SweepConfig::new(1.0, Direction2::x_axis());
//! let plan = compute_sweep(&square, &config).unwrap();
//!
//! assert_eq!(plan.passes().count(), 3);
//! assert!(matches!(plan.segments[0], SweepSegment::Pass(_)));
//! ```

pub mod coverage;
pub mod error;
pub mod io;
pub mod polygon;
pub mod primitives;
pub mod route;
pub mod sweep;
pub mod tolerance;

pub use coverage::{sweep_offset, CoveragePlanner, PlannerConfig};
pub use error::{PlanError, Precondition, RouteError, SweepStage};
pub use polygon::Polygon;
pub use primitives::{Direction2, Exact, Line2, Point2, Scalar, Segment2, Vec2};
pub use route::{ShortestPath, StraightLine, VisibilityGraph};
pub use sweep::{
    best_sweep_direction, compute_sweep, compute_sweep_with, SweepConfig, SweepPlan, SweepSegment,
};
