//! Boustrophedon sweep generation.
//!
//! A sweep covers a weakly monotone polygon with straight passes parallel to
//! a direction, spaced one offset apart and traversed in alternating
//! directions. Boundary vertices that would end up farther than the offset
//! from both neighbouring passes get a corrective pass through them. When
//! passes are connected, each hand-off is routed along the shortest interior
//! path.
//!
//! # Example
//!
//! ```
//! use coverage_sweep::polygon::Polygon;
//! use coverage_sweep::primitives::{Direction2, Exact};
//! use coverage_sweep::sweep::{compute_sweep, SweepConfig};
//! use num_traits::FromPrimitive;
//!
//! let square = Polygon::<Exact>::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
//! let offset = Exact::from_f64(0.25).unwrap();
//! let config = SweepConfig::new(offset, Direction2::x_axis());
//!
//! let plan = compute_sweep(&square, &config).unwrap();
//! assert_eq!(plan.passes().count(), 5); // y = 0, 0.25, 0.5, 0.75, 1
//! ```

mod cursor;
mod direction;
mod intersect;
mod observe;
mod order;
mod planner;

pub use cursor::{SweepContext, SweepCursor};
pub use direction::best_sweep_direction;
pub use intersect::{find_intersections, find_sweep_segment};
pub use observe::check_observability;
pub use order::sort_vertices_to_line;
pub use planner::{compute_sweep, compute_sweep_with};

use crate::error::Precondition;
use crate::primitives::{Direction2, Line2, Point2, Scalar, Segment2};

/// The interior chord cut from the polygon by one sweep line.
///
/// The segment runs against the sweep direction (from the far end of the
/// line to the near end); the planner reverses it on alternate passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord<T> {
    /// Outermost boundary intersections of the line.
    pub segment: Segment2<T>,
    /// The sweep line the chord lies on.
    pub line: Line2<T>,
}

impl<T: Scalar> Chord<T> {
    /// Returns `true` if the line only touches the polygon in one point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.segment.is_degenerate()
    }
}

/// One element of a planned path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepSegment<T> {
    /// A coverage pass along a chord.
    Pass(Segment2<T>),
    /// A pass whose chord degenerated to a single touching point.
    Point(Point2<T>),
    /// A leg of an interior path joining two passes.
    Connector(Segment2<T>),
}

impl<T: Scalar> SweepSegment<T> {
    /// Returns `true` for passes, including single-point passes.
    #[inline]
    pub fn is_pass(&self) -> bool {
        !matches!(self, SweepSegment::Connector(_))
    }

    /// The element as a segment; a point becomes a zero-length segment.
    pub fn to_segment(&self) -> Segment2<T> {
        match self {
            SweepSegment::Pass(s) | SweepSegment::Connector(s) => s.clone(),
            SweepSegment::Point(p) => Segment2::new(p.clone(), p.clone()),
        }
    }
}

/// The result of a sweep: the ordered path elements and the waypoints a
/// vehicle visits when flying them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPlan<T> {
    /// Path elements in traversal order.
    pub segments: Vec<SweepSegment<T>>,
    /// Points visited in order: pass endpoints and connector bends.
    pub waypoints: Vec<Point2<T>>,
}

impl<T> Default for SweepPlan<T> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            waypoints: Vec::new(),
        }
    }
}

impl<T: Scalar> SweepPlan<T> {
    /// Returns `true` if nothing was planned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of path elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The coverage passes, skipping connectors.
    pub fn passes(&self) -> impl Iterator<Item = &SweepSegment<T>> + '_ {
        self.segments.iter().filter(|s| s.is_pass())
    }

    /// The connector legs.
    pub fn connectors(&self) -> impl Iterator<Item = &Segment2<T>> + '_ {
        self.segments.iter().filter_map(|s| match s {
            SweepSegment::Connector(c) => Some(c),
            _ => None,
        })
    }
}

/// Parameters of a single sweep.
///
/// # Example
///
/// ```
/// use coverage_sweep::primitives::Direction2;
/// use coverage_sweep::sweep::SweepConfig;
///
/// let config = SweepConfig::new(2.0_f64, Direction2::x_axis())
///     .start_reversed(true)
///     .connect_passes(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig<T> {
    /// Spacing between passes and coverage radius.
    pub offset: T,
    /// Heading of the passes.
    pub direction: Direction2<T>,
    /// Traverse the first pass along the sweep direction instead of against it.
    pub start_reversed: bool,
    /// Route hand-offs between passes through the polygon interior.
    pub connect_passes: bool,
}

impl<T: Scalar> SweepConfig<T> {
    /// Creates a configuration with connected passes and the default start
    /// orientation.
    pub fn new(offset: T, direction: Direction2<T>) -> Self {
        Self {
            offset,
            direction,
            start_reversed: false,
            connect_passes: true,
        }
    }

    /// Sets the orientation of the first pass.
    pub fn start_reversed(mut self, reversed: bool) -> Self {
        self.start_reversed = reversed;
        self
    }

    /// Enables or disables connector routing.
    pub fn connect_passes(mut self, connect: bool) -> Self {
        self.connect_passes = connect;
        self
    }

    /// Checks that the offset is positive.
    pub fn validate(&self) -> Result<(), Precondition> {
        if self.offset.is_strictly_positive() {
            Ok(())
        } else {
            Err(Precondition::NonPositiveOffset)
        }
    }
}
