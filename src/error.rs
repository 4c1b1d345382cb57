//! Error types for sweep planning.

use thiserror::Error;

/// Errors that abort a planning call. No partial path is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The input violates a requirement checked before any work is done.
    #[error("geometry precondition violated: {0}")]
    GeometryPrecondition(#[from] Precondition),

    /// A sweep line that must meet the polygon did not.
    #[error("failed to compute {stage} sweep")]
    ChordComputation {
        /// Which sweep was being computed.
        stage: SweepStage,
    },

    /// A connector between two passes could not be routed.
    #[error("failed to connect sweeps: {0}")]
    Pathfinding(#[from] RouteError),
}

/// Input requirements of the sweep planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Precondition {
    /// The polygon has fewer than three vertices.
    #[error("polygon has {count} vertices, at least 3 required")]
    TooFewVertices {
        /// Number of vertices found.
        count: usize,
    },

    /// Non-adjacent edges touch or cross.
    #[error("polygon is not simple")]
    NotSimple,

    /// The signed area is not positive.
    #[error("outer polygon is not counterclockwise oriented")]
    NotCounterClockwise,

    /// Some sweep line would cross the boundary more than twice.
    #[error("polygon is not weakly monotone")]
    NotWeaklyMonotone,

    /// The offset is zero or negative.
    #[error("sweep offset must be positive")]
    NonPositiveOffset,

    /// The sweep direction is too short to measure in floating point.
    #[error("sweep direction has no measurable length")]
    DegenerateDirection,

    /// Translating a sweep line by the offset does not move it.
    #[error("sweep offset is too small to advance the sweep line")]
    OffsetTooSmall,

    /// The image overlap is not a fraction between 0 and 1.
    #[error("overlap has to be between 0 and 1")]
    InvalidOverlap,

    /// The camera footprint is not a finite number.
    #[error("camera footprint is not finite")]
    NonFiniteFootprint,
}

/// The point in the sweep at which a chord was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStage {
    /// The first sweep through the nearest extreme vertex.
    Start,
    /// The closing sweep through the farthest extreme vertex.
    Final,
    /// A corrective sweep through an unobservable vertex.
    Corrective,
}

impl std::fmt::Display for SweepStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepStage::Start => write!(f, "start"),
            SweepStage::Final => write!(f, "final"),
            SweepStage::Corrective => write!(f, "extra"),
        }
    }
}

/// Failures of the shortest-path collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The query point is not inside the polygon.
    #[error("cannot compute visibility polygon from query point ({x}, {y})")]
    OutsidePolygon {
        /// Query x coordinate (approximate).
        x: f64,
        /// Query y coordinate (approximate).
        y: f64,
    },

    /// The visibility graph has no path between the two points.
    #[error("no interior path between query points")]
    NoPath,

    /// The solver returned fewer than two points.
    #[error("shortest path too short: {len} points")]
    PathTooShort {
        /// Number of points returned.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PlanError::from(Precondition::NotWeaklyMonotone);
        assert_eq!(
            err.to_string(),
            "geometry precondition violated: polygon is not weakly monotone"
        );

        let err = PlanError::ChordComputation {
            stage: SweepStage::Final,
        };
        assert_eq!(err.to_string(), "failed to compute final sweep");

        let err = PlanError::from(Precondition::OffsetTooSmall);
        assert_eq!(
            err.to_string(),
            "geometry precondition violated: sweep offset is too small to advance the sweep line"
        );

        let err = PlanError::from(RouteError::NoPath);
        assert!(err.to_string().starts_with("failed to connect sweeps"));
    }
}
