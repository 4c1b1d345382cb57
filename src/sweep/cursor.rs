//! Step-by-step sweep state.
//!
//! [`SweepContext`] holds everything fixed for one sweep, [`SweepCursor`] the
//! state that changes between passes. Each transition consumes the cursor
//! and returns the next one, so single steps can be driven and inspected in
//! isolation:
//!
//! ```
//! use coverage_sweep::polygon::Polygon;
//! use coverage_sweep::primitives::{Direction2, Point2};
//! use coverage_sweep::sweep::{SweepConfig, SweepContext, SweepCursor};
//! use coverage_sweep::route::StraightLine;
//!
//! let square = Polygon::<f64>::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
//! let config = SweepConfig::new(1.0, Direction2::x_axis()).connect_passes(false);
//! let ctx = SweepContext::new(&square, &config).unwrap();
//!
//! let cursor = SweepCursor::start(&ctx).unwrap();
//! let cursor = cursor.emit(None::<&StraightLine<f64>>).unwrap();
//! let cursor = cursor.advance(&ctx).unwrap();
//! assert_eq!(cursor.line().origin, Point2::new(0.0, 1.0));
//! assert!(cursor.is_reversed());
//! assert_eq!(cursor.plan().len(), 1);
//! ```

use super::{
    check_observability, find_sweep_segment, sort_vertices_to_line, Chord, SweepConfig, SweepPlan,
    SweepSegment,
};
use crate::error::{PlanError, Precondition, SweepStage};
use crate::polygon::{is_weakly_monotone, validate_polygon, Polygon};
use crate::primitives::{Direction2, Line2, Point2, Scalar, Segment2, Vec2};
use crate::route::{calculate_shortest_path, ShortestPath};
use crate::tolerance::{gap_below_half_offset, scaled_to_length};

/// Fixed inputs of a sweep, validated and preprocessed.
#[derive(Debug, Clone)]
pub struct SweepContext<'a, T> {
    polygon: &'a Polygon<T>,
    direction: Direction2<T>,
    sorted: Vec<Point2<T>>,
    offset: T,
    offset_sq: T,
    offset_vector: Vec2<T>,
    start_reversed: bool,
}

impl<'a, T: Scalar> SweepContext<'a, T> {
    /// Validates `polygon` and `config` and precomputes the vertex order and
    /// the translation between passes.
    ///
    /// Fails if the polygon has fewer than three vertices, is not simple, is
    /// not counter-clockwise, or is not weakly monotone with respect to the
    /// sweep direction. The offset must be positive and large enough to move
    /// a line through any vertex.
    pub fn new(polygon: &'a Polygon<T>, config: &SweepConfig<T>) -> Result<Self, PlanError> {
        validate_polygon(polygon)?;
        config.validate()?;

        let axis = Line2::new(Point2::origin(), config.direction.clone());
        if !is_weakly_monotone(polygon, &axis) {
            return Err(Precondition::NotWeaklyMonotone.into());
        }

        // Passes advance to the left of the sweep direction.
        let offset_vector =
            scaled_to_length(config.direction.perpendicular().vector(), &config.offset)
                .ok_or(Precondition::DegenerateDirection)?;
        if offset_vector.is_zero() {
            return Err(Precondition::OffsetTooSmall.into());
        }
        // In f64 a tiny offset can vanish when added to large coordinates.
        let advances = polygon.vertices.iter().all(|v| {
            Line2::new(v.clone(), config.direction.clone())
                .has_on_positive_side(&v.translated(&offset_vector))
        });
        if !advances {
            return Err(Precondition::OffsetTooSmall.into());
        }

        Ok(Self {
            polygon,
            direction: config.direction.clone(),
            sorted: sort_vertices_to_line(polygon, &axis),
            offset: config.offset.clone(),
            offset_sq: config.offset.clone() * config.offset.clone(),
            offset_vector,
            start_reversed: config.start_reversed,
        })
    }

    /// The polygon being swept.
    #[inline]
    pub fn polygon(&self) -> &Polygon<T> {
        self.polygon
    }

    /// Vertices ordered along the sweep axis.
    #[inline]
    pub fn sorted_vertices(&self) -> &[Point2<T>] {
        &self.sorted
    }

    /// Translation from one pass to the next.
    #[inline]
    pub fn offset_vector(&self) -> &Vec2<T> {
        &self.offset_vector
    }

    fn line_through(&self, point: &Point2<T>) -> Line2<T> {
        Line2::new(point.clone(), self.direction.clone())
    }

    // The context always holds at least three vertices.
    fn front(&self) -> &Point2<T> {
        &self.sorted[0]
    }

    fn back(&self) -> &Point2<T> {
        &self.sorted[self.sorted.len() - 1]
    }
}

/// The evolving state of a sweep.
#[derive(Debug, Clone)]
pub struct SweepCursor<T> {
    line: Line2<T>,
    chord: Option<Chord<T>>,
    reversed: bool,
    plan: SweepPlan<T>,
}

impl<T: Scalar> SweepCursor<T> {
    /// Places the first sweep line through the nearest vertex.
    pub fn start(ctx: &SweepContext<'_, T>) -> Result<Self, PlanError> {
        let line = ctx.line_through(ctx.front());
        let chord = find_sweep_segment(ctx.polygon, &line).ok_or(PlanError::ChordComputation {
            stage: SweepStage::Start,
        })?;

        Ok(Self {
            line,
            chord: Some(chord),
            reversed: ctx.start_reversed,
            plan: SweepPlan::default(),
        })
    }

    /// The current sweep line.
    #[inline]
    pub fn line(&self) -> &Line2<T> {
        &self.line
    }

    /// The chord waiting to be emitted, `None` once the sweep is over.
    #[inline]
    pub fn chord(&self) -> Option<&Chord<T>> {
        self.chord.as_ref()
    }

    /// Whether the current chord is traversed along the sweep direction.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// The path planned so far.
    #[inline]
    pub fn plan(&self) -> &SweepPlan<T> {
        &self.plan
    }

    /// Returns `true` once no chord is left to emit.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.chord.is_none()
    }

    /// Consumes the cursor and returns the planned path.
    pub fn finish(self) -> SweepPlan<T> {
        self.plan
    }

    /// Appends the current chord to the plan in the current orientation.
    ///
    /// With a router, the previous pass is first joined to this one along the
    /// shortest interior path. Every intermediate point of that path becomes
    /// a waypoint, and the legs leading to them become connectors. The last
    /// leg ends where the pass begins and is not recorded separately.
    pub fn emit<R>(mut self, router: Option<&R>) -> Result<Self, PlanError>
    where
        R: ShortestPath<T> + ?Sized,
    {
        let Some(chord) = self.chord.as_ref() else {
            return Ok(self);
        };
        let pass = if self.reversed {
            chord.segment.reversed()
        } else {
            chord.segment.clone()
        };

        let from = self.plan.waypoints.last().cloned();
        if let (Some(router), Some(from)) = (router, from) {
            let path = calculate_shortest_path(router, &from, &pass.start)?;
            log::trace!("connecting {} to {} over {} points", from, pass.start, path.len());
            for leg in path[..path.len() - 1].windows(2) {
                self.plan
                    .segments
                    .push(SweepSegment::Connector(Segment2::new(leg[0].clone(), leg[1].clone())));
                self.plan.waypoints.push(leg[1].clone());
            }
        }

        log::debug!(
            "sweep {} from {} to {}",
            self.plan.passes().count(),
            pass.start,
            pass.end
        );

        self.plan.waypoints.push(pass.start.clone());
        if pass.is_degenerate() {
            self.plan.segments.push(SweepSegment::Point(pass.start));
        } else {
            self.plan.waypoints.push(pass.end.clone());
            self.plan.segments.push(SweepSegment::Pass(pass));
        }

        Ok(self)
    }

    /// Moves to the next sweep line and computes its chord.
    ///
    /// The line advances by one offset. Once it leaves the polygon, a closing
    /// line through the farthest vertex is tried instead, unless it lies less
    /// than half an offset beyond the last pass. If a vertex between the last
    /// pass and the new one would stay uncovered, the new line is moved back
    /// onto that vertex. The orientation flips on every step.
    pub fn advance(mut self, ctx: &SweepContext<'_, T>) -> Result<Self, PlanError> {
        let Some(prev) = self.chord.take() else {
            return Ok(self);
        };

        let moved = self.line.translated(&ctx.offset_vector);
        if !self.line.has_on_positive_side(&moved.origin) {
            return Err(Precondition::OffsetTooSmall.into());
        }
        self.line = moved;
        let mut next = find_sweep_segment(ctx.polygon, &self.line);

        if next.is_none() {
            let closing = ctx.line_through(ctx.back());
            let last = find_sweep_segment(ctx.polygon, &closing).ok_or(
                PlanError::ChordComputation {
                    stage: SweepStage::Final,
                },
            )?;
            let gap_sq = prev.segment.distance_squared_to_segment(&last.segment);
            if gap_below_half_offset(&gap_sq, &ctx.offset) {
                log::debug!("final sweep redundant, finishing");
                return Ok(self);
            }
            self.line = closing;
            next = Some(last);
        }

        if let Some(current) = next.as_ref() {
            if let Some(vertex) =
                check_observability(&prev, current, &ctx.sorted, &ctx.offset_sq).cloned()
            {
                log::debug!("vertex {vertex} not observable, adding extra sweep");
                self.line = ctx.line_through(&vertex);
                next = Some(find_sweep_segment(ctx.polygon, &self.line).ok_or(
                    PlanError::ChordComputation {
                        stage: SweepStage::Corrective,
                    },
                )?);
            }
        }

        self.chord = next;
        self.reversed = !self.reversed;
        Ok(self)
    }
}
