//! Sweep entry points.

use super::{SweepConfig, SweepContext, SweepCursor, SweepPlan};
use crate::error::PlanError;
use crate::polygon::Polygon;
use crate::primitives::Scalar;
use crate::route::{ShortestPath, StraightLine, VisibilityGraph};

/// Plans a boustrophedon sweep over `polygon`.
///
/// When `config.connect_passes` is set, hand-offs between passes are routed
/// through a [`VisibilityGraph`] built for the polygon. Either the whole path
/// is returned or an error; there is no partial result.
///
/// # Errors
///
/// - [`PlanError::GeometryPrecondition`] for invalid input, before any work.
/// - [`PlanError::ChordComputation`] if a required sweep line misses the
///   polygon.
/// - [`PlanError::Pathfinding`] if two passes cannot be connected.
pub fn compute_sweep<T: Scalar>(
    polygon: &Polygon<T>,
    config: &SweepConfig<T>,
) -> Result<SweepPlan<T>, PlanError> {
    let ctx = SweepContext::new(polygon, config)?;
    if config.connect_passes {
        let graph = VisibilityGraph::new(polygon);
        run(&ctx, Some(&graph))
    } else {
        run(&ctx, None::<&StraightLine<T>>)
    }
}

/// Like [`compute_sweep`], but connects passes with the given router.
///
/// The router is only consulted when `config.connect_passes` is set. It must
/// route inside `polygon`.
pub fn compute_sweep_with<T, R>(
    polygon: &Polygon<T>,
    config: &SweepConfig<T>,
    router: &R,
) -> Result<SweepPlan<T>, PlanError>
where
    T: Scalar,
    R: ShortestPath<T> + ?Sized,
{
    let ctx = SweepContext::new(polygon, config)?;
    run(&ctx, config.connect_passes.then_some(router))
}

fn run<T, R>(ctx: &SweepContext<'_, T>, router: Option<&R>) -> Result<SweepPlan<T>, PlanError>
where
    T: Scalar,
    R: ShortestPath<T> + ?Sized,
{
    let mut cursor = SweepCursor::start(ctx)?;
    while !cursor.is_done() {
        cursor = cursor.emit(router)?.advance(ctx)?;
    }

    let plan = cursor.finish();
    log::debug!(
        "planned {} passes with {} waypoints",
        plan.passes().count(),
        plan.waypoints.len()
    );
    Ok(plan)
}
