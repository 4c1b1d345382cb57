//! Shortest interior paths used to connect sweep passes.
//!
//! The planner only talks to the [`ShortestPath`] trait, so the routing
//! strategy can be swapped: [`VisibilityGraph`] handles any simple polygon,
//! [`StraightLine`] is a shortcut for convex ones.

mod direct;
mod graph;

pub use direct::StraightLine;
pub use graph::VisibilityGraph;

use crate::error::RouteError;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Scalar};

/// A router for shortest paths between two points inside a polygon.
pub trait ShortestPath<T: Scalar> {
    /// Per-point precomputation passed back into [`solve`](Self::solve).
    type Region;

    /// The polygon paths are confined to.
    fn polygon(&self) -> &Polygon<T>;

    /// Computes what is visible from `point`.
    fn visibility_region(&self, point: &Point2<T>) -> Result<Self::Region, RouteError>;

    /// Finds the shortest interior path from `start` to `goal`, both included.
    fn solve(
        &self,
        start: &Point2<T>,
        start_region: &Self::Region,
        goal: &Point2<T>,
        goal_region: &Self::Region,
    ) -> Result<Vec<Point2<T>>, RouteError>;
}

/// Queries both visibility regions and solves, checking the result has at
/// least its two endpoints.
pub fn calculate_shortest_path<T, R>(
    router: &R,
    start: &Point2<T>,
    goal: &Point2<T>,
) -> Result<Vec<Point2<T>>, RouteError>
where
    T: Scalar,
    R: ShortestPath<T> + ?Sized,
{
    let start_region = router.visibility_region(start).map_err(|err| {
        log::warn!("cannot compute visibility region from start query point {start}: {err}");
        err
    })?;
    let goal_region = router.visibility_region(goal).map_err(|err| {
        log::warn!("cannot compute visibility region from goal query point {goal}: {err}");
        err
    })?;

    let path = router
        .solve(start, &start_region, goal, &goal_region)
        .map_err(|err| {
            log::warn!("cannot compute shortest path from {start} to {goal}: {err}");
            err
        })?;

    if path.len() < 2 {
        log::warn!("shortest path too short");
        return Err(RouteError::PathTooShort { len: path.len() });
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Router that always answers with a single point.
    struct Stub(Polygon<f64>);

    impl ShortestPath<f64> for Stub {
        type Region = ();

        fn polygon(&self) -> &Polygon<f64> {
            &self.0
        }

        fn visibility_region(&self, _point: &Point2<f64>) -> Result<(), RouteError> {
            Ok(())
        }

        fn solve(
            &self,
            start: &Point2<f64>,
            _: &(),
            _: &Point2<f64>,
            _: &(),
        ) -> Result<Vec<Point2<f64>>, RouteError> {
            Ok(vec![start.clone()])
        }
    }

    #[test]
    fn test_short_path_is_rejected() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        let stub = Stub(poly);
        let result = calculate_shortest_path(&stub, &Point2::new(0.1, 0.1), &Point2::new(0.2, 0.2));
        assert_eq!(result, Err(RouteError::PathTooShort { len: 1 }));
    }
}
