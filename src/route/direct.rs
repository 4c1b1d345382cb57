//! Straight-line connector for convex polygons.

use super::ShortestPath;
use crate::error::RouteError;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Scalar};

/// Connects two points with a straight segment.
///
/// Only valid in convex polygons, where every pair of interior points sees
/// each other; [`StraightLine::new`] refuses anything else. No graph is
/// built, so it is the cheap choice when connecting passes in convex cells.
#[derive(Debug, Clone)]
pub struct StraightLine<T> {
    polygon: Polygon<T>,
}

impl<T: Scalar> StraightLine<T> {
    /// Returns `None` if the polygon is not convex.
    pub fn new(polygon: &Polygon<T>) -> Option<Self> {
        if polygon.is_convex() {
            Some(Self {
                polygon: polygon.clone(),
            })
        } else {
            None
        }
    }
}

impl<T: Scalar> ShortestPath<T> for StraightLine<T> {
    type Region = ();

    fn polygon(&self) -> &Polygon<T> {
        &self.polygon
    }

    fn visibility_region(&self, point: &Point2<T>) -> Result<(), RouteError> {
        if self.polygon.contains(point) {
            Ok(())
        } else {
            let (x, y) = point.to_f64();
            Err(RouteError::OutsidePolygon { x, y })
        }
    }

    fn solve(
        &self,
        start: &Point2<T>,
        _start_region: &(),
        goal: &Point2<T>,
        _goal_region: &(),
    ) -> Result<Vec<Point2<T>>, RouteError> {
        Ok(vec![start.clone(), goal.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::calculate_shortest_path;

    #[test]
    fn test_rejects_non_convex() {
        let notched = Polygon::<f64>::from_coords(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 1.0),
            (2.0, 2.0),
            (4.0, 3.0),
            (4.0, 4.0),
            (0.0, 4.0),
        ])
        .unwrap();
        assert!(StraightLine::new(&notched).is_none());
    }

    #[test]
    fn test_direct_path() {
        let square =
            Polygon::<f64>::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        let router = StraightLine::new(&square).unwrap();
        let path =
            calculate_shortest_path(&router, &Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0)).unwrap();
        assert_eq!(path, vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert!(router
            .visibility_region(&Point2::new(2.0, 0.0))
            .is_err());
    }
}
