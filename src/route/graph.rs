//! Vertex visibility graph with A* search.

use super::ShortestPath;
use crate::error::RouteError;
use crate::polygon::{compute_visibility_region, Polygon, VisibilityRegion};
use crate::primitives::{Point2, Scalar};
use crate::tolerance::approx_distance;
use petgraph::algo::astar;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Mutual visibility between the vertices of a simple polygon.
///
/// Built once per polygon; each query adds its two endpoints to a copy of
/// the graph. Visibility is decided exactly. Edge weights are `f64`
/// Euclidean lengths, so only the choice between near-equal paths is
/// subject to rounding.
///
/// # Example
///
/// ```
/// use coverage_sweep::polygon::Polygon;
/// use coverage_sweep::primitives::Point2;
/// use coverage_sweep::route::{calculate_shortest_path, VisibilityGraph};
///
/// // Square with a notch cut into the right side
/// let poly = Polygon::<f64>::from_coords(&[
///     (0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (2.0, 2.0),
///     (4.0, 3.0), (4.0, 4.0), (0.0, 4.0),
/// ]).unwrap();
/// let graph = VisibilityGraph::new(&poly);
///
/// let path = calculate_shortest_path(&graph, &Point2::new(4.0, 1.0), &Point2::new(4.0, 3.0)).unwrap();
/// assert_eq!(path, vec![Point2::new(4.0, 1.0), Point2::new(2.0, 2.0), Point2::new(4.0, 3.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct VisibilityGraph<T> {
    polygon: Polygon<T>,
    graph: UnGraph<Point2<T>, f64>,
}

impl<T: Scalar> VisibilityGraph<T> {
    /// Builds the graph over all vertex pairs whose connecting segment stays
    /// inside the polygon.
    pub fn new(polygon: &Polygon<T>) -> Self {
        let n = polygon.len();
        let mut graph = UnGraph::with_capacity(n, n * 2);
        let nodes: Vec<NodeIndex> = polygon
            .vertices
            .iter()
            .map(|v| graph.add_node(v.clone()))
            .collect();

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&polygon.vertices[i], &polygon.vertices[j]);
                if polygon.contains_segment(a, b) {
                    graph.add_edge(nodes[i], nodes[j], approx_distance(&a.distance_squared(b)));
                }
            }
        }

        log::debug!(
            "visibility graph: {} vertices, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Self {
            polygon: polygon.clone(),
            graph,
        }
    }

    /// Number of visible vertex pairs.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl<T: Scalar> ShortestPath<T> for VisibilityGraph<T> {
    type Region = VisibilityRegion<T>;

    fn polygon(&self) -> &Polygon<T> {
        &self.polygon
    }

    fn visibility_region(&self, point: &Point2<T>) -> Result<VisibilityRegion<T>, RouteError> {
        compute_visibility_region(&self.polygon, point)
    }

    fn solve(
        &self,
        start: &Point2<T>,
        start_region: &VisibilityRegion<T>,
        goal: &Point2<T>,
        goal_region: &VisibilityRegion<T>,
    ) -> Result<Vec<Point2<T>>, RouteError> {
        if self.polygon.contains_segment(start, goal) {
            return Ok(vec![start.clone(), goal.clone()]);
        }

        let mut graph = self.graph.clone();
        let source = graph.add_node(start.clone());
        let target = graph.add_node(goal.clone());
        for (node, region) in [(source, start_region), (target, goal_region)] {
            for &i in region.visible_vertices() {
                let weight = approx_distance(&region.viewpoint().distance_squared(&self.polygon.vertices[i]));
                graph.add_edge(node, NodeIndex::new(i), weight);
            }
        }

        let (_, nodes) = astar(
            &graph,
            source,
            |n| n == target,
            |e| *e.weight(),
            |n| approx_distance(&graph[n].distance_squared(goal)),
        )
        .ok_or(RouteError::NoPath)?;

        let mut path: Vec<Point2<T>> = nodes.into_iter().map(|n| graph[n].clone()).collect();
        // Query points that coincide with a vertex show up twice.
        path.dedup();
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::calculate_shortest_path;

    fn notched() -> Polygon<f64> {
        Polygon::from_coords(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 1.0),
            (2.0, 2.0),
            (4.0, 3.0),
            (4.0, 4.0),
            (0.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_square_graph_is_complete() {
        let square =
            Polygon::<f64>::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        assert_eq!(VisibilityGraph::new(&square).edge_count(), 6);
    }

    #[test]
    fn test_direct_path_when_visible() {
        let graph = VisibilityGraph::new(&notched());
        let path =
            calculate_shortest_path(&graph, &Point2::new(0.5, 0.5), &Point2::new(1.0, 3.0)).unwrap();
        assert_eq!(path, vec![Point2::new(0.5, 0.5), Point2::new(1.0, 3.0)]);
    }

    #[test]
    fn test_path_bends_at_reflex_vertex() {
        let graph = VisibilityGraph::new(&notched());
        let path =
            calculate_shortest_path(&graph, &Point2::new(3.5, 0.5), &Point2::new(3.5, 3.5)).unwrap();
        assert_eq!(
            path,
            vec![Point2::new(3.5, 0.5), Point2::new(2.0, 2.0), Point2::new(3.5, 3.5)]
        );
    }

    #[test]
    fn test_outside_query_fails() {
        let graph = VisibilityGraph::new(&notched());
        let result = calculate_shortest_path(&graph, &Point2::new(3.5, 2.0), &Point2::new(1.0, 1.0));
        assert_eq!(result, Err(RouteError::OutsidePolygon { x: 3.5, y: 2.0 }));
    }
}
