//! Visibility regions inside a simple polygon.
//!
//! The region seen from a viewpoint is recorded as the set of polygon
//! vertices it can see directly. That is all a shortest-path search needs:
//! interior shortest paths in a simple polygon bend only at vertices.
//!
//! # Example
//!
//! ```
//! use coverage_sweep::polygon::{compute_visibility_region, Polygon};
//! use coverage_sweep::primitives::Point2;
//!
//! let room = Polygon::<f64>::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
//! let region = compute_visibility_region(&room, &Point2::new(5.0, 5.0)).unwrap();
//! // In an empty room, every corner is visible
//! assert_eq!(region.visible_vertices().len(), 4);
//! ```

use super::core::Polygon;
use crate::error::RouteError;
use crate::primitives::{Point2, Scalar};

/// The part of a polygon visible from one viewpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityRegion<T> {
    viewpoint: Point2<T>,
    visible: Vec<usize>,
}

impl<T: Scalar> VisibilityRegion<T> {
    /// The point the region was computed from.
    #[inline]
    pub fn viewpoint(&self) -> &Point2<T> {
        &self.viewpoint
    }

    /// Indices of polygon vertices visible from the viewpoint, ascending.
    #[inline]
    pub fn visible_vertices(&self) -> &[usize] {
        &self.visible
    }

    /// Returns `true` if vertex `index` is visible from the viewpoint.
    #[inline]
    pub fn sees_vertex(&self, index: usize) -> bool {
        self.visible.binary_search(&index).is_ok()
    }
}

/// Computes the region of `polygon` visible from `point`.
///
/// Fails with [`RouteError::OutsidePolygon`] when the point is not inside or
/// on the boundary.
pub fn compute_visibility_region<T: Scalar>(
    polygon: &Polygon<T>,
    point: &Point2<T>,
) -> Result<VisibilityRegion<T>, RouteError> {
    if !polygon.contains(point) {
        let (x, y) = point.to_f64();
        return Err(RouteError::OutsidePolygon { x, y });
    }

    let visible = polygon
        .vertices
        .iter()
        .enumerate()
        .filter(|(_, v)| polygon.contains_segment(point, v))
        .map(|(i, _)| i)
        .collect();

    Ok(VisibilityRegion {
        viewpoint: point.clone(),
        visible,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_notch_hides_vertices() {
        let poly = notched();
        let region = compute_visibility_region(&poly, &Point2::new(4.0, 0.5)).unwrap();
        assert!(region.sees_vertex(1));
        assert!(region.sees_vertex(2));
        assert!(region.sees_vertex(3));
        // (4, 3) and (4, 4) are behind the notch.
        assert!(!region.sees_vertex(4));
        assert!(!region.sees_vertex(5));
    }

    #[test]
    fn test_viewpoint_on_boundary() {
        let poly = notched();
        let region = compute_visibility_region(&poly, &Point2::new(0.0, 2.0)).unwrap();
        assert_eq!(region.viewpoint(), &Point2::new(0.0, 2.0));
        assert_eq!(region.visible_vertices(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_outside_viewpoint_fails() {
        let poly = notched();
        assert_eq!(
            compute_visibility_region(&poly, &Point2::new(3.5, 2.0)),
            Err(RouteError::OutsidePolygon { x: 3.5, y: 2.0 })
        );
    }
}
