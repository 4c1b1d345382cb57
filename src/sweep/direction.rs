//! Sweep direction selection.

use crate::polygon::{is_weakly_monotone, Polygon};
use crate::primitives::{Direction2, Line2, Point2, Scalar};

/// Picks the edge direction with the smallest polygon altitude.
///
/// Every edge direction for which the polygon is weakly monotone is a
/// candidate. The altitude is the polygon's extent perpendicular to the
/// direction, which is proportional to the number of passes a sweep along it
/// needs. The comparison is exact; ties go to the earliest edge.
///
/// Returns `None` if no edge direction admits a sweep.
///
/// # Example
///
/// ```
/// use coverage_sweep::polygon::Polygon;
/// use coverage_sweep::sweep::best_sweep_direction;
///
/// // A tall rectangle is swept fastest with vertical passes.
/// let tall = Polygon::<f64>::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 5.0), (0.0, 5.0)]).unwrap();
/// let dir = best_sweep_direction(&tall).unwrap();
/// assert_eq!(dir.vector().x, 0.0);
/// ```
pub fn best_sweep_direction<T: Scalar>(polygon: &Polygon<T>) -> Option<Direction2<T>> {
    let mut best: Option<(T, Direction2<T>)> = None;

    for edge in polygon.edges() {
        let Some(dir) = Direction2::new(edge.direction()) else {
            continue;
        };
        let axis = Line2::new(Point2::origin(), dir.clone());
        if !is_weakly_monotone(polygon, &axis) {
            continue;
        }

        let altitude_sq = altitude_squared(polygon, &axis);
        match &best {
            Some((current, _)) if *current <= altitude_sq => {}
            _ => best = Some((altitude_sq, dir)),
        }
    }

    if let Some((_, dir)) = &best {
        log::debug!("best sweep direction ({}, {})", dir.vector().x, dir.vector().y);
    }
    best.map(|(_, dir)| dir)
}

/// Squared extent of the polygon perpendicular to `axis`.
fn altitude_squared<T: Scalar>(polygon: &Polygon<T>, axis: &Line2<T>) -> T {
    let mut sides = polygon.vertices.iter().map(|v| axis.side(v));
    let Some(first) = sides.next() else {
        return T::zero();
    };
    let (lo, hi) = sides.fold((first.clone(), first), |(lo, hi), s| {
        let lo = if s < lo { s.clone() } else { lo };
        let hi = if s > hi { s } else { hi };
        (lo, hi)
    });
    let range = hi - lo;
    range.clone() * range / axis.direction.vector().magnitude_squared()
}
