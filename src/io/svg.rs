//! SVG export of polygons and sweep plans.
//!
//! Coordinates are converted to `f64` for printing, so exact inputs render
//! with the nearest float.
//!
//! # Example
//!
//! ```
//! use coverage_sweep::io::{plan_to_svg, polygon_to_svg_path};
//! use coverage_sweep::polygon::Polygon;
//! use coverage_sweep::primitives::Direction2;
//! use coverage_sweep::sweep::{compute_sweep, SweepConfig};
//!
//! let square = Polygon::<f64>::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
//! assert_eq!(polygon_to_svg_path(&square), "M 0 0 L 4 0 L 4 4 L 0 4 Z");
//!
//! let plan = compute_sweep(&square, &SweepConfig::new(1.0, Direction2::x_axis())).unwrap();
//! let svg = plan_to_svg(&square, &plan);
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("class=\"pass\"").count(), 5);
//! ```

use crate::polygon::Polygon;
use crate::primitives::{Point2, Scalar};
use crate::sweep::{SweepPlan, SweepSegment};
use std::fmt::Write;

/// Converts a polyline to an SVG path string using M and L commands.
///
/// # Example
///
/// ```
/// use coverage_sweep::io::polyline_to_svg_path;
/// use coverage_sweep::primitives::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ];
///
/// let svg = polyline_to_svg_path(&points, true);
/// assert!(svg.starts_with("M"));
/// assert!(svg.ends_with("Z"));
/// ```
pub fn polyline_to_svg_path<T: Scalar>(points: &[Point2<T>], closed: bool) -> String {
    let mut result = String::new();
    for (i, p) in points.iter().enumerate() {
        let (x, y) = p.to_f64();
        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(result, "{cmd} {x} {y}");
    }

    if closed && !points.is_empty() {
        result.push_str(" Z");
    }

    result
}

/// Converts a polygon to a closed SVG path string.
pub fn polygon_to_svg_path<T: Scalar>(polygon: &Polygon<T>) -> String {
    polyline_to_svg_path(&polygon.vertices, true)
}

/// Renders a polygon and a sweep plan over it as a standalone SVG document.
///
/// The y axis points up. Passes are drawn solid, connectors dashed, and
/// single-point passes as dots. Each element carries a `class` attribute
/// (`outline`, `pass`, `connector`) for restyling.
pub fn plan_to_svg<T: Scalar>(polygon: &Polygon<T>, plan: &SweepPlan<T>) -> String {
    let (min_x, min_y, max_x, max_y) = bounds(polygon);
    let margin = ((max_x - min_x).max(max_y - min_y) * 0.05).max(1e-9);
    let stroke = margin / 4.0;
    let (vx, vy) = (min_x - margin, -(max_y + margin));
    let (vw, vh) = (max_x - min_x + 2.0 * margin, max_y - min_y + 2.0 * margin);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{vx} {vy} {vw} {vh}">"#
    );
    let _ = writeln!(svg, r#"<g transform="scale(1,-1)" stroke-width="{stroke}">"#);
    let _ = writeln!(
        svg,
        r##"<path class="outline" d="{}" fill="#eef" stroke="#336"/>"##,
        polygon_to_svg_path(polygon)
    );

    for segment in &plan.segments {
        match segment {
            SweepSegment::Pass(s) | SweepSegment::Connector(s) => {
                let class = if segment.is_pass() { "pass" } else { "connector" };
                let dash = if segment.is_pass() {
                    String::new()
                } else {
                    format!(r#" stroke-dasharray="{} {}""#, stroke * 2.0, stroke)
                };
                let (x1, y1) = s.start.to_f64();
                let (x2, y2) = s.end.to_f64();
                let _ = writeln!(
                    svg,
                    r##"<line class="{class}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="#c33"{dash}/>"##
                );
            }
            SweepSegment::Point(p) => {
                let (cx, cy) = p.to_f64();
                let _ = writeln!(
                    svg,
                    r##"<circle class="pass" cx="{cx}" cy="{cy}" r="{stroke}" fill="#c33"/>"##
                );
            }
        }
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn bounds<T: Scalar>(polygon: &Polygon<T>) -> (f64, f64, f64, f64) {
    polygon.vertices.iter().map(|v| v.to_f64()).fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(x0, y0, x1, y1), (x, y)| (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
    )
}
