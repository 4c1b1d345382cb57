//! Output utilities for polygons and sweep plans.
//!
//! Provides SVG serialization for inspecting planned paths.

mod svg;

pub use svg::{plan_to_svg, polygon_to_svg_path, polyline_to_svg_path};
