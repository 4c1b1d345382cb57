//! Plans a sweep over a notched field and writes it as SVG.
//!
//! Run with: cargo run --example coverage_svg [output.svg]

use coverage_sweep::io::plan_to_svg;
use coverage_sweep::{best_sweep_direction, compute_sweep, Direction2, Exact, Polygon, SweepConfig};
use std::fs::File;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "coverage.svg".to_string());

    // A field with a notch cut into its east side.
    let field = Polygon::<Exact>::from_coords(&[
        (0.0, 0.0),
        (12.0, 0.0),
        (12.0, 3.0),
        (6.0, 4.5),
        (12.0, 6.0),
        (12.0, 9.0),
        (0.0, 9.0),
    ])
    .ok_or("field coordinates must be finite")?;

    let offset = Exact::from_integer(1.into());
    let direction = best_sweep_direction(&field).unwrap_or_else(Direction2::x_axis);
    let config = SweepConfig::new(offset, direction);
    let plan = compute_sweep(&field, &config)?;

    println!(
        "{} passes, {} connector legs, {} waypoints",
        plan.passes().count(),
        plan.connectors().count(),
        plan.waypoints.len()
    );

    let mut file = File::create(&path)?;
    file.write_all(plan_to_svg(&field, &plan).as_bytes())?;
    println!("Wrote {path}");
    Ok(())
}
