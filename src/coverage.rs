//! Coverage planning over several regions.
//!
//! A region is a polygon that has already been decomposed into a sweepable
//! cell. Each region is swept independently along its best direction (see
//! [`best_sweep_direction`]).
//!
//! # Example
//!
//! ```
//! use coverage_sweep::coverage::{CoveragePlanner, PlannerConfig};
//! use coverage_sweep::polygon::Polygon;
//!
//! let field = Polygon::<f64>::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 4.0), (0.0, 4.0)]).unwrap();
//! let planner = CoveragePlanner::new(PlannerConfig::default());
//!
//! let plans = planner.plan(&[field]);
//! let plan = plans[0].as_ref().unwrap();
//! // Passes run along the long side: y = 0, 2, 4.
//! assert_eq!(plan.passes().count(), 3);
//! ```

use crate::error::{PlanError, Precondition};
use crate::polygon::{validate_polygon, Polygon};
use crate::primitives::Scalar;
use crate::sweep::{best_sweep_direction, compute_sweep, SweepConfig, SweepPlan};

/// Pass spacing for a downward-facing camera.
///
/// The footprint width at `height` above ground is
/// `2 * height * tan(field_of_view / 2)`, with the field of view in degrees;
/// neighbouring passes share the fraction `overlap` of it.
///
/// # Errors
///
/// [`Precondition::InvalidOverlap`] if `overlap` is not in `[0, 1]`, and
/// [`Precondition::NonFiniteFootprint`] if the width cannot be represented.
///
/// # Example
///
/// ```
/// use coverage_sweep::coverage::sweep_offset;
///
/// let offset: f64 = sweep_offset(0.1, 30.0, 90.0).unwrap();
/// assert!((offset - 54.0).abs() < 1e-9);
/// assert!(sweep_offset::<f64>(1.2, 30.0, 90.0).is_err());
/// ```
pub fn sweep_offset<T: Scalar>(
    overlap: f64,
    height: f64,
    field_of_view: f64,
) -> Result<T, Precondition> {
    if !(0.0..=1.0).contains(&overlap) {
        return Err(Precondition::InvalidOverlap);
    }
    let width = 2.0 * height * (field_of_view.to_radians() / 2.0).tan();
    T::from_f64_checked((width * (1.0 - overlap)).abs()).ok_or(Precondition::NonFiniteFootprint)
}

/// Settings shared by every region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig<T> {
    /// Pass spacing and coverage radius.
    pub offset: T,
    /// Route between passes through the region interior.
    pub connect_passes: bool,
}

impl<T: Scalar> Default for PlannerConfig<T> {
    fn default() -> Self {
        Self {
            offset: T::two(),
            connect_passes: true,
        }
    }
}

impl<T: Scalar> PlannerConfig<T> {
    /// Spaces passes for a camera flown at `height`; see [`sweep_offset`].
    pub fn with_camera(
        self,
        overlap: f64,
        height: f64,
        field_of_view: f64,
    ) -> Result<Self, Precondition> {
        Ok(self.with_offset(sweep_offset(overlap, height, field_of_view)?))
    }

    /// Sets the pass spacing.
    pub fn with_offset(mut self, offset: T) -> Self {
        self.offset = offset;
        self
    }

    /// Enables or disables connector routing.
    pub fn with_connect_passes(mut self, connect: bool) -> Self {
        self.connect_passes = connect;
        self
    }
}

/// Plans sweeps for a set of pre-decomposed regions.
#[derive(Debug, Clone)]
pub struct CoveragePlanner<T> {
    config: PlannerConfig<T>,
}

impl<T: Scalar> CoveragePlanner<T> {
    /// Creates a planner with the given settings.
    pub fn new(config: PlannerConfig<T>) -> Self {
        Self { config }
    }

    /// The planner settings.
    #[inline]
    pub fn config(&self) -> &PlannerConfig<T> {
        &self.config
    }

    /// Sweeps one region along its best direction.
    pub fn plan_region(&self, region: &Polygon<T>) -> Result<SweepPlan<T>, PlanError> {
        validate_polygon(region)?;
        let direction = best_sweep_direction(region).ok_or(Precondition::NotWeaklyMonotone)?;
        let config = SweepConfig::new(self.config.offset.clone(), direction)
            .connect_passes(self.config.connect_passes);
        compute_sweep(region, &config)
    }

    /// Sweeps every region, returning one result per region in input order.
    ///
    /// A failing region does not affect the others; its error is logged and
    /// returned in its slot.
    pub fn plan(&self, regions: &[Polygon<T>]) -> Vec<Result<SweepPlan<T>, PlanError>> {
        regions
            .iter()
            .enumerate()
            .map(|(i, region)| {
                self.plan_region(region).map_err(|err| {
                    log::warn!("could not plan region {i}: {err}");
                    err
                })
            })
            .collect()
    }
}
