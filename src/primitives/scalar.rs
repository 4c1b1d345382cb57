//! Number types the geometry kernel can run on.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, Num, Signed, ToPrimitive, Zero};
use std::fmt;

/// Exact rational number type, the recommended scalar for planning.
///
/// Every predicate in this crate is a sign test on sums of products, so with
/// `Exact` coordinates orientation, monotonicity and intersection answers are
/// never perturbed by rounding.
pub type Exact = BigRational;

/// A coordinate type for the geometry kernel.
///
/// Implemented for `f64` (fast, rounding-prone) and [`Exact`].
pub trait Scalar:
    Clone
    + fmt::Debug
    + fmt::Display
    + PartialOrd
    + Num
    + Signed
    + ToPrimitive
    + FromPrimitive
    + Send
    + Sync
    + 'static
{
    /// Nearest representable square root of a non-negative value.
    ///
    /// This is the only approximate operation the kernel exposes. It is
    /// exact for `Exact` values whose numerator and denominator are perfect
    /// squares. Negative inputs yield zero.
    fn sqrt_nearest(&self) -> Self;

    /// Converts from `f64`, returning `None` for non-finite input.
    #[inline]
    fn from_f64_checked(value: f64) -> Option<Self> {
        if value.is_finite() {
            Self::from_f64(value)
        } else {
            None
        }
    }

    /// Lossy conversion to `f64` for reporting and metric weights.
    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// The constant two.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns `true` if the value is greater than zero.
    ///
    /// Unlike [`Signed::is_positive`], `+0.0` is not positive.
    #[inline]
    fn is_strictly_positive(&self) -> bool {
        *self > Self::zero()
    }

    /// Returns `true` if the value is less than zero.
    ///
    /// Unlike [`Signed::is_negative`], `-0.0` is not negative.
    #[inline]
    fn is_strictly_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl Scalar for f64 {
    #[inline]
    fn sqrt_nearest(&self) -> Self {
        if *self <= 0.0 {
            0.0
        } else {
            f64::sqrt(*self)
        }
    }
}

impl Scalar for BigRational {
    fn sqrt_nearest(&self) -> Self {
        if !self.is_strictly_positive() {
            return Self::zero();
        }

        let numer = self.numer();
        let denom = self.denom();
        let numer_root = numer.sqrt();
        let denom_root = denom.sqrt();
        if &(&numer_root * &numer_root) == numer && &(&denom_root * &denom_root) == denom {
            return BigRational::new(numer_root, denom_root);
        }

        self.to_f64()
            .map(f64::sqrt)
            .and_then(BigRational::from_float)
            .unwrap_or_else(|| BigRational::from_integer(BigInt::zero()))
    }
}
