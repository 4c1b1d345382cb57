//! 2D point type.

use super::{Scalar, Vec2};
use std::fmt;
use std::ops::{Add, Sub};

/// A point in the plane.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Builds a point from `f64` coordinates.
    ///
    /// Returns `None` if either coordinate is not finite. For [`Exact`]
    /// scalars the conversion is exact: the binary value of the float is kept.
    ///
    /// [`Exact`]: super::Exact
    pub fn from_f64(x: f64, y: f64) -> Option<Self> {
        Some(Self::new(T::from_f64_checked(x)?, T::from_f64_checked(y)?))
    }

    /// Lossy `f64` coordinates.
    #[inline]
    pub fn to_f64(&self) -> (f64, f64) {
        (self.x.to_f64_lossy(), self.y.to_f64_lossy())
    }

    /// Vector from `self` to `other`.
    #[inline]
    pub fn vector_to(&self, other: &Self) -> Vec2<T> {
        Vec2::new(
            other.x.clone() - self.x.clone(),
            other.y.clone() - self.y.clone(),
        )
    }

    /// Returns this point moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: &Vec2<T>) -> Self {
        Self::new(
            self.x.clone() + offset.x.clone(),
            self.y.clone() + offset.y.clone(),
        )
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        self.vector_to(other).magnitude_squared()
    }

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        let two = T::two();
        Self::new(
            (self.x.clone() + other.x.clone()) / two.clone(),
            (self.y.clone() + other.y.clone()) / two,
        )
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<T> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Scalar> Add<Vec2<T>> for Point2<T> {
    type Output = Self;

    #[inline]
    fn add(self, offset: Vec2<T>) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

impl<T: Scalar> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
