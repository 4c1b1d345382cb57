//! 2D vector type for directions and offsets.

use super::Scalar;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector representing a direction or offset.
///
/// Generic over [`Scalar`]; nothing here rounds, so every operation is exact
/// for exact scalars.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Returns `true` if both components are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x.clone() * other.x.clone() + self.y.clone() * other.y.clone()
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        self.x.clone() * other.y.clone() - self.y.clone() * other.x.clone()
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns a vector perpendicular to this one (rotated 90 degrees counter-clockwise).
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self {
            x: -self.y.clone(),
            y: self.x.clone(),
        }
    }

    /// Multiplies both components by `factor`.
    #[inline]
    pub fn scaled(&self, factor: &T) -> Self {
        Self {
            x: self.x.clone() * factor.clone(),
            y: self.y.clone() * factor.clone(),
        }
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self {
            x: self.x * scalar.clone(),
            y: self.y * scalar,
        }
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Scalar> Default for Vec2<T> {
    fn default() -> Self {
        Self::zero()
    }
}
