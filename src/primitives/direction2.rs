//! Sweep headings.

use super::{Scalar, Vec2};

/// A non-zero heading in the plane.
///
/// Only the orientation of the stored vector matters; it is never normalized,
/// so a direction built from exact components stays exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction2<T> {
    vector: Vec2<T>,
}

impl<T: Scalar> Direction2<T> {
    /// Creates a direction from a vector. Returns `None` for the zero vector.
    pub fn new(vector: Vec2<T>) -> Option<Self> {
        if vector.is_zero() {
            None
        } else {
            Some(Self { vector })
        }
    }

    /// Creates a direction from its components. Returns `None` for `(0, 0)`.
    #[inline]
    pub fn from_components(dx: T, dy: T) -> Option<Self> {
        Self::new(Vec2::new(dx, dy))
    }

    /// The positive x axis.
    #[inline]
    pub fn x_axis() -> Self {
        Self {
            vector: Vec2::new(T::one(), T::zero()),
        }
    }

    /// The positive y axis.
    #[inline]
    pub fn y_axis() -> Self {
        Self {
            vector: Vec2::new(T::zero(), T::one()),
        }
    }

    /// Heading at `radians` counter-clockwise from the x axis.
    ///
    /// The trigonometry runs in `f64`, so the result is only as exact as the
    /// rounded cosine and sine.
    pub fn from_angle(radians: f64) -> Option<Self> {
        let dx = T::from_f64_checked(radians.cos())?;
        let dy = T::from_f64_checked(radians.sin())?;
        Self::from_components(dx, dy)
    }

    /// The underlying (non-normalized) vector.
    #[inline]
    pub fn vector(&self) -> &Vec2<T> {
        &self.vector
    }

    /// The heading rotated 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self {
            vector: self.vector.perpendicular(),
        }
    }

    /// The opposite heading.
    #[inline]
    pub fn opposite(&self) -> Self {
        Self {
            vector: -self.vector.clone(),
        }
    }
}
