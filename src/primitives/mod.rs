//! Exact-capable geometric primitives.
//!
//! All types are generic over [`Scalar`]. With [`Exact`] coordinates every
//! construction here (translation, line/segment intersection, projection)
//! stays rational, so downstream predicates see the true geometry.

mod direction2;
mod line2;
mod point2;
mod scalar;
mod segment2;
mod vec2;

pub use direction2::Direction2;
pub use line2::{Line2, LineIntersection};
pub use point2::Point2;
pub use scalar::{Exact, Scalar};
pub use segment2::Segment2;
pub use vec2::Vec2;
