//! The boundary between exact predicates and approximate measurements.
//!
//! [`predicates`](self) holds every decision that changes the topology of a
//! sweep: orientation, segment contact, point-on-segment, and the half-offset
//! redundancy test for the final pass. They are sign tests on polynomial
//! expressions of the coordinates, exact for exact scalars.
//!
//! Functions re-exported from `measure` are the only places where a square
//! root is taken. Their results feed lengths (the offset translation and path
//! weights), never a yes/no geometric decision.

mod measure;
mod predicates;

pub use measure::{approx_distance, scaled_to_length};
pub use predicates::{
    gap_below_half_offset, orient2d, point_on_segment, segments_intersect,
    segments_properly_intersect, Orientation,
};
