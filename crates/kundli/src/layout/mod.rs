pub mod geometry;
pub mod rings;

pub use geometry::{distance_factor, polar_to_cartesian, position_of, PolarPosition};
pub use rings::{sign_segments, SignSegment, WheelGeometry};
