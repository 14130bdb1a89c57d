//! 4D Mathematics for the wire4d kernel
//!
//! This crate provides the vector type, plane rotations, and the 4D→3D
//! perspective projection used by the wireframe orbit system.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`RotationPlane`] - one of the six rotation planes in 4D space
//! - [`rotate`] - rotate a point within a single plane
//! - [`project`] - perspective-divide a 4D point down to 3D

mod vec4;
mod rotation;
mod projection;

pub use vec4::Vec4;
pub use rotation::{rotate, RotationPlane};
pub use projection::project;
