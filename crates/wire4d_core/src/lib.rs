//! Core wireframe state for the wire4d kernel
//!
//! This crate owns the polytope model and the per-frame orbit machinery:
//!
//! - [`Tesseract`] - the static 16-vertex / 32-edge hypercube skeleton
//! - [`OrbitParams`] / [`OrbitState`] - the angle state machine driven by
//!   auto-rotation and pointer drags
//! - [`FrameSystem`] / [`EdgeSegment`] - per-frame recomputation of the
//!   projected edge buffer handed to the renderer

mod tesseract;
mod orbit;
mod frame;

pub use tesseract::Tesseract;
pub use orbit::{OrbitParams, OrbitState};
pub use frame::{EdgeSegment, FrameSystem};
