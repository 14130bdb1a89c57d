//! wire4d - 4D Wireframe Orbit Kernel
//!
//! wire4d keeps a tesseract wireframe turning: plane rotations in 4-space,
//! a perspective divide down to 3-space, and an orbit state machine that
//! refreshes a flat coordinate buffer once per frame for an external
//! renderer. Pointer drags override the auto-rotation while the primary
//! button is held.
//!
//! The workspace splits into:
//!
//! - [`wire4d_math`]: `Vec4`, the six plane rotations, the projection
//! - [`wire4d_core`]: the tesseract model, orbit state, frame updater
//! - [`wire4d_input`]: winit pointer-event translation
//!
//! This root crate adds layered configuration ([`config`]) and re-exports
//! the pieces an embedding application needs.

pub mod config;

pub use wire4d_core::{EdgeSegment, FrameSystem, OrbitParams, OrbitState, Tesseract};
pub use wire4d_input::PointerController;
pub use wire4d_math::{project, rotate, RotationPlane, Vec4};
