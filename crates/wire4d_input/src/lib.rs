//! Pointer input handling for wire4d
//!
//! This crate translates winit pointer events into orbit-state updates,
//! providing classic drag-to-rotate controls.

mod pointer;

pub use pointer::PointerController;
