//! Pointer controller for drag-to-rotate input
//!
//! Controls:
//! - Left button + drag horizontally: XW plane rotation
//! - Left button + drag vertically: YW plane rotation
//! - While the button is held, auto-orbit is suspended
//!
//! winit reports button presses and cursor motion as separate events, so
//! the controller caches the last cursor position to know where a drag
//! begins.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

use wire4d_core::OrbitState;

/// Translates winit pointer events into [`OrbitState`] transitions
///
/// Only the primary (left) button drives the orbit; other buttons are
/// ignored.
#[derive(Debug, Default)]
pub struct PointerController {
    cursor: (f64, f64),
}

impl PointerController {
    pub fn new() -> Self {
        Self { cursor: (0.0, 0.0) }
    }

    /// Process a `WindowEvent::CursorMoved`
    ///
    /// Always refreshes the cached cursor position; while a drag is in
    /// progress the motion also feeds the orbit's drag angles (the orbit's
    /// dragging flag stands in for the pressed-buttons mask).
    pub fn process_cursor_moved(
        &mut self,
        position: PhysicalPosition<f64>,
        orbit: &mut OrbitState,
    ) {
        self.cursor = (position.x, position.y);
        orbit.pointer_move(position.x, position.y);
    }

    /// Process a `WindowEvent::MouseInput`
    ///
    /// A left-button press starts a drag at the cached cursor position; a
    /// left-button release ends it. Other buttons do nothing.
    pub fn process_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        orbit: &mut OrbitState,
    ) {
        if button != MouseButton::Left {
            return;
        }

        match state {
            ElementState::Pressed => orbit.pointer_down(self.cursor.0, self.cursor.1),
            ElementState::Released => orbit.pointer_up(),
        }
    }

    /// Last cursor position seen, in window coordinates
    #[inline]
    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }
}
