//! Orbit state machine for the wireframe animation
//!
//! Two regimes drive the four active rotation angles:
//!
//! - **Auto-orbit** (no drag in progress): each frame the XZ and ZW plane
//!   angles advance by a fixed step, keeping the wireframe turning on its
//!   own.
//! - **Drag-override** (primary button held): the auto step is suspended
//!   and pointer motion feeds the XW (horizontal) and YW (vertical) plane
//!   angles instead. Releasing the button resumes auto-orbit from wherever
//!   the angles ended up.
//!
//! Angles are plain radians and are never normalized; every consumer is a
//! periodic trig function.

/// Tunable constants for the orbit animation
///
/// Defaults: 0.01 radians of auto-rotation per frame, 100 pixels of drag
/// per radian.
#[derive(Clone, Copy, Debug)]
pub struct OrbitParams {
    /// Auto-orbit step per frame, in radians
    pub auto_rate: f32,
    /// Pixels of pointer travel per radian of drag rotation
    pub drag_scale: f64,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            auto_rate: 0.01,
            drag_scale: 100.0,
        }
    }
}

impl OrbitParams {
    /// Builder: set the auto-orbit step per frame
    pub fn with_auto_rate(mut self, rate: f32) -> Self {
        self.auto_rate = rate;
        self
    }

    /// Builder: set the drag scale (pixels per radian)
    pub fn with_drag_scale(mut self, scale: f64) -> Self {
        self.drag_scale = scale;
        self
    }
}

/// Mutable orbit state: four plane angles, the drag flag, and the last
/// known pointer position
///
/// The state lives on one logical thread; pointer handlers and the frame
/// tick never run concurrently, so plain `&mut` access is all that is
/// needed.
#[derive(Clone, Debug)]
pub struct OrbitState {
    params: OrbitParams,

    // Turntable pair, advanced each undragged frame
    angle_xz: f32,
    angle_zw: f32,

    // Drag pair: horizontal pointer travel feeds XW, vertical feeds YW
    angle_xw: f32,
    angle_yw: f32,

    dragging: bool,
    cursor: (f64, f64),
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::new(OrbitParams::default())
    }
}

impl OrbitState {
    /// Create a new orbit state at rest: all angles zero, no drag
    pub fn new(params: OrbitParams) -> Self {
        Self {
            params,
            angle_xz: 0.0,
            angle_zw: 0.0,
            angle_xw: 0.0,
            angle_yw: 0.0,
            dragging: false,
            cursor: (0.0, 0.0),
        }
    }

    /// Advance the auto-orbit pair by one frame step
    ///
    /// Suspended while a drag is in progress; the drag pair is never
    /// touched here.
    pub fn advance_frame(&mut self) {
        if !self.dragging {
            self.angle_xz += self.params.auto_rate;
            self.angle_zw += self.params.auto_rate;
        }
    }

    /// Primary button pressed at (x, y): enter drag-override
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.cursor = (x, y);
        log::debug!("drag started at ({}, {})", x, y);
    }

    /// Pointer moved to (x, y)
    ///
    /// While dragging, pointer travel maps to angle deltas:
    /// `xw += (x0 - x1) / drag_scale`, `yw += (y0 - y1) / drag_scale`,
    /// where (x0, y0) is the previously recorded position. Outside a drag
    /// this is a no-op.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.dragging {
            return;
        }

        let (x0, y0) = self.cursor;
        self.angle_xw += ((x0 - x) / self.params.drag_scale) as f32;
        self.angle_yw += ((y0 - y) / self.params.drag_scale) as f32;
        self.cursor = (x, y);
    }

    /// Primary button released: resume auto-orbit
    pub fn pointer_up(&mut self) {
        self.dragging = false;
        log::debug!("drag released");
    }

    /// Whether a drag is currently overriding the auto-orbit
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current XZ plane angle (auto pair)
    #[inline]
    pub fn angle_xz(&self) -> f32 {
        self.angle_xz
    }

    /// Current ZW plane angle (auto pair)
    #[inline]
    pub fn angle_zw(&self) -> f32 {
        self.angle_zw
    }

    /// Current XW plane angle (horizontal drag)
    #[inline]
    pub fn angle_xw(&self) -> f32 {
        self.angle_xw
    }

    /// Current YW plane angle (vertical drag)
    #[inline]
    pub fn angle_yw(&self) -> f32 {
        self.angle_yw
    }

    /// The orbit parameters in use
    #[inline]
    pub fn params(&self) -> &OrbitParams {
        &self.params
    }
}
