//! 02 - Drag Orbit
//!
//! A scripted drag session: the auto-orbit runs for a while, a pointer
//! drag takes over (freezing the auto pair and steering the XW/YW angles),
//! then release hands control back.
//!
//! This example demonstrates:
//! - The two orbit regimes and the transitions between them
//! - Feeding pointer positions into OrbitState the way an event loop would
//!
//! Run with: `cargo run --example 02_drag_orbit`

use wire4d::config::AppConfig;
use wire4d::{FrameSystem, OrbitState, Tesseract};

fn main() {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut system = FrameSystem::new(Tesseract::default());
    let mut orbit = OrbitState::new(config.orbit.to_params());

    let report = |label: &str, orbit: &OrbitState| {
        println!(
            "{label:12} xz = {:+.3}  zw = {:+.3}  xw = {:+.3}  yw = {:+.3}  dragging = {}",
            orbit.angle_xz(),
            orbit.angle_zw(),
            orbit.angle_xw(),
            orbit.angle_yw(),
            orbit.is_dragging(),
        );
    };

    // Phase 1: free-running auto-orbit
    for _ in 0..60 {
        system.update(&mut orbit);
    }
    report("auto-orbit", &orbit);

    // Phase 2: primary button down, a slow pull left and up
    orbit.pointer_down(480.0, 270.0);
    for step in 1..=30 {
        orbit.pointer_move(480.0 - step as f64 * 4.0, 270.0 - step as f64 * 2.0);
        system.update(&mut orbit);
    }
    report("dragging", &orbit);

    // Phase 3: release; the auto pair picks up where it was frozen
    orbit.pointer_up();
    for _ in 0..60 {
        system.update(&mut orbit);
    }
    report("released", &orbit);
}
