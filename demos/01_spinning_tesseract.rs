//! 01 - Spinning Tesseract
//!
//! The simplest wire4d example: run the auto-orbit headlessly and watch
//! where the projected edges land.
//!
//! This example demonstrates:
//! - Loading configuration from config/default.toml
//! - Creating the tesseract model and orbit state
//! - Driving the frame updater the way a render loop would
//! - Reading the flat position buffer a renderer consumes
//!
//! Run with: `cargo run --example 01_spinning_tesseract`

use wire4d::config::AppConfig;
use wire4d::{FrameSystem, OrbitState, Tesseract};

fn main() {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!(
        "Auto-orbit at {} rad/frame (display target: {}x{})",
        config.orbit.auto_rate,
        config.window.width,
        config.window.height
    );

    let mut system = FrameSystem::new(Tesseract::default());
    let mut orbit = OrbitState::new(config.orbit.to_params());

    // Stand-in for the renderer's frame ticks
    for frame in 0..120u32 {
        system.update(&mut orbit);

        if frame % 30 == 0 {
            let segment = system.segments()[0];
            println!(
                "frame {:3}: edge 0 runs ({:+.3}, {:+.3}, {:+.3}) -> ({:+.3}, {:+.3}, {:+.3})",
                frame,
                segment.start[0], segment.start[1], segment.start[2],
                segment.end[0], segment.end[1], segment.end[2],
            );
        }
    }

    println!(
        "after 120 frames: xz = {:.2} rad, zw = {:.2} rad, buffer = {} floats",
        orbit.angle_xz(),
        orbit.angle_zw(),
        system.position_data().len(),
    );
}
