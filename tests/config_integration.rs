//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use wire4d::config::AppConfig;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("W4D_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("W4D_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_orbit_env_override() {
    std::env::set_var("W4D_ORBIT__AUTO_RATE", "0.05");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.orbit.auto_rate, 0.05);
    assert_eq!(config.orbit.to_params().auto_rate, 0.05);
    std::env::remove_var("W4D_ORBIT__AUTO_RATE");
}

#[test]
#[serial]
fn test_default_file_values() {
    std::env::remove_var("W4D_ORBIT__AUTO_RATE");
    std::env::remove_var("W4D_ORBIT__DRAG_SCALE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.orbit.auto_rate, 0.01);
    assert_eq!(config.orbit.drag_scale, 100.0);
    assert_eq!(config.window.width, 960);
    assert_eq!(config.window.height, 540);
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_defaults() {
    // No files, no env: extraction fills in the serde defaults
    let config = AppConfig::load_from("does_not_exist").unwrap();
    assert_eq!(config.orbit.auto_rate, 0.01);
    assert_eq!(config.debug.log_level, "info");
}
