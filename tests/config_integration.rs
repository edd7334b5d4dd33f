//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use wgpu_triangle::config::AppConfig;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("TRI_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("TRI_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_clear_color() {
    std::env::set_var("TRI_RENDERING__CLEAR_COLOR", "[0.0, 0.0, 0.0, 1.0]");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.rendering.clear_color, [0.0, 0.0, 0.0, 1.0]);
    std::env::remove_var("TRI_RENDERING__CLEAR_COLOR");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("TRI_WINDOW__TITLE");

    // Integration tests run with the crate root as working directory, so
    // config/default.toml is picked up
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Hello Triangle");
    assert_eq!(config.window.width, 640);
    assert_eq!(config.shaders.vertex_path, "shaders/triangle.vert.wgsl");
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_defaults() {
    std::env::remove_var("TRI_WINDOW__TITLE");

    let config = AppConfig::load_from("no/such/config/dir").unwrap();
    assert_eq!(config.window.title, "Hello Triangle");
    assert_eq!(config.rendering.clear_color, [0.2, 0.3, 0.3, 1.0]);
}
