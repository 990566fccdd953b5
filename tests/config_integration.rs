//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use vitrine::config::AppConfig;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("VTR_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("VTR_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_showcase_env_override() {
    std::env::set_var("VTR_SHOWCASE__NAME", "logo");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.showcase.name, "logo");
    std::env::remove_var("VTR_SHOWCASE__NAME");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("VTR_WINDOW__TITLE");
    std::env::remove_var("VTR_SHOWCASE__NAME");

    let config = AppConfig::load().unwrap();
    // Values from config/default.toml
    assert_eq!(config.window.title, "Vitrine");
    assert_eq!(config.showcase.name, "particles");
    assert!(config.window.vsync);
}
