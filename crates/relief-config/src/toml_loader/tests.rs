//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use relief_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_relief_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[text]
initial = "Rust"
size = 0.75

[window]
background = "#101010"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.text.initial, "Rust");
    assert_eq!(config.text.size, 0.75);
    assert_eq!(config.window.background, "#101010");
    // Defaults preserved
    assert_eq!(config.text.depth, 0.2);
    assert_eq!(config.camera.fov, 75.0);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_keeps_out_of_range_values_for_caller_to_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[text]\ncurve_segments = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.text.curve_segments, 0);
}

#[test]
fn write_and_load_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("relief").join("config.toml");

    write_template(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.text.initial, "This is Three.js");
    assert_eq!(config.window.max_pixel_ratio, 2.0);
}

#[test]
fn template_is_valid_toml_with_all_sections() {
    let content = template::default_config_toml();
    let parsed: toml::Value = toml::from_str(&content).unwrap();
    for section in ["window", "camera", "controls", "text", "assets", "input", "logging"] {
        assert!(parsed.get(section).is_some(), "missing [{section}]");
    }
}

#[test]
fn default_config_path_ends_with_relief_config() {
    let path = default_config_path().unwrap();
    assert_eq!(path.file_name().unwrap().to_str().unwrap(), "config.toml");
    assert!(path.parent().unwrap().ends_with("relief"));
}

#[test]
fn write_template_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[text]\ninitial = \"mine\"\n").unwrap();

    write_template(&path).unwrap();
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.text.initial, "mine");
}
