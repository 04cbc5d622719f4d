use super::*;
use crate::schema::ReliefConfig;

#[test]
fn default_config_is_valid() {
    assert!(validate(&ReliefConfig::default()).is_ok());
}

#[test]
fn bad_background_color_rejected() {
    let mut config = ReliefConfig::default();
    config.window.background = "black".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.background"));
}

#[test]
fn pixel_ratio_range() {
    let mut config = ReliefConfig::default();
    config.window.max_pixel_ratio = 8.0;
    assert!(validate(&config).is_err());
    config.window.max_pixel_ratio = 1.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn far_must_exceed_near() {
    let mut config = ReliefConfig::default();
    config.camera.near = 10.0;
    config.camera.far = 5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.far"));
}

#[test]
fn damping_factor_zero_rejected() {
    let mut config = ReliefConfig::default();
    config.controls.damping_factor = 0.0;
    assert!(validate(&config).is_err());
}

#[test]
fn inverted_distance_range_rejected() {
    let mut config = ReliefConfig::default();
    config.controls.min_distance = 5.0;
    config.controls.max_distance = 1.0;
    assert!(validate(&config).is_err());
}

#[test]
fn curve_segments_zero_rejected() {
    let mut config = ReliefConfig::default();
    config.text.curve_segments = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("text.curve_segments"));
}

#[test]
fn errors_are_collected_not_short_circuited() {
    let mut config = ReliefConfig::default();
    config.text.size = 0.0;
    config.camera.fov = 0.0;
    config.text.bevel.segments = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("text.size"));
    assert!(err.contains("camera.fov"));
    assert!(err.contains("text.bevel.segments"));
    assert_eq!(err.matches("; ").count(), 2);
}

#[test]
fn nan_rejected() {
    let mut config = ReliefConfig::default();
    config.text.depth = f32::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn long_debounce_rejected() {
    let mut config = ReliefConfig::default();
    config.input.debounce_ms = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("input.debounce_ms"));

    config.input.debounce_ms = 250;
    assert!(validate(&config).is_ok());
}
