//! Camera, controls, text and input validation.

use super::helpers::{validate_range, validate_range_f64};
use crate::schema::ReliefConfig;

pub(super) fn validate_camera(errors: &mut Vec<String>, config: &ReliefConfig) {
    let c = &config.camera;
    validate_range_f64(errors, "camera.fov", c.fov as f64, 1.0, 179.0);
    validate_range_f64(errors, "camera.near", c.near as f64, 1e-4, 1e4);
    if c.far <= c.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            c.far, c.near
        ));
    }
    if c.position.iter().any(|v| !v.is_finite()) {
        errors.push("camera.position must be finite".to_string());
    }
}

pub(super) fn validate_controls(errors: &mut Vec<String>, config: &ReliefConfig) {
    let c = &config.controls;
    if c.damping_factor <= 0.0 || c.damping_factor > 1.0 || c.damping_factor.is_nan() {
        errors.push(format!(
            "controls.damping_factor = {} is out of range (0, 1]",
            c.damping_factor
        ));
    }
    validate_range_f64(errors, "controls.rotate_speed", c.rotate_speed as f64, 0.0, 100.0);
    validate_range_f64(errors, "controls.zoom_speed", c.zoom_speed as f64, 0.0, 100.0);
    validate_range_f64(errors, "controls.pan_speed", c.pan_speed as f64, 0.0, 100.0);
    if c.min_distance < 0.0 || c.max_distance < c.min_distance {
        errors.push(format!(
            "controls distance range [{}, {}] is invalid",
            c.min_distance, c.max_distance
        ));
    }
}

pub(super) fn validate_text(errors: &mut Vec<String>, config: &ReliefConfig) {
    let t = &config.text;
    validate_range_f64(errors, "text.size", t.size as f64, 1e-3, 100.0);
    validate_range_f64(errors, "text.depth", t.depth as f64, 0.0, 100.0);
    validate_range(errors, "text.curve_segments", t.curve_segments, 1, 64);
    validate_range_f64(errors, "text.anchor_factor", t.anchor_factor as f64, -10.0, 10.0);

    let b = &t.bevel;
    validate_range(errors, "text.bevel.segments", b.segments, 1, 32);
    validate_range_f64(errors, "text.bevel.thickness", b.thickness as f64, 0.0, 10.0);
    validate_range_f64(errors, "text.bevel.size", b.size as f64, -10.0, 10.0);
    validate_range_f64(errors, "text.bevel.offset", b.offset as f64, -10.0, 10.0);
}

/// Upper bound for `input.debounce_ms`.
const MAX_DEBOUNCE_MS: u64 = 10_000;

pub(super) fn validate_input(errors: &mut Vec<String>, config: &ReliefConfig) {
    let ms = config.input.debounce_ms;
    if ms > MAX_DEBOUNCE_MS {
        errors.push(format!(
            "input.debounce_ms = {ms} is out of range [0, {MAX_DEBOUNCE_MS}]"
        ));
    }
}
