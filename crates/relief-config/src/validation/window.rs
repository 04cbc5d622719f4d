//! Window section validation.

use relief_common::Color;

use super::helpers::{validate_range, validate_range_f64};
use crate::schema::ReliefConfig;

pub(super) fn validate_window(errors: &mut Vec<String>, config: &ReliefConfig) {
    let w = &config.window;
    validate_range(errors, "window.width", w.width, 1, 16384);
    validate_range(errors, "window.height", w.height, 1, 16384);
    validate_range_f64(errors, "window.max_pixel_ratio", w.max_pixel_ratio, 0.5, 4.0);

    if Color::from_hex(&w.background).is_none() {
        errors.push(format!(
            "window.background = {:?} is not a #rrggbb color",
            w.background
        ));
    }
}
