//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! function; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod scene;
mod window;

#[cfg(test)]
mod tests;

use crate::schema::ReliefConfig;
use relief_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ReliefConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    scene::validate_camera(&mut errors, config);
    scene::validate_controls(&mut errors, config);
    scene::validate_text(&mut errors, config);
    scene::validate_input(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
