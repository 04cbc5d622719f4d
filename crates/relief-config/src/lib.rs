//! Relief configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use relief_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("font: {}", config.assets.font.display());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ReliefConfig;

use relief_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path.
///
/// The default path gets a commented template written on first run. The
/// result is validated; validation errors are returned to the caller.
pub fn load_config(path: Option<&Path>) -> Result<ReliefConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_rejects_invalid_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[camera]\nfov = 400.0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("camera.fov"));
    }

    #[test]
    fn load_config_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[text]\ninitial = \"Relief\"\n\n[input]\ndebounce_ms = 100\n")
            .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.text.initial, "Relief");
        assert_eq!(config.input.debounce_ms, 100);
        assert_eq!(config.camera.fov, 75.0);
    }
}
