//! Core TOML config loading: read from path or platform default.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::schema::ReliefConfig;
use relief_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Directory under the platform config dir that holds `config.toml`.
const APP_DIR: &str = "relief";
const CONFIG_FILE: &str = "config.toml";

fn write_error(path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("cannot write {}: {e}", path.display()))
}

/// `<platform config dir>/relief/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left untouched.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(write_error(path, e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| write_error(path, e))?;

    info!(path = %path.display(), "Wrote config template");
    Ok(())
}

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation is left to the
/// caller so a config with out-of-range values can still be inspected.
pub fn load_from_path(path: &Path) -> Result<ReliefConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: ReliefConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/relief/config.toml`
/// On Linux: `~/.config/relief/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ReliefConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            write_template(&path)?;
            Ok(ReliefConfig::default())
        }
        Err(e) => Err(e),
    }
}
