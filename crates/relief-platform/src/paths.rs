//! Platform directory resolution.

use std::fs;
use std::path::PathBuf;

use relief_common::PlatformError;

const APP_NAME: &str = "relief";

/// Returns the platform-specific configuration directory for Relief.
///
/// - macOS: `~/Library/Application Support/relief`
/// - Linux: `$XDG_CONFIG_HOME/relief` (defaults to `~/.config/relief`)
/// - Windows: `%APPDATA%\relief`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Relief.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Located at `data_dir()/crashes`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("crashes"))
}

/// Creates the config, data and crash report directories if missing.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, crash_report_dir()?] {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
        tracing::debug!(path = %dir.display(), "Directory ready");
    }
    Ok(())
}
