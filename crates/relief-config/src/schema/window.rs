//! Window and surface configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
    Fullscreen,
}

/// Window appearance and surface settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    pub startup_mode: StartupMode,
    /// Upper bound on the device pixel ratio used for the drawing buffer.
    pub max_pixel_ratio: f64,
    /// Present with FIFO (display-synchronized) when true.
    pub vsync: bool,
    /// Clear color as `#rrggbb`.
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Relief".into(),
            width: 1280,
            height: 800,
            startup_mode: StartupMode::Windowed,
            max_pixel_ratio: 2.0,
            vsync: true,
            background: "#000000".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Relief");
        assert_eq!(config.startup_mode, StartupMode::Windowed);
        assert!((config.max_pixel_ratio - 2.0).abs() < f64::EPSILON);
        assert!(config.vsync);
    }

    #[test]
    fn startup_mode_serialization() {
        let json = serde_json::to_string(&StartupMode::Fullscreen).unwrap();
        assert_eq!(json, "\"fullscreen\"");
        let mode: StartupMode = serde_json::from_str("\"maximized\"").unwrap();
        assert_eq!(mode, StartupMode::Maximized);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("max_pixel_ratio = 1.5\n").unwrap();
        assert!((config.max_pixel_ratio - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.width, 1280);
        assert_eq!(config.background, "#000000");
    }
}
