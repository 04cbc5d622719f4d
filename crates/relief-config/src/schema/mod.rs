//! Configuration schema types for Relief.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the renderer was tuned for.

mod assets;
mod camera;
mod controls;
mod input;
mod logging;
mod text;
mod window;

pub use assets::*;
pub use camera::*;
pub use controls::*;
pub use input::*;
pub use logging::*;
pub use text::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Relief.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliefConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub text: TextConfig,
    pub assets: AssetsConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
