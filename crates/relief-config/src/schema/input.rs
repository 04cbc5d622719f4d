//! Keyboard input configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Trailing-edge debounce before rebuilding the text mesh.
    /// `0` rebuilds on every edit.
    pub debounce_ms: u64,
}
