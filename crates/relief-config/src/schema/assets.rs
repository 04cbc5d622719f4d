//! External resource locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Typeface JSON (`*.json`) or TrueType/OpenType font file.
    pub font: PathBuf,
    /// Matcap texture (PNG).
    pub matcap: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            font: PathBuf::from("assets/fonts/helvetiker_regular.typeface.json"),
            matcap: PathBuf::from("assets/textures/matcaps/8.png"),
        }
    }
}
