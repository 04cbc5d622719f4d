//! Text geometry style and placement.

use serde::{Deserialize, Serialize};

/// Bevel applied to the extruded glyph edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BevelConfig {
    pub enabled: bool,
    /// Depth of the bevel along the extrusion axis.
    pub thickness: f32,
    /// How far the bevel extends outward from the glyph outline.
    pub size: f32,
    pub offset: f32,
    pub segments: u32,
}

impl Default for BevelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            thickness: 0.03,
            size: 0.02,
            offset: 0.0,
            segments: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Placeholder shown until the first key press.
    pub initial: String,
    /// Glyph em size in world units.
    pub size: f32,
    /// Extrusion depth in world units.
    pub depth: f32,
    /// Straight segments per outline curve.
    pub curve_segments: u32,
    /// After each rebuild the mesh x position is `-anchor_factor * width`.
    pub anchor_factor: f32,
    pub bevel: BevelConfig,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            initial: "This is Three.js".into(),
            size: 0.5,
            depth: 0.2,
            curve_segments: 12,
            anchor_factor: 0.2,
            bevel: BevelConfig::default(),
        }
    }
}
