//! Text string to centered, extruded geometry, and the placed mesh that
//! owns it.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use relief_config::schema::TextConfig;

use crate::font::{layout_text, Font};
use crate::geometry::{
    classify_contours, extrude_glyph, flatten, Bevel, ExtrudeSettings, GeometryError,
    TextGeometry,
};

/// Geometry parameters for a text mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Em size in world units.
    pub size: f32,
    pub curve_segments: u32,
    pub extrude: ExtrudeSettings,
}

impl From<&TextConfig> for TextStyle {
    fn from(config: &TextConfig) -> Self {
        let bevel = config.bevel.enabled.then_some(Bevel {
            thickness: config.bevel.thickness,
            size: config.bevel.size,
            offset: config.bevel.offset,
            segments: config.bevel.segments,
        });
        Self {
            size: config.size,
            curve_segments: config.curve_segments,
            extrude: ExtrudeSettings {
                depth: config.depth,
                bevel,
            },
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::from(&TextConfig::default())
    }
}

/// Builds text geometry from a shared font.
#[derive(Debug, Clone)]
pub struct TextMeshBuilder {
    font: Arc<Font>,
    style: TextStyle,
}

impl TextMeshBuilder {
    pub fn new(font: Arc<Font>, style: TextStyle) -> Self {
        Self { font, style }
    }

    /// Build centered geometry for `text`.
    ///
    /// An empty string (or one with only unrenderable characters) yields an
    /// empty geometry with the zero bounding box.
    pub fn build(&self, text: &str) -> Result<TextGeometry, GeometryError> {
        let mut vertices = Vec::new();
        for shape in layout_text(&self.font, text, self.style.size) {
            let contours = flatten(&shape.commands, self.style.curve_segments);
            if contours.is_empty() {
                continue;
            }
            let contours = classify_contours(contours);
            extrude_glyph(&contours, &self.style.extrude, &mut vertices)?;
        }

        let mut geometry = TextGeometry::new(vertices);
        geometry.center();
        Ok(geometry)
    }
}

/// Geometry placed in the world.
#[derive(Debug, Clone, Default)]
pub struct TextMesh {
    geometry: TextGeometry,
    pub position: Vec3,
}

impl TextMesh {
    /// A freshly created mesh sits at the origin.
    pub fn new(geometry: TextGeometry) -> Self {
        Self {
            geometry,
            position: Vec3::ZERO,
        }
    }

    pub fn geometry(&self) -> &TextGeometry {
        &self.geometry
    }

    /// Swap in rebuilt geometry and shift the mesh left by `anchor_factor`
    /// of its width. Returns the replaced geometry.
    pub fn replace_geometry(&mut self, geometry: TextGeometry, anchor_factor: f32) -> TextGeometry {
        let width = geometry.bounding_box().width();
        self.position.x = -anchor_factor * width;
        std::mem::replace(&mut self.geometry, geometry)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::typeface_font;

    fn builder(style: TextStyle) -> TextMeshBuilder {
        TextMeshBuilder::new(Arc::new(typeface_font()), style)
    }

    fn unit_style() -> TextStyle {
        TextStyle {
            size: 1.0,
            ..TextStyle::default()
        }
    }

    #[test]
    fn style_from_config() {
        let style = TextStyle::default();
        assert_eq!(style.size, 0.5);
        assert_eq!(style.curve_segments, 12);
        assert_eq!(style.extrude.depth, 0.2);
        let bevel = style.extrude.bevel.unwrap();
        assert_eq!(bevel.thickness, 0.03);
        assert_eq!(bevel.size, 0.02);
        assert_eq!(bevel.offset, 0.0);
        assert_eq!(bevel.segments, 5);

        let mut config = TextConfig::default();
        config.bevel.enabled = false;
        assert!(TextStyle::from(&config).extrude.bevel.is_none());
    }

    #[test]
    fn empty_text_builds_empty_geometry() {
        let geometry = builder(TextStyle::default()).build("").unwrap();
        assert!(geometry.is_empty());
        assert_eq!(geometry.bounding_box().width(), 0.0);
        assert_eq!(geometry.bounding_box().center(), Vec3::ZERO);
    }

    #[test]
    fn whitespace_only_builds_empty_geometry() {
        let geometry = builder(TextStyle::default()).build("  \n ").unwrap();
        assert!(geometry.is_empty());
    }

    #[test]
    fn geometry_is_centered() {
        let geometry = builder(TextStyle::default()).build("AO c").unwrap();
        assert!(!geometry.is_empty());
        assert!(geometry.bounding_box().center().length() < 1e-5);
    }

    #[test]
    fn bevelled_square_width() {
        // 1x1 square grown by the 0.02 bevel on each side.
        let geometry = builder(unit_style()).build("A").unwrap();
        let bb = geometry.bounding_box();
        assert!((bb.width() - 1.04).abs() < 1e-4);
        assert!((bb.size().z - 0.26).abs() < 1e-4);
    }

    #[test]
    fn unbevelled_square_width() {
        let mut style = unit_style();
        style.extrude.bevel = None;
        let geometry = builder(style).build("A").unwrap();
        let bb = geometry.bounding_box();
        assert!((bb.width() - 1.0).abs() < 1e-5);
        assert!((bb.size().z - 0.2).abs() < 1e-5);
    }

    #[test]
    fn advances_separate_glyphs() {
        let mut style = unit_style();
        style.extrude.bevel = None;
        // Second square starts at x = 1.2 and ends at 2.2.
        let geometry = builder(style).build("AA").unwrap();
        assert!((geometry.bounding_box().width() - 2.2).abs() < 1e-5);
    }

    #[test]
    fn missing_glyph_uses_fallback() {
        let geometry = builder(TextStyle::default()).build("Z").unwrap();
        assert!(!geometry.is_empty());
    }

    #[test]
    fn new_mesh_sits_at_origin() {
        let geometry = builder(TextStyle::default()).build("A").unwrap();
        let mesh = TextMesh::new(geometry);
        assert_eq!(mesh.position, Vec3::ZERO);
        assert_eq!(mesh.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn replace_geometry_offsets_by_anchor_factor() {
        let b = builder(unit_style());
        let mut mesh = TextMesh::new(b.build("A").unwrap());

        let rebuilt = b.build("AA").unwrap();
        let width = rebuilt.bounding_box().width();
        let old = mesh.replace_geometry(rebuilt, 0.2);

        assert!((old.bounding_box().width() - 1.04).abs() < 1e-4);
        assert!((mesh.position.x + 0.2 * width).abs() < 1e-6);
        assert_eq!(mesh.geometry().bounding_box().width(), width);
        assert_eq!(
            mesh.model_matrix().transform_point3(Vec3::ZERO),
            mesh.position
        );
    }

    #[test]
    fn replace_with_empty_geometry_resets_offset() {
        let b = builder(TextStyle::default());
        let mut mesh = TextMesh::new(b.build("A").unwrap());
        mesh.replace_geometry(b.build("AO").unwrap(), 0.2);
        assert!(mesh.position.x < 0.0);

        mesh.replace_geometry(b.build("").unwrap(), 0.2);
        assert_eq!(mesh.position.x, 0.0);
        assert!(mesh.geometry().is_empty());
    }
}
