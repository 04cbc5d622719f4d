use glam::Vec2;
use ttf_parser::{name_id, Face, OutlineBuilder};

use super::outline::{GlyphOutline, PathCommand};
use super::{FontError, GlyphSource};

/// A TrueType/OpenType font. The face is re-parsed from the owned bytes on
/// each lookup; table parsing is cheap and this keeps the type `'static`.
pub(super) struct OpenTypeFont {
    data: Vec<u8>,
    family_name: String,
    units_per_em: f32,
    line_height: f32,
}

impl OpenTypeFont {
    pub(super) fn parse(data: Vec<u8>) -> Result<Self, FontError> {
        let face = Face::parse(&data, 0).map_err(|e| FontError::OpenType(e.to_string()))?;
        if face.number_of_glyphs() == 0 {
            return Err(FontError::Empty);
        }

        let family_name = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == name_id::FAMILY)
            .find_map(|name| name.to_string())
            .unwrap_or_default();
        let units_per_em = face.units_per_em() as f32;
        let line_height =
            face.ascender() as f32 - face.descender() as f32 + face.line_gap() as f32;

        Ok(Self {
            data,
            family_name,
            units_per_em,
            line_height,
        })
    }
}

impl GlyphSource for OpenTypeFont {
    fn family_name(&self) -> &str {
        &self.family_name
    }

    fn units_per_em(&self) -> f32 {
        self.units_per_em
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn glyph(&self, ch: char) -> Option<GlyphOutline> {
        let face = Face::parse(&self.data, 0).ok()?;
        let id = face.glyph_index(ch)?;
        let mut sink = CommandSink::default();
        // Whitespace glyphs have no outline but still advance.
        face.outline_glyph(id, &mut sink);
        Some(GlyphOutline {
            commands: sink.commands,
            advance: face.glyph_hor_advance(id).unwrap_or(0) as f32,
        })
    }
}

#[derive(Default)]
struct CommandSink {
    commands: Vec<PathCommand>,
}

impl OutlineBuilder for CommandSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Vec2::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Vec2::new(x, y)));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadTo {
            ctrl: Vec2::new(x1, y1),
            to: Vec2::new(x, y),
        });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CubicTo {
            ctrl1: Vec2::new(x1, y1),
            ctrl2: Vec2::new(x2, y2),
            to: Vec2::new(x, y),
        });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
