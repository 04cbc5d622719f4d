use glam::Vec2;

use super::outline::PathCommand;
use super::Font;

/// Glyph used when the font lacks a character.
const FALLBACK_GLYPH: char = '?';

/// One laid-out glyph: outline commands in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphShape {
    pub ch: char,
    pub commands: Vec<PathCommand>,
}

/// Lay `text` out left to right at `size` world units per em.
///
/// `'\n'` returns to x = 0 and moves down one line height. Characters
/// missing from the font fall back to `'?'`; if that is missing too the
/// character is skipped without advancing.
pub fn layout_text(font: &Font, text: &str, size: f32) -> Vec<GlyphShape> {
    let scale = size / font.units_per_em();
    let line_height = font.line_height() * scale;

    let mut shapes = Vec::new();
    let mut pen = Vec2::ZERO;

    for ch in text.chars() {
        if ch == '\n' {
            pen.x = 0.0;
            pen.y -= line_height;
            continue;
        }

        let glyph = match font.glyph(ch) {
            Some(glyph) => glyph,
            None => {
                tracing::warn!(
                    "Character {ch:?} missing from font {:?}",
                    font.family_name()
                );
                match font.glyph(FALLBACK_GLYPH) {
                    Some(glyph) => glyph,
                    None => continue,
                }
            }
        };

        if !glyph.commands.is_empty() {
            shapes.push(GlyphShape {
                ch,
                commands: glyph
                    .commands
                    .iter()
                    .map(|cmd| cmd.transformed(scale, pen))
                    .collect(),
            });
        }
        pen.x += glyph.advance * scale;
    }

    shapes
}
