use std::collections::HashMap;

use glam::Vec2;
use serde::Deserialize;

use super::outline::{GlyphOutline, PathCommand};
use super::{FontError, GlyphSource};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypefaceDocument {
    glyphs: HashMap<String, TypefaceGlyph>,
    resolution: f32,
    bounding_box: BoundingBox,
    #[serde(default)]
    underline_thickness: f32,
    #[serde(default)]
    family_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoundingBox {
    y_min: f32,
    y_max: f32,
}

#[derive(Debug, Deserialize)]
struct TypefaceGlyph {
    ha: f32,
    #[serde(default)]
    o: Option<String>,
}

/// A typeface JSON font with every outline parsed up front.
pub(super) struct TypefaceFont {
    family_name: String,
    resolution: f32,
    line_height: f32,
    glyphs: HashMap<char, GlyphOutline>,
}

impl TypefaceFont {
    pub(super) fn parse(bytes: &[u8]) -> Result<Self, FontError> {
        let doc: TypefaceDocument = serde_json::from_slice(bytes)?;
        if doc.resolution <= 0.0 {
            return Err(FontError::Invalid(format!(
                "resolution must be positive, got {}",
                doc.resolution
            )));
        }

        let mut glyphs = HashMap::with_capacity(doc.glyphs.len());
        for (key, glyph) in doc.glyphs {
            // Keys are single characters; anything else cannot be typed.
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                continue;
            };
            let commands = match glyph.o.as_deref() {
                Some(o) => parse_outline(o).map_err(|reason| FontError::Outline {
                    glyph: key.clone(),
                    reason,
                })?,
                None => Vec::new(),
            };
            glyphs.insert(
                ch,
                GlyphOutline {
                    commands,
                    advance: glyph.ha,
                },
            );
        }
        if glyphs.is_empty() {
            return Err(FontError::Empty);
        }

        let line_height =
            doc.bounding_box.y_max - doc.bounding_box.y_min + doc.underline_thickness;

        Ok(Self {
            family_name: doc.family_name,
            resolution: doc.resolution,
            line_height,
            glyphs,
        })
    }
}

impl GlyphSource for TypefaceFont {
    fn family_name(&self) -> &str {
        &self.family_name
    }

    fn units_per_em(&self) -> f32 {
        self.resolution
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn glyph(&self, ch: char) -> Option<GlyphOutline> {
        self.glyphs.get(&ch).cloned()
    }
}

/// Parse a typeface outline string.
///
/// `q` lists the end point before its control point and `b` lists the end
/// point before both control points.
pub(super) fn parse_outline(o: &str) -> Result<Vec<PathCommand>, String> {
    let mut tokens = o.split_whitespace();
    let mut commands = Vec::new();

    while let Some(token) = tokens.next() {
        let command = match token {
            "m" => PathCommand::MoveTo(next_point(&mut tokens)?),
            "l" => PathCommand::LineTo(next_point(&mut tokens)?),
            "q" => {
                let to = next_point(&mut tokens)?;
                let ctrl = next_point(&mut tokens)?;
                PathCommand::QuadTo { ctrl, to }
            }
            "b" => {
                let to = next_point(&mut tokens)?;
                let ctrl1 = next_point(&mut tokens)?;
                let ctrl2 = next_point(&mut tokens)?;
                PathCommand::CubicTo { ctrl1, ctrl2, to }
            }
            "z" => PathCommand::Close,
            other => return Err(format!("unknown outline command {other:?}")),
        };
        commands.push(command);
    }

    Ok(commands)
}

fn next_point<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Vec2, String> {
    let x = next_number(tokens)?;
    let y = next_number(tokens)?;
    Ok(Vec2::new(x, y))
}

fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<f32, String> {
    let token = tokens.next().ok_or("outline ends mid-command")?;
    token
        .parse::<f32>()
        .map_err(|e| format!("bad coordinate {token:?}: {e}"))
}
