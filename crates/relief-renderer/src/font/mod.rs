//! Font loading and glyph layout.
//!
//! Two sources are supported: typeface JSON documents (glyph outlines as
//! `m`/`l`/`q`/`b` command strings) and TrueType/OpenType files read through
//! `ttf-parser`. Both produce [`GlyphOutline`]s in font units with Y up;
//! [`layout`] positions them into world-space shapes.

mod layout;
mod opentype;
mod outline;
mod typeface;


pub use layout::{layout_text, GlyphShape};
pub use outline::{GlyphOutline, PathCommand};

use std::path::Path;

use opentype::OpenTypeFont;
use typeface::TypefaceFont;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("typeface JSON: {0}")]
    Typeface(#[from] serde_json::Error),

    #[error("glyph {glyph:?}: {reason}")]
    Outline { glyph: String, reason: String },

    #[error("OpenType: {0}")]
    OpenType(String),

    #[error("invalid font: {0}")]
    Invalid(String),

    #[error("font contains no glyphs")]
    Empty,
}

/// On-disk font encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    Typeface,
    OpenType,
}

impl FontFormat {
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            FontFormat::Typeface
        } else {
            FontFormat::OpenType
        }
    }
}

/// Per-format glyph lookup.
trait GlyphSource: Send + Sync {
    fn family_name(&self) -> &str;
    /// Font units per em (`resolution` for typeface documents).
    fn units_per_em(&self) -> f32;
    /// Baseline-to-baseline distance in font units.
    fn line_height(&self) -> f32;
    fn glyph(&self, ch: char) -> Option<GlyphOutline>;
}

/// A loaded font, shared read-only between rebuilds.
pub struct Font {
    format: FontFormat,
    source: Box<dyn GlyphSource>,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family_name())
            .field("format", &self.format)
            .finish()
    }
}

impl Font {
    pub fn from_bytes(bytes: Vec<u8>, format: FontFormat) -> Result<Self, FontError> {
        let source: Box<dyn GlyphSource> = match format {
            FontFormat::Typeface => Box::new(TypefaceFont::parse(&bytes)?),
            FontFormat::OpenType => Box::new(OpenTypeFont::parse(bytes)?),
        };
        Ok(Self { format, source })
    }

    /// Parse `bytes` using the format implied by `path`.
    pub fn from_path_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self, FontError> {
        Self::from_bytes(bytes, FontFormat::from_path(path))
    }

    pub fn family_name(&self) -> &str {
        self.source.family_name()
    }

    pub fn units_per_em(&self) -> f32 {
        self.source.units_per_em()
    }

    pub fn line_height(&self) -> f32 {
        self.source.line_height()
    }

    pub fn glyph(&self, ch: char) -> Option<GlyphOutline> {
        self.source.glyph(ch)
    }
}
