use glam::Vec2;

/// One drawing command of a glyph outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Close,
}

impl PathCommand {
    /// Apply `p * scale + offset` to every point.
    pub fn transformed(self, scale: f32, offset: Vec2) -> Self {
        let t = |p: Vec2| p * scale + offset;
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(t(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(t(p)),
            PathCommand::QuadTo { ctrl, to } => PathCommand::QuadTo {
                ctrl: t(ctrl),
                to: t(to),
            },
            PathCommand::CubicTo { ctrl1, ctrl2, to } => PathCommand::CubicTo {
                ctrl1: t(ctrl1),
                ctrl2: t(ctrl2),
                to: t(to),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// A glyph in font units: outline commands plus horizontal advance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphOutline {
    pub commands: Vec<PathCommand>,
    pub advance: f32,
}
