//! Fixtures shared by the app's unit tests.

/// Minimal typeface document: `A` is a unit square, `?` a triangle.
pub(crate) const TYPEFACE_JSON: &str = r#"{
    "familyName": "Test Sans",
    "resolution": 100,
    "boundingBox": { "yMin": -20, "yMax": 100 },
    "underlineThickness": 5,
    "glyphs": {
        "A": { "ha": 120, "o": "m 0 0 l 100 0 l 100 100 l 0 100 " },
        "?": { "ha": 90, "o": "m 0 0 l 80 0 l 40 100 " },
        " ": { "ha": 50 }
    }
}"#;

pub(crate) fn test_font() -> relief_renderer::Font {
    relief_renderer::Font::from_bytes(
        TYPEFACE_JSON.as_bytes().to_vec(),
        relief_renderer::FontFormat::Typeface,
    )
    .expect("test typeface parses")
}
