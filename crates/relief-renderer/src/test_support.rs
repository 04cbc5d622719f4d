//! Small in-memory fonts for unit tests.

use crate::font::{Font, FontFormat};

/// A typeface document at resolution 100.
///
/// - `A`: 100x100 square, advance 120
/// - `O`: 100x100 square with a 50x50 square hole wound the other way,
///   advance 120
/// - `c`: square whose bottom edge is a quadratic curve, advance 110
/// - `?`: triangle, advance 90
/// - space: no outline, advance 50
///
/// Line height is `100 - (-20) + 5 = 125` font units.
pub(crate) const TYPEFACE_JSON: &str = r#"{
    "familyName": "Test Sans",
    "resolution": 100,
    "boundingBox": { "xMin": 0, "xMax": 100, "yMin": -20, "yMax": 100 },
    "underlineThickness": 5,
    "glyphs": {
        "A": { "ha": 120, "x_min": 0, "x_max": 100, "o": "m 0 0 l 100 0 l 100 100 l 0 100 " },
        "O": { "ha": 120, "x_min": 0, "x_max": 100,
               "o": "m 0 0 l 100 0 l 100 100 l 0 100 m 25 25 l 25 75 l 75 75 l 75 25 " },
        "c": { "ha": 110, "o": "m 0 0 q 100 0 50 -50 l 100 100 l 0 100 " },
        "?": { "ha": 90, "o": "m 0 0 l 80 0 l 40 100 " },
        " ": { "ha": 50, "o": "" }
    }
}"#;

pub(crate) fn typeface_font() -> Font {
    Font::from_bytes(TYPEFACE_JSON.as_bytes().to_vec(), FontFormat::Typeface)
        .expect("test typeface parses")
}
