//! Shared fixtures for tests that need a real outline font.

use kurbo::Shape;

use crate::outline::{GlyphSource, OutlineFont};

pub fn vazirmatn() -> OutlineFont {
    OutlineFont::from_bytes("Vazirmatn", font_test_data::VAZIRMATN_VAR.to_vec()).unwrap()
}

/// First mapped character with a visible outline.
pub fn drawable_char(font: &OutlineFont) -> char {
    font.mapped_chars()
        .into_iter()
        .find(|&ch| {
            font.outline(ch, 100.0).is_ok_and(|path| {
                let bounds = path.bounding_box();
                bounds.width() > 1.0 && bounds.height() > 1.0
            })
        })
        .expect("test font has a drawable glyph")
}
