//! Built-in 5x7 bitmap font for uppercase Latin letters.
//!
//! Used when no scalable font is available. Each lit cell becomes a square in
//! the outline, so the result goes through the same rasterizer as real fonts.

use kurbo::BezPath;

use crate::{
    error::{Error, Result},
    outline::GlyphSource,
};

/// Cell columns per glyph.
pub const COLUMNS: usize = 5;

/// Cell rows per glyph.
pub const ROWS: usize = 7;

/// Row bitmaps for `A`-`Z`, most significant of the low five bits is the
/// leftmost column.
const GLYPHS: [[u8; ROWS]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

/// Fallback glyph source that never needs external data.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl BuiltinFont {
    fn rows(ch: char) -> Option<&'static [u8; ROWS]> {
        if ch.is_ascii_uppercase() {
            GLYPHS.get((ch as u8 - b'A') as usize)
        } else {
            None
        }
    }
}

impl GlyphSource for BuiltinFont {
    fn name(&self) -> &str {
        "builtin 5x7"
    }

    fn has_glyph(&self, ch: char) -> bool {
        Self::rows(ch).is_some()
    }

    /// The full glyph height spans `px_size` pixels.
    fn outline(&self, ch: char, px_size: f32) -> Result<BezPath> {
        let rows = Self::rows(ch).ok_or_else(|| Error::MissingGlyph(ch, self.name().into()))?;
        let cell = f64::from(px_size) / ROWS as f64;

        let mut path = BezPath::new();
        for (row, bits) in rows.iter().enumerate() {
            for (start, end) in runs(*bits) {
                let (x0, x1) = (start as f64 * cell, end as f64 * cell);
                let (y0, y1) = (row as f64 * cell, (row + 1) as f64 * cell);
                path.move_to((x0, y0));
                path.line_to((x1, y0));
                path.line_to((x1, y1));
                path.line_to((x0, y1));
                path.close_path();
            }
        }

        if path.elements().is_empty() {
            return Err(Error::EmptyOutline(ch));
        }
        Ok(path)
    }
}

/// Half-open column ranges of consecutive lit cells in one row.
fn runs(bits: u8) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    for col in 0..=COLUMNS {
        let lit = col < COLUMNS && bits & (1 << (COLUMNS - 1 - col)) != 0;
        match (lit, start) {
            (true, None) => start = Some(col),
            (false, Some(s)) => {
                runs.push((s, col));
                start = None;
            }
            _ => {}
        }
    }
    runs
}
