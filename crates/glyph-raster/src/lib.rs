//! Render a single letter glyph centered on a transparent square canvas.
//!
//! Glyph outlines come from a [`GlyphSource`]: either a scalable font parsed
//! with skrifa ([`OutlineFont`]) or the [`BuiltinFont`] bitmap fallback. The
//! outline is centered by its exact bounding box and filled with tiny-skia.
//!
//! # Example
//!
//! ```no_run
//! use glyph_raster::{BuiltinFont, GlyphIcon, save_png};
//!
//! let image = GlyphIcon::new('G', 48).render(&BuiltinFont).unwrap();
//! save_png(&image, "icon48.png".as_ref()).unwrap();
//! ```

pub mod builtin;
pub mod canvas;
pub mod error;
pub mod outline;

#[cfg(test)]
mod testing;

use std::path::Path;

use image::{ImageFormat, Rgba};
use log::debug;

pub use builtin::BuiltinFont;
pub use canvas::{BLACK, center_on_canvas, ink_bounds, rasterize};
pub use error::{Error, Result};
pub use image::RgbaImage;
pub use kurbo::BezPath;
pub use outline::{BezPathPen, GlyphSource, OutlineFont};

/// Share of the canvas edge used as the font pixel size.
pub const DEFAULT_SCALE: f32 = 0.7;

/// A square icon showing one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphIcon {
    letter: char,
    size: u32,
    scale: f32,
    color: Rgba<u8>,
}

impl GlyphIcon {
    /// Black glyph at [`DEFAULT_SCALE`].
    pub fn new(letter: char, size: u32) -> Self {
        Self { letter, size, scale: DEFAULT_SCALE, color: BLACK }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: Rgba<u8>) -> Self {
        self.color = color;
        self
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// Font pixel size, truncated to whole pixels.
    pub fn font_px(&self) -> f32 {
        (self.size as f32 * self.scale).floor()
    }

    /// Draws the glyph from `source` and returns the RGBA raster.
    pub fn render(&self, source: &dyn GlyphSource) -> Result<RgbaImage> {
        let px = self.font_px();
        debug!(
            "Rendering {:?} at {px}px on a {}px canvas with {}",
            self.letter,
            self.size,
            source.name()
        );

        let outline = source.outline(self.letter, px)?;
        rasterize(&center_on_canvas(&outline, self.size), self.size, self.color)
    }
}

/// Writes `image` as PNG, replacing any existing file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
