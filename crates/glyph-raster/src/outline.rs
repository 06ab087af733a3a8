//! Glyph sources backed by TrueType/OpenType outline data.

use std::{fs::read, path::Path};

use kurbo::{Affine, BezPath};
use skrifa::{
    FontRef, GlyphId, MetadataProvider,
    instance::{LocationRef, Size},
    outline::{DrawSettings, OutlinePen},
};

use crate::error::{Error, Result};

/// Anything that can produce a glyph outline for a character.
///
/// Outlines are in pixel units with the y axis pointing down, so they can be
/// placed on a canvas with a plain translation.
pub trait GlyphSource {
    /// Human-readable name used in logs and error messages.
    fn name(&self) -> &str;

    /// Whether the source maps `ch` to a glyph.
    fn has_glyph(&self, ch: char) -> bool;

    /// Outline of `ch` scaled to `px_size` pixels per em.
    fn outline(&self, ch: char, px_size: f32) -> Result<BezPath>;
}

/// A scalable font loaded from file data.
#[derive(Debug, Clone)]
pub struct OutlineFont {
    name: String,
    data: Vec<u8>,
}

impl OutlineFont {
    /// Wraps font data, failing if it cannot be parsed as a font.
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        FontRef::new(&data)?;
        Ok(Self { name: name.into(), data })
    }

    /// Reads and parses a font file, naming it after the file stem.
    pub fn open(path: &Path) -> Result<Self> {
        let data = read(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(name, data)
    }

    /// Characters the font's charmap maps to a glyph, in codepoint order.
    pub fn mapped_chars(&self) -> Vec<char> {
        let Ok(font) = self.font() else {
            return Vec::new();
        };
        font.charmap()
            .mappings()
            .filter(|(_, gid)| *gid != GlyphId::NOTDEF)
            .filter_map(|(cp, _)| char::from_u32(cp))
            .collect()
    }

    fn font(&self) -> Result<FontRef<'_>> {
        Ok(FontRef::new(&self.data)?)
    }
}

impl GlyphSource for OutlineFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_glyph(&self, ch: char) -> bool {
        self.font().ok().and_then(|font| font.charmap().map(ch)).is_some()
    }

    fn outline(&self, ch: char, px_size: f32) -> Result<BezPath> {
        let font = self.font()?;
        let missing = || Error::MissingGlyph(ch, self.name.clone());

        let gid = font.charmap().map(ch).ok_or_else(missing)?;
        let glyph = font.outline_glyphs().get(gid).ok_or_else(missing)?;

        let mut pen = BezPathPen::default();
        let settings = DrawSettings::unhinted(Size::new(px_size), LocationRef::default());
        glyph.draw(settings, &mut pen)?;

        let mut path = pen.into_path();
        if path.elements().is_empty() {
            return Err(Error::EmptyOutline(ch));
        }
        path.apply_affine(Affine::FLIP_Y);
        Ok(path)
    }
}

/// Collects skrifa drawing commands into a kurbo path.
#[derive(Debug, Default)]
pub struct BezPathPen {
    path: BezPath,
}

impl BezPathPen {
    pub fn into_path(self) -> BezPath {
        self.path
    }
}

impl OutlinePen for BezPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((f64::from(x), f64::from(y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((f64::from(x), f64::from(y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path
            .quad_to((f64::from(cx0), f64::from(cy0)), (f64::from(x), f64::from(y)));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(
            (f64::from(cx0), f64::from(cy0)),
            (f64::from(cx1), f64::from(cy1)),
            (f64::from(x), f64::from(y)),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
