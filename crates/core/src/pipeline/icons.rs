use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glyph_raster::{BuiltinFont, Error, GlyphIcon, GlyphSource, RgbaImage, save_png};
use log::warn;

use crate::{
    config::{GLYPH_SCALE, ICON_LETTER},
    io::ensure_dir,
};

/// One icon in the set: the fixed letter at a given edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
}

impl IconSpec {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn glyph(&self) -> GlyphIcon {
        GlyphIcon::new(ICON_LETTER, self.size).with_scale(GLYPH_SCALE)
    }

    pub fn font_px(&self) -> f32 {
        self.glyph().font_px()
    }

    pub fn file_name(&self) -> String {
        format!("icon{}.png", self.size)
    }
}

pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(IconSpec::new(size).file_name())
}

/// Renders `spec` with `source`, switching to the built-in font if the glyph
/// cannot be drawn from it.
pub fn render_icon(source: &dyn GlyphSource, spec: IconSpec) -> Result<RgbaImage> {
    let glyph = spec.glyph();
    match glyph.render(source) {
        Ok(image) => Ok(image),
        Err(e @ (Error::CanvasSize(_) | Error::Encode(_) | Error::Io(_))) => Err(e.into()),
        Err(e) => {
            warn!("{} failed for {}: {e}, using built-in font", source.name(), spec.file_name());
            glyph
                .render(&BuiltinFont)
                .with_context(|| format!("Failed to render {}", spec.file_name()))
        }
    }
}

/// Renders and saves one icon per size into `dir`, overwriting existing files.
pub fn generate_icons(dir: &Path, sizes: &[u32], source: &dyn GlyphSource) -> Result<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let spec = IconSpec::new(size);
        let path = icon_path(dir, size);

        let image = render_icon(source, spec)?;
        save_png(&image, &path)
            .with_context(|| format!("Failed to save icon: {}", path.display()))?;

        println!("Generated {}", spec.file_name());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use glyph_raster::BezPath;

    use super::*;

    /// Claims every glyph but never draws one.
    struct BrokenFont;

    impl GlyphSource for BrokenFont {
        fn name(&self) -> &str {
            "broken"
        }

        fn has_glyph(&self, _: char) -> bool {
            true
        }

        fn outline(&self, ch: char, _: f32) -> glyph_raster::Result<BezPath> {
            Err(Error::EmptyOutline(ch))
        }
    }

    #[test]
    fn file_names_follow_size() {
        assert_eq!(IconSpec::new(16).file_name(), "icon16.png");
        assert_eq!(icon_path(Path::new("images"), 128), Path::new("images/icon128.png"));
    }

    #[test]
    fn glyph_uses_configured_letter_and_scale() {
        let spec = IconSpec::new(48);
        assert_eq!(spec.glyph().letter(), ICON_LETTER);
        assert_eq!(spec.glyph(), GlyphIcon::new(ICON_LETTER, 48));
        assert_eq!(spec.font_px(), (48.0 * GLYPH_SCALE).floor());
    }

    #[test]
    fn draw_failure_falls_back_to_builtin() {
        let spec = IconSpec::new(48);
        let fallback = render_icon(&BrokenFont, spec).unwrap();
        let builtin = render_icon(&BuiltinFont, spec).unwrap();
        assert_eq!(fallback, builtin);
    }

    #[test]
    fn zero_size_is_not_masked_by_fallback() {
        assert!(render_icon(&BrokenFont, IconSpec::new(0)).is_err());
    }
}
