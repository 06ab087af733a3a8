//! Asset generation entry points.

mod fetch;
mod icons;

use std::{
    io::{Write, stdout},
    path::{Path, PathBuf},
};

use anyhow::Result;

pub use fetch::{FetchOutcome, fetch_font};
pub use icons::{IconSpec, generate_icons, icon_path, render_icon};

use crate::{
    config::{FONT_DEST, FONT_URL, ICON_DIR, ICON_LETTER, ICON_SIZES, PREFERRED_FONT_FAMILY},
    fonts::{font_dirs, resolve_glyph_source},
};

/// Renders the fixed icon set into `root/images` with the preferred font,
/// or the built-in one when it is unavailable.
pub fn generate_default_icons(root: &Path) -> Result<Vec<PathBuf>> {
    let source = resolve_glyph_source(PREFERRED_FONT_FAMILY, ICON_LETTER, &font_dirs());
    generate_icons(&root.join(ICON_DIR), ICON_SIZES, source.as_ref())
}

/// Downloads `url` into `dest` and writes the outcome line to `out`.
pub fn fetch_and_report(url: &str, dest: &Path, out: &mut impl Write) -> Result<FetchOutcome> {
    let outcome = fetch_font(url, dest)?;
    writeln!(out, "{outcome}")?;
    Ok(outcome)
}

/// Downloads the Material Icons font below `root` and prints the outcome.
pub fn fetch_default_font(root: &Path) -> Result<FetchOutcome> {
    fetch_and_report(FONT_URL, &root.join(FONT_DEST), &mut stdout().lock())
}
