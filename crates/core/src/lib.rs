//! gicon core - static asset generation for the extension.
//!
//! Two independent jobs: rendering the letter icons and downloading the
//! Material Icons font. Inputs are fixed in [`config`].

pub mod config;
pub mod fonts;
pub mod io;
pub mod pipeline;

pub use glyph_raster::{BuiltinFont, GlyphIcon, GlyphSource, OutlineFont};
pub use pipeline::{
    FetchOutcome, IconSpec, fetch_and_report, fetch_default_font, fetch_font, generate_default_icons,
    generate_icons, icon_path, render_icon,
};
