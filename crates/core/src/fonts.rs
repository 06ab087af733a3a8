//! System font discovery with built-in fallback.

use std::{
    env::var_os,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern, glob_with};
use glyph_raster::{BuiltinFont, GlyphSource, OutlineFont};
use log::{debug, info, warn};

use crate::config::{FONT_EXTENSIONS, SYSTEM_FONT_DIRS, USER_FONT_DIRS};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Platform font directories, followed by the per-user ones under `$HOME`.
pub fn font_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = SYSTEM_FONT_DIRS.iter().map(PathBuf::from).collect();
    if let Some(home) = var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.extend(USER_FONT_DIRS.iter().map(|d| home.join(d)));
    }
    dirs
}

/// Font files named after `family` anywhere below `dirs`, ignoring case.
///
/// Missing directories are skipped.
pub fn find_font_files(family: &str, dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for dir in dirs {
        let Some(dir_str) = dir.to_str() else {
            debug!("Skipping non UTF-8 font directory {}", dir.display());
            continue;
        };
        for ext in FONT_EXTENSIONS {
            // Literal components are matched case-sensitively by glob, so the
            // family name is compared after the walk.
            let pattern = format!("{}/**/*.{ext}", Pattern::escape(dir_str));
            match glob_with(&pattern, MATCH_OPTIONS) {
                Ok(paths) => found.extend(
                    paths.filter_map(Result::ok).filter(|path| is_family_file(path, family)),
                ),
                Err(e) => debug!("Invalid font pattern {pattern}: {e}"),
            }
        }
    }
    found
}

fn is_family_file(path: &Path, family: &str) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.eq_ignore_ascii_case(family))
}

/// Loads the first font file for `family` that parses and maps `letter`.
pub fn load_font(family: &str, letter: char, dirs: &[PathBuf]) -> Option<OutlineFont> {
    find_font_files(family, dirs).into_iter().find_map(|path| try_load(&path, letter))
}

fn try_load(path: &Path, letter: char) -> Option<OutlineFont> {
    debug!("Trying font {}", path.display());
    match OutlineFont::open(path) {
        Ok(font) if font.has_glyph(letter) => Some(font),
        Ok(_) => {
            debug!("{} has no glyph for {letter:?}", path.display());
            None
        }
        Err(e) => {
            debug!("Skipping {}: {e}", path.display());
            None
        }
    }
}

/// The preferred font if it can be loaded, otherwise the built-in font.
pub fn resolve_glyph_source(family: &str, letter: char, dirs: &[PathBuf]) -> Box<dyn GlyphSource> {
    match load_font(family, letter, dirs) {
        Some(font) => {
            info!("Using font {}", font.name());
            Box::new(font)
        }
        None => {
            warn!("Font {family} not available, using built-in font");
            Box::new(BuiltinFont)
        }
    }
}
