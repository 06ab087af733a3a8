//! Fixed inputs for asset generation.

/// Edge lengths, in pixels, of the generated icons.
pub const ICON_SIZES: &[u32] = &[16, 48, 128];

/// Letter drawn on every icon.
pub const ICON_LETTER: char = 'G';

/// Font pixel size as a share of the icon edge.
pub const GLYPH_SCALE: f32 = glyph_raster::DEFAULT_SCALE;

/// Icon output directory, relative to the anchor directory.
pub const ICON_DIR: &str = "images";

/// Font family tried before falling back to the built-in font.
pub const PREFERRED_FONT_FAMILY: &str = "Arial";

/// Font file extensions considered during system font discovery.
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

/// Platform font directories searched for the preferred family.
pub const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
    "C:\\Windows\\Fonts",
];

/// Per-user font directories, relative to `$HOME`.
pub const USER_FONT_DIRS: &[&str] = &[".fonts", ".local/share/fonts", "Library/Fonts"];

/// Material Icons WOFF2 download URL.
pub const FONT_URL: &str =
    "https://fonts.gstatic.com/s/materialicons/v142/flUhRq6tzZclQEJ-Vdg-IuiaDsNcIhQ8tQ.woff2";

/// Material Icons destination, relative to the anchor directory.
pub const FONT_DEST: &str = "css/fonts/MaterialIcons-Regular.woff2";
