//! Icon set generation against the built-in font.

use std::fs::read;

use gicon_core::{BuiltinFont, config::ICON_SIZES, generate_icons, icon_path};
use glyph_raster::ink_bounds;

#[test]
fn writes_every_size_as_transparent_png() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("images");

    let written = generate_icons(&dir, ICON_SIZES, &BuiltinFont).unwrap();
    assert_eq!(written.len(), ICON_SIZES.len());

    for (&size, path) in ICON_SIZES.iter().zip(&written) {
        assert_eq!(path, &icon_path(&dir, size));
        let image = image::open(path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (size, size));
        for (x, y) in [(0, 0), (size - 1, 0), (0, size - 1), (size - 1, size - 1)] {
            assert_eq!(image.get_pixel(x, y).0[3], 0, "icon{size} corner ({x}, {y})");
        }
    }
}

#[test]
fn glyph_is_centered_within_one_pixel() {
    let tmp = tempfile::tempdir().unwrap();
    let written = generate_icons(tmp.path(), ICON_SIZES, &BuiltinFont).unwrap();

    for (&size, path) in ICON_SIZES.iter().zip(&written) {
        let image = image::open(path).unwrap().to_rgba8();
        let (left, top, right, bottom) = ink_bounds(&image).expect("icon has ink");

        let half = size as f32 / 2.0;
        let cx = (left + right + 1) as f32 / 2.0;
        let cy = (top + bottom + 1) as f32 / 2.0;
        assert!((cx - half).abs() <= 1.0, "icon{size}: x center {cx}");
        assert!((cy - half).abs() <= 1.0, "icon{size}: y center {cy}");
    }
}

#[test]
fn glyph_fills_about_seventy_percent() {
    let tmp = tempfile::tempdir().unwrap();
    let written = generate_icons(tmp.path(), &[128], &BuiltinFont).unwrap();

    let image = image::open(&written[0]).unwrap().to_rgba8();
    let (_, top, _, bottom) = ink_bounds(&image).unwrap();
    let height = bottom - top + 1;
    assert!((88..=91).contains(&height), "glyph height {height}");
}

#[test]
fn rerun_overwrites_with_identical_content() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("images");

    let first = generate_icons(&dir, ICON_SIZES, &BuiltinFont).unwrap();
    let before: Vec<_> = first.iter().map(|p| read(p).unwrap()).collect();

    let second = generate_icons(&dir, ICON_SIZES, &BuiltinFont).unwrap();
    let after: Vec<_> = second.iter().map(|p| read(p).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(before, after);
}
