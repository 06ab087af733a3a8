//! Placing an outline on a square canvas and rasterizing it.

use image::{Rgba, RgbaImage};
use kurbo::{Affine, BezPath, PathEl, Shape, Vec2};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::{Error, Result};

/// Opaque black.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Translates `path` so the center of its tight bounding box sits at the
/// center of a `size` x `size` canvas.
pub fn center_on_canvas(path: &BezPath, size: u32) -> BezPath {
    let center = path.bounding_box().center();
    let half = f64::from(size) / 2.0;

    let mut centered = path.clone();
    centered.apply_affine(Affine::translate(Vec2::new(half - center.x, half - center.y)));
    centered
}

/// Fills `path` with `color` on a transparent `size` x `size` canvas.
///
/// Uses the nonzero winding rule, matching TrueType contour semantics.
pub fn rasterize(path: &BezPath, size: u32, color: Rgba<u8>) -> Result<RgbaImage> {
    let mut pixmap = Pixmap::new(size, size).ok_or(Error::CanvasSize(size))?;

    if let Some(skia_path) = to_skia_path(path) {
        let [r, g, b, a] = color.0;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        pixmap.fill_path(&skia_path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    let mut image = RgbaImage::new(size, size);
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(image)
}

/// Inclusive pixel bounds `(left, top, right, bottom)` of every pixel with
/// non-zero alpha, or `None` for a fully transparent image.
pub fn ink_bounds(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    image
        .enumerate_pixels()
        .filter(|(_, _, px)| px.0[3] > 0)
        .fold(None, |acc, (x, y, _)| match acc {
            None => Some((x, y, x, y)),
            Some((l, t, r, b)) => Some((l.min(x), t.min(y), r.max(x), b.max(y))),
        })
}

fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => builder.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c0, c1, p) => builder.cubic_to(
                c0.x as f32,
                c0.y as f32,
                c1.x as f32,
                c1.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}
