// File: crates/meridian-render-skia/src/lib.rs
// Summary: Skia raster backend: paints core scenes, with RGBA8 and PNG outputs.

use anyhow::Result;
use skia_safe as skia;

use meridian_core::{Point, Rgb, Scene, Shape};

/// Paint a scene onto a canvas, in shape order.
pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene) {
    for shape in scene.shapes() {
        match shape {
            Shape::Rect { x, y, width, height, fill } => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Fill);
                paint.set_color(to_skia_color(*fill));
                let rect = skia::Rect::from_xywh(*x, *y, *width, *height);
                canvas.draw_rect(rect, &paint);
            }
            Shape::Line { from, to, stroke } => {
                let paint = stroke_paint(*stroke);
                canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
            }
            Shape::Polyline { points, stroke } => {
                draw_polyline(canvas, points, *stroke);
            }
        }
    }
}

/// Render a scene to a tightly packed RGBA8 buffer.
/// Returns `(pixels, width, height, row stride in bytes)`.
pub fn render_scene_to_rgba8(
    scene: &Scene,
    width: i32,
    height: i32,
) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = raster_surface(width, height)?;
    paint_scene(surface.canvas(), scene);

    let image_info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&image_info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("read_pixels failed");
    }
    Ok((pixels, width, height, stride))
}

/// Render a scene and encode it as PNG bytes.
pub fn render_scene_to_png_bytes(scene: &Scene, width: i32, height: i32) -> Result<Vec<u8>> {
    let mut surface = raster_surface(width, height)?;
    paint_scene(surface.canvas(), scene);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render a scene to a PNG file, creating parent directories as needed.
pub fn render_scene_to_png(
    scene: &Scene,
    width: i32,
    height: i32,
    path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_scene_to_png_bytes(scene, width, height)?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn raster_surface(width: i32, height: i32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
}

fn to_skia_color(color: Rgb) -> skia::Color {
    skia::Color::from_argb(255, color.r(), color.g(), color.b())
}

fn stroke_paint(color: Rgb) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(to_skia_color(color));
    paint
}

fn draw_polyline(canvas: &skia::Canvas, points: &[Point], color: Rgb) {
    if points.is_empty() {
        return;
    }
    let mut path = skia::Path::new();
    path.move_to((points[0].x, points[0].y));
    for p in &points[1..] {
        path.line_to((p.x, p.y));
    }
    canvas.draw_path(&path, &stroke_paint(color));
}
