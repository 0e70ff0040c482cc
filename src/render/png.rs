//! PNG backend: rasterize a [`Scene`] with plotters and encode it.

use super::{check_canvas, Color, Renderer, Scene};
use crate::error::{PlotError, Result};
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Rectangle, Text};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color as _, IntoFont, RGBColor};
use std::path::Path;

const BACKGROUND: RGBColor = RGBColor(255, 255, 255);
const FONT_FAMILY: &str = "sans-serif";

/// Rasterize `scene` and write it to `path` as PNG.
///
/// The file is only created once the whole image has been encoded.
pub fn write(scene: &Scene, path: &Path) -> Result<()> {
    let bytes = encode(scene)?;
    std::fs::write(path, bytes).map_err(|e| PlotError::file_write(path.to_path_buf(), e))?;
    tracing::info!("wrote {}x{} PNG to {}", scene.width, scene.height, path.display());
    Ok(())
}

/// Rasterize `scene` into PNG bytes.
pub fn encode(scene: &Scene) -> Result<Vec<u8>> {
    let (width, height) = (scene.width, scene.height);
    check_canvas(width, height)?;
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| {
            PlotError::invalid_parameter("canvas", format!("{}x{} is too large", width, height))
        })?;
    let mut buf = vec![0u8; len];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&BACKGROUND)
            .map_err(|e| PlotError::Render(format!("fill: {}", e)))?;

        let mut raster = Raster::new(&root);
        scene.replay(&mut raster);
        if raster.skipped_text > 0 {
            tracing::warn!("skipped {} text labels that could not be rendered", raster.skipped_text);
        }
        if let Some(err) = raster.error {
            return Err(PlotError::Render(err));
        }

        root.present()
            .map_err(|e| PlotError::Render(format!("present: {}", e)))?;
    }

    encode_rgb_to_png(&buf, width, height)
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| PlotError::Render(format!("PNG encode: {}", e)))?;
    Ok(png)
}

fn rgb(color: Color) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

fn px(p: (f64, f64)) -> (i32, i32) {
    (p.0.round() as i32, p.1.round() as i32)
}

/// [`Renderer`] over a plotters drawing area. Keeps the first shape error.
struct Raster<'a, 'b> {
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    error: Option<String>,
    skipped_text: usize,
}

impl<'a, 'b> Raster<'a, 'b> {
    fn new(area: &'a DrawingArea<BitMapBackend<'b>, Shift>) -> Self {
        Self {
            area,
            error: None,
            skipped_text: 0,
        }
    }

    fn keep_first<E: std::fmt::Display>(&mut self, what: &str, r: std::result::Result<(), E>) {
        if let Err(e) = r {
            if self.error.is_none() {
                self.error = Some(format!("{}: {}", what, e));
            }
        }
    }
}

impl Renderer for Raster<'_, '_> {
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        let r = self
            .area
            .draw(&PathElement::new(vec![px(from), px(to)], rgb(color).stroke_width(1)));
        self.keep_first("line", r);
    }

    fn rect(&mut self, corner: (f64, f64), opposite: (f64, f64), color: Color) {
        let r = self
            .area
            .draw(&Rectangle::new([px(corner), px(opposite)], rgb(color).filled()));
        self.keep_first("rect", r);
    }

    fn circle(&mut self, center: (f64, f64), radius: f64, color: Color) {
        let r = self.area.draw(&Circle::new(
            px(center),
            radius.round().max(1.0) as i32,
            rgb(color).filled(),
        ));
        self.keep_first("circle", r);
    }

    fn polyline(&mut self, points: &[(f64, f64)], color: Color) {
        let path: Vec<(i32, i32)> = points.iter().copied().map(px).collect();
        let r = self
            .area
            .draw(&PathElement::new(path, rgb(color).stroke_width(1)));
        self.keep_first("polyline", r);
    }

    fn text(&mut self, at: (f64, f64), text: &str, size: f64, color: Color) {
        let style = (FONT_FAMILY, size)
            .into_font()
            .color(&rgb(color))
            .pos(Pos::new(HPos::Left, VPos::Bottom));
        // Missing system fonts must not cost the whole image.
        if self.area.draw(&Text::new(text, px(at), style)).is_err() {
            self.skipped_text += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample_scene() -> Scene {
        let mut scene = Scene::new(40, 30);
        scene.rect((5.0, 5.0), (15.0, 15.0), Color::rgb(200, 0, 0));
        scene.line((0.0, 29.0), (39.0, 29.0), Color::BLACK);
        scene.polyline(&[(1.0, 1.0), (20.0, 10.0), (39.0, 1.0)], Color::rgb(0, 0, 255));
        scene.circle((30.0, 20.0), 3.0, Color::rgb(0, 128, 0));
        scene
    }

    #[test]
    fn encodes_png() {
        let bytes = encode(&sample_scene()).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn writes_file_only_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        write(&sample_scene(), &good).unwrap();
        assert!(std::fs::read(&good).unwrap().starts_with(&PNG_SIGNATURE));

        let bad = dir.path().join("bad.png");
        assert!(write(&Scene::new(0, 10), &bad).is_err());
        assert!(!bad.exists());
    }

    #[test]
    fn oversized_canvas_is_an_invalid_parameter() {
        let err = encode(&Scene::new(70_000, 70_000)).unwrap_err();
        assert!(matches!(err, PlotError::InvalidParameter { name: "canvas", .. }));
        let err = encode(&Scene::new(10, crate::render::MAX_CANVAS_SIDE + 1)).unwrap_err();
        assert!(matches!(err, PlotError::InvalidParameter { name: "canvas", .. }));
    }
}
