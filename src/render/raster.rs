use image::{Rgba, RgbaImage};

use super::geometry::{pt, Bounds, Path, Pt};
use crate::common::color::blend;

// Samples per pixel along each axis
pub const SUPERSAMPLE: u32 = 4;

// Canvas
//------------------------------------------------------------------------------

// Owns its surface for the duration of one render
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(w: u32, h: u32, background: Rgba<u8>) -> Self {
        Self { img: RgbaImage::from_pixel(w, h, background) }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    pub fn fill(&mut self, path: &Path, color: Rgba<u8>) {
        self.paint(path.bounds(), color, |p| path.contains(p));
    }

    // Centred on the outline, `width` wide
    pub fn stroke(&mut self, path: &Path, width: f32, color: Rgba<u8>) {
        let hw = width / 2.0;
        self.paint(path.bounds().expand(width), color, |p| path.sdf(p).abs() <= hw);
    }

    pub fn paint(&mut self, bounds: Bounds, color: Rgba<u8>, inside: impl Fn(Pt) -> bool) {
        self.paint_shaded(bounds, inside, |_, _| color);
    }

    // Paints the colour returned by `shade` for each pixel, with coverage estimated from a
    // regular sub-sample grid
    pub fn paint_shaded(
        &mut self,
        bounds: Bounds,
        inside: impl Fn(Pt) -> bool,
        shade: impl Fn(u32, u32) -> Rgba<u8>,
    ) {
        let (w, h) = self.img.dimensions();
        let x0 = bounds.x0.floor().max(0.0) as u32;
        let y0 = bounds.y0.floor().max(0.0) as u32;
        let x1 = (bounds.x1.ceil().max(0.0) as u32).min(w);
        let y1 = (bounds.y1.ceil().max(0.0) as u32).min(h);

        let step = 1.0 / SUPERSAMPLE as f32;
        let total = (SUPERSAMPLE * SUPERSAMPLE) as f32;
        for y in y0..y1 {
            for x in x0..x1 {
                let mut hits = 0u32;
                for sy in 0..SUPERSAMPLE {
                    for sx in 0..SUPERSAMPLE {
                        let sample = pt(
                            x as f32 + (sx as f32 + 0.5) * step,
                            y as f32 + (sy as f32 + 0.5) * step,
                        );
                        if inside(sample) {
                            hits += 1;
                        }
                    }
                }
                if hits > 0 {
                    let dst = *self.img.get_pixel(x, y);
                    self.img.put_pixel(x, y, blend(dst, shade(x, y), hits as f32 / total));
                }
            }
        }
    }
}
