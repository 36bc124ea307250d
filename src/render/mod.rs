// Styled renderer: paints a classified matrix onto a fresh RGBA surface.
//
// Painting order is background, data modules, then the three eyes. Eye footprints are excluded
// from the module pass by the classifier, so the eye pass alone decides their pixels.

pub mod geometry;
pub mod raster;
pub mod shapes;

use image::RgbaImage;
use tracing::debug;

use crate::classify::{classify, Classification, Eye};
use crate::common::{QrMatrix, StyleConfig, StyleError, StyleResult};
use raster::Canvas;
use shapes::{eye_inner_path, eye_outer_path, module_path, EYE_STROKE_WIDTH};

// Pixel side of one module
pub fn pitch(size: u32, w: usize) -> f32 {
    size as f32 / w as f32
}

pub fn render(
    matrix: &QrMatrix,
    cls: &Classification,
    style: &StyleConfig,
    size: u32,
) -> StyleResult<RgbaImage> {
    if cls.width() != matrix.width() {
        return Err(StyleError::InvalidMatrix { width: cls.width(), len: matrix.grid().len() });
    }
    if size == 0 {
        return Err(StyleError::InvalidSize(size));
    }

    let p = pitch(size, matrix.width());
    debug!(width = matrix.width(), size, pitch = p, style = %style.metadata(), "Rendering");

    let mut canvas = Canvas::new(size, size, style.background);
    draw_modules(&mut canvas, cls, style, p);
    draw_eyes(&mut canvas, matrix.width(), style, p);

    Ok(canvas.into_image())
}

// Classifies then renders
pub fn render_matrix(matrix: &QrMatrix, style: &StyleConfig, size: u32) -> StyleResult<RgbaImage> {
    let cls = classify(matrix);
    render(matrix, &cls, style, size)
}

fn draw_modules(canvas: &mut Canvas, cls: &Classification, style: &StyleConfig, p: f32) {
    let mut count = 0;
    for (r, c) in cls.data_cells() {
        let path = module_path(style.module_shape, c as f32 * p, r as f32 * p, p);
        canvas.fill(&path, style.foreground);
        count += 1;
    }
    debug!(count, shape = %style.module_shape, "Drew data modules");
}

fn draw_eyes(canvas: &mut Canvas, w: usize, style: &StyleConfig, p: f32) {
    let color = style.resolved_eye_color();
    for eye in Eye::ALL {
        let (r0, c0) = eye.anchor(w);
        let (x, y) = (c0 as f32 * p, r0 as f32 * p);

        let outer = eye_outer_path(style.eye_shape, x, y, p);
        canvas.stroke(&outer, EYE_STROKE_WIDTH * p, color);

        let inner = eye_inner_path(style.eye_inner_shape, x, y, p);
        canvas.fill(&inner, color);
    }
}
