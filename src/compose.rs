// Preview composition around a rendered surface: page background, template frame and centre
// logo.
//
// The logo occludes the middle of the symbol; level H error correction is what keeps the
// composed code scannable.

use std::f32::consts::SQRT_2;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

use crate::common::color::{lerp, with_alpha, TRANSPARENT};
use crate::presets::{BackgroundFill, FrameStyle, TemplatePreset};
use crate::render::geometry::Path;
use crate::render::raster::Canvas;

pub const BACKGROUND_PADDING: u32 = 40;
pub const BACKGROUND_RADIUS: f32 = 20.0;
pub const FRAME_BORDER_WIDTH: f32 = 2.0;
pub const FRAME_TINT_ALPHA: u8 = 0x20;
pub const LOGO_RATIO: f32 = 0.22;
pub const LOGO_PADDING: u32 = 4;
pub const LOGO_RADIUS: f32 = 8.0;

// Frame
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub style: FrameStyle,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
    pub gradient: Option<(Rgba<u8>, Rgba<u8>)>,
}

impl Frame {
    pub fn from_template(t: &TemplatePreset) -> Self {
        Self {
            style: t.frame,
            foreground: t.foreground,
            background: t.background,
            gradient: t.gradient,
        }
    }

    pub fn padding(&self) -> u32 {
        match self.style {
            FrameStyle::None => 16,
            FrameStyle::Simple => 20,
            FrameStyle::Gradient | FrameStyle::Shadow => 24,
        }
    }

    pub fn radius(&self) -> f32 {
        match self.style {
            FrameStyle::None => 0.0,
            FrameStyle::Simple => 12.0,
            FrameStyle::Gradient | FrameStyle::Shadow => 16.0,
        }
    }

    fn paint(&self, canvas: &mut Canvas, origin: f32, side: f32) {
        let path = Path::RoundedRect { x: origin, y: origin, w: side, h: side, r: self.radius() };
        match (self.style, self.gradient) {
            (FrameStyle::Gradient, Some((from, to))) => {
                let stops =
                    [(0.0, with_alpha(from, FRAME_TINT_ALPHA)), (1.0, with_alpha(to, FRAME_TINT_ALPHA))];
                canvas.paint_shaded(path.bounds(), |p| path.contains(p), |x, y| {
                    let (fx, fy) = (x as f32 + 0.5 - origin, y as f32 + 0.5 - origin);
                    gradient_color(&stops, gradient_position(135.0, side, side, fx, fy))
                });
            }
            _ => canvas.fill(&path, self.background),
        }

        if self.style == FrameStyle::Simple {
            // CSS borders sit inside the box
            let inset = FRAME_BORDER_WIDTH / 2.0;
            let border = Path::RoundedRect {
                x: origin + inset,
                y: origin + inset,
                w: side - FRAME_BORDER_WIDTH,
                h: side - FRAME_BORDER_WIDTH,
                r: (self.radius() - inset).max(0.0),
            };
            let color = with_alpha(self.foreground, FRAME_TINT_ALPHA);
            canvas.stroke(&border, FRAME_BORDER_WIDTH, color);
        }
    }
}

// Preview
//------------------------------------------------------------------------------

pub struct Preview<'a> {
    frame: Frame,
    background: BackgroundFill,
    logo: Option<&'a DynamicImage>,
}

impl<'a> Preview<'a> {
    pub fn new(frame: Frame) -> Self {
        Self { frame, background: BackgroundFill::Transparent, logo: None }
    }

    pub fn background(mut self, fill: BackgroundFill) -> Self {
        self.background = fill;
        self
    }

    pub fn logo(mut self, logo: &'a DynamicImage) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn compose(&self, qr: &RgbaImage) -> RgbaImage {
        let size = qr.width();
        let frame_pad = self.frame.padding();
        let frame_side = size + 2 * frame_pad;
        let outer = match self.background {
            BackgroundFill::Transparent => 0,
            _ => BACKGROUND_PADDING,
        };
        let total = frame_side + 2 * outer;
        debug!(size, total, frame = ?self.frame.style, "Composing preview");

        let mut canvas = Canvas::new(total, total, TRANSPARENT);
        if outer > 0 {
            let side = total as f32;
            let area = Path::RoundedRect { x: 0.0, y: 0.0, w: side, h: side, r: BACKGROUND_RADIUS };
            let fill = self.background;
            canvas.paint_shaded(area.bounds(), |p| area.contains(p), |x, y| {
                shade_background(&fill, x as f32 + 0.5, y as f32 + 0.5, side, side)
            });
        }
        self.frame.paint(&mut canvas, outer as f32, frame_side as f32);

        let qr_origin = outer + frame_pad;
        imageops::overlay(canvas.image_mut(), qr, qr_origin as i64, qr_origin as i64);

        if let Some(logo) = self.logo {
            draw_logo(&mut canvas, logo, qr_origin, size, self.frame.background);
        }

        canvas.into_image()
    }
}

fn draw_logo(
    canvas: &mut Canvas,
    logo: &DynamicImage,
    qr_origin: u32,
    qr_size: u32,
    plate: Rgba<u8>,
) {
    let side = (qr_size as f32 * LOGO_RATIO).round() as u32;
    if side <= 2 * LOGO_PADDING {
        return;
    }

    let x0 = qr_origin + (qr_size - side) / 2;
    let (x, s) = (x0 as f32, side as f32);
    canvas.fill(&Path::RoundedRect { x, y: x, w: s, h: s, r: LOGO_RADIUS }, plate);

    // Fit inside the padded plate, aspect ratio preserved
    let inner = side - 2 * LOGO_PADDING;
    let fitted = logo.resize(inner, inner, FilterType::Lanczos3).to_rgba8();
    let lx = x0 + LOGO_PADDING + (inner - fitted.width()) / 2;
    let ly = x0 + LOGO_PADDING + (inner - fitted.height()) / 2;
    imageops::overlay(canvas.image_mut(), &fitted, lx as i64, ly as i64);
}

// Background shading
//------------------------------------------------------------------------------

// Position along a CSS linear gradient line, 0 at the start corner and 1 at the end
pub fn gradient_position(angle: f32, w: f32, h: f32, x: f32, y: f32) -> f32 {
    let a = angle.to_radians();
    let (dx, dy) = (a.sin(), -a.cos());
    let len = (w * dx).abs() + (h * dy).abs();
    ((x - w / 2.0) * dx + (y - h / 2.0) * dy) / len + 0.5
}

pub fn gradient_color(stops: &[(f32, Rgba<u8>)], t: f32) -> Rgba<u8> {
    let Some(&(first_pos, first)) = stops.first() else {
        return TRANSPARENT;
    };
    if t <= first_pos {
        return first;
    }
    for pair in stops.windows(2) {
        let ((p0, c0), (p1, c1)) = (pair[0], pair[1]);
        if t <= p1 {
            let span = p1 - p0;
            return if span <= f32::EPSILON { c1 } else { lerp(c0, c1, (t - p0) / span) };
        }
    }
    stops[stops.len() - 1].1
}

pub fn shade_background(fill: &BackgroundFill, x: f32, y: f32, w: f32, h: f32) -> Rgba<u8> {
    match *fill {
        BackgroundFill::Transparent => TRANSPARENT,
        BackgroundFill::Solid(c) => c,
        BackgroundFill::LinearGradient { angle, stops } => {
            gradient_color(stops, gradient_position(angle, w, h, x, y))
        }
        BackgroundFill::Dots { base, dot, spacing, radius } => {
            // One dot centred in each tile
            let dx = x.rem_euclid(spacing) - spacing / 2.0;
            let dy = y.rem_euclid(spacing) - spacing / 2.0;
            if dx.hypot(dy) <= radius {
                dot
            } else {
                base
            }
        }
        BackgroundFill::Grid { base, line, spacing, width } => {
            if x.rem_euclid(spacing) < width || y.rem_euclid(spacing) < width {
                line
            } else {
                base
            }
        }
        BackgroundFill::Stripes { base, stripe, period, width } => {
            if ((x + y) / SQRT_2).rem_euclid(period) < width {
                stripe
            } else {
                base
            }
        }
    }
}
