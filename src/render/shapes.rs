// Pixel geometry of every module, eye and eye-inner shape.
//
// Module lengths are fractions of the cell pitch; eye lengths are multiples of it. All shapes
// are anchored at the top left corner of their cell or 7x7 eye footprint.

use std::f32::consts::PI;

use super::geometry::{flatten_quad, pt, Path, Pt};
use crate::common::style::{EyeInnerShape, EyeShape, ModuleShape};

// Modules, as fractions of the pitch or of the inset side
pub const MODULE_PADDING: f32 = 0.1;
pub const MODULE_ROUNDED_RADIUS: f32 = 0.3;
pub const STAR_POINTS: usize = 5;
pub const STAR_INNER_RATIO: f32 = 0.4;

// Eyes, in pitches
pub const EYE_SIZE: f32 = 7.0;
pub const EYE_STROKE_WIDTH: f32 = 1.0;
pub const EYE_OUTER_OFFSET: f32 = 0.5;
pub const EYE_OUTER_SIZE: f32 = EYE_SIZE - EYE_STROKE_WIDTH;
pub const EYE_OUTER_ROUNDED_RADIUS: f32 = 1.5;
pub const EYE_INNER_OFFSET: f32 = 2.0;
pub const EYE_INNER_SIZE: f32 = 3.0;
pub const EYE_INNER_ROUNDED_RADIUS: f32 = 0.5;

// Segments per quadratic curve of the leaf outline
pub const LEAF_SEGMENTS: usize = 16;

// Modules
//------------------------------------------------------------------------------

// Shape of one lit module whose cell starts at (x, y)
pub fn module_path(shape: ModuleShape, x: f32, y: f32, pitch: f32) -> Path {
    let pad = pitch * MODULE_PADDING;
    let side = pitch - pad * 2.0;
    let (cx, cy) = (x + pitch / 2.0, y + pitch / 2.0);

    match shape {
        ModuleShape::Square => Path::Rect { x: x + pad, y: y + pad, w: side, h: side },
        ModuleShape::Rounded => Path::RoundedRect {
            x: x + pad,
            y: y + pad,
            w: side,
            h: side,
            r: side * MODULE_ROUNDED_RADIUS,
        },
        ModuleShape::Dots => Path::Circle { cx, cy, r: side / 2.0 },
        ModuleShape::Diamond => Path::Polygon(vec![
            pt(cx, y + pad),
            pt(x + pitch - pad, cy),
            pt(cx, y + pitch - pad),
            pt(x + pad, cy),
        ]),
        ModuleShape::Star => Path::Polygon(star_vertices(cx, cy, side / 2.0).to_vec()),
    }
}

// Alternating outer and inner vertices, starting with the outer point straight up
pub fn star_vertices(cx: f32, cy: f32, outer_r: f32) -> [Pt; 2 * STAR_POINTS] {
    let inner_r = outer_r * STAR_INNER_RATIO;
    let step = 360.0 / STAR_POINTS as f32;
    let at = |r: f32, deg: f32| {
        let rad = deg * PI / 180.0;
        pt(cx + r * rad.cos(), cy + r * rad.sin())
    };

    let mut vertices = [pt(cx, cy); 2 * STAR_POINTS];
    for i in 0..STAR_POINTS {
        let outer_deg = i as f32 * step - 90.0;
        let inner_deg = i as f32 * step + step / 2.0 - 90.0;
        vertices[2 * i] = at(outer_r, outer_deg);
        vertices[2 * i + 1] = at(inner_r, inner_deg);
    }
    vertices
}

// Eyes
//------------------------------------------------------------------------------

// Outline of the outer ring, to be stroked EYE_STROKE_WIDTH pitches wide. (x, y) is the pixel
// origin of the eye footprint.
pub fn eye_outer_path(shape: EyeShape, x: f32, y: f32, pitch: f32) -> Path {
    let off = EYE_OUTER_OFFSET * pitch;
    let size = EYE_OUTER_SIZE * pitch;
    let (cx, cy) = (x + EYE_SIZE * pitch / 2.0, y + EYE_SIZE * pitch / 2.0);
    // Radius of the stroke centre line for the round shapes
    let r = size / 2.0 - pitch / 2.0;

    match shape {
        EyeShape::Square => Path::Rect { x: x + off, y: y + off, w: size, h: size },
        EyeShape::Rounded => Path::RoundedRect {
            x: x + off,
            y: y + off,
            w: size,
            h: size,
            r: EYE_OUTER_ROUNDED_RADIUS * pitch,
        },
        EyeShape::Circle => Path::Circle { cx, cy, r },
        EyeShape::Leaf => Path::Polygon(leaf_outline(cx, cy, r)),
        EyeShape::Diamond => {
            Path::Polygon(vec![pt(cx, cy - r), pt(cx + r, cy), pt(cx, cy + r), pt(cx - r, cy)])
        }
    }
}

// Four quadratic curves through the cardinal points, controlled by the bounding square corners
pub fn leaf_outline(cx: f32, cy: f32, r: f32) -> Vec<Pt> {
    let start = pt(cx - r, cy);
    let curves = [
        (pt(cx - r, cy - r), pt(cx, cy - r)),
        (pt(cx + r, cy - r), pt(cx + r, cy)),
        (pt(cx + r, cy + r), pt(cx, cy + r)),
        (pt(cx - r, cy + r), start),
    ];

    let mut points = Vec::with_capacity(curves.len() * LEAF_SEGMENTS + 1);
    points.push(start);
    let mut from = start;
    for (ctrl, to) in curves {
        flatten_quad(from, ctrl, to, LEAF_SEGMENTS, &mut points);
        from = to;
    }
    // Closing point duplicates the start
    points.pop();
    points
}

pub fn eye_inner_path(shape: EyeInnerShape, x: f32, y: f32, pitch: f32) -> Path {
    let off = EYE_INNER_OFFSET * pitch;
    let size = EYE_INNER_SIZE * pitch;

    match shape {
        EyeInnerShape::Square => Path::Rect { x: x + off, y: y + off, w: size, h: size },
        EyeInnerShape::Rounded => Path::RoundedRect {
            x: x + off,
            y: y + off,
            w: size,
            h: size,
            r: EYE_INNER_ROUNDED_RADIUS * pitch,
        },
        EyeInnerShape::Circle => Path::Circle {
            cx: x + EYE_SIZE * pitch / 2.0,
            cy: y + EYE_SIZE * pitch / 2.0,
            r: size / 2.0,
        },
    }
}

#[cfg(test)]
mod shape_tests {
    use test_case::test_case;

    use super::{
        eye_inner_path, eye_outer_path, leaf_outline, module_path, star_vertices, LEAF_SEGMENTS,
    };
    use crate::common::style::{EyeInnerShape, EyeShape, ModuleShape};
    use crate::render::geometry::{pt, Path};

    const EPS: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_star_vertices() {
        let v = star_vertices(0.0, 0.0, 10.0);
        assert_eq!(v.len(), 10);
        // First point straight up, y grows downwards
        assert!(close(v[0].x, 0.0) && close(v[0].y, -10.0));
        // First inner vertex at -54 degrees, radius 4
        let a = (-54.0f32).to_radians();
        assert!(close(v[1].x, 4.0 * a.cos()) && close(v[1].y, 4.0 * a.sin()));
        // Second outer point at -18 degrees
        let a = (-18.0f32).to_radians();
        assert!(close(v[2].x, 10.0 * a.cos()) && close(v[2].y, 10.0 * a.sin()));
        for (i, p) in v.iter().enumerate() {
            let r = p.x.hypot(p.y);
            assert!(close(r, if i % 2 == 0 { 10.0 } else { 4.0 }), "vertex {i} radius {r}");
        }
        // Clockwise on screen: angles strictly increase by 36 degrees
        for i in 0..10 {
            let deg = v[i].y.atan2(v[i].x).to_degrees();
            let exp = i as f32 * 36.0 - 90.0;
            let diff = (deg - exp).rem_euclid(360.0);
            assert!(diff < 1e-2 || diff > 360.0 - 1e-2, "vertex {i}: {deg} vs {exp}");
        }
    }

    #[test]
    fn test_star_module_centered() {
        let Path::Polygon(v) = module_path(ModuleShape::Star, 10.0, 20.0, 10.0) else {
            panic!("star should be a polygon");
        };
        // Outer radius is half the inset side: (10 - 2) / 2
        assert!(close(v[0].x, 15.0) && close(v[0].y, 21.0));
    }

    #[test_case(ModuleShape::Square)]
    #[test_case(ModuleShape::Rounded)]
    #[test_case(ModuleShape::Dots)]
    #[test_case(ModuleShape::Diamond)]
    #[test_case(ModuleShape::Star)]
    fn test_module_inset(shape: ModuleShape) {
        let path = module_path(shape, 0.0, 0.0, 10.0);
        let b = path.bounds();
        assert!(b.x0 >= 1.0 - EPS && b.y0 >= 1.0 - EPS);
        assert!(b.x1 <= 9.0 + EPS && b.y1 <= 9.0 + EPS);
        assert!(path.contains(pt(5.0, 5.0)));
        assert!(!path.contains(pt(0.5, 0.5)));
    }

    #[test]
    fn test_module_geometry() {
        assert_eq!(
            module_path(ModuleShape::Rounded, 0.0, 0.0, 10.0),
            Path::RoundedRect { x: 1.0, y: 1.0, w: 8.0, h: 8.0, r: 8.0 * 0.3 }
        );
        assert_eq!(
            module_path(ModuleShape::Dots, 0.0, 0.0, 10.0),
            Path::Circle { cx: 5.0, cy: 5.0, r: 4.0 }
        );
        assert_eq!(
            module_path(ModuleShape::Diamond, 0.0, 0.0, 10.0),
            Path::Polygon(vec![pt(5.0, 1.0), pt(9.0, 5.0), pt(5.0, 9.0), pt(1.0, 5.0)])
        );
    }

    #[test]
    fn test_eye_outer_geometry() {
        let p = 10.0;
        assert_eq!(
            eye_outer_path(EyeShape::Square, 0.0, 0.0, p),
            Path::Rect { x: 5.0, y: 5.0, w: 60.0, h: 60.0 }
        );
        assert_eq!(
            eye_outer_path(EyeShape::Rounded, 0.0, 0.0, p),
            Path::RoundedRect { x: 5.0, y: 5.0, w: 60.0, h: 60.0, r: 15.0 }
        );
        assert_eq!(
            eye_outer_path(EyeShape::Circle, 140.0, 0.0, p),
            Path::Circle { cx: 175.0, cy: 35.0, r: 25.0 }
        );
        assert_eq!(
            eye_outer_path(EyeShape::Diamond, 0.0, 0.0, p),
            Path::Polygon(vec![pt(35.0, 10.0), pt(60.0, 35.0), pt(35.0, 60.0), pt(10.0, 35.0)])
        );
    }

    #[test]
    fn test_leaf_outline() {
        let pts = leaf_outline(0.0, 0.0, 10.0);
        assert_eq!(pts.len(), 4 * LEAF_SEGMENTS);
        // Passes through the cardinal points
        for exp in [pt(-10.0, 0.0), pt(0.0, -10.0), pt(10.0, 0.0), pt(0.0, 10.0)] {
            assert!(pts.iter().any(|p| close(p.x, exp.x) && close(p.y, exp.y)));
        }
        // Bulges past the inscribed circle on the diagonals but stays inside the square
        let diag = pts[LEAF_SEGMENTS / 2];
        assert!(close(diag.x, -7.5) && close(diag.y, -7.5));
        assert!(diag.x.hypot(diag.y) > 10.0);
    }

    #[test]
    fn test_eye_inner_geometry() {
        let p = 10.0;
        assert_eq!(
            eye_inner_path(EyeInnerShape::Square, 0.0, 0.0, p),
            Path::Rect { x: 20.0, y: 20.0, w: 30.0, h: 30.0 }
        );
        assert_eq!(
            eye_inner_path(EyeInnerShape::Rounded, 0.0, 0.0, p),
            Path::RoundedRect { x: 20.0, y: 20.0, w: 30.0, h: 30.0, r: 5.0 }
        );
        assert_eq!(
            eye_inner_path(EyeInnerShape::Circle, 0.0, 0.0, p),
            Path::Circle { cx: 35.0, cy: 35.0, r: 15.0 }
        );
    }
}
