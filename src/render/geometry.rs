use imageproc::point::Point;

pub type Pt = Point<f32>;

pub fn pt(x: f32, y: f32) -> Pt {
    Point::new(x, y)
}

// Bounds
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Bounds {
    pub fn expand(self, d: f32) -> Self {
        Self { x0: self.x0 - d, y0: self.y0 - d, x1: self.x1 + d, y1: self.y1 + d }
    }

    fn of_points(points: &[Pt]) -> Self {
        points.iter().fold(
            Self { x0: f32::MAX, y0: f32::MAX, x1: f32::MIN, y1: f32::MIN },
            |b, p| Self { x0: b.x0.min(p.x), y0: b.y0.min(p.y), x1: b.x1.max(p.x), y1: b.y1.max(p.y) },
        )
    }
}

// Path
//------------------------------------------------------------------------------

// Closed outline in pixel space. Filling uses `contains`; stroking uses `sdf`, which is exact for
// every variant except non-convex polygons.
#[derive(Debug, Clone, PartialEq)]
pub enum Path {
    Rect { x: f32, y: f32, w: f32, h: f32 },
    RoundedRect { x: f32, y: f32, w: f32, h: f32, r: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
    Polygon(Vec<Pt>),
}

impl Path {
    pub fn bounds(&self) -> Bounds {
        match *self {
            Self::Rect { x, y, w, h } | Self::RoundedRect { x, y, w, h, .. } => {
                Bounds { x0: x, y0: y, x1: x + w, y1: y + h }
            }
            Self::Circle { cx, cy, r } => Bounds { x0: cx - r, y0: cy - r, x1: cx + r, y1: cy + r },
            Self::Polygon(ref points) => Bounds::of_points(points),
        }
    }

    pub fn contains(&self, p: Pt) -> bool {
        match self {
            Self::Polygon(points) => winding_number(points, p) != 0,
            _ => self.sdf(p) <= 0.0,
        }
    }

    // Signed distance to the outline, negative inside. Rects and polygons use the distance to the
    // supporting edge lines, so offsets keep sharp (mitred) corners.
    pub fn sdf(&self, p: Pt) -> f32 {
        match *self {
            Self::Rect { x, y, w, h } => {
                let dx = (p.x - (x + w / 2.0)).abs() - w / 2.0;
                let dy = (p.y - (y + h / 2.0)).abs() - h / 2.0;
                dx.max(dy)
            }
            Self::RoundedRect { x, y, w, h, r } => {
                let r = r.clamp(0.0, w.min(h) / 2.0);
                let qx = (p.x - (x + w / 2.0)).abs() - (w / 2.0 - r);
                let qy = (p.y - (y + h / 2.0)).abs() - (h / 2.0 - r);
                let outside = qx.max(0.0).hypot(qy.max(0.0));
                outside + qx.max(qy).min(0.0) - r
            }
            Self::Circle { cx, cy, r } => (p.x - cx).hypot(p.y - cy) - r,
            Self::Polygon(ref points) => convex_sdf(points, p),
        }
    }
}

fn signed_area(points: &[Pt]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<f32>()
        / 2.0
}

fn convex_sdf(points: &[Pt], p: Pt) -> f32 {
    let n = points.len();
    let orient = if signed_area(points) >= 0.0 { 1.0 } else { -1.0 };
    (0..n)
        .filter_map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            let (ex, ey) = (b.x - a.x, b.y - a.y);
            let len = ex.hypot(ey);
            (len > f32::EPSILON).then(|| orient * ((p.x - a.x) * ey - (p.y - a.y) * ex) / len)
        })
        .fold(f32::MIN, f32::max)
}

// Non-zero winding rule
pub fn winding_number(points: &[Pt], p: Pt) -> i32 {
    let n = points.len();
    let mut wn = 0;
    for i in 0..n {
        let (a, b) = (points[i], points[(i + 1) % n]);
        let side = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
        if a.y <= p.y {
            if b.y > p.y && side > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && side < 0.0 {
            wn -= 1;
        }
    }
    wn
}

// Appends the points of a quadratic curve after `p0`, ending at `p1`
pub fn flatten_quad(p0: Pt, ctrl: Pt, p1: Pt, segments: usize, out: &mut Vec<Pt>) {
    for i in 1..=segments {
        let t = i as f32 / segments as f32;
        let mt = 1.0 - t;
        let x = mt * mt * p0.x + 2.0 * mt * t * ctrl.x + t * t * p1.x;
        let y = mt * mt * p0.y + 2.0 * mt * t * ctrl.y + t * t * p1.y;
        out.push(pt(x, y));
    }
}
