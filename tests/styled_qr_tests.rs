use image::{GrayImage, Luma, RgbaImage};

use qrstyle::classify::{classify, Eye, Region};
use qrstyle::{
    EyeInnerShape, EyeShape, ModuleShape, QrMatrix, StyleConfig, StyledQrBuilder, PLACEHOLDER_TEXT,
};

const FINDER: usize = 7;
const QUIET_ZONE: u32 = 4;

fn luma(img: &RgbaImage, x: u32, y: u32) -> u8 {
    let p = img.get_pixel(x, y);
    ((p[0] as u32 * 299 + p[1] as u32 * 587 + p[2] as u32 * 114) / 1000) as u8
}

fn is_dark(img: &RgbaImage, x: f32, y: f32) -> bool {
    luma(img, x.floor() as u32, y.floor() as u32) < 128
}

fn in_eye_footprint(r: usize, c: usize, w: usize) -> bool {
    Eye::ALL.iter().any(|eye| {
        let (r0, c0) = eye.anchor(w);
        (r0..r0 + FINDER).contains(&r) && (c0..c0 + FINDER).contains(&c)
    })
}

// Surface on a white quiet zone, as a scanner would see it printed
fn with_quiet_zone(img: &RgbaImage, pitch: u32) -> GrayImage {
    let pad = QUIET_ZONE * pitch;
    let side = img.width() + 2 * pad;
    GrayImage::from_fn(side, side, |x, y| {
        let inside = (pad..pad + img.width()).contains(&x) && (pad..pad + img.height()).contains(&y);
        Luma([if inside { luma(img, x - pad, y - pad) } else { 255 }])
    })
}

fn decode(img: &GrayImage) -> String {
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32)[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1);
    let (_meta, content) = grids[0].decode().expect("Failed to read QR");
    content
}

#[test]
fn test_classic_round_trip() {
    let text = "https://qr.io";
    let matrix = QrMatrix::encode(text).unwrap();
    assert_eq!(matrix.width(), 25);

    // Pitch 12
    let img = StyledQrBuilder::new(text).size(300).build_with_matrix(&matrix).unwrap();

    assert_eq!(decode(&with_quiet_zone(&img, 12)), text);
}

#[test]
fn test_star_leaf_dot_round_trip() {
    let text = "https://qr.io";
    let matrix = QrMatrix::encode(text).unwrap();
    let w = matrix.width();
    let style = StyleConfig::new()
        .module_shape(ModuleShape::Star)
        .eye_shape(EyeShape::Leaf)
        .eye_inner_shape(EyeInnerShape::Circle);
    let img =
        StyledQrBuilder::new(text).size(300).style(style).build_with_matrix(&matrix).unwrap();
    let p = 12.0;

    // Every module outside the eyes reads back as its matrix bit at the cell centre
    for r in 0..w {
        for c in 0..w {
            if in_eye_footprint(r, c, w) {
                continue;
            }
            let dark = is_dark(&img, (c as f32 + 0.5) * p, (r as f32 + 0.5) * p);
            assert_eq!(dark, matrix.get(r as i32, c as i32), "module ({r}, {c})");
        }
    }

    // Each eye shows a closed ring and a solid centre
    for eye in Eye::ALL {
        let (r0, c0) = eye.anchor(w);
        let (x0, y0) = (c0 as f32 * p, r0 as f32 * p);
        assert!(is_dark(&img, x0 + 3.5 * p, y0 + 3.5 * p));
        assert!(is_dark(&img, x0 + 3.5 * p, y0 + 1.0 * p));
        assert!(is_dark(&img, x0 + 6.0 * p, y0 + 3.5 * p));
        // Light gap between the dot and the ring
        assert!(!is_dark(&img, x0 + 3.5 * p, y0 + 1.75 * p));
    }

    // Scanners locate eyes by shape; decode the sampled data modules with canonical eyes
    let scale = 8;
    let side = (w as u32 + 2 * QUIET_ZONE) * scale;
    let sampled = GrayImage::from_fn(side, side, |x, y| {
        let c = (x / scale) as i64 - QUIET_ZONE as i64;
        let r = (y / scale) as i64 - QUIET_ZONE as i64;
        if r < 0 || c < 0 || r >= w as i64 || c >= w as i64 {
            return Luma([255]);
        }
        let (r, c) = (r as usize, c as usize);
        let dark = if in_eye_footprint(r, c, w) {
            matrix.get(r as i32, c as i32)
        } else {
            is_dark(&img, (c as f32 + 0.5) * p, (r as f32 + 0.5) * p)
        };
        Luma([if dark { 0 } else { 255 }])
    });
    assert_eq!(decode(&sampled), text);
}

#[test]
fn test_dots_circle_scenario() {
    let style = StyleConfig::new()
        .module_shape(ModuleShape::Dots)
        .eye_shape(EyeShape::Circle)
        .eye_inner_shape(EyeInnerShape::Circle);
    let matrix = QrMatrix::encode(PLACEHOLDER_TEXT).unwrap();
    let w = matrix.width();
    let img = StyledQrBuilder::new(PLACEHOLDER_TEXT).size(200).style(style).build().unwrap();
    let p = 200.0 / w as f32;
    let cls = classify(&matrix);

    for (r, c) in cls.data_cells() {
        let (x, y) = (c as f32 * p, r as f32 * p);
        assert!(is_dark(&img, x + 0.5 * p, y + 0.5 * p), "dot centre ({r}, {c})");
        // Circle leaves the cell corner uncovered
        assert!(!is_dark(&img, x + 0.05 * p, y + 0.05 * p), "dot corner ({r}, {c})");
    }

    for eye in Eye::ALL {
        let (r0, c0) = eye.anchor(w);
        let (cx, cy) = ((c0 as f32 + 3.5) * p, (r0 as f32 + 3.5) * p);
        // Ring centre line at 2.5 pitches, including the diagonals
        let d = 2.5 * p * std::f32::consts::FRAC_1_SQRT_2;
        for (dx, dy) in [(0.0, -2.5 * p), (2.5 * p, 0.0), (-d, -d), (d, d)] {
            assert!(is_dark(&img, cx + dx, cy + dy));
        }
        assert!(is_dark(&img, cx, cy));
        assert!(is_dark(&img, cx + 1.2 * p, cy));
        // Between the dot and the ring
        assert!(!is_dark(&img, cx + 1.75 * p, cy));
        // Footprint corner outside the ring
        assert!(!is_dark(&img, cx - 3.3 * p, cy - 3.3 * p));
    }
}

#[test]
fn test_empty_text_uses_placeholder() {
    let style = StyleConfig::new().module_shape(ModuleShape::Rounded);
    let empty = StyledQrBuilder::new("").style(style).build().unwrap();
    let explicit = StyledQrBuilder::new(PLACEHOLDER_TEXT).style(style).build().unwrap();
    assert_eq!(empty, explicit);
}

#[test]
fn test_eye_cells_ignore_matrix_bits() {
    let matrix = QrMatrix::encode("https://qr.io").unwrap();
    let w = matrix.width();
    let cls = classify(&matrix);

    let mut flipped = matrix.clone();
    for r in 0..w {
        for c in 0..w {
            if cls.get(r, c).is_skip() {
                let (r, c) = (r as i32, c as i32);
                flipped.set(r, c, !matrix.get(r, c));
            }
        }
    }
    assert_ne!(flipped, matrix);

    for shape in EyeShape::ALL {
        let style = StyleConfig::new().eye_shape(*shape).module_shape(ModuleShape::Diamond);
        let mut builder = StyledQrBuilder::new("https://qr.io");
        builder.size(175).style(style);
        let original = builder.build_with_matrix(&matrix).unwrap();
        assert_eq!(original, builder.build_with_matrix(&flipped).unwrap());
    }
}

#[test]
fn test_large_matrix_eyes_disjoint() {
    // Version 15
    let w = 77;
    let matrix = QrMatrix::new(w, vec![true; w * w]).unwrap();
    let cls = classify(&matrix);
    for eye in Eye::ALL {
        let skipped =
            cls.cells().iter().filter(|reg| matches!(reg, Region::Skip(e, _) if *e == eye)).count();
        assert_eq!(skipped, 24 + 9);
    }
    assert_eq!(cls.count(Region::Data), w * w - 3 * 33);
}

#[cfg(test)]
mod styled_qr_proptests {
    use proptest::prelude::*;

    use qrstyle::classify::{classify, Eye, Region};
    use qrstyle::render::render_matrix;
    use qrstyle::{EyeInnerShape, EyeShape, ModuleShape, QrMatrix, StyleConfig};

    pub fn matrix_strategy() -> impl Strategy<Value = QrMatrix> {
        (1usize..=40).prop_flat_map(|v| {
            let w = 17 + 4 * v;
            prop::collection::vec(any::<bool>(), w * w)
                .prop_map(move |grid| QrMatrix::new(w, grid).unwrap())
        })
    }

    pub fn style_strategy() -> impl Strategy<Value = StyleConfig> {
        (
            prop::sample::select(ModuleShape::ALL.to_vec()),
            prop::sample::select(EyeShape::ALL.to_vec()),
            prop::sample::select(EyeInnerShape::ALL.to_vec()),
            any::<[u8; 4]>(),
            any::<[u8; 4]>(),
            prop::option::of(any::<[u8; 4]>()),
        )
            .prop_map(|(module, eye, inner, fg, bg, eye_color)| {
                StyleConfig::new()
                    .module_shape(module)
                    .eye_shape(eye)
                    .eye_inner_shape(inner)
                    .foreground(image::Rgba(fg))
                    .background(image::Rgba(bg))
                    .eye_color(eye_color.map(image::Rgba))
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn proptest_classify_labels(matrix in matrix_strategy()) {
            let w = matrix.width();
            let cls = classify(&matrix);
            prop_assert_eq!(cls.cells().len(), w * w);

            for r in 0..w {
                for c in 0..w {
                    let windows = Eye::ALL
                        .iter()
                        .filter(|eye| {
                            let (r0, c0) = eye.anchor(w);
                            (r0..r0 + 7).contains(&r) && (c0..c0 + 7).contains(&c)
                        })
                        .count();
                    prop_assert!(windows <= 1);

                    let region = cls.get(r, c);
                    if windows == 0 {
                        let lit = matrix.get(r as i32, c as i32);
                        let exp = if lit { Region::Data } else { Region::Light };
                        prop_assert_eq!(region, exp);
                    } else if let Region::Skip(eye, _) = region {
                        let (r0, c0) = eye.anchor(w);
                        prop_assert!(r >= r0 && c >= c0 && r < r0 + 7 && c < c0 + 7);
                    }
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn proptest_render_deterministic(style in style_strategy(), size in 42u32..120) {
            let matrix = QrMatrix::encode("OK").unwrap();
            let first = render_matrix(&matrix, &style, size).unwrap();
            let second = render_matrix(&matrix, &style, size).unwrap();
            prop_assert_eq!(first.dimensions(), (size, size));
            prop_assert!(first == second);
        }
    }
}
