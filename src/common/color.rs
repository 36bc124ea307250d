use image::Rgba;

use super::error::{StyleError, StyleResult};

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
pub fn parse_hex_color(s: &str) -> StyleResult<Rgba<u8>> {
    let hex = s.trim().trim_start_matches('#');
    let invalid = || StyleError::InvalidColor(s.to_string());

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize, len: usize| -> StyleResult<u8> {
        let v = u8::from_str_radix(&hex[i..i + len], 16).map_err(|_| invalid())?;
        Ok(if len == 1 { v * 17 } else { v })
    };

    match hex.len() {
        3 => Ok(Rgba([channel(0, 1)?, channel(1, 1)?, channel(2, 1)?, 255])),
        6 => Ok(Rgba([channel(0, 2)?, channel(2, 2)?, channel(4, 2)?, 255])),
        8 => Ok(Rgba([channel(0, 2)?, channel(2, 2)?, channel(4, 2)?, channel(6, 2)?])),
        _ => Err(invalid()),
    }
}

pub fn to_hex(color: Rgba<u8>) -> String {
    let Rgba([r, g, b, a]) = color;
    if a == 255 {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

// Same colour with its alpha replaced, e.g. the `#RRGGBB20` tints used by frames
pub fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let Rgba([r, g, b, _]) = color;
    Rgba([r, g, b, alpha])
}

// Source-over compositing of `src` onto `dst`, with `src` alpha scaled by `coverage`
pub fn blend(dst: Rgba<u8>, src: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return dst;
    }
    if sa >= 1.0 {
        return src;
    }

    let da = dst[3] as f32 / 255.0;
    let oa = sa + da * (1.0 - sa);
    let mix = |s: u8, d: u8| {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / oa;
        v.round().clamp(0.0, 255.0) as u8
    };

    Rgba([mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), (oa * 255.0).round() as u8])
}

pub fn lerp(a: Rgba<u8>, b: Rgba<u8>, t: f32) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Rgba([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]), mix(a[3], b[3])])
}
