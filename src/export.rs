// Export of a rendered or composed surface.
//
// PNG and JPEG bytes are produced through `image`. PDF pages are assembled elsewhere: this module
// only provides the PNG payload and where it sits on the A4 page.

use std::fmt;
use std::io::Cursor;
use std::path::Path;
use std::str::FromStr;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageError, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use tracing::debug;

use crate::common::color::{blend, WHITE};
use crate::common::error::{StyleError, StyleResult};

pub const JPEG_QUALITY: u8 = 95;
pub const FILE_PREFIX: &str = "qrcode";

// A4 portrait, millimetres
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;
pub const PDF_IMAGE_MM: f32 = 120.0;

// Format
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }

    // Capture scale applied to the on-screen size
    pub fn pixel_ratio(self) -> u32 {
        match self {
            Self::Png | Self::Jpeg => 3,
            Self::Pdf => 4,
        }
    }

    pub fn export_size(self, size: u32) -> u32 {
        size * self.pixel_ratio()
    }
}

impl FromStr for ExportFormat {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(StyleError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

pub fn file_name(template_id: &str, format: ExportFormat) -> String {
    format!("{FILE_PREFIX}-{template_id}.{}", format.extension())
}

// Encoding
//------------------------------------------------------------------------------

// Composites onto an opaque background, for formats without an alpha channel
pub fn flatten(img: &RgbaImage, background: Rgba<u8>) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, _]) = blend(background, *img.get_pixel(x, y), 1.0);
        Rgb([r, g, b])
    })
}

// For PDF this is the PNG payload embedded in the page
pub fn encode_image(img: &RgbaImage, format: ExportFormat) -> StyleResult<Vec<u8>> {
    let mut bytes = Vec::new();
    match format {
        ExportFormat::Png | ExportFormat::Pdf => {
            img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        }
        ExportFormat::Jpeg => {
            let rgb = flatten(img, WHITE);
            JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).encode_image(&rgb)?;
        }
    }

    debug!(format = %format, width = img.width(), bytes = bytes.len(), "Encoded image");
    Ok(bytes)
}

pub fn save<P: AsRef<Path>>(img: &RgbaImage, path: P, format: ExportFormat) -> StyleResult<()> {
    if format == ExportFormat::Pdf {
        return Err(StyleError::UnsupportedFormat(format.to_string()));
    }

    let bytes = encode_image(img, format)?;
    std::fs::write(path, bytes).map_err(|e| StyleError::Image(ImageError::IoError(e)))
}

// Page layout
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PageLayout {
    pub fn centered(page_width: f32, page_height: f32, side: f32) -> Self {
        Self {
            page_width,
            page_height,
            x: (page_width - side) / 2.0,
            y: (page_height - side) / 2.0,
            width: side,
            height: side,
        }
    }
}

pub fn a4_placement() -> PageLayout {
    PageLayout::centered(A4_WIDTH_MM, A4_HEIGHT_MM, PDF_IMAGE_MM)
}
