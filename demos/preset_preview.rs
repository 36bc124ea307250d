use std::error::Error;

use qrstyle::compose::{Frame, Preview};
use qrstyle::export::{a4_placement, save};
use qrstyle::presets::{background, pattern, template};
use qrstyle::{ExportFormat, StyleConfig, StyledQrBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    // Template colours + pattern shapes, as picked in a style gallery
    let t = template("midnight-gold")?;
    let style = StyleConfig::from_presets(t, pattern("elegant")?);

    let qr = StyledQrBuilder::new("https://example.com").size(240).style(style).build()?;

    let logo = image::RgbaImage::from_pixel(32, 32, image::Rgba([245, 158, 11, 255]));
    let logo = image::DynamicImage::ImageRgba8(logo);
    let preview = Preview::new(Frame::from_template(t))
        .background(background("gradient-midnight")?.fill)
        .logo(&logo)
        .compose(&qr);

    save(&preview, "preset_preview.png", ExportFormat::Png)?;

    let page = a4_placement();
    println!("Preview saved to: preset_preview.png");
    println!("PDF placement: {}x{}mm at ({}, {})mm", page.width, page.height, page.x, page.y);
    Ok(())
}
