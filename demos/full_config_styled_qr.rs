use std::error::Error;

use qrstyle::export::{encode_image, file_name};
use qrstyle::{
    parse_hex_color, EyeInnerShape, EyeShape, ExportFormat, ModuleShape, StyleConfig,
    StyledQrBuilder,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=qrstyle=debug shows each pipeline step
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let style = StyleConfig::new()
        .module_shape(ModuleShape::Star)        // Data module shape - defaults to square
        .eye_shape(EyeShape::Leaf)              // Eye outer ring - defaults to square
        .eye_inner_shape(EyeInnerShape::Circle) // Eye centre - defaults to square
        .foreground(parse_hex_color("#1E3A8A")?)
        .background(parse_hex_color("#FFFFFF")?)
        .eye_color(Some(parse_hex_color("#F59E0B")?)); // Eye colour - defaults to foreground

    let format = ExportFormat::Jpeg;
    let mut builder = StyledQrBuilder::new("This example shows every styling option.");
    builder.size(format.export_size(200)).style(style);
    let img = builder.build()?;

    let path = file_name("custom", format);
    std::fs::write(&path, encode_image(&img, format)?)?;

    println!("Styled QR code saved to: {path}");
    println!("QR metadata: {}", builder.metadata());

    Ok(())
}
