use std::error::Error;

use qrstyle::StyledQrBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    // Simplest usage - provide only text, square modules, black on white, 200px
    let img = StyledQrBuilder::new("https://example.com").build()?;

    img.save("simple_styled_qr.png")?;

    println!("Styled QR code saved to: simple_styled_qr.png");
    Ok(())
}
