//! # qrstyle
//!
//! A Rust library for rendering styled QR codes. It encodes text at error correction level H,
//! classifies the matrix into data modules and finder eyes, and paints each region with its own
//! shape while keeping the code scannable.
//!
//! ## Features
//!
//! - **Module shapes**: square, rounded, dots, diamond and star
//! - **Eye shapes**: square, rounded, circle, leaf and diamond outer rings, with square, rounded or dot centres
//! - **Colours**: foreground, background and an optional separate eye colour
//! - **Presets**: pattern, colour template and page background catalogs
//! - **Preview composition**: template frames, page backgrounds and a centre logo
//! - **Export**: PNG and JPEG encoding plus A4 placement for PDF pages
//!
//! ## Quick Start
//!
//! ### Simple styled QR
//!
//! ```rust
//! use qrstyle::StyledQrBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Square modules, black on white, 200px
//! let img = StyledQrBuilder::new("https://example.com").build()?;
//! assert_eq!(img.dimensions(), (200, 200));
//! # Ok(())
//! # }
//! ```
//!
//! ### Full configuration
//!
//! ```rust
//! use qrstyle::{parse_hex_color, EyeInnerShape, EyeShape, ModuleShape, StyleConfig, StyledQrBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let style = StyleConfig::new()
//!     .module_shape(ModuleShape::Star)
//!     .eye_shape(EyeShape::Leaf)
//!     .eye_inner_shape(EyeInnerShape::Circle)
//!     .foreground(parse_hex_color("#1E3A8A")?)
//!     .background(parse_hex_color("#FFFFFF")?)
//!     .eye_color(Some(parse_hex_color("#F59E0B")?)); // If not set, eyes use the foreground
//!
//! let img = StyledQrBuilder::new("https://example.com")
//!     .size(300)
//!     .style(style)
//!     .build()?;
//! assert_eq!(img.width(), 300);
//! # Ok(())
//! # }
//! ```
//!
//! ### Presets and preview
//!
//! ```rust
//! use qrstyle::compose::{Frame, Preview};
//! use qrstyle::presets::{background, template};
//! use qrstyle::{StyleConfig, StyledQrBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let t = template("ocean-blue")?;
//! let style = StyleConfig::from_presets(t, t.default_pattern());
//! let qr = StyledQrBuilder::new("https://example.com").style(style).build()?;
//!
//! let preview = Preview::new(Frame::from_template(t))
//!     .background(background("gradient-sunset")?.fill)
//!     .compose(&qr);
//! assert_eq!(preview.width(), 200 + 2 * 24 + 2 * 40);
//! # Ok(())
//! # }
//! ```
//!
//! ## Rendering model
//!
//! The surface is painted in three passes: the background, every lit data module in the module
//! shape, then the three eyes as whole shapes. The classifier keeps eye footprints out of the
//! module pass, so eye pixels never depend on the matrix bits underneath.

pub mod builder;
pub mod classify;
pub mod common;
pub mod compose;
pub mod export;
pub mod presets;
pub mod render;

pub use builder::StyledQrBuilder;
pub use classify::{classify, Classification, Eye, EyePart, Region};
pub use common::color::parse_hex_color;
pub use common::error::{StyleError, StyleResult};
pub use common::matrix::{QrMatrix, PLACEHOLDER_TEXT};
pub use common::style::{EyeInnerShape, EyeShape, ModuleShape, StyleConfig};
pub use export::ExportFormat;
pub use render::{render, render_matrix};
