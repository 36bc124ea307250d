pub mod color;
pub mod error;
pub mod matrix;
pub mod style;

pub use color::*;
pub use error::*;
pub use matrix::*;
pub use style::*;
