use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StyleError {
    // Matrix
    #[error("Invalid matrix: width {width} with {len} modules")]
    InvalidMatrix { width: usize, len: usize },
    #[error("Encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    // Style
    #[error("Unsupported shape: {0}")]
    UnsupportedShape(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid render size: {0}")]
    InvalidSize(u32),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    // Export
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    // Image collaborator
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type StyleResult<T> = Result<T, StyleError>;
