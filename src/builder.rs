use image::RgbaImage;
use tracing::debug;

use crate::classify::classify;
use crate::common::{
    error::{StyleError, StyleResult},
    matrix::{payload_or_placeholder, QrMatrix},
    style::StyleConfig,
};
use crate::render::render;

pub const DEFAULT_SIZE: u32 = 200;

pub struct StyledQrBuilder<'a> {
    text: &'a str,
    size: u32,
    style: StyleConfig,
}

impl<'a> StyledQrBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, size: DEFAULT_SIZE, style: StyleConfig::default() }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn size(&mut self, size: u32) -> &mut Self {
        self.size = size;
        self
    }

    pub fn style(&mut self, style: StyleConfig) -> &mut Self {
        self.style = style;
        self
    }

    // Text handed to the encoder, blank input replaced by the placeholder
    pub fn payload(&self) -> &'a str {
        payload_or_placeholder(self.text)
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Size: {}, Module: {}, Eye: {}, Eye inner: {} }}",
            self.size, self.style.module_shape, self.style.eye_shape, self.style.eye_inner_shape
        )
    }
}

impl StyledQrBuilder<'_> {
    pub fn matrix(&self) -> StyleResult<QrMatrix> {
        QrMatrix::encode(self.payload())
    }

    pub fn build(&self) -> StyleResult<RgbaImage> {
        if self.size == 0 {
            return Err(StyleError::InvalidSize(self.size));
        }

        debug!(metadata = %self.metadata(), "Generating styled QR");
        let matrix = self.matrix()?;
        self.build_with_matrix(&matrix)
    }

    // Reuses a matrix across colour and shape changes for the same text
    pub fn build_with_matrix(&self, matrix: &QrMatrix) -> StyleResult<RgbaImage> {
        let cls = classify(matrix);
        let img = render(matrix, &cls, &self.style, self.size)?;

        let total = matrix.width() * matrix.width();
        let dark = matrix.count_dark_modules();
        debug!(width = matrix.width(), dark, light = total - dark, "Styled QR generated");

        Ok(img)
    }
}
