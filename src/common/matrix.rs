use qrcode::{EcLevel, QrCode};
use tracing::debug;

use super::error::{StyleError, StyleResult};

// Finder patterns are always 7x7 regardless of version
pub const FINDER_SIZE: usize = 7;

// Side of a version 1 symbol
pub const MIN_WIDTH: usize = 21;

pub const PLACEHOLDER_TEXT: &str = "https://example.com";

// Matrix
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    grid: Vec<bool>,
    w: usize,
}

impl QrMatrix {
    pub fn new(w: usize, grid: Vec<bool>) -> StyleResult<Self> {
        if w < MIN_WIDTH || w % 2 == 0 || w.checked_mul(w) != Some(grid.len()) {
            return Err(StyleError::InvalidMatrix { width: w, len: grid.len() });
        }
        Ok(Self { grid, w })
    }

    pub fn from_rows(rows: &[Vec<bool>]) -> StyleResult<Self> {
        let w = rows.len();
        if rows.iter().any(|r| r.len() != w) {
            let len = rows.iter().map(|r| r.len()).sum();
            return Err(StyleError::InvalidMatrix { width: w, len });
        }
        Self::new(w, rows.concat())
    }

    // Encodes at level H through the external encoder
    pub fn encode(text: &str) -> StyleResult<Self> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)?;
        let w = code.width();
        let grid = code.to_colors().into_iter().map(|c| c == qrcode::Color::Dark).collect();
        debug!(width = w, bytes = text.len(), "Encoded matrix");
        Self::new(w, grid)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn grid(&self) -> &[bool] {
        &self.grid
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&m| m).count()
    }

    fn coord_to_index(&self, r: i32, c: i32) -> usize {
        let w = self.w as i32;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i32, c: i32) -> bool {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn set(&mut self, r: i32, c: i32, dark: bool) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = dark;
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i32;
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                res.push(if self.get(i, j) { '#' } else { '.' });
            }
            res.push('\n');
        }
        res
    }
}

// Empty or blank text is replaced by the placeholder before encoding
pub fn payload_or_placeholder(text: &str) -> &str {
    if text.trim().is_empty() {
        PLACEHOLDER_TEXT
    } else {
        text
    }
}
