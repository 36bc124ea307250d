// Geometric classification of matrix cells into data modules and finder-eye regions.
//
// The outer ring and the inner 3x3 stone of each finder pattern are excluded from the per-module
// pass and redrawn as whole shapes afterwards. Those cells are `Region::Skip` regardless of
// their bit in the source matrix.

use crate::common::matrix::{QrMatrix, FINDER_SIZE};

// Local window of the inner stone, half open
const INNER_START: usize = 2;
const INNER_END: usize = 5;

// Eye
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Eye {
    TopLeft,
    TopRight,
    BottomLeft,
}

impl Eye {
    pub const ALL: [Eye; 3] = [Eye::TopLeft, Eye::TopRight, Eye::BottomLeft];

    // (row, col) of the top left module of the 7x7 footprint
    pub fn anchor(self, w: usize) -> (usize, usize) {
        let far = w.saturating_sub(FINDER_SIZE);
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (0, far),
            Self::BottomLeft => (far, 0),
        }
    }

    // Local offset of (r, c) inside this eye's footprint, if it falls there
    fn local(self, r: usize, c: usize, w: usize) -> Option<(usize, usize)> {
        let (r0, c0) = self.anchor(w);
        let inside = (r0..r0 + FINDER_SIZE).contains(&r) && (c0..c0 + FINDER_SIZE).contains(&c);
        inside.then(|| (r - r0, c - c0))
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum EyePart {
    OuterRing,
    Inner,
}

pub fn eye_part(r: usize, c: usize, w: usize) -> Option<(Eye, EyePart)> {
    if w < FINDER_SIZE {
        return None;
    }
    Eye::ALL.into_iter().find_map(|eye| {
        let (lr, lc) = eye.local(r, c, w)?;
        let edge = FINDER_SIZE - 1;
        let inner = INNER_START..INNER_END;
        if lr == 0 || lr == edge || lc == 0 || lc == edge {
            Some((eye, EyePart::OuterRing))
        } else if inner.contains(&lr) && inner.contains(&lc) {
            Some((eye, EyePart::Inner))
        } else {
            None
        }
    })
}

// Region
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Region {
    // Unlit cell outside any eye window
    Light,
    // Lit cell drawn by the module pass
    Data,
    // Covered by an eye shape, never touched by the module pass
    Skip(Eye, EyePart),
}

impl Region {
    pub fn is_skip(self) -> bool {
        matches!(self, Region::Skip(..))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    cells: Vec<Region>,
    w: usize,
}

impl Classification {
    pub fn width(&self) -> usize {
        self.w
    }

    pub fn get(&self, r: usize, c: usize) -> Region {
        debug_assert!(r < self.w && c < self.w, "cell out of bounds");
        self.cells[r * self.w + c]
    }

    pub fn cells(&self) -> &[Region] {
        &self.cells
    }

    pub fn data_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &reg)| reg == Region::Data)
            .map(|(i, _)| (i / self.w, i % self.w))
    }

    pub fn count(&self, region: Region) -> usize {
        self.cells.iter().filter(|&&reg| reg == region).count()
    }
}

pub fn classify(matrix: &QrMatrix) -> Classification {
    let w = matrix.width();
    let grid = matrix.grid();
    let cells = (0..w * w)
        .map(|i| match eye_part(i / w, i % w, w) {
            Some((eye, part)) => Region::Skip(eye, part),
            None if grid[i] => Region::Data,
            None => Region::Light,
        })
        .collect();
    Classification { cells, w }
}
