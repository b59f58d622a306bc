use image::GrayImage;

use crate::foundation::{
    core::Coord,
    error::{QrMorphError, QrMorphResult},
};

/// Immutable square grid of QR modules; `true` marks a black module.
///
/// A QR code of version `n` has `17 + 4n` modules per side, but any non-empty square
/// grid is accepted so externally rasterized images can be used as well.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    size: usize,
    // row-major, `size * size` cells
    black: Vec<bool>,
}

impl PixelGrid {
    /// Build a grid from rows of modules (`true` = black).
    pub fn from_rows(rows: Vec<Vec<bool>>) -> QrMorphResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(QrMorphError::validation("pixel grid must be non-empty"));
        }
        let mut black = Vec::with_capacity(size * size);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(QrMorphError::validation(format!(
                    "pixel grid must be square: row {y} has {} cells, expected {size}",
                    row.len()
                )));
            }
            black.extend(row);
        }
        Ok(Self { size, black })
    }

    /// Sample a rasterized QR image at one pixel per module.
    ///
    /// Any non-zero brightness counts as white; only fully dark pixels are black.
    pub fn from_luma(img: &GrayImage) -> QrMorphResult<Self> {
        let (width, height) = img.dimensions();
        if width != height {
            return Err(QrMorphError::validation(format!(
                "rasterized QR image must be square, got {width}x{height}"
            )));
        }
        if width == 0 {
            return Err(QrMorphError::validation("rasterized QR image is empty"));
        }
        let black = img.pixels().map(|p| p.0[0] == 0).collect();
        Ok(Self {
            size: width as usize,
            black,
        })
    }

    /// Number of modules per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at `coord` is black.
    pub fn is_black_at(&self, coord: Coord) -> QrMorphResult<bool> {
        if coord.x >= self.size || coord.y >= self.size {
            return Err(QrMorphError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                size: self.size,
            });
        }
        Ok(self.black[coord.y * self.size + coord.x])
    }

    /// Cell read for scans that already clip to `[0, size)`.
    pub(crate) fn black_in_bounds(&self, coord: Coord) -> bool {
        debug_assert!(coord.x < self.size && coord.y < self.size);
        self.black[coord.y * self.size + coord.x]
    }

    /// Whether the module at `coord` is white.
    pub fn is_white_at(&self, coord: Coord) -> QrMorphResult<bool> {
        self.is_black_at(coord).map(|b| !b)
    }

    /// Total number of black modules.
    pub fn black_count(&self) -> usize {
        self.black.iter().filter(|&&b| b).count()
    }

    /// Iterate every black module in row-major order.
    pub fn black_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.black
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(idx, _)| Coord::new(idx % self.size, idx / self.size))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/pixel_grid.rs"]
mod tests;
