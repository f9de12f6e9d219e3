//! Grid boundary computation, tile extraction, and cell-wise reassembly
//!
//! A grid of order n splits an image into n-by-n rectangular cells. Boundary
//! coordinates are floor-divided so the cells tile the image exactly, with
//! cell sizes differing by at most one pixel per axis.

use ndarray::{Array3, s};

use crate::io::error::{MosaicError, Result};
use crate::math::interpolation::resize_bilinear;

/// An owned RGB pixel buffer with shape (height, width, 3), top-left origin
pub type Image = Array3<u8>;

/// An owned copy of one grid cell's pixels, same layout as [`Image`]
pub type Tile = Array3<u8>;

/// Row and column boundaries partitioning an image into n-by-n cells
///
/// Recomputed fresh for every mosaic request; holds no reference to the
/// image it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
    ys: Vec<usize>,
    xs: Vec<usize>,
}

impl GridSpec {
    /// Compute cell boundaries for an image of the given dimensions
    ///
    /// Boundary `i` sits at `extent * i / order` (integer division), so
    /// `ys` runs from 0 to `height` and `xs` from 0 to `width`, both
    /// non-decreasing.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidGridOrder`] when `order` is zero.
    pub fn compute(height: usize, width: usize, order: usize) -> Result<Self> {
        if order < 1 {
            return Err(MosaicError::InvalidGridOrder { order });
        }

        let ys = (0..=order).map(|i| height * i / order).collect();
        let xs = (0..=order).map(|i| width * i / order).collect();
        Ok(Self { ys, xs })
    }

    /// Grid order n; the grid has n * n cells
    pub fn order(&self) -> usize {
        self.ys.len().saturating_sub(1)
    }

    /// Pixel bounds `(y0, y1, x0, x1)` of the cell at row `ry`, column `rx`
    ///
    /// Out-of-range cell coordinates yield an empty rectangle.
    pub fn cell(&self, ry: usize, rx: usize) -> (usize, usize, usize, usize) {
        let y0 = self.ys.get(ry).copied().unwrap_or(0);
        let y1 = self.ys.get(ry + 1).copied().unwrap_or(y0);
        let x0 = self.xs.get(rx).copied().unwrap_or(0);
        let x1 = self.xs.get(rx + 1).copied().unwrap_or(x0);
        (y0, y1, x0, x1)
    }

    /// Row boundary coordinates, `order() + 1` entries from 0 to the height
    pub fn row_boundaries(&self) -> &[usize] {
        &self.ys
    }

    /// Column boundary coordinates, `order() + 1` entries from 0 to the width
    pub fn column_boundaries(&self) -> &[usize] {
        &self.xs
    }
}

/// Slice an image into owned cell tiles in row-major order
///
/// The tile for the cell at `(ry, rx)` lands at index `ry * n + rx`. Each
/// tile is a defensive copy, never a view, so later writes to a destination
/// buffer cannot alias the source.
pub fn extract_tiles(image: &Image, spec: &GridSpec) -> Vec<Tile> {
    let n = spec.order();
    let mut tiles = Vec::with_capacity(n * n);

    for ry in 0..n {
        for rx in 0..n {
            let (y0, y1, x0, x1) = spec.cell(ry, rx);
            tiles.push(image.slice(s![y0..y1, x0..x1, ..]).to_owned());
        }
    }

    tiles
}

/// Build a fresh image by filling every grid cell from `cell_filler`
///
/// Allocates a zero-initialized (height, width, 3) buffer and visits cells
/// in row-major order, asking `cell_filler` for the tile at each flattened
/// cell index. Tiles whose dimensions differ from the destination cell are
/// resampled bilinearly to fit. Each pixel is written at most once, with no
/// blending across cell boundaries; a `None` from the filler leaves that
/// cell zeroed.
pub fn assemble<'a, F>(height: usize, width: usize, spec: &GridSpec, mut cell_filler: F) -> Image
where
    F: FnMut(usize) -> Option<&'a Tile>,
{
    let n = spec.order();
    let mut out = Image::zeros((height, width, 3));

    for ry in 0..n {
        for rx in 0..n {
            let (y0, y1, x0, x1) = spec.cell(ry, rx);
            let (cell_h, cell_w) = (y1 - y0, x1 - x0);
            if cell_h == 0 || cell_w == 0 {
                continue;
            }

            let Some(tile) = cell_filler(ry * n + rx) else {
                continue;
            };

            let (tile_h, tile_w, _) = tile.dim();
            let mut dest = out.slice_mut(s![y0..y1, x0..x1, ..]);
            if (tile_h, tile_w) == (cell_h, cell_w) {
                dest.assign(tile);
            } else {
                dest.assign(&resize_bilinear(tile, cell_h, cell_w));
            }
        }
    }

    out
}
