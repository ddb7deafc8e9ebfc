//! Pixel-to-cell mapping for a captured screen region.

use crate::error::SpaceError;
use crate::grid::Grid;
use gridpilot_core::Cell;

/// Maps pixel points inside a captured region onto grid cells.
///
/// The region is divided into `rows × cols` cells of integer pitch
/// (`height / rows` by `width / cols`, truncated). Pixels in the
/// remainder strip along the right or bottom edge map to no cell.
///
/// # Examples
///
/// ```
/// use gridpilot_core::Cell;
/// use gridpilot_space::PixelGeometry;
///
/// // A 465x494 capture of a 14-row, 13-column board: 35px cells.
/// let geom = PixelGeometry::new(465, 494, 14, 13).unwrap();
/// assert_eq!(geom.cell_at(0, 0), Some(Cell::new(0, 0)));
/// assert_eq!(geom.cell_at(70, 36), Some(Cell::new(1, 2)));
/// assert_eq!(geom.cell_at(464, 0), None); // remainder strip
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelGeometry {
    rows: u32,
    cols: u32,
    cell_width: u32,
    cell_height: u32,
}

impl PixelGeometry {
    /// Describe a `width_px × height_px` region holding `rows × cols` cells.
    pub fn new(width_px: u32, height_px: u32, rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        let cell_width = width_px / cols;
        if cell_width == 0 {
            return Err(SpaceError::RegionTooSmall {
                axis: "width",
                pixels: width_px,
                cells: cols,
            });
        }
        let cell_height = height_px / rows;
        if cell_height == 0 {
            return Err(SpaceError::RegionTooSmall {
                axis: "height",
                pixels: height_px,
                cells: rows,
            });
        }
        Ok(Self {
            rows,
            cols,
            cell_width,
            cell_height,
        })
    }

    /// Same as [`new`](Self::new), taking the dimensions from `grid`.
    pub fn for_grid(grid: &Grid, width_px: u32, height_px: u32) -> Result<Self, SpaceError> {
        Self::new(width_px, height_px, grid.rows(), grid.cols())
    }

    /// Cell pitch as `(width, height)` in pixels.
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// The cell containing pixel `(x, y)`, relative to the region origin.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<Cell> {
        let row = y / self.cell_height;
        let col = x / self.cell_width;
        (row < self.rows && col < self.cols).then_some(Cell::new(row, col))
    }

    /// Pixel centre of `cell`, or `None` if it lies outside the grid.
    pub fn cell_center(&self, cell: Cell) -> Option<(u32, u32)> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }
        Some((
            cell.col * self.cell_width + self.cell_width / 2,
            cell.row * self.cell_height + self.cell_height / 2,
        ))
    }
}
