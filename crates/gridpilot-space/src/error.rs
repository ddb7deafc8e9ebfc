//! Error types for grid construction and spatial queries.

use gridpilot_core::Cell;
use std::fmt;

/// Errors arising from grid construction or spatial queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptySpace,
    /// `rows * cols` does not fit in `usize`.
    CellCountOverflow {
        /// Configured row count.
        rows: u32,
        /// Configured column count.
        cols: u32,
    },
    /// A cell is outside the bounds of the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
    /// A pixel region is too small to give every cell at least one pixel.
    RegionTooSmall {
        /// Which axis is too small (`"width"` or `"height"`).
        axis: &'static str,
        /// Pixels available along that axis.
        pixels: u32,
        /// Cells that must fit along that axis.
        cells: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::CellCountOverflow { rows, cols } => {
                write!(f, "grid of {rows}x{cols} cells overflows usize")
            }
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} out of bounds: [0, {rows}) x [0, {cols})")
            }
            Self::RegionTooSmall {
                axis,
                pixels,
                cells,
            } => {
                write!(
                    f,
                    "region {axis} of {pixels}px cannot hold {cells} cells"
                )
            }
        }
    }
}

impl std::error::Error for SpaceError {}
