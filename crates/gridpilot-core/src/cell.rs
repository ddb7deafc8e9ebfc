//! Grid cell coordinates.

use std::fmt;

/// A cell on a `rows × cols` grid, addressed as `(row, col)`.
///
/// A `Cell` carries no knowledge of the grid it belongs to; bounds are
/// enforced by whoever constructs it against a concrete grid. Ordering
/// is row-major, which matches the canonical cell ordering used for
/// dense per-cell tables.
///
/// # Examples
///
/// ```
/// use gridpilot_core::Cell;
///
/// let a = Cell::new(0, 2);
/// let b = Cell::new(1, 0);
/// assert!(a < b);
/// assert_eq!(a.to_string(), "(0,2)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, `0 <= row < rows`.
    pub row: u32,
    /// Column index, `0 <= col < cols`.
    pub col: u32,
}

impl Cell {
    /// Create a cell at `(row, col)`.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (u32, u32) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
