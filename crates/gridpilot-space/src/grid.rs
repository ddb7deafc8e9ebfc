//! 2D square grid with 4-connected neighbourhood and optional wraparound.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use gridpilot_core::{Cell, Direction};
use smallvec::SmallVec;

/// Neighbour order used by [`Grid::neighbours`]: north, south, west, east.
const NEIGHBOUR_ORDER: [Direction; 4] = [
    Direction::DecreaseRow,
    Direction::IncreaseRow,
    Direction::DecreaseCol,
    Direction::IncreaseCol,
];

/// A two-dimensional square grid with 4-connected neighbourhood.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Dimensions are fixed for the lifetime of the value.
/// Distance is Manhattan (L1), taking the shorter way round on wrapped
/// axes.
///
/// # Examples
///
/// ```
/// use gridpilot_core::{Cell, Direction};
/// use gridpilot_space::Grid;
///
/// let grid = Grid::torus(4, 4).unwrap();
/// assert_eq!(grid.cell_count(), 16);
///
/// // Leaving column 0 to the left re-enters at column 3.
/// let west = grid.step(Cell::new(0, 0), Direction::DecreaseCol);
/// assert_eq!(west, Some(Cell::new(0, 3)));
/// assert_eq!(grid.distance(Cell::new(0, 0), Cell::new(0, 3)), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
}

impl Grid {
    /// Create a new grid with `rows * cols` cells and the given edge behavior.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::CellCountOverflow)` if the cell count does not fit
    /// in `usize`.
    pub fn new(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if (rows as usize).checked_mul(cols as usize).is_none() {
            return Err(SpaceError::CellCountOverflow { rows, cols });
        }
        Ok(Self { rows, cols, edge })
    }

    /// Create a wrapping (toroidal) grid.
    pub fn torus(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        Self::new(rows, cols, EdgeBehavior::Wrap)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Return `cell` unchanged if it is in bounds.
    pub fn check(&self, cell: Cell) -> Result<Cell, SpaceError> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(SpaceError::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Row-major rank of `cell`, or `None` if out of bounds.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Cell::new((index / cols) as u32, (index % cols) as u32))
    }

    /// All cells in row-major order: `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Cell::new(r, c)))
    }

    /// The cell one step from `cell` in `direction`.
    ///
    /// Returns `None` if `cell` is out of bounds, or if the step leaves an
    /// [`Absorb`](EdgeBehavior::Absorb) grid.
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        if !self.contains(cell) {
            return None;
        }
        let (dr, dc) = direction.offset();
        let row = resolve_axis(cell.row, dr, self.rows, self.edge)?;
        let col = resolve_axis(cell.col, dc, self.cols, self.edge)?;
        Some(Cell::new(row, col))
    }

    /// The 4-connected neighbours of `cell` (north, south, west, east).
    ///
    /// On a wrapping grid this always yields four cells; on a 1-wide axis
    /// both neighbours along that axis are the cell itself. Out-of-bounds
    /// input yields no neighbours.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        NEIGHBOUR_ORDER
            .iter()
            .filter_map(|&d| self.step(cell, d))
            .collect()
    }

    /// The direction that moves `from` onto the adjacent cell `to`.
    ///
    /// Wrap-aware: on a 4-column torus, `(0,0) -> (0,3)` is
    /// [`Direction::DecreaseCol`]. Returns `None` when the cells are
    /// equal, not adjacent, or out of bounds. When two directions reach the
    /// same cell (2-wide wrapped axis) the increasing one is reported.
    pub fn direction_between(&self, from: Cell, to: Cell) -> Option<Direction> {
        if from == to || !self.contains(to) {
            return None;
        }
        Direction::ALL
            .into_iter()
            .find(|&d| self.step(from, d) == Some(to))
    }

    /// Manhattan distance between two in-bounds cells, shortest way round
    /// on wrapped axes.
    pub fn distance(&self, a: Cell, b: Cell) -> u32 {
        axis_distance(a.row, b.row, self.rows, self.edge)
            + axis_distance(a.col, b.col, self.cols, self.edge)
    }
}

/// Resolve a single axis value moved by `delta` under the given edge behavior.
/// Returns `None` for Absorb out-of-bounds.
fn resolve_axis(val: u32, delta: i32, len: u32, edge: EdgeBehavior) -> Option<u32> {
    let n = i64::from(len);
    let moved = i64::from(val) + i64::from(delta);
    if (0..n).contains(&moved) {
        return Some(moved as u32);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(moved.rem_euclid(n) as u32),
    }
}

/// 1D distance along a single axis, accounting for wrap.
fn axis_distance(a: u32, b: u32, len: u32, edge: EdgeBehavior) -> u32 {
    let diff = a.abs_diff(b);
    match edge {
        EdgeBehavior::Wrap => diff.min(len - diff),
        EdgeBehavior::Absorb => diff,
    }
}
