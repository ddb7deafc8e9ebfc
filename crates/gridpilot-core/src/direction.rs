//! The four orthogonal movement directions.

use std::fmt;

/// Orthogonal movement direction on a grid.
///
/// Named by their effect on the cell coordinate rather than by screen
/// orientation; [`Direction::key_name`] gives the conventional arrow-key
/// name an actuator would press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Move one row down (row + 1).
    IncreaseRow = 0,
    /// Move one row up (row - 1).
    DecreaseRow = 1,
    /// Move one column right (col + 1).
    IncreaseCol = 2,
    /// Move one column left (col - 1).
    DecreaseCol = 3,
}

impl Direction {
    /// All four directions in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::IncreaseRow,
        Direction::DecreaseRow,
        Direction::IncreaseCol,
        Direction::DecreaseCol,
    ];

    /// Returns the `(row_offset, col_offset)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::IncreaseRow => (1, 0),
            Direction::DecreaseRow => (-1, 0),
            Direction::IncreaseCol => (0, 1),
            Direction::DecreaseCol => (0, -1),
        }
    }

    /// The direction pointing the other way along the same axis.
    pub fn opposite(self) -> Self {
        match self {
            Direction::IncreaseRow => Direction::DecreaseRow,
            Direction::DecreaseRow => Direction::IncreaseRow,
            Direction::IncreaseCol => Direction::DecreaseCol,
            Direction::DecreaseCol => Direction::IncreaseCol,
        }
    }

    /// Whether this direction moves along the row axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::IncreaseRow | Direction::DecreaseRow)
    }

    /// Arrow-key name for this direction (`"down"`, `"up"`, `"right"`, `"left"`).
    pub fn key_name(self) -> &'static str {
        match self {
            Direction::IncreaseRow => "down",
            Direction::DecreaseRow => "up",
            Direction::IncreaseCol => "right",
            Direction::DecreaseCol => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}
