//! Obstacle membership queries accepted by the planner.

use gridpilot_core::Cell;
use indexmap::IndexSet;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Anything that can answer "may the route enter this cell?".
///
/// Implemented for the common set types and for cell slices so callers
/// pass whatever collection they already hold.
pub trait ObstacleSet {
    /// Whether `cell` must not be entered.
    fn is_blocked(&self, cell: Cell) -> bool;
}

/// An empty obstacle set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoObstacles;

impl ObstacleSet for NoObstacles {
    fn is_blocked(&self, _cell: Cell) -> bool {
        false
    }
}

impl<S: BuildHasher> ObstacleSet for HashSet<Cell, S> {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl<S: BuildHasher> ObstacleSet for IndexSet<Cell, S> {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl ObstacleSet for BTreeSet<Cell> {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl ObstacleSet for [Cell] {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl<const N: usize> ObstacleSet for [Cell; N] {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl ObstacleSet for Vec<Cell> {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl<T: ObstacleSet + ?Sized> ObstacleSet for &T {
    fn is_blocked(&self, cell: Cell) -> bool {
        (**self).is_blocked(cell)
    }
}
