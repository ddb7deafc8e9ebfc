//! Planned routes and the steps taken along them.

use gridpilot_core::{Cell, Direction};
use gridpilot_space::Grid;
use std::collections::VecDeque;
use std::fmt;

/// One move along a route: from the agent's current cell to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// The cell the agent occupies before the move.
    pub from: Cell,
    /// The cell the agent should occupy after the move.
    pub to: Cell,
}

impl Step {
    /// The direction that performs this move on `grid`.
    ///
    /// `None` only if the cells are not adjacent on `grid`, which cannot
    /// happen for steps taken from a route planned on the same grid.
    pub fn direction(&self, grid: &Grid) -> Option<Direction> {
        grid.direction_between(self.from, self.to)
    }
}

/// An ordered, non-empty sequence of adjacent cells from the agent to the
/// target.
///
/// The first cell (the *head*) is where the agent is assumed to stand; the
/// last is the target. A route of one cell means the agent has arrived.
/// [`advance`](Route::advance) consumes the head as the agent moves on.
///
/// # Examples
///
/// ```
/// use gridpilot_core::Cell;
/// use gridpilot_planner::{Route, Step};
///
/// let mut route = Route::new(vec![Cell::new(0, 0), Cell::new(0, 1)]).unwrap();
/// assert_eq!(route.hops(), 1);
///
/// let step = route.advance().unwrap();
/// assert_eq!(step, Step { from: Cell::new(0, 0), to: Cell::new(0, 1) });
/// assert!(route.is_terminal());
/// assert_eq!(route.advance(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    cells: VecDeque<Cell>,
}

impl Route {
    /// Build a route from an explicit cell list. Returns `None` if empty.
    ///
    /// Adjacency is not checked here; see [`is_contiguous`](Self::is_contiguous).
    pub fn new(cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        Some(Self {
            cells: cells.into(),
        })
    }

    /// Wrap a search result. `cells` always holds at least the goal.
    pub(crate) fn from_path(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty(), "search produced an empty path");
        Self {
            cells: cells.into(),
        }
    }

    /// The terminal one-cell route.
    pub fn single(cell: Cell) -> Self {
        Self {
            cells: VecDeque::from([cell]),
        }
    }

    /// Where the agent is assumed to stand.
    pub fn head(&self) -> Cell {
        // Non-empty by construction; `advance` never pops the last cell.
        self.cells[0]
    }

    /// The destination cell.
    pub fn target(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, including the head.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of moves remaining.
    pub fn hops(&self) -> usize {
        self.cells.len() - 1
    }

    /// Whether only the head remains.
    pub fn is_terminal(&self) -> bool {
        self.cells.len() == 1
    }

    /// The cell after the head, if any.
    pub fn next_cell(&self) -> Option<Cell> {
        self.cells.get(1).copied()
    }

    /// Iterate the cells from head to target.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Whether `cell` lies anywhere on the route.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Copy the cells into a `Vec`.
    pub fn to_vec(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }

    /// Consume the head and return the move onto the new head.
    ///
    /// Returns `None` (and leaves the route unchanged) if the route is
    /// terminal.
    pub fn advance(&mut self) -> Option<Step> {
        if self.is_terminal() {
            return None;
        }
        let from = self.cells.pop_front()?;
        Some(Step {
            from,
            to: self.head(),
        })
    }

    /// Whether every consecutive pair of cells is adjacent on `grid`.
    pub fn is_contiguous(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&c| grid.contains(c))
            && self
                .cells
                .iter()
                .zip(self.cells.iter().skip(1))
                .all(|(&a, &b)| grid.direction_between(a, b).is_some())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
