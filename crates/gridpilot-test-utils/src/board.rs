//! ASCII board fixtures.

use std::collections::HashSet;

use gridpilot_core::{Cell, Perceived};
use gridpilot_engine::Observation;
use gridpilot_space::{EdgeBehavior, Grid};

/// A grid plus the entities drawn on it.
///
/// Parsed from rows of `.` (empty), `#` (obstacle), `A` (agent) and `F`
/// (target). Blank lines and surrounding whitespace are ignored, so boards
/// can be written as indented raw strings:
///
/// ```
/// use gridpilot_core::Cell;
/// use gridpilot_test_utils::Board;
///
/// let board = Board::torus(
///     "
///     A.#
///     ..F
///     ",
/// );
/// assert_eq!(board.agent, Some(Cell::new(0, 0)));
/// assert_eq!(board.target, Some(Cell::new(1, 2)));
/// assert_eq!(board.obstacles, vec![Cell::new(0, 2)]);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    pub grid: Grid,
    pub agent: Option<Cell>,
    pub target: Option<Cell>,
    pub obstacles: Vec<Cell>,
}

impl Board {
    /// Parse a wrapping board.
    pub fn torus(text: &str) -> Self {
        Self::parse(text, EdgeBehavior::Wrap)
    }

    /// Parse a board with bounded edges.
    pub fn bounded(text: &str) -> Self {
        Self::parse(text, EdgeBehavior::Absorb)
    }

    /// Parse `text` with the given edge behavior.
    ///
    /// # Panics
    ///
    /// On ragged rows, unknown characters, more than one agent or target,
    /// or an empty board.
    pub fn parse(text: &str, edge: EdgeBehavior) -> Self {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        assert!(!lines.is_empty(), "board has no rows");
        let cols = lines[0].chars().count();

        let mut agent = None;
        let mut target = None;
        let mut obstacles = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                cols,
                "row {row} has a different width"
            );
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row as u32, col as u32);
                match ch {
                    '.' => {}
                    '#' => obstacles.push(cell),
                    'A' => {
                        assert!(agent.replace(cell).is_none(), "more than one agent");
                    }
                    'F' => {
                        assert!(target.replace(cell).is_none(), "more than one target");
                    }
                    other => panic!("unknown board character {other:?} at {cell}"),
                }
            }
        }

        let grid = Grid::new(lines.len() as u32, cols as u32, edge).expect("valid board size");
        Self {
            grid,
            agent,
            target,
            obstacles,
        }
    }

    /// Obstacles as a hash set.
    pub fn obstacle_set(&self) -> HashSet<Cell> {
        self.obstacles.iter().copied().collect()
    }

    /// The board as a perception frame.
    pub fn perceived(&self) -> Perceived {
        Perceived::new(self.agent, self.target).with_obstacles(self.obstacles.iter().copied())
    }

    /// The board as a store observation.
    ///
    /// # Panics
    ///
    /// If the board has no agent or no target.
    pub fn observation(&self) -> Observation {
        Observation::new(
            self.agent.expect("board has an agent"),
            self.target.expect("board has a target"),
            self.obstacles.iter().copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entities_and_dimensions() {
        let board = Board::bounded(
            "
            A..
            .#.
            ..F
            .#.
            ",
        );
        assert_eq!(board.grid.rows(), 4);
        assert_eq!(board.grid.cols(), 3);
        assert_eq!(board.grid.edge_behavior(), EdgeBehavior::Absorb);
        assert_eq!(board.obstacles, vec![Cell::new(1, 1), Cell::new(3, 1)]);
        assert!(board.perceived().is_complete());
    }

    #[test]
    #[should_panic(expected = "different width")]
    fn ragged_rows_panic() {
        Board::torus("...\n..");
    }
}
