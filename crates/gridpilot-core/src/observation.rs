//! Observations delivered by the perception collaborator.

use indexmap::IndexSet;

use crate::cell::Cell;
use crate::direction::Direction;

/// Set of blocked cells.
///
/// Insertion-ordered so that logs and debug renderings list obstacles in
/// the order perception reported them.
pub type Obstacles = IndexSet<Cell>;

/// One frame's worth of detected entities, already converted to grid cells.
///
/// Every field may be missing: detection failure for a single frame is an
/// expected transient condition. `obstacles` may include the agent's own
/// trailing body; the head cell is removed before planning.
///
/// # Examples
///
/// ```
/// use gridpilot_core::{Cell, Direction, Perceived};
///
/// let frame = Perceived::new(Some(Cell::new(0, 0)), Some(Cell::new(2, 3)))
///     .with_heading(Direction::IncreaseCol)
///     .with_obstacles([Cell::new(1, 1), Cell::new(1, 2)]);
///
/// assert!(frame.is_complete());
/// assert_eq!(frame.obstacles.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Perceived {
    /// The agent's head cell, if detected.
    pub agent: Option<Cell>,
    /// The agent's orientation, if detected.
    pub heading: Option<Direction>,
    /// The target cell, if detected.
    pub target: Option<Cell>,
    /// Cells the route must not enter.
    pub obstacles: Obstacles,
}

impl Perceived {
    /// A frame with the given agent and target and no obstacles.
    pub fn new(agent: Option<Cell>, target: Option<Cell>) -> Self {
        Self {
            agent,
            heading: None,
            target,
            obstacles: Obstacles::new(),
        }
    }

    /// A frame in which nothing was detected.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach a detected heading.
    pub fn with_heading(mut self, heading: Direction) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Replace the obstacle set.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        self.obstacles = obstacles.into_iter().collect();
        self
    }

    /// Whether both the agent and the target were detected.
    pub fn is_complete(&self) -> bool {
        self.agent.is_some() && self.target.is_some()
    }
}
