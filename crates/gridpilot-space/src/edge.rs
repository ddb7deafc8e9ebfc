//! Spatial edge (boundary) behavior for grids.

/// How a grid handles neighbours at its edges.
///
/// # Examples
///
/// ```
/// use gridpilot_core::Cell;
/// use gridpilot_space::{EdgeBehavior, Grid};
///
/// // Wrap: all cells have exactly 4 neighbours (torus).
/// let wrap = Grid::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(Cell::new(0, 0)).len(), 4);
///
/// // Absorb: corner has 2 neighbours, interior has 4.
/// let absorb = Grid::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(Cell::new(0, 0)).len(), 2);
/// assert_eq!(absorb.neighbours(Cell::new(1, 1)).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    #[default]
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    Absorb,
}
