//! Neighbour exploration order for the breadth-first search.

use gridpilot_core::Direction;
use std::fmt;

/// Error building a [`DirectionOrder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderError {
    /// A direction appears more than once, so another one is missing.
    Duplicate {
        /// The repeated direction.
        direction: Direction,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { direction } => {
                write!(f, "direction {direction:?} listed more than once")
            }
        }
    }
}

impl std::error::Error for OrderError {}

/// A permutation of the four directions.
///
/// The planner expands neighbours in this order, which decides between
/// equally short routes. The default prefers column moves before row
/// moves: `[IncreaseCol, DecreaseCol, IncreaseRow, DecreaseRow]`.
///
/// # Examples
///
/// ```
/// use gridpilot_core::Direction;
/// use gridpilot_planner::DirectionOrder;
///
/// let rows_first = DirectionOrder::new([
///     Direction::IncreaseRow,
///     Direction::DecreaseRow,
///     Direction::IncreaseCol,
///     Direction::DecreaseCol,
/// ])
/// .unwrap();
/// assert_eq!(rows_first.as_array()[0], Direction::IncreaseRow);
///
/// let bad = DirectionOrder::new([Direction::IncreaseRow; 4]);
/// assert!(bad.is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionOrder([Direction; 4]);

impl DirectionOrder {
    /// Column moves first, increasing before decreasing.
    pub const COLUMNS_FIRST: DirectionOrder = DirectionOrder([
        Direction::IncreaseCol,
        Direction::DecreaseCol,
        Direction::IncreaseRow,
        Direction::DecreaseRow,
    ]);

    /// Validate that `order` names every direction exactly once.
    pub fn new(order: [Direction; 4]) -> Result<Self, OrderError> {
        let mut seen = [false; 4];
        for direction in order {
            let slot = &mut seen[direction as usize];
            if *slot {
                return Err(OrderError::Duplicate { direction });
            }
            *slot = true;
        }
        Ok(Self(order))
    }

    /// The directions in exploration order.
    pub fn as_array(&self) -> [Direction; 4] {
        self.0
    }

    /// Iterate the directions in exploration order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.iter().copied()
    }
}

impl Default for DirectionOrder {
    fn default() -> Self {
        Self::COLUMNS_FIRST
    }
}

impl TryFrom<[Direction; 4]> for DirectionOrder {
    type Error = OrderError;

    fn try_from(order: [Direction; 4]) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefers_columns() {
        assert_eq!(
            DirectionOrder::default().as_array(),
            [
                Direction::IncreaseCol,
                Direction::DecreaseCol,
                Direction::IncreaseRow,
                Direction::DecreaseRow,
            ]
        );
    }

    #[test]
    fn duplicate_is_reported() {
        let err = DirectionOrder::new([
            Direction::IncreaseCol,
            Direction::DecreaseCol,
            Direction::IncreaseCol,
            Direction::DecreaseRow,
        ])
        .unwrap_err();
        assert_eq!(
            err,
            OrderError::Duplicate {
                direction: Direction::IncreaseCol
            }
        );
    }

    #[test]
    fn every_permutation_of_all_is_accepted() {
        let all = Direction::ALL;
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    for d in 0..4 {
                        let order = [all[a], all[b], all[c], all[d]];
                        let distinct = [a, b, c, d]
                            .iter()
                            .collect::<std::collections::HashSet<_>>()
                            .len()
                            == 4;
                        assert_eq!(DirectionOrder::new(order).is_ok(), distinct);
                    }
                }
            }
        }
    }
}
