//! Benchmark scenarios for gridpilot.
//!
//! Deterministic board builders shared by the criterion benches, so every
//! run plans over the same obstacles.

#![forbid(unsafe_code)]

use std::collections::HashSet;

use gridpilot_core::{Cell, Direction};
use gridpilot_space::Grid;

/// Scatter roughly `per_mille / 1000` of the grid's cells as obstacles,
/// never touching `keep_clear`.
pub fn scattered_obstacles(grid: &Grid, per_mille: u64, seed: u64, keep_clear: &[Cell]) -> HashSet<Cell> {
    grid.cells()
        .enumerate()
        .filter(|&(i, cell)| {
            let roll = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add((i as u64).wrapping_mul(1442695040888963407))
                >> 33;
            roll % 1000 < per_mille && !keep_clear.contains(&cell)
        })
        .map(|(_, cell)| cell)
        .collect()
}

/// A snake of `len` cells trailing behind `head` along `-heading`.
///
/// The head itself is not included.
pub fn snake_body(grid: &Grid, head: Cell, heading: Direction, len: usize) -> Vec<Cell> {
    let mut body = Vec::with_capacity(len);
    let mut cell = head;
    for _ in 0..len {
        match grid.step(cell, heading.opposite()) {
            Some(next) if next != head => {
                body.push(next);
                cell = next;
            }
            _ => break,
        }
    }
    body
}

/// Start and goal pairs spread deterministically across `grid`.
pub fn endpoint_pairs(grid: &Grid, n: usize, seed: u64) -> Vec<(Cell, Cell)> {
    let count = grid.cell_count() as u64;
    (0..n as u64)
        .filter_map(|i| {
            let a = seed.wrapping_add(i.wrapping_mul(6364136223846793007)) % count;
            let b = seed.wrapping_add((i + 500).wrapping_mul(2862933555777941757)) % count;
            Some((grid.cell_at(a as usize)?, grid.cell_at(b as usize)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scattered_obstacles_are_deterministic_and_clear_the_endpoints() {
        let grid = Grid::torus(50, 50).unwrap();
        let keep = [Cell::new(0, 0), Cell::new(25, 25)];
        let a = scattered_obstacles(&grid, 200, 7, &keep);
        let b = scattered_obstacles(&grid, 200, 7, &keep);
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(a.len() < grid.cell_count());
        assert!(keep.iter().all(|c| !a.contains(c)));
    }

    #[test]
    fn snake_body_trails_the_head() {
        let grid = Grid::torus(5, 5).unwrap();
        let body = snake_body(&grid, Cell::new(0, 0), Direction::IncreaseCol, 3);
        assert_eq!(body, vec![Cell::new(0, 4), Cell::new(0, 3), Cell::new(0, 2)]);
    }

    #[test]
    fn snake_body_stops_before_lapping_the_head() {
        let grid = Grid::torus(1, 4).unwrap();
        let body = snake_body(&grid, Cell::new(0, 0), Direction::IncreaseCol, 10);
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn endpoint_pairs_are_in_bounds() {
        let grid = Grid::torus(14, 13).unwrap();
        let pairs = endpoint_pairs(&grid, 100, 42);
        assert_eq!(pairs.len(), 100);
        assert!(pairs.iter().all(|&(a, b)| grid.contains(a) && grid.contains(b)));
    }
}
