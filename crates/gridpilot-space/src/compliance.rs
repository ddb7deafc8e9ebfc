//! Grid compliance test helpers.
//!
//! These functions verify that a [`Grid`] satisfies the invariants the
//! planner relies on. Reused across the edge-behavior test cases.

use crate::edge::EdgeBehavior;
use crate::grid::Grid;
use std::collections::HashSet;

/// Assert that every neighbour of every cell is itself in bounds.
pub fn assert_neighbours_in_bounds(grid: &Grid) {
    for cell in grid.cells() {
        for nb in grid.neighbours(cell) {
            assert!(grid.contains(nb), "neighbour {nb} of {cell} out of bounds");
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for cell in grid.cells() {
        for nb in grid.neighbours(cell) {
            assert!(
                grid.neighbours(nb).contains(&cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert that a wrapping grid gives every cell exactly four neighbours.
pub fn assert_wrap_degree(grid: &Grid) {
    if grid.edge_behavior() != EdgeBehavior::Wrap {
        return;
    }
    for cell in grid.cells() {
        assert_eq!(grid.neighbours(cell).len(), 4, "degree of {cell} is not 4");
    }
}

/// Assert that neighbours are at most one step away and distance is
/// reflexive and symmetric.
pub fn assert_distance_consistent(grid: &Grid) {
    let cells: Vec<_> = grid.cells().collect();
    for &a in &cells {
        assert_eq!(grid.distance(a, a), 0, "distance({a}, {a}) != 0");
        for nb in grid.neighbours(a) {
            assert!(grid.distance(a, nb) <= 1, "neighbour {nb} of {a} is far");
        }
        for &b in &cells {
            assert_eq!(grid.distance(a, b), grid.distance(b, a));
        }
    }
}

/// Assert that `index_of` is a bijection onto `0..cell_count`.
pub fn assert_index_bijective(grid: &Grid) {
    let mut seen = HashSet::new();
    for cell in grid.cells() {
        let idx = grid
            .index_of(cell)
            .unwrap_or_else(|| panic!("{cell} has no index"));
        assert!(idx < grid.cell_count());
        assert!(seen.insert(idx), "index {idx} assigned twice");
        assert_eq!(grid.cell_at(idx), Some(cell));
    }
    assert_eq!(seen.len(), grid.cell_count());
}

/// Run every compliance check.
pub fn run_full_compliance(grid: &Grid) {
    assert_neighbours_in_bounds(grid);
    assert_neighbours_symmetric(grid);
    assert_wrap_degree(grid);
    assert_distance_consistent(grid);
    assert_index_bijective(grid);
}
