//! Brute-force shortest distances for checking the planner.
//!
//! Distances are computed by repeated relaxation over every cell until a
//! fixed point, with no queue and no visitation order, so they share no
//! logic with the breadth-first search they are compared against.

use std::collections::HashSet;

use gridpilot_core::Cell;
use gridpilot_space::Grid;

/// Hop distance from `start` to every cell in row-major order, avoiding
/// `obstacles`. `start` is at distance 0 even if it is an obstacle.
pub fn brute_force_distances(grid: &Grid, start: Cell, obstacles: &HashSet<Cell>) -> Vec<Option<u32>> {
    let mut dist = vec![None; grid.cell_count()];
    let Some(start_idx) = grid.index_of(start) else {
        return dist;
    };
    dist[start_idx] = Some(0u32);

    let mut changed = true;
    while changed {
        changed = false;
        for cell in grid.cells() {
            if cell != start && obstacles.contains(&cell) {
                continue;
            }
            let Some(idx) = grid.index_of(cell) else {
                continue;
            };
            let best = grid
                .neighbours(cell)
                .into_iter()
                .filter_map(|n| grid.index_of(n).and_then(|i| dist[i]))
                .min()
                .map(|d| d + 1);
            if let Some(candidate) = best {
                if dist[idx].is_none_or(|current| candidate < current) {
                    dist[idx] = Some(candidate);
                    changed = true;
                }
            }
        }
    }
    dist
}

/// Hop distance from `start` to `goal`, or `None` if unreachable.
pub fn brute_force_distance(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    obstacles: &HashSet<Cell>,
) -> Option<u32> {
    if start == goal {
        return grid.contains(start).then_some(0);
    }
    if obstacles.contains(&goal) {
        return None;
    }
    let idx = grid.index_of(goal)?;
    brute_force_distances(grid, start, obstacles)[idx]
}
