//! Breadth-first route search.

use crate::obstacles::ObstacleSet;
use crate::order::DirectionOrder;
use crate::route::Route;
use gridpilot_core::Cell;
use gridpilot_space::Grid;
use std::collections::VecDeque;

/// Shortest-route planner over a fixed grid.
///
/// BFS explores cells in non-decreasing hop distance from the start, so
/// the first time the goal is dequeued its parent chain is a shortest
/// route. Neighbours are expanded in the planner's [`DirectionOrder`];
/// that order alone decides between equally short routes.
///
/// Runs in O(rows·cols) time and space per call and keeps nothing between
/// calls.
///
/// # Examples
///
/// ```
/// use gridpilot_core::Cell;
/// use gridpilot_planner::{NoObstacles, RoutePlanner};
/// use gridpilot_space::Grid;
///
/// let planner = RoutePlanner::with_default_order(Grid::torus(4, 4).unwrap());
///
/// // Wrapping left is shorter than walking right.
/// let route = planner
///     .plan(Cell::new(0, 0), Cell::new(0, 3), &NoObstacles)
///     .unwrap();
/// assert_eq!(route.to_vec(), vec![Cell::new(0, 0), Cell::new(0, 3)]);
/// ```
#[derive(Clone, Debug)]
pub struct RoutePlanner {
    grid: Grid,
    order: DirectionOrder,
}

impl RoutePlanner {
    /// Create a planner for `grid` exploring neighbours in `order`.
    pub fn new(grid: Grid, order: DirectionOrder) -> Self {
        Self { grid, order }
    }

    /// Create a planner with [`DirectionOrder::default`].
    pub fn with_default_order(grid: Grid) -> Self {
        Self::new(grid, DirectionOrder::default())
    }

    /// The grid routes are planned on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The neighbour exploration order.
    pub fn order(&self) -> DirectionOrder {
        self.order
    }

    /// Plan a shortest route from `start` to `goal` that never enters an
    /// obstacle.
    ///
    /// Returns:
    /// - `Some([start])` if `start == goal`, without searching;
    /// - `None` if either endpoint is off the grid, `goal` is an obstacle,
    ///   or every route to `goal` is blocked.
    ///
    /// `start` itself is never tested against `obstacles`.
    pub fn plan<O>(&self, start: Cell, goal: Cell, obstacles: &O) -> Option<Route>
    where
        O: ObstacleSet + ?Sized,
    {
        let start_idx = self.grid.index_of(start)?;
        let goal_idx = self.grid.index_of(goal)?;
        if start == goal {
            return Some(Route::single(start));
        }
        if obstacles.is_blocked(goal) {
            return None;
        }

        let n = self.grid.cell_count();
        let mut visited = vec![false; n];
        let mut came_from: Vec<Option<usize>> = vec![None; n];
        let mut frontier = VecDeque::new();

        visited[start_idx] = true;
        frontier.push_back((start, start_idx));

        while let Some((current, current_idx)) = frontier.pop_front() {
            if current_idx == goal_idx {
                return Some(self.reconstruct(&came_from, start_idx, goal_idx));
            }
            for direction in self.order.iter() {
                let Some(next) = self.grid.step(current, direction) else {
                    continue;
                };
                let Some(next_idx) = self.grid.index_of(next) else {
                    continue;
                };
                if visited[next_idx] || obstacles.is_blocked(next) {
                    continue;
                }
                visited[next_idx] = true;
                came_from[next_idx] = Some(current_idx);
                frontier.push_back((next, next_idx));
            }
        }

        None
    }

    /// Hop distance from `start` to every reachable cell, in row-major order.
    ///
    /// Uses the same expansion rules as [`plan`](Self::plan): obstacles are
    /// never entered and `start` is at distance 0 even if it is listed as
    /// an obstacle. Unreachable or off-grid `start` yields all `None`.
    pub fn distances_from<O>(&self, start: Cell, obstacles: &O) -> Vec<Option<u32>>
    where
        O: ObstacleSet + ?Sized,
    {
        let mut dist = vec![None; self.grid.cell_count()];
        let Some(start_idx) = self.grid.index_of(start) else {
            return dist;
        };
        dist[start_idx] = Some(0);
        let mut frontier = VecDeque::from([(start, 0u32)]);

        while let Some((current, d)) = frontier.pop_front() {
            for direction in self.order.iter() {
                let Some(next) = self.grid.step(current, direction) else {
                    continue;
                };
                let Some(next_idx) = self.grid.index_of(next) else {
                    continue;
                };
                if dist[next_idx].is_some() || obstacles.is_blocked(next) {
                    continue;
                }
                dist[next_idx] = Some(d + 1);
                frontier.push_back((next, d + 1));
            }
        }
        dist
    }

    /// Walk `came_from` back from the goal and reverse into a route.
    fn reconstruct(&self, came_from: &[Option<usize>], start_idx: usize, goal_idx: usize) -> Route {
        let mut path = vec![goal_idx];
        let mut idx = goal_idx;
        while idx != start_idx {
            match came_from[idx] {
                Some(parent) => {
                    path.push(parent);
                    idx = parent;
                }
                None => break,
            }
        }
        let cells = path
            .into_iter()
            .rev()
            .filter_map(|i| self.grid.cell_at(i))
            .collect();
        Route::from_path(cells)
    }
}
