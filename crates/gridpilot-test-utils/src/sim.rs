//! A closed-loop game stand-in: presses move the agent, frames report it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use gridpilot_core::{Cell, Direction, Perceived};
use gridpilot_engine::{Actuator, PerceptionSource, Sample};
use gridpilot_space::Grid;

#[derive(Debug)]
struct World {
    grid: Grid,
    agent: Cell,
    heading: Option<Direction>,
    targets: VecDeque<Cell>,
    obstacles: Vec<Cell>,
    reached: usize,
    presses: usize,
}

/// Shared world state behind a [`SimSource`] and a [`SimActuator`].
///
/// Each press moves the agent one cell on the grid (blocked moves are
/// ignored). Reaching the current target advances to the next one; the
/// last target stays in place once reached.
#[derive(Clone, Debug)]
pub struct SimWorld {
    inner: Arc<Mutex<World>>,
}

impl SimWorld {
    pub fn new(grid: Grid, agent: Cell, targets: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(World {
                grid,
                agent,
                heading: None,
                targets: targets.into_iter().collect(),
                obstacles: Vec::new(),
                reached: 0,
                presses: 0,
            })),
        }
    }

    pub fn with_obstacles(self, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        self.world().obstacles = obstacles.into_iter().collect();
        self
    }

    fn world(&self) -> MutexGuard<'_, World> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn agent(&self) -> Cell {
        self.world().agent
    }

    /// Targets reached so far.
    pub fn reached(&self) -> usize {
        self.world().reached
    }

    /// Presses received so far, including blocked ones.
    pub fn presses(&self) -> usize {
        self.world().presses
    }

    /// A source reporting the world every `interval`.
    pub fn source(&self, interval: Duration) -> SimSource {
        SimSource {
            world: self.clone(),
            interval,
        }
    }

    pub fn actuator(&self) -> SimActuator {
        SimActuator {
            world: self.clone(),
        }
    }

    fn frame(&self) -> Perceived {
        let world = self.world();
        let mut frame = Perceived::new(Some(world.agent), world.targets.front().copied())
            .with_obstacles(world.obstacles.iter().copied());
        frame.heading = world.heading;
        frame
    }

    fn apply(&self, direction: Direction) {
        let mut world = self.world();
        world.presses += 1;
        world.heading = Some(direction);
        let Some(next) = world.grid.step(world.agent, direction) else {
            return;
        };
        if world.obstacles.contains(&next) {
            return;
        }
        world.agent = next;
        if world.targets.front() == Some(&next) {
            world.reached += 1;
            if world.targets.len() > 1 {
                world.targets.pop_front();
            }
        }
    }
}

/// Perception side of a [`SimWorld`]. Never closes.
#[derive(Debug)]
pub struct SimSource {
    world: SimWorld,
    interval: Duration,
}

impl PerceptionSource for SimSource {
    fn next_sample(&mut self) -> Sample {
        thread::sleep(self.interval);
        Sample::Frame(self.world.frame())
    }
}

/// Actuation side of a [`SimWorld`].
#[derive(Debug)]
pub struct SimActuator {
    world: SimWorld,
}

impl Actuator for SimActuator {
    fn press(&mut self, direction: Direction) {
        self.world.apply(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presses_move_and_wrap() {
        let world = SimWorld::new(Grid::torus(3, 3).unwrap(), Cell::new(0, 0), [Cell::new(0, 2)]);
        let mut actuator = world.actuator();
        actuator.press(Direction::DecreaseCol);
        assert_eq!(world.agent(), Cell::new(0, 2));
        assert_eq!(world.reached(), 1);

        // The last target stays put once reached.
        let frame = world.frame();
        assert_eq!(frame.target, Some(Cell::new(0, 2)));
        assert_eq!(frame.heading, Some(Direction::DecreaseCol));
    }

    #[test]
    fn obstacles_block_moves() {
        let world = SimWorld::new(Grid::torus(3, 3).unwrap(), Cell::new(0, 0), [Cell::new(2, 2)])
            .with_obstacles([Cell::new(0, 1)]);
        world.actuator().press(Direction::IncreaseCol);
        assert_eq!(world.agent(), Cell::new(0, 0));
        assert_eq!(world.presses(), 1);
    }
}
