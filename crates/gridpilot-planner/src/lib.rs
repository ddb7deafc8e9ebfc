//! Route planning for the gridpilot engine.
//!
//! [`RoutePlanner`] runs a breadth-first search over a [`Grid`](gridpilot_space::Grid)
//! and returns the shortest [`Route`] by hop count, taking the wrapped
//! seams into account. Exploration order among equal-cost neighbours is
//! fixed by a [`DirectionOrder`], so identical inputs always produce the
//! identical route.
//!
//! The planner holds no state between calls and is `Sync`; it may be
//! invoked from inside a critical section or from a separate worker.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bfs;
pub mod obstacles;
pub mod order;
pub mod route;

pub use bfs::RoutePlanner;
pub use obstacles::{NoObstacles, ObstacleSet};
pub use order::{DirectionOrder, OrderError};
pub use route::{Route, Step};
