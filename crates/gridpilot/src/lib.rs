//! Gridpilot: route planning and debounced actuation for bots that play
//! grid games on a wrapping board.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridpilot sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use gridpilot::prelude::*;
//!
//! // Plan on the wrapping 4x4 board: leaving column 0 to the left is one
//! // move away from column 3.
//! let planner = RoutePlanner::with_default_order(Grid::torus(4, 4).unwrap());
//! let route = planner
//!     .plan(Cell::new(0, 0), Cell::new(0, 3), &NoObstacles)
//!     .unwrap();
//! assert_eq!(route.to_vec(), vec![Cell::new(0, 0), Cell::new(0, 3)]);
//!
//! // The store replans on demand and hands out one step at a time.
//! let store = GameStore::new(planner);
//! store.update_observation(Observation::new(Cell::new(0, 0), Cell::new(0, 3), []));
//! let step = store.take_next_step().unwrap();
//! assert_eq!(step.direction(store.grid()), Some(Direction::DecreaseCol));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridpilot-core` | `Cell`, `Direction`, perceived frames |
//! | [`space`] | `gridpilot-space` | Grid topology and pixel geometry |
//! | [`planner`] | `gridpilot-planner` | Breadth-first route planning |
//! | [`engine`] | `gridpilot-engine` | Game store, loops, runtime |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cells, directions and perceived frames (`gridpilot-core`).
pub use gridpilot_core as types;

/// Grid topology and pixel-to-cell mapping (`gridpilot-space`).
///
/// [`space::Grid`] is the wrap-aware board every other crate plans on.
pub use gridpilot_space as space;

/// Shortest-route search (`gridpilot-planner`).
///
/// [`planner::RoutePlanner`] returns a [`planner::Route`] or nothing;
/// obstacles are anything implementing [`planner::ObstacleSet`].
pub use gridpilot_planner as planner;

/// Shared game state and the perception and actuation loops
/// (`gridpilot-engine`).
///
/// [`engine::PilotRuntime`] runs everything; [`engine::GameStore`] can
/// also be driven by hand.
pub use gridpilot_engine as engine;

/// Common imports for typical gridpilot usage.
///
/// ```rust
/// use gridpilot::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridpilot_core::{Cell, Direction, Obstacles, Perceived};

    // Space
    pub use gridpilot_space::{EdgeBehavior, Grid, PixelGeometry};

    // Planning
    pub use gridpilot_planner::{DirectionOrder, NoObstacles, ObstacleSet, Route, RoutePlanner, Step};

    // Store and runtime
    pub use gridpilot_engine::{
        Actuator, ChannelActuator, ChannelSource, ConfigError, GameSnapshot, GameStore,
        Observation, PerceptionSource, PilotConfig, PilotRuntime, RoutePhase, Sample,
        UpdateOutcome,
    };
}
