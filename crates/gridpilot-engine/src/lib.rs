//! Shared game state and the producer/consumer loops around it.
//!
//! The perception loop pulls frames from a [`PerceptionSource`], throttles
//! and validates them, and feeds complete observations to the
//! [`GameStore`]. The store decides when the active route is stale and
//! replans synchronously under its lock. The actuation loop drains the
//! route one [`Step`](gridpilot_planner::Step) at a time, no faster than
//! the configured debounce, and hands each [`Direction`](gridpilot_core::Direction)
//! to an [`Actuator`].
//!
//! [`PilotRuntime`] runs both loops on named threads and stops them
//! promptly through a shared flag plus `unpark`.
//!
//! Library code logs through `tracing` and never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod actuation;
pub mod config;
pub mod debounce;
pub mod metrics;
pub mod perception;
pub mod render;
pub mod runtime;
pub mod store;
pub mod throttle;

pub use actuation::{Actuator, ChannelActuator, FnActuator};
pub use config::{ConfigError, PilotConfig};
pub use debounce::Debouncer;
pub use metrics::{MetricsSnapshot, PilotMetrics};
pub use perception::{
    to_observation, ChannelSource, DropReason, PerceptionExit, PerceptionSource, Sample,
};
pub use render::render_ascii;
pub use runtime::{PilotRuntime, ShutdownReport};
pub use store::{GameSnapshot, GameStore, Observation, ReplanReason, RoutePhase, UpdateOutcome};
pub use throttle::FrameThrottle;
