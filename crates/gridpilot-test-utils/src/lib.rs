//! Test utilities and fixtures for gridpilot development.
//!
//! Provides ASCII [`Board`] fixtures, a brute-force distance oracle for
//! checking the planner, a [`ScriptedSource`] that replays perception
//! samples, a [`RecordingActuator`] that timestamps every command, and a
//! closed-loop [`SimWorld`] whose agent moves when commands arrive.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod board;
pub mod oracle;
pub mod recording;
pub mod scripted;
pub mod sim;

pub use board::Board;
pub use oracle::{brute_force_distance, brute_force_distances};
pub use recording::{RecordedCommand, RecordingActuator};
pub use scripted::ScriptedSource;
pub use sim::{SimActuator, SimSource, SimWorld};
