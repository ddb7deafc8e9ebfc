//! Core types for the gridpilot planning engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: grid
//! [`Cell`]s, the four movement [`Direction`]s, and the [`Perceived`]
//! observation delivered by the perception collaborator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod observation;

pub use cell::Cell;
pub use direction::Direction;
pub use observation::{Obstacles, Perceived};
