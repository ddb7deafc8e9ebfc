//! Grid topology for the gridpilot planning engine.
//!
//! [`Grid`] is a fixed-size 2D lattice with 4-connected adjacency. Under
//! [`EdgeBehavior::Wrap`] (the default for the games gridpilot drives)
//! moving past an edge re-enters from the opposite side, so every cell has
//! exactly four neighbours and the board is a torus.
//!
//! [`PixelGeometry`] maps points inside a captured screen region onto grid
//! cells for perception collaborators.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod geometry;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use geometry::PixelGeometry;
pub use grid::Grid;
