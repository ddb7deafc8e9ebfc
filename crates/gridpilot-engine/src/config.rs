//! Runtime configuration, validation, and error types.
//!
//! [`PilotConfig`] is fixed for the lifetime of a
//! [`PilotRuntime`](crate::runtime::PilotRuntime).
//! [`validate()`](PilotConfig::validate) checks every invariant at startup
//! so that neither loop has to handle a malformed setting later.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use gridpilot_core::Direction;
use gridpilot_planner::{DirectionOrder, OrderError, RoutePlanner};
use gridpilot_space::{EdgeBehavior, Grid, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`PilotConfig::validate()`] or while starting
/// the runtime.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The grid dimensions are unusable.
    Space(SpaceError),
    /// The BFS direction order is not a permutation of the four directions.
    InvalidDirectionOrder(OrderError),
    /// The debounce interval is zero.
    InvalidDebounce {
        /// The configured interval.
        value: Duration,
    },
    /// `frame_skip` is zero.
    InvalidFrameSkip {
        /// The configured value.
        value: u32,
    },
    /// The idle poll interval is zero, which would busy-spin the actuation
    /// loop.
    InvalidIdlePoll {
        /// The configured interval.
        value: Duration,
    },
    /// A loop thread could not be spawned.
    ThreadSpawnFailed {
        /// Which thread failed and why.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "grid: {e}"),
            Self::InvalidDirectionOrder(e) => write!(f, "direction order: {e}"),
            Self::InvalidDebounce { value } => {
                write!(f, "debounce must be positive, got {value:?}")
            }
            Self::InvalidFrameSkip { value } => {
                write!(f, "frame_skip must be at least 1, got {value}")
            }
            Self::InvalidIdlePoll { value } => {
                write!(f, "idle_poll must be positive, got {value:?}")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::InvalidDirectionOrder(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<OrderError> for ConfigError {
    fn from(e: OrderError) -> Self {
        Self::InvalidDirectionOrder(e)
    }
}

// ── PilotConfig ────────────────────────────────────────────────────

/// Startup configuration for the perception and actuation loops.
#[derive(Clone, Debug, PartialEq)]
pub struct PilotConfig {
    /// Grid rows. Default: 14.
    pub rows: u32,
    /// Grid columns. Default: 13.
    pub cols: u32,
    /// Edge handling. Default: [`EdgeBehavior::Wrap`].
    pub edge: EdgeBehavior,
    /// BFS neighbour expansion order. Must name each direction once.
    /// Default: column moves first, increasing before decreasing.
    pub direction_order: [Direction; 4],
    /// Minimum interval between two emitted commands. Default: 100 ms.
    pub debounce: Duration,
    /// Only every `frame_skip`-th sampled frame is processed. Default: 5.
    pub frame_skip: u32,
    /// How long the actuation loop waits before re-checking an empty
    /// store. Default: 5 ms.
    pub idle_poll: Duration,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            rows: 14,
            cols: 13,
            edge: EdgeBehavior::Wrap,
            direction_order: DirectionOrder::COLUMNS_FIRST.as_array(),
            debounce: Duration::from_millis(100),
            frame_skip: 5,
            idle_poll: Duration::from_millis(5),
        }
    }
}

impl PilotConfig {
    /// Check every invariant, returning the first one violated.
    ///
    /// Checks run in field order: grid, direction order, debounce,
    /// frame skip, idle poll.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.planner()?;
        if self.debounce.is_zero() {
            return Err(ConfigError::InvalidDebounce {
                value: self.debounce,
            });
        }
        if self.frame_skip == 0 {
            return Err(ConfigError::InvalidFrameSkip {
                value: self.frame_skip,
            });
        }
        if self.idle_poll.is_zero() {
            return Err(ConfigError::InvalidIdlePoll {
                value: self.idle_poll,
            });
        }
        Ok(())
    }

    /// Build the grid described by `rows`, `cols` and `edge`.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.rows, self.cols, self.edge)?)
    }

    /// Build the planner described by the grid settings and direction
    /// order.
    pub fn planner(&self) -> Result<RoutePlanner, ConfigError> {
        let grid = self.grid()?;
        let order = DirectionOrder::new(self.direction_order)?;
        Ok(RoutePlanner::new(grid, order))
    }
}
