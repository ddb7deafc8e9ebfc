//! The producer side: turning perceived frames into store updates.
//!
//! A [`PerceptionSource`] yields [`Sample`]s at whatever cadence the
//! capture pipeline manages. The perception loop throttles them, discards
//! frames that are incomplete or point off the grid, and hands the rest to
//! [`GameStore::update_observation`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use gridpilot_core::Perceived;
use gridpilot_space::Grid;
use tracing::{debug, enabled, trace, Level};

use crate::metrics::PilotMetrics;
use crate::render::render_ascii;
use crate::store::{GameStore, Observation, UpdateOutcome};
use crate::throttle::FrameThrottle;

/// One pull from a perception source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sample {
    /// A captured frame, possibly with missing detections.
    Frame(Perceived),
    /// Nothing new arrived within the source's own wait.
    Idle,
    /// The source is finished; the loop exits.
    Closed,
}

/// Producer of perceived frames.
///
/// `next_sample` may block, but should return [`Sample::Idle`] after a
/// short wait so the loop can notice shutdown.
pub trait PerceptionSource: Send {
    /// Block briefly for the next sample.
    fn next_sample(&mut self) -> Sample;
}

impl<S: PerceptionSource + ?Sized> PerceptionSource for Box<S> {
    fn next_sample(&mut self) -> Sample {
        (**self).next_sample()
    }
}

// ── ChannelSource ──────────────────────────────────────────────────

/// Default wait before a [`ChannelSource`] reports [`Sample::Idle`].
pub const DEFAULT_RECV_TIMEOUT: Duration = Duration::from_millis(10);

/// Adapts a crossbeam receiver into a [`PerceptionSource`].
///
/// Disconnection of every sender closes the source.
#[derive(Debug)]
pub struct ChannelSource {
    rx: Receiver<Perceived>,
    timeout: Duration,
}

impl ChannelSource {
    /// Wrap `rx`, waiting up to [`DEFAULT_RECV_TIMEOUT`] per sample.
    pub fn new(rx: Receiver<Perceived>) -> Self {
        Self::with_timeout(rx, DEFAULT_RECV_TIMEOUT)
    }

    /// Wrap `rx` with an explicit per-sample wait.
    pub fn with_timeout(rx: Receiver<Perceived>, timeout: Duration) -> Self {
        Self { rx, timeout }
    }
}

impl PerceptionSource for ChannelSource {
    fn next_sample(&mut self) -> Sample {
        match self.rx.recv_timeout(self.timeout) {
            Ok(frame) => Sample::Frame(frame),
            Err(RecvTimeoutError::Timeout) => Sample::Idle,
            Err(RecvTimeoutError::Disconnected) => Sample::Closed,
        }
    }
}

// ── Frame admission ────────────────────────────────────────────────

/// Why an admitted frame was not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// The agent was not detected.
    MissingAgent,
    /// The target was not detected.
    MissingTarget,
    /// The agent was reported outside the grid.
    AgentOutOfBounds,
    /// The target was reported outside the grid.
    TargetOutOfBounds,
}

impl DropReason {
    /// Snake-case label for structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingAgent => "missing_agent",
            Self::MissingTarget => "missing_target",
            Self::AgentOutOfBounds => "agent_out_of_bounds",
            Self::TargetOutOfBounds => "target_out_of_bounds",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a perceived frame against `grid`.
///
/// Missing or off-grid agent and target reject the whole frame. Off-grid
/// obstacle cells are discarded one by one.
///
/// # Examples
///
/// ```
/// use gridpilot_core::{Cell, Perceived};
/// use gridpilot_engine::{to_observation, DropReason};
/// use gridpilot_space::Grid;
///
/// let grid = Grid::torus(4, 4).unwrap();
///
/// let frame = Perceived::new(Some(Cell::new(0, 0)), None);
/// assert_eq!(to_observation(&grid, frame), Err(DropReason::MissingTarget));
///
/// let frame = Perceived::new(Some(Cell::new(0, 0)), Some(Cell::new(1, 1)))
///     .with_obstacles([Cell::new(2, 2), Cell::new(9, 9)]);
/// let obs = to_observation(&grid, frame).unwrap();
/// assert_eq!(obs.obstacles.len(), 1);
/// ```
pub fn to_observation(grid: &Grid, frame: Perceived) -> Result<Observation, DropReason> {
    let Perceived {
        agent,
        heading,
        target,
        mut obstacles,
    } = frame;
    let agent = agent.ok_or(DropReason::MissingAgent)?;
    let target = target.ok_or(DropReason::MissingTarget)?;
    if !grid.contains(agent) {
        return Err(DropReason::AgentOutOfBounds);
    }
    if !grid.contains(target) {
        return Err(DropReason::TargetOutOfBounds);
    }
    obstacles.retain(|&cell| grid.contains(cell));
    Ok(Observation {
        agent,
        heading,
        target,
        obstacles,
    })
}

// ── Loop ───────────────────────────────────────────────────────────

/// Why the perception loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerceptionExit {
    /// The shutdown flag was raised.
    Shutdown,
    /// The source reported [`Sample::Closed`].
    SourceClosed,
}

/// State owned by the perception thread.
pub(crate) struct PerceptionLoop<S> {
    source: S,
    store: Arc<GameStore>,
    metrics: Arc<PilotMetrics>,
    throttle: FrameThrottle,
    shutdown_flag: Arc<AtomicBool>,
}

impl<S: PerceptionSource> PerceptionLoop<S> {
    pub fn new(
        source: S,
        store: Arc<GameStore>,
        metrics: Arc<PilotMetrics>,
        frame_skip: u32,
        shutdown_flag: Arc<AtomicBool>,
    ) -> Self {
        Self {
            source,
            store,
            metrics,
            throttle: FrameThrottle::new(frame_skip),
            shutdown_flag,
        }
    }

    /// Pull samples until the source closes or shutdown is requested.
    pub fn run(mut self) -> PerceptionExit {
        loop {
            if self.shutdown_flag.load(Ordering::Acquire) {
                return PerceptionExit::Shutdown;
            }
            match self.source.next_sample() {
                Sample::Frame(frame) => self.on_frame(frame),
                Sample::Idle => {}
                Sample::Closed => {
                    debug!("perception_source_closed");
                    return PerceptionExit::SourceClosed;
                }
            }
        }
    }

    fn on_frame(&mut self, frame: Perceived) {
        self.metrics.record_frame_sampled();
        if !self.throttle.admit() {
            return;
        }
        self.metrics.record_frame_admitted();

        let observation = match to_observation(self.store.grid(), frame) {
            Ok(observation) => observation,
            Err(reason) => {
                self.metrics.record_observation_dropped();
                debug!(reason = reason.as_str(), "observation_dropped");
                return;
            }
        };
        self.metrics.record_observation_accepted();

        let agent = observation.agent;
        let target = observation.target;
        match self.store.update_observation(observation) {
            UpdateOutcome::Replanned { reason, hops } => {
                self.metrics.record_replan();
                debug!(
                    reason = reason.as_str(),
                    hops,
                    %agent,
                    %target,
                    "route_planned"
                );
                self.trace_board();
            }
            UpdateOutcome::Unreachable { reason } => {
                self.metrics.record_unreachable();
                debug!(
                    reason = reason.as_str(),
                    %agent,
                    %target,
                    "target_unreachable"
                );
                self.trace_board();
            }
            UpdateOutcome::Kept | UpdateOutcome::Holding => {}
        }
    }

    fn trace_board(&self) {
        if enabled!(Level::TRACE) {
            let grid = self.store.grid();
            let board = render_ascii(&self.store.snapshot(), grid.rows(), grid.cols());
            trace!(%board, "board_rendered");
        }
    }
}
