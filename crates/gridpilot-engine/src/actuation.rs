//! The consumer side: draining the route into directional commands.
//!
//! The actuation loop waits out the debounce window, takes the next step
//! from the store, converts it into a [`Direction`] and hands it to an
//! [`Actuator`]. Every wait is a `park_timeout`, so shutdown unparks the
//! thread immediately.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Sender, TrySendError};
use gridpilot_core::Direction;
use tracing::{debug, warn};

use crate::debounce::Debouncer;
use crate::metrics::PilotMetrics;
use crate::store::GameStore;

/// Sink for directional commands.
///
/// Commands are fire-and-forget: there is no acknowledgment and a failed
/// press is not retried.
pub trait Actuator: Send {
    /// Issue one directional command.
    fn press(&mut self, direction: Direction);
}

impl<A: Actuator + ?Sized> Actuator for Box<A> {
    fn press(&mut self, direction: Direction) {
        (**self).press(direction)
    }
}

/// Forwards commands into a crossbeam channel without blocking.
///
/// A full or disconnected channel drops the command.
#[derive(Clone, Debug)]
pub struct ChannelActuator {
    tx: Sender<Direction>,
}

impl ChannelActuator {
    /// Wrap `tx`.
    pub fn new(tx: Sender<Direction>) -> Self {
        Self { tx }
    }
}

impl Actuator for ChannelActuator {
    fn press(&mut self, direction: Direction) {
        match self.tx.try_send(direction) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                debug!(%direction, "command_dropped_channel_full");
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!(%direction, "command_dropped_disconnected");
            }
        }
    }
}

/// Adapts a closure into an [`Actuator`].
///
/// # Examples
///
/// ```
/// use gridpilot_core::Direction;
/// use gridpilot_engine::{Actuator, FnActuator};
///
/// let mut pressed = Vec::new();
/// let mut actuator = FnActuator::new(|d: Direction| pressed.push(d.key_name()));
/// actuator.press(Direction::DecreaseRow);
/// drop(actuator);
/// assert_eq!(pressed, ["up"]);
/// ```
pub struct FnActuator<F> {
    f: F,
}

impl<F: FnMut(Direction) + Send> FnActuator<F> {
    /// Wrap `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(Direction) + Send> Actuator for FnActuator<F> {
    fn press(&mut self, direction: Direction) {
        (self.f)(direction)
    }
}

/// State owned by the actuation thread.
pub(crate) struct ActuationLoop<A> {
    actuator: A,
    store: Arc<GameStore>,
    metrics: Arc<PilotMetrics>,
    debouncer: Debouncer,
    idle_poll: Duration,
    shutdown_flag: Arc<AtomicBool>,
}

impl<A: Actuator> ActuationLoop<A> {
    pub fn new(
        actuator: A,
        store: Arc<GameStore>,
        metrics: Arc<PilotMetrics>,
        debounce: Duration,
        idle_poll: Duration,
        shutdown_flag: Arc<AtomicBool>,
    ) -> Self {
        Self {
            actuator,
            store,
            metrics,
            debouncer: Debouncer::new(debounce),
            idle_poll,
            shutdown_flag,
        }
    }

    /// Drain steps until shutdown is requested.
    pub fn run(mut self) {
        while !self.shutdown_flag.load(Ordering::Acquire) {
            self.tick();
        }
    }

    /// One iteration: wait out the debounce window, or emit one command,
    /// or idle.
    fn tick(&mut self) {
        let wait = self.debouncer.remaining(Instant::now());
        if !wait.is_zero() {
            thread::park_timeout(wait);
            return;
        }

        let Some(step) = self.store.take_next_step() else {
            self.metrics.record_idle_tick();
            thread::park_timeout(self.idle_poll);
            return;
        };
        self.metrics.record_step_taken();

        match step.direction(self.store.grid()) {
            Some(direction) => {
                self.actuator.press(direction);
                self.debouncer.record(Instant::now());
                self.metrics.record_command_emitted();
                debug!(%direction, from = %step.from, to = %step.to, "command_emitted");
            }
            None => {
                warn!(from = %step.from, to = %step.to, "step_not_adjacent");
            }
        }
    }
}
