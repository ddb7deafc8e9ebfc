//! An actuator that remembers every command it was given.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

use gridpilot_core::Direction;
use gridpilot_engine::Actuator;

/// One command as received by [`RecordingActuator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordedCommand {
    pub at: Instant,
    pub direction: Direction,
}

/// Records commands with their arrival time.
///
/// Clones share one log, so keep a clone for assertions and move the
/// other into the runtime.
#[derive(Clone, Debug, Default)]
pub struct RecordingActuator {
    log: Arc<Mutex<Vec<RecordedCommand>>>,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, Vec<RecordedCommand>> {
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of every command so far.
    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.log().clone()
    }

    /// The directions pressed so far, in order.
    pub fn directions(&self) -> Vec<Direction> {
        self.log().iter().map(|c| c.direction).collect()
    }

    pub fn len(&self) -> usize {
        self.log().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log().is_empty()
    }

    /// Smallest interval between two consecutive commands.
    pub fn min_gap(&self) -> Option<Duration> {
        self.log()
            .windows(2)
            .map(|w| w[1].at.duration_since(w[0].at))
            .min()
    }

    /// Poll until at least `count` commands arrived or `timeout` passed.
    /// Returns whether the count was reached.
    pub fn wait_for(&self, count: usize, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.len() < count {
            if Instant::now() > deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(1));
        }
        true
    }
}

impl Actuator for RecordingActuator {
    fn press(&mut self, direction: Direction) {
        self.log().push(RecordedCommand {
            at: Instant::now(),
            direction,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_log() {
        let recorder = RecordingActuator::new();
        let mut handle = recorder.clone();
        handle.press(Direction::IncreaseCol);
        handle.press(Direction::DecreaseRow);
        assert_eq!(
            recorder.directions(),
            [Direction::IncreaseCol, Direction::DecreaseRow]
        );
        assert!(recorder.min_gap().is_some());
        assert!(recorder.wait_for(2, Duration::ZERO));
    }
}
