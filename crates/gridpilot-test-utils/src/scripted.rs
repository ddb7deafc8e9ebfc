//! A perception source that replays a fixed list of samples.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use gridpilot_core::Perceived;
use gridpilot_engine::{PerceptionSource, Sample};

/// Replays samples in order, optionally pacing them.
///
/// When the script runs out the source either closes (the default) or,
/// after [`hold_open`](Self::hold_open), keeps reporting
/// [`Sample::Idle`] so the runtime stays up until shut down.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    samples: VecDeque<Sample>,
    interval: Duration,
    hold_open: bool,
}

impl ScriptedSource {
    pub fn new(samples: impl IntoIterator<Item = Sample>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A script of frames only.
    pub fn frames(frames: impl IntoIterator<Item = Perceived>) -> Self {
        Self::new(frames.into_iter().map(Sample::Frame))
    }

    /// The same frame `count` times.
    pub fn repeat(frame: Perceived, count: usize) -> Self {
        Self::frames(std::iter::repeat_n(frame, count))
    }

    /// Sleep `interval` before returning each sample.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Report `Idle` instead of `Closed` once the script is exhausted.
    pub fn hold_open(mut self) -> Self {
        self.hold_open = true;
        self
    }

    /// Append more samples to the script.
    pub fn then(mut self, samples: impl IntoIterator<Item = Sample>) -> Self {
        self.samples.extend(samples);
        self
    }

    /// Samples not yet replayed.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl PerceptionSource for ScriptedSource {
    fn next_sample(&mut self) -> Sample {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        match self.samples.pop_front() {
            Some(sample) => sample,
            None if self.hold_open => {
                if self.interval.is_zero() {
                    thread::sleep(Duration::from_millis(1));
                }
                Sample::Idle
            }
            None => Sample::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_closes() {
        let mut source = ScriptedSource::repeat(Perceived::empty(), 2);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_sample(), Sample::Frame(Perceived::empty()));
        assert_eq!(source.next_sample(), Sample::Frame(Perceived::empty()));
        assert_eq!(source.next_sample(), Sample::Closed);
    }

    #[test]
    fn held_open_source_idles() {
        let mut source = ScriptedSource::new([Sample::Idle]).hold_open();
        assert_eq!(source.next_sample(), Sample::Idle);
        assert_eq!(source.next_sample(), Sample::Idle);
        assert_eq!(source.remaining(), 0);
    }
}
