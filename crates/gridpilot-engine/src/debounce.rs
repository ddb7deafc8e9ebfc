//! Minimum spacing between emitted commands.

use std::time::{Duration, Instant};

/// Tracks when the last command went out and how long until the next may.
///
/// Time is passed in by the caller so the arithmetic is testable without
/// sleeping.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use gridpilot_engine::Debouncer;
///
/// let mut debounce = Debouncer::new(Duration::from_millis(100));
/// let t0 = Instant::now();
/// assert!(debounce.is_ready(t0));
///
/// debounce.record(t0);
/// assert_eq!(debounce.remaining(t0 + Duration::from_millis(40)), Duration::from_millis(60));
/// assert!(debounce.is_ready(t0 + Duration::from_millis(100)));
/// ```
#[derive(Clone, Debug)]
pub struct Debouncer {
    interval: Duration,
    last_emit: Option<Instant>,
}

impl Debouncer {
    /// A debouncer that has never emitted.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_emit: None,
        }
    }

    /// The configured minimum spacing.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the last command was recorded.
    pub fn last_emit(&self) -> Option<Instant> {
        self.last_emit
    }

    /// Time left before the next command may be emitted; zero when ready.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_emit {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Whether a command may be emitted at `now`.
    pub fn is_ready(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Record an emission at `now`.
    pub fn record(&mut self, now: Instant) {
        self.last_emit = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn first_emission_is_immediate() {
        let d = Debouncer::new(100 * MS);
        assert_eq!(d.remaining(Instant::now()), Duration::ZERO);
        assert_eq!(d.last_emit(), None);
    }

    #[test]
    fn window_counts_down() {
        let mut d = Debouncer::new(100 * MS);
        let t0 = Instant::now();
        d.record(t0);
        assert_eq!(d.remaining(t0), 100 * MS);
        assert_eq!(d.remaining(t0 + 99 * MS), MS);
        assert!(!d.is_ready(t0 + 99 * MS));
        assert!(d.is_ready(t0 + 100 * MS));
        assert!(d.is_ready(t0 + 250 * MS));
    }

    #[test]
    fn clock_before_last_emit_waits_full_interval() {
        let mut d = Debouncer::new(100 * MS);
        let t0 = Instant::now();
        d.record(t0 + 10 * MS);
        assert_eq!(d.remaining(t0), 100 * MS);
    }
}
