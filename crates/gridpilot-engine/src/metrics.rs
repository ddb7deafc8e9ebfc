//! Loop counters shared between the runtime threads.
//!
//! [`PilotMetrics`] is written by both loops with relaxed atomics and read
//! by any thread through [`snapshot()`](PilotMetrics::snapshot). Counters
//! are cumulative from runtime start.

use std::sync::atomic::{AtomicU64, Ordering};

/// Cumulative counters updated by the perception and actuation loops.
#[derive(Debug, Default)]
pub struct PilotMetrics {
    frames_sampled: AtomicU64,
    frames_admitted: AtomicU64,
    observations_accepted: AtomicU64,
    observations_dropped: AtomicU64,
    replans: AtomicU64,
    unreachable_plans: AtomicU64,
    steps_taken: AtomicU64,
    commands_emitted: AtomicU64,
    idle_ticks: AtomicU64,
}

/// Point-in-time copy of [`PilotMetrics`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Frames pulled from the perception source.
    pub frames_sampled: u64,
    /// Frames let through by the throttle.
    pub frames_admitted: u64,
    /// Admitted frames that reached the store.
    pub observations_accepted: u64,
    /// Admitted frames discarded as incomplete or off-grid.
    pub observations_dropped: u64,
    /// Planner invocations that produced a route.
    pub replans: u64,
    /// Planner invocations that found no route.
    pub unreachable_plans: u64,
    /// Steps taken from the store by the actuation loop.
    pub steps_taken: u64,
    /// Commands handed to the actuator.
    pub commands_emitted: u64,
    /// Actuation iterations that found no route to follow.
    pub idle_ticks: u64,
}

macro_rules! counter {
    ($($inc:ident => $field:ident),* $(,)?) => {
        $(
            pub(crate) fn $inc(&self) {
                self.$field.fetch_add(1, Ordering::Relaxed);
            }
        )*
    };
}

impl PilotMetrics {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    counter! {
        record_frame_sampled => frames_sampled,
        record_frame_admitted => frames_admitted,
        record_observation_accepted => observations_accepted,
        record_observation_dropped => observations_dropped,
        record_replan => replans,
        record_unreachable => unreachable_plans,
        record_step_taken => steps_taken,
        record_command_emitted => commands_emitted,
        record_idle_tick => idle_ticks,
    }

    /// Copy every counter.
    ///
    /// Counters are read one at a time, so a snapshot taken while the
    /// loops run may mix values from adjacent iterations.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            frames_sampled: self.frames_sampled.load(Ordering::Relaxed),
            frames_admitted: self.frames_admitted.load(Ordering::Relaxed),
            observations_accepted: self.observations_accepted.load(Ordering::Relaxed),
            observations_dropped: self.observations_dropped.load(Ordering::Relaxed),
            replans: self.replans.load(Ordering::Relaxed),
            unreachable_plans: self.unreachable_plans.load(Ordering::Relaxed),
            steps_taken: self.steps_taken.load(Ordering::Relaxed),
            commands_emitted: self.commands_emitted.load(Ordering::Relaxed),
            idle_ticks: self.idle_ticks.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        assert_eq!(PilotMetrics::new().snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn counters_are_independent() {
        let m = PilotMetrics::new();
        m.record_frame_sampled();
        m.record_frame_sampled();
        m.record_frame_admitted();
        m.record_replan();
        m.record_command_emitted();

        let snap = m.snapshot();
        assert_eq!(snap.frames_sampled, 2);
        assert_eq!(snap.frames_admitted, 1);
        assert_eq!(snap.replans, 1);
        assert_eq!(snap.commands_emitted, 1);
        assert_eq!(snap.observations_dropped, 0);
        assert_eq!(snap.idle_ticks, 0);
    }
}
