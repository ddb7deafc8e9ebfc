//! Thread lifecycle for the perception and actuation loops.
//!
//! [`PilotRuntime`] validates the configuration, builds the shared
//! [`GameStore`], and runs each loop on its own named OS thread. The loops
//! share nothing but the store, the metrics, and a shutdown flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{info, warn};

use crate::actuation::{ActuationLoop, Actuator};
use crate::config::{ConfigError, PilotConfig};
use crate::metrics::{MetricsSnapshot, PilotMetrics};
use crate::perception::{PerceptionExit, PerceptionLoop, PerceptionSource};
use crate::store::GameStore;

/// Name of the perception thread.
pub const PERCEPTION_THREAD: &str = "gridpilot-perception";
/// Name of the actuation thread.
pub const ACTUATION_THREAD: &str = "gridpilot-actuation";

/// What [`PilotRuntime::shutdown`] observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShutdownReport {
    /// Wall time from raising the flag to joining both threads.
    pub total_ms: u64,
    /// How long the runtime ran before shutdown began.
    pub uptime_ms: u64,
    /// How the perception loop ended. `None` if it panicked or was
    /// already reported by an earlier shutdown.
    pub perception_exit: Option<PerceptionExit>,
    /// Whether the actuation thread was joined without panicking.
    pub actuation_joined: bool,
    /// Counters at the moment both threads had stopped.
    pub metrics: MetricsSnapshot,
}

/// Running perception and actuation loops around one shared store.
///
/// Dropping the runtime shuts it down.
pub struct PilotRuntime {
    config: PilotConfig,
    store: Arc<GameStore>,
    metrics: Arc<PilotMetrics>,
    shutdown_flag: Arc<AtomicBool>,
    perception: Option<JoinHandle<PerceptionExit>>,
    actuation: Option<JoinHandle<()>>,
    started: Instant,
}

impl PilotRuntime {
    /// Validate `config` and spawn both loops.
    ///
    /// Fails with the first configuration error, or with
    /// [`ConfigError::ThreadSpawnFailed`] if either thread cannot start.
    /// Nothing keeps running after an error.
    pub fn start<S, A>(config: PilotConfig, source: S, actuator: A) -> Result<Self, ConfigError>
    where
        S: PerceptionSource + 'static,
        A: Actuator + 'static,
    {
        config.validate()?;
        let store = Arc::new(GameStore::new(config.planner()?));
        let metrics = Arc::new(PilotMetrics::new());
        let shutdown_flag = Arc::new(AtomicBool::new(false));

        let perception_loop = PerceptionLoop::new(
            source,
            Arc::clone(&store),
            Arc::clone(&metrics),
            config.frame_skip,
            Arc::clone(&shutdown_flag),
        );
        let perception = thread::Builder::new()
            .name(PERCEPTION_THREAD.into())
            .spawn(move || perception_loop.run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("{PERCEPTION_THREAD}: {e}"),
            })?;

        let actuation_loop = ActuationLoop::new(
            actuator,
            Arc::clone(&store),
            Arc::clone(&metrics),
            config.debounce,
            config.idle_poll,
            Arc::clone(&shutdown_flag),
        );
        let actuation = match thread::Builder::new()
            .name(ACTUATION_THREAD.into())
            .spawn(move || actuation_loop.run())
        {
            Ok(handle) => handle,
            Err(e) => {
                shutdown_flag.store(true, Ordering::Release);
                perception.thread().unpark();
                let _ = perception.join();
                return Err(ConfigError::ThreadSpawnFailed {
                    reason: format!("{ACTUATION_THREAD}: {e}"),
                });
            }
        };

        info!(
            rows = config.rows,
            cols = config.cols,
            debounce_ms = config.debounce.as_millis() as u64,
            frame_skip = config.frame_skip,
            "runtime_started"
        );

        Ok(Self {
            config,
            store,
            metrics,
            shutdown_flag,
            perception: Some(perception),
            actuation: Some(actuation),
            started: Instant::now(),
        })
    }

    /// The configuration the runtime was started with.
    pub fn config(&self) -> &PilotConfig {
        &self.config
    }

    /// The shared store. Readers may inspect it while the loops run.
    pub fn store(&self) -> &Arc<GameStore> {
        &self.store
    }

    /// Current counter values.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Whether the perception loop has returned, typically because its
    /// source closed.
    pub fn perception_finished(&self) -> bool {
        self.perception
            .as_ref()
            .is_none_or(|handle| handle.is_finished())
    }

    /// Whether shutdown has been requested.
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_flag.load(Ordering::Acquire)
    }

    /// Stop both loops and join their threads.
    ///
    /// Raises the shared flag, unparks both threads so neither sleeps out
    /// a debounce or idle wait, then joins. Calling it again returns a
    /// report with nothing left to join.
    pub fn shutdown(&mut self) -> ShutdownReport {
        let uptime_ms = self.started.elapsed().as_millis() as u64;
        let start = Instant::now();
        self.shutdown_flag.store(true, Ordering::Release);

        if let Some(handle) = &self.perception {
            handle.thread().unpark();
        }
        if let Some(handle) = &self.actuation {
            handle.thread().unpark();
        }

        let perception_exit = match self.perception.take().map(JoinHandle::join) {
            Some(Ok(exit)) => Some(exit),
            Some(Err(_)) => {
                warn!(thread = PERCEPTION_THREAD, "loop_thread_panicked");
                None
            }
            None => None,
        };
        let actuation_joined = match self.actuation.take().map(JoinHandle::join) {
            Some(Ok(())) => true,
            Some(Err(_)) => {
                warn!(thread = ACTUATION_THREAD, "loop_thread_panicked");
                false
            }
            None => false,
        };

        let report = ShutdownReport {
            total_ms: start.elapsed().as_millis() as u64,
            uptime_ms,
            perception_exit,
            actuation_joined,
            metrics: self.metrics.snapshot(),
        };
        info!(
            total_ms = report.total_ms,
            commands = report.metrics.commands_emitted,
            replans = report.metrics.replans,
            "runtime_stopped"
        );
        report
    }
}

impl Drop for PilotRuntime {
    fn drop(&mut self) {
        if self.perception.is_some() || self.actuation.is_some() {
            self.shutdown();
        }
    }
}

impl std::fmt::Debug for PilotRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PilotRuntime")
            .field("config", &self.config)
            .field("shutting_down", &self.is_shutting_down())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuation::FnActuator;
    use crate::perception::Sample;
    use std::time::Duration;

    struct Silent;

    impl PerceptionSource for Silent {
        fn next_sample(&mut self) -> Sample {
            thread::sleep(Duration::from_millis(2));
            Sample::Idle
        }
    }

    #[test]
    fn invalid_config_refuses_to_start() {
        let config = PilotConfig {
            frame_skip: 0,
            ..PilotConfig::default()
        };
        let err = PilotRuntime::start(config, Silent, FnActuator::new(|_| {})).unwrap_err();
        assert_eq!(err, ConfigError::InvalidFrameSkip { value: 0 });
    }

    #[test]
    fn lifecycle_start_and_shutdown() {
        let mut runtime =
            PilotRuntime::start(PilotConfig::default(), Silent, FnActuator::new(|_| {})).unwrap();
        assert!(!runtime.is_shutting_down());
        thread::sleep(Duration::from_millis(20));

        let report = runtime.shutdown();
        assert_eq!(report.perception_exit, Some(PerceptionExit::Shutdown));
        assert!(report.actuation_joined);
        assert_eq!(report.metrics.commands_emitted, 0);
        assert!(report.metrics.idle_ticks > 0);
        assert!(runtime.perception_finished());

        let again = runtime.shutdown();
        assert_eq!(again.perception_exit, None);
        assert!(!again.actuation_joined);
    }

    #[test]
    fn drop_triggers_shutdown() {
        let runtime =
            PilotRuntime::start(PilotConfig::default(), Silent, FnActuator::new(|_| {})).unwrap();
        thread::sleep(Duration::from_millis(10));
        drop(runtime);
        // If this doesn't hang, shutdown worked.
    }

    #[test]
    fn shutdown_does_not_wait_out_long_idle_poll() {
        let config = PilotConfig {
            idle_poll: Duration::from_secs(5),
            ..PilotConfig::default()
        };
        let mut runtime = PilotRuntime::start(config, Silent, FnActuator::new(|_| {})).unwrap();
        thread::sleep(Duration::from_millis(50));

        let start = Instant::now();
        runtime.shutdown();
        assert!(
            start.elapsed() < Duration::from_secs(2),
            "shutdown took {:?}",
            start.elapsed()
        );
    }
}
