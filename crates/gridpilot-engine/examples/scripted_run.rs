//! Drive a simulated snake across a wrapping board through channel
//! adapters.
//!
//! A "game" thread owns the board: it publishes a frame every few
//! milliseconds and applies every command it receives. The runtime sees
//! the game only through the two channels.
//!
//! Run with `RUST_LOG=debug` to see every plan and command, or
//! `RUST_LOG=trace` for board renderings.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use gridpilot_core::{Cell, Direction, Perceived};
use gridpilot_engine::{ChannelActuator, ChannelSource, PilotConfig, PilotRuntime};
use gridpilot_space::Grid;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const FOOD: [Cell; 5] = [
    Cell::new(3, 9),
    Cell::new(12, 2),
    Cell::new(0, 12),
    Cell::new(7, 7),
    Cell::new(13, 0),
];

fn main() {
    init_tracing();

    let config = PilotConfig {
        debounce: Duration::from_millis(40),
        frame_skip: 2,
        ..PilotConfig::default()
    };
    let grid = match config.grid() {
        Ok(grid) => grid,
        Err(err) => {
            error!(error = %err, "invalid_config");
            return;
        }
    };

    let (frame_tx, frame_rx) = crossbeam_channel::bounded(16);
    let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(16);
    let done = Arc::new(AtomicBool::new(false));

    let game = {
        let done = Arc::clone(&done);
        thread::Builder::new()
            .name("game".into())
            .spawn(move || run_game(grid, frame_tx, cmd_rx, &done))
    };
    let game = match game {
        Ok(handle) => handle,
        Err(err) => {
            error!(error = %err, "game_spawn_failed");
            return;
        }
    };

    let mut runtime = match PilotRuntime::start(
        config,
        ChannelSource::new(frame_rx),
        ChannelActuator::new(cmd_tx),
    ) {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "runtime_start_failed");
            return;
        }
    };

    while !done.load(Ordering::Acquire) {
        thread::sleep(Duration::from_millis(20));
    }

    let report = runtime.shutdown();
    info!(
        total_ms = report.total_ms,
        uptime_ms = report.uptime_ms,
        commands = report.metrics.commands_emitted,
        replans = report.metrics.replans,
        dropped = report.metrics.observations_dropped,
        "run_finished"
    );
    if game.join().is_err() {
        error!("game_thread_panicked");
    }
}

fn run_game(grid: Grid, frames: Sender<Perceived>, commands: Receiver<Direction>, done: &AtomicBool) {
    let mut head = Cell::new(0, 0);
    let mut heading = None;
    let mut eaten = 0;

    while eaten < FOOD.len() {
        while let Ok(direction) = commands.try_recv() {
            heading = Some(direction);
            if let Some(next) = grid.step(head, direction) {
                head = next;
            }
            if head == FOOD[eaten] {
                info!(%head, eaten = eaten + 1, "food_eaten");
                eaten += 1;
                if eaten == FOOD.len() {
                    break;
                }
            }
        }

        let mut frame = Perceived::new(Some(head), FOOD.get(eaten).copied());
        frame.heading = heading;
        if frames.send_timeout(frame, Duration::from_millis(50)).is_err() {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
    done.store(true, Ordering::Release);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
