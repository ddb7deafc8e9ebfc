use std::thread;
use std::time::{Duration, Instant};

use gridpilot_core::{Cell, Direction, Perceived};
use gridpilot_engine::{PerceptionExit, PilotConfig, PilotRuntime, RoutePhase, Sample};
use gridpilot_space::Grid;
use gridpilot_test_utils::{RecordingActuator, ScriptedSource, SimWorld};

fn fast_config(rows: u32, cols: u32) -> PilotConfig {
    PilotConfig {
        rows,
        cols,
        debounce: Duration::from_millis(15),
        frame_skip: 1,
        idle_poll: Duration::from_millis(1),
        ..PilotConfig::default()
    }
}

fn wait_until(timeout: Duration, mut done: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while !done() {
        if Instant::now() > deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(2));
    }
    true
}

#[test]
fn agent_collects_every_target() {
    let grid = Grid::torus(6, 6).unwrap();
    let targets = [Cell::new(0, 3), Cell::new(4, 3), Cell::new(4, 5), Cell::new(1, 1)];
    let world = SimWorld::new(grid, Cell::new(0, 0), targets).with_obstacles([Cell::new(2, 3)]);

    let mut runtime = PilotRuntime::start(
        fast_config(6, 6),
        world.source(Duration::from_millis(2)),
        world.actuator(),
    )
    .unwrap();

    assert!(
        wait_until(Duration::from_secs(10), || world.reached() >= targets.len()),
        "reached {} of {} targets",
        world.reached(),
        targets.len()
    );
    assert!(wait_until(Duration::from_secs(5), || world.agent() == Cell::new(1, 1)));

    let report = runtime.shutdown();
    assert!(report.metrics.commands_emitted >= 9);
    assert!(report.metrics.replans >= targets.len() as u64);
    assert_eq!(report.perception_exit, Some(PerceptionExit::Shutdown));
    assert!(report.actuation_joined);
}

#[test]
fn agent_on_final_target_stops_pressing() {
    let grid = Grid::torus(4, 4).unwrap();
    let world = SimWorld::new(grid, Cell::new(0, 0), [Cell::new(0, 1)]);
    let runtime = PilotRuntime::start(
        fast_config(4, 4),
        world.source(Duration::from_millis(2)),
        world.actuator(),
    )
    .unwrap();

    assert!(wait_until(Duration::from_secs(5), || world.reached() == 1));
    // Let a few more frames arrive, then check nothing else is pressed.
    thread::sleep(Duration::from_millis(60));
    let presses = world.presses();
    thread::sleep(Duration::from_millis(100));
    assert_eq!(world.presses(), presses);
    assert_eq!(runtime.store().phase(), RoutePhase::Empty);
}

#[test]
fn commands_respect_the_debounce_interval() {
    // Perception keeps reporting the start cell, so every frame makes the
    // route stale and actuation always has a step ready.
    let frame = Perceived::new(Some(Cell::new(0, 0)), Some(Cell::new(0, 5)));
    let source = ScriptedSource::repeat(frame, 400)
        .with_interval(Duration::from_millis(1))
        .hold_open();
    let recorder = RecordingActuator::new();
    let config = PilotConfig {
        debounce: Duration::from_millis(25),
        ..fast_config(10, 10)
    };

    let mut runtime = PilotRuntime::start(config, source, recorder.clone()).unwrap();
    assert!(recorder.wait_for(5, Duration::from_secs(5)));
    runtime.shutdown();

    let gap = recorder.min_gap().unwrap();
    assert!(gap >= Duration::from_millis(25), "commands {gap:?} apart");
    assert!(recorder
        .directions()
        .iter()
        .all(|&d| d == Direction::IncreaseCol));
}

#[test]
fn incomplete_frames_never_produce_commands() {
    let samples = vec![
        Sample::Frame(Perceived::new(None, Some(Cell::new(1, 1)))),
        Sample::Frame(Perceived::new(Some(Cell::new(0, 0)), None)),
        Sample::Frame(Perceived::empty()),
        Sample::Idle,
    ];
    let recorder = RecordingActuator::new();
    let mut runtime =
        PilotRuntime::start(fast_config(4, 4), ScriptedSource::new(samples), recorder.clone())
            .unwrap();

    assert!(wait_until(Duration::from_secs(5), || runtime.perception_finished()));
    thread::sleep(Duration::from_millis(30));
    let report = runtime.shutdown();

    assert!(recorder.is_empty());
    assert_eq!(report.perception_exit, Some(PerceptionExit::SourceClosed));
    assert_eq!(report.metrics.observations_dropped, 3);
    assert_eq!(report.metrics.observations_accepted, 0);
    assert_eq!(runtime.store().phase(), RoutePhase::Empty);
}

#[test]
fn frame_skip_thins_perception() {
    let frame = Perceived::new(Some(Cell::new(0, 0)), Some(Cell::new(2, 2)));
    let config = PilotConfig {
        frame_skip: 5,
        ..fast_config(4, 4)
    };
    let mut runtime = PilotRuntime::start(
        config,
        ScriptedSource::repeat(frame, 23),
        RecordingActuator::new(),
    )
    .unwrap();

    assert!(wait_until(Duration::from_secs(5), || runtime.perception_finished()));
    let report = runtime.shutdown();
    assert_eq!(report.metrics.frames_sampled, 23);
    assert_eq!(report.metrics.frames_admitted, 4);
}

#[test]
fn shutdown_is_prompt_with_long_debounce() {
    let frame = Perceived::new(Some(Cell::new(0, 0)), Some(Cell::new(0, 3)));
    let config = PilotConfig {
        debounce: Duration::from_secs(10),
        ..fast_config(8, 8)
    };
    let recorder = RecordingActuator::new();
    let mut runtime = PilotRuntime::start(
        config,
        ScriptedSource::repeat(frame, 1).hold_open(),
        recorder.clone(),
    )
    .unwrap();

    // The first command goes out at once; the loop then parks for 10s.
    assert!(recorder.wait_for(1, Duration::from_secs(5)));
    thread::sleep(Duration::from_millis(20));

    let start = Instant::now();
    let report = runtime.shutdown();
    assert!(
        start.elapsed() < Duration::from_secs(2),
        "shutdown took {:?}",
        start.elapsed()
    );
    assert!(report.actuation_joined);
    assert_eq!(recorder.len(), 1);
}

#[test]
fn channel_adapters_wire_a_runtime() {
    use gridpilot_engine::{ChannelActuator, ChannelSource};

    let (frame_tx, frame_rx) = crossbeam_channel::bounded(8);
    let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(8);
    let mut runtime = PilotRuntime::start(
        fast_config(4, 4),
        ChannelSource::new(frame_rx),
        ChannelActuator::new(cmd_tx),
    )
    .unwrap();

    frame_tx
        .send(Perceived::new(Some(Cell::new(0, 0)), Some(Cell::new(3, 0))))
        .unwrap();
    let command = cmd_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(command, Direction::DecreaseRow);

    drop(frame_tx);
    assert!(wait_until(Duration::from_secs(5), || runtime.perception_finished()));
    let report = runtime.shutdown();
    assert_eq!(report.perception_exit, Some(PerceptionExit::SourceClosed));
}
