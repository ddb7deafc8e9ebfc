//! Criterion micro-benchmarks for route planning.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridpilot_bench::{endpoint_pairs, scattered_obstacles, snake_body};
use gridpilot_core::{Cell, Direction};
use gridpilot_planner::{NoObstacles, RoutePlanner};
use gridpilot_space::Grid;

/// Benchmark: plan 100 routes on the default 14x13 board with no obstacles.
fn bench_plan_default_board_open(c: &mut Criterion) {
    let grid = Grid::torus(14, 13).unwrap();
    let pairs = endpoint_pairs(&grid, 100, 42);
    let planner = RoutePlanner::with_default_order(grid);

    c.bench_function("plan_14x13_open_x100", |b| {
        b.iter(|| {
            for &(start, goal) in &pairs {
                black_box(planner.plan(start, goal, &NoObstacles));
            }
        });
    });
}

/// Benchmark: plan around a 60-cell snake body on the default board.
fn bench_plan_default_board_snake(c: &mut Criterion) {
    let grid = Grid::torus(14, 13).unwrap();
    let head = Cell::new(7, 6);
    let body: std::collections::HashSet<Cell> = snake_body(&grid, head, Direction::IncreaseCol, 60)
        .into_iter()
        .collect();
    let planner = RoutePlanner::with_default_order(grid);
    let goal = Cell::new(0, 0);

    c.bench_function("plan_14x13_snake60", |b| {
        b.iter(|| black_box(planner.plan(black_box(head), goal, &body)));
    });
}

/// Benchmark: worst-case search on a 100x100 torus with 20% obstacles.
fn bench_plan_large_scattered(c: &mut Criterion) {
    let grid = Grid::torus(100, 100).unwrap();
    let start = Cell::new(0, 0);
    let goal = Cell::new(50, 50);
    let obstacles = scattered_obstacles(&grid, 200, 7, &[start, goal]);
    let planner = RoutePlanner::with_default_order(grid);

    c.bench_function("plan_100x100_scattered20", |b| {
        b.iter(|| black_box(planner.plan(start, goal, &obstacles)));
    });
}

/// Benchmark: full distance field on a 100x100 torus.
fn bench_distances_large(c: &mut Criterion) {
    let grid = Grid::torus(100, 100).unwrap();
    let planner = RoutePlanner::with_default_order(grid);

    c.bench_function("distances_100x100_open", |b| {
        b.iter(|| black_box(planner.distances_from(Cell::new(0, 0), &NoObstacles)));
    });
}

criterion_group!(
    benches,
    bench_plan_default_board_open,
    bench_plan_default_board_snake,
    bench_plan_large_scattered,
    bench_distances_large
);
criterion_main!(benches);
