use gridpilot_core::{Cell, Direction};
use gridpilot_space::{EdgeBehavior, Grid, PixelGeometry, SpaceError};

#[test]
fn walking_a_full_lap_returns_to_start() {
    let grid = Grid::torus(5, 7).unwrap();
    let start = Cell::new(2, 3);

    for dir in Direction::ALL {
        let laps = if dir.is_vertical() { grid.rows() } else { grid.cols() };
        let mut cell = start;
        for _ in 0..laps {
            cell = grid.step(cell, dir).unwrap();
        }
        assert_eq!(cell, start, "{dir:?} lap did not close");
    }
}

#[test]
fn absorb_walk_stops_at_edge() {
    let grid = Grid::new(3, 3, EdgeBehavior::Absorb).unwrap();
    let mut cell = Cell::new(1, 1);
    let mut steps = 0;
    while let Some(next) = grid.step(cell, Direction::IncreaseCol) {
        cell = next;
        steps += 1;
    }
    assert_eq!(cell, Cell::new(1, 2));
    assert_eq!(steps, 1);
}

#[test]
fn default_board_matches_capture_geometry() {
    // 14 rows x 13 columns captured in a 465x494 region.
    let grid = Grid::torus(14, 13).unwrap();
    let geom = PixelGeometry::for_grid(&grid, 465, 494).unwrap();

    let head = geom.cell_at(240, 120).unwrap();
    assert!(grid.contains(head));
    assert_eq!(head, Cell::new(3, 6));
}

#[test]
fn error_messages_are_descriptive() {
    let err = Grid::torus(0, 3).unwrap_err();
    assert_eq!(err.to_string(), "grid must have at least one cell");

    let grid = Grid::torus(2, 2).unwrap();
    let err = grid.check(Cell::new(2, 0)).unwrap_err();
    assert!(matches!(err, SpaceError::CellOutOfBounds { .. }));
    assert!(err.to_string().contains("(2,0)"));
}
