//! Text rendering of the store for debug logs.

use gridpilot_core::{Cell, Direction};

use crate::store::GameSnapshot;

fn head_glyph(heading: Option<Direction>) -> char {
    match heading {
        Some(Direction::DecreaseRow) => '^',
        Some(Direction::IncreaseRow) => 'v',
        Some(Direction::DecreaseCol) => '<',
        Some(Direction::IncreaseCol) => '>',
        None => '@',
    }
}

/// Draw `snapshot` as `rows` lines of `cols` characters.
///
/// `.` empty, `#` obstacle, `*` route, `F` target, and the agent as
/// `^ v < >` by heading or `@` without one. Where several apply, the
/// agent wins over the target, the target over the route, and the route
/// over obstacles. Cells outside `rows × cols` are ignored.
///
/// # Examples
///
/// ```
/// use gridpilot_core::{Cell, Direction};
/// use gridpilot_engine::{render_ascii, GameSnapshot};
/// use gridpilot_planner::Route;
///
/// let snapshot = GameSnapshot {
///     agent: Some(Cell::new(0, 0)),
///     heading: Some(Direction::IncreaseCol),
///     target: Some(Cell::new(0, 2)),
///     obstacles: [Cell::new(1, 1)].into_iter().collect(),
///     route: Route::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]),
///     ..GameSnapshot::default()
/// };
/// assert_eq!(render_ascii(&snapshot, 2, 3), ">*F\n.#.");
/// ```
pub fn render_ascii(snapshot: &GameSnapshot, rows: u32, cols: u32) -> String {
    let width = cols as usize;
    let mut board = vec!['.'; rows as usize * width];
    let mut paint = |cell: Cell, glyph: char| {
        if cell.row < rows && cell.col < cols {
            board[cell.row as usize * width + cell.col as usize] = glyph;
        }
    };

    for &cell in &snapshot.obstacles {
        paint(cell, '#');
    }
    if let Some(route) = &snapshot.route {
        for cell in route.cells() {
            paint(cell, '*');
        }
    }
    if let Some(target) = snapshot.target {
        paint(target, 'F');
    }
    if let Some(agent) = snapshot.agent {
        paint(agent, head_glyph(snapshot.heading));
    }

    let mut out = String::with_capacity(board.len() + rows as usize);
    for (i, line) in board.chunks(width.max(1)).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpilot_planner::Route;

    #[test]
    fn empty_snapshot_is_all_dots() {
        let board = render_ascii(&GameSnapshot::default(), 2, 4);
        assert_eq!(board, "....\n....");
    }

    #[test]
    fn headless_agent_is_at_sign() {
        let snapshot = GameSnapshot {
            agent: Some(Cell::new(1, 1)),
            ..GameSnapshot::default()
        };
        assert_eq!(render_ascii(&snapshot, 2, 2), "..\n.@");
    }

    #[test]
    fn wrapped_route_is_drawn_on_both_edges() {
        let snapshot = GameSnapshot {
            agent: Some(Cell::new(0, 0)),
            heading: Some(Direction::DecreaseCol),
            target: Some(Cell::new(0, 2)),
            route: Route::new(vec![Cell::new(0, 0), Cell::new(0, 3), Cell::new(0, 2)]),
            ..GameSnapshot::default()
        };
        assert_eq!(render_ascii(&snapshot, 1, 4), "<.F*");
    }

    #[test]
    fn off_grid_cells_are_ignored() {
        let snapshot = GameSnapshot {
            agent: Some(Cell::new(5, 5)),
            obstacles: [Cell::new(0, 9)].into_iter().collect(),
            ..GameSnapshot::default()
        };
        assert_eq!(render_ascii(&snapshot, 1, 2), "..");
    }
}
