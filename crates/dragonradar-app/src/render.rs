//! Text rendering of the board, counters and radar.

use std::fmt::Write;

use dragonradar_core::enums::CellStatus;
use dragonradar_core::state::RadarReport;
use dragonradar_core::types::GridPos;
use dragonradar_sim::GameEngine;

pub const WIN_BANNER: &str = "You win! All dragon balls collected.";

/// Character drawn for a cell. Collected balls render as empty ground.
pub fn cell_char(status: CellStatus) -> char {
    match status {
        CellStatus::Ball => 'B',
        CellStatus::Enemy => 'E',
        CellStatus::Obstacle => '#',
        CellStatus::Empty | CellStatus::Collected => '.',
    }
}

/// Board as text, one line per row, cells separated by a space.
pub fn board(engine: &GameEngine) -> String {
    let size = engine.grid_size();
    let mut out = String::with_capacity(size * (size * 2 + 1));
    for row in 0..size {
        let line = (0..size)
            .map(|col| {
                let pos = GridPos::new(row, col);
                if engine.should_render_player(pos) {
                    'P'
                } else {
                    cell_char(engine.grid_content_at(pos))
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Energy and collected counters.
pub fn status_line(engine: &GameEngine) -> String {
    format!(
        "Energy: {} | Dragon balls: {}/{}",
        engine.player_energy(),
        engine.dragon_balls_collected(),
        engine.dragon_ball_count()
    )
}

/// One line per ball: distance and heading, or a collected marker.
pub fn radar(report: &RadarReport) -> String {
    let mut out = String::new();
    for (id, r) in &report.readings {
        if r.collected {
            let _ = writeln!(out, "Ball {id}: collected");
            continue;
        }
        let mut headings = Vec::new();
        if let Some(dir) = r.col_direction {
            headings.push(format!("{} {}", r.col_distance, dir));
        }
        if let Some(dir) = r.row_direction {
            headings.push(format!("{} {}", r.row_distance, dir));
        }
        if headings.is_empty() {
            headings.push("here".to_string());
        }
        let _ = writeln!(out, "Ball {id}: {}", headings.join(", "));
    }
    if let Some((id, nearest)) = report.nearest_uncollected() {
        let _ = writeln!(out, "Nearest: ball {id} ({} steps)", nearest.manhattan());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use dragonradar_core::difficulty::DifficultyProfile;
    use dragonradar_core::enums::Direction;
    use dragonradar_procgen::Layout;

    /// 10x10 engine with balls along row 0, an enemy at (5,6) and an
    /// obstacle at (4,5). Player starts at (5,5).
    fn fixed_engine() -> GameEngine {
        let mut layout = Layout::empty(10).unwrap();
        for col in 0..7 {
            layout.place_ball(GridPos::new(0, col));
        }
        layout.place_enemy(GridPos::new(5, 6));
        layout.place_obstacle(GridPos::new(4, 5));
        GameEngine::from_layout(layout, DifficultyProfile::default()).unwrap()
    }

    #[test]
    fn test_cell_chars() {
        assert_eq!(cell_char(CellStatus::Empty), '.');
        assert_eq!(cell_char(CellStatus::Ball), 'B');
        assert_eq!(cell_char(CellStatus::Enemy), 'E');
        assert_eq!(cell_char(CellStatus::Obstacle), '#');
        assert_eq!(cell_char(CellStatus::Collected), '.');
    }

    #[test]
    fn test_board_layout() {
        let engine = fixed_engine();
        let text = board(&engine);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "B B B B B B B . . .");
        assert_eq!(lines[4], ". . . . . # . . . .");
        assert_eq!(lines[5], ". . . . . P E . . .");
        assert_eq!(lines[9], ". . . . . . . . . .");
    }

    #[test]
    fn test_player_drawn_over_cell() {
        let mut engine = fixed_engine();
        engine.move_player(Direction::Right);
        let text = board(&engine);
        let row5 = text.lines().nth(5).unwrap();
        assert_eq!(row5, ". . . . . . P . . .");
    }

    #[test]
    fn test_status_line() {
        let mut engine = fixed_engine();
        assert_eq!(status_line(&engine), "Energy: 100 | Dragon balls: 0/7");
        engine.move_player(Direction::Right);
        assert_eq!(status_line(&engine), "Energy: 98 | Dragon balls: 0/7");
    }

    #[test]
    fn test_radar_text() {
        let engine = fixed_engine();
        let text = radar(engine.radar());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Ball 1: 5 LEFT, 5 UP");
        assert_eq!(lines[5], "Ball 6: 5 UP");
        assert_eq!(lines[6], "Ball 7: 1 RIGHT, 5 UP");
        assert_eq!(lines[7], "Nearest: ball 6 (5 steps)");
    }

    #[test]
    fn test_radar_marks_collected() {
        let mut layout = Layout::empty(10).unwrap();
        layout.place_ball(GridPos::new(5, 4));
        for col in 0..6 {
            layout.place_ball(GridPos::new(0, col));
        }
        let mut engine = GameEngine::from_layout(layout, DifficultyProfile::default()).unwrap();
        engine.move_player(Direction::Left);
        let text = radar(engine.radar());
        assert_eq!(text.lines().next(), Some("Ball 1: collected"));
    }
}
