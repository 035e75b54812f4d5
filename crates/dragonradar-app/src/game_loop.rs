//! Terminal game loop: reads one command per line, drives the engine and
//! redraws the board.
//!
//! Generic over reader and writer so tests can feed scripted input and
//! inspect the output.

use std::io::{BufRead, Write};

use log::{debug, info, warn};

use dragonradar_core::commands::PlayerCommand;
use dragonradar_sim::GameEngine;

use crate::config::DriverError;
use crate::input::{self, DriverCommand};
use crate::render;

const PROMPT: &str = "Move (up/down/left/right, radar, json, quit): ";

/// Run the loop until `quit` or end of input.
pub fn run<R, W>(engine: &mut GameEngine, input: R, out: &mut W) -> Result<(), DriverError>
where
    R: BufRead,
    W: Write,
{
    draw(engine, out)?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match input::parse_line(&line) {
            Some(DriverCommand::Quit) => {
                info!("quit requested");
                break;
            }
            Some(DriverCommand::Radar) => {
                write!(out, "{}", render::radar(engine.radar()))?;
            }
            Some(DriverCommand::Json) => {
                let snapshot = engine.take_snapshot();
                writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
            }
            Some(DriverCommand::Player(command)) => {
                if engine.is_game_over() {
                    writeln!(out, "{}", render::WIN_BANNER)?;
                } else {
                    apply(engine, command);
                    draw(engine, out)?;
                }
            }
            None if line.trim().is_empty() => {}
            None => {
                warn!("unrecognized input: {:?}", line.trim());
                writeln!(out, "Unknown command: {}", line.trim())?;
            }
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

fn apply(engine: &mut GameEngine, command: PlayerCommand) {
    match command {
        PlayerCommand::Move { direction } => {
            let outcome = engine.move_player(direction);
            debug!("{direction}: {outcome:?}");
        }
    }
}

fn draw<W: Write>(engine: &GameEngine, out: &mut W) -> Result<(), DriverError> {
    write!(out, "{}", render::board(engine))?;
    writeln!(out, "{}", render::status_line(engine))?;
    if engine.is_game_over() {
        writeln!(out, "{}", render::WIN_BANNER)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use dragonradar_core::difficulty::DifficultyProfile;
    use dragonradar_core::state::GameStateSnapshot;
    use dragonradar_core::types::GridPos;
    use dragonradar_procgen::Layout;

    /// Seven balls in a row left of the center (5,5): walking left collects
    /// them all.
    fn row_engine() -> GameEngine {
        let mut layout = Layout::empty(10).unwrap();
        for col in 0..5 {
            layout.place_ball(GridPos::new(5, col));
        }
        layout.place_ball(GridPos::new(0, 0));
        layout.place_ball(GridPos::new(9, 9));
        GameEngine::from_layout(layout, DifficultyProfile::default()).unwrap()
    }

    fn run_script(engine: &mut GameEngine, script: &str) -> String {
        let mut out = Vec::new();
        run(engine, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_moves_are_forwarded() {
        let mut engine = row_engine();
        let out = run_script(&mut engine, "left\na\n");
        assert_eq!(engine.player_position(), GridPos::new(5, 3));
        assert_eq!(engine.dragon_balls_collected(), 2);
        assert!(out.contains("Dragon balls: 2/7"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut engine = row_engine();
        run_script(&mut engine, "quit\nleft\n");
        assert_eq!(engine.player_position(), GridPos::new(5, 5));
    }

    #[test]
    fn test_unknown_input_is_ignored() {
        let mut engine = row_engine();
        let out = run_script(&mut engine, "jump\n\nleft\n");
        assert!(out.contains("Unknown command: jump"));
        assert_eq!(engine.player_position(), GridPos::new(5, 4));
    }

    #[test]
    fn test_json_prints_snapshot() {
        let mut engine = row_engine();
        let out = run_script(&mut engine, "left\njson\n");
        let start = out.find('{').unwrap();
        let end = out.rfind('}').unwrap();
        let snapshot: GameStateSnapshot = serde_json::from_str(&out[start..=end]).unwrap();
        assert_eq!(snapshot.player, GridPos::new(5, 4));
        assert_eq!(snapshot.dragon_balls_collected, 1);
        assert_eq!(snapshot.events.len(), 1);
    }

    #[test]
    fn test_radar_command() {
        let mut engine = row_engine();
        let out = run_script(&mut engine, "radar\n");
        assert!(out.contains("Ball 1: 5 LEFT"));
        assert!(out.contains("Ball 7: 4 RIGHT, 4 DOWN"));
    }

    #[test]
    fn test_moves_stop_after_win() {
        let mut layout = Layout::empty(10).unwrap();
        for col in 0..5 {
            layout.place_ball(GridPos::new(5, col));
        }
        layout.place_ball(GridPos::new(5, 6));
        layout.place_ball(GridPos::new(5, 7));
        let mut engine = GameEngine::from_layout(layout, DifficultyProfile::default()).unwrap();

        let out = run_script(&mut engine, "d\nd\na\na\na\na\na\na\na\nright\n");
        assert!(engine.is_game_over());
        assert_eq!(engine.player_position(), GridPos::new(5, 0));
        assert!(out.contains(render::WIN_BANNER));
    }
}
