//! Line-oriented command parsing for the terminal driver.

use dragonradar_core::commands::PlayerCommand;
use dragonradar_core::enums::Direction;

/// A single instruction read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCommand {
    /// Forward a command to the engine.
    Player(PlayerCommand),
    /// Print the radar readings.
    Radar,
    /// Print the full state snapshot as JSON.
    Json,
    Quit,
}

/// Parse one input line. Returns `None` for blank or unrecognized input.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn parse_line(line: &str) -> Option<DriverCommand> {
    let word = line.trim().to_ascii_lowercase();
    let direction = match word.as_str() {
        "up" | "w" => Direction::Up,
        "down" | "s" => Direction::Down,
        "left" | "a" => Direction::Left,
        "right" | "d" => Direction::Right,
        "radar" | "r" => return Some(DriverCommand::Radar),
        "json" => return Some(DriverCommand::Json),
        "quit" | "q" | "exit" => return Some(DriverCommand::Quit),
        _ => return None,
    };
    Some(DriverCommand::Player(PlayerCommand::Move { direction }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(direction: Direction) -> Option<DriverCommand> {
        Some(DriverCommand::Player(PlayerCommand::Move { direction }))
    }

    #[test]
    fn test_directions_and_shortcuts() {
        assert_eq!(parse_line("up"), mv(Direction::Up));
        assert_eq!(parse_line("w"), mv(Direction::Up));
        assert_eq!(parse_line("down"), mv(Direction::Down));
        assert_eq!(parse_line("s"), mv(Direction::Down));
        assert_eq!(parse_line("left"), mv(Direction::Left));
        assert_eq!(parse_line("a"), mv(Direction::Left));
        assert_eq!(parse_line("right"), mv(Direction::Right));
        assert_eq!(parse_line("d"), mv(Direction::Right));
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(parse_line("  RIGHT \n"), mv(Direction::Right));
        assert_eq!(parse_line("Radar"), Some(DriverCommand::Radar));
    }

    #[test]
    fn test_driver_commands() {
        assert_eq!(parse_line("json"), Some(DriverCommand::Json));
        assert_eq!(parse_line("r"), Some(DriverCommand::Radar));
        assert_eq!(parse_line("quit"), Some(DriverCommand::Quit));
        assert_eq!(parse_line("q"), Some(DriverCommand::Quit));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("jump"), None);
        assert_eq!(parse_line("up up"), None);
    }
}
