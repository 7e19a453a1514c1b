//! Keyboard and mouse decoding
//!
//! Prefers `KeyboardEvent.key`; falls back to the legacy `keyCode` values
//! (37-40 arrows, 32 space) for browsers that report an empty or
//! unidentified key name.

use crate::sim::{Command, Direction};

pub const KEY_CODE_SPACE: u32 = 32;
pub const KEY_CODE_LEFT: u32 = 37;
pub const KEY_CODE_UP: u32 = 38;
pub const KEY_CODE_RIGHT: u32 = 39;
pub const KEY_CODE_DOWN: u32 = 40;

/// Map a key press to a command, if it is one the game uses
pub fn command_for_key(key: &str, key_code: u32) -> Option<Command> {
    let by_name = match key {
        "ArrowLeft" | "Left" => Some(Command::Steer(Direction::Left)),
        "ArrowUp" | "Up" => Some(Command::Steer(Direction::Up)),
        "ArrowRight" | "Right" => Some(Command::Steer(Direction::Right)),
        "ArrowDown" | "Down" => Some(Command::Steer(Direction::Down)),
        " " | "Spacebar" => Some(Command::Restart),
        _ => None,
    };
    by_name.or(match key_code {
        KEY_CODE_LEFT => Some(Command::Steer(Direction::Left)),
        KEY_CODE_UP => Some(Command::Steer(Direction::Up)),
        KEY_CODE_RIGHT => Some(Command::Steer(Direction::Right)),
        KEY_CODE_DOWN => Some(Command::Steer(Direction::Down)),
        KEY_CODE_SPACE => Some(Command::Restart),
        _ => None,
    })
}

/// A click anywhere on the canvas starts the game
#[inline]
pub fn command_for_click() -> Command {
    Command::Start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_names() {
        assert_eq!(
            command_for_key("ArrowLeft", 0),
            Some(Command::Steer(Direction::Left))
        );
        assert_eq!(
            command_for_key("ArrowUp", 0),
            Some(Command::Steer(Direction::Up))
        );
        assert_eq!(
            command_for_key("ArrowRight", 0),
            Some(Command::Steer(Direction::Right))
        );
        assert_eq!(
            command_for_key("ArrowDown", 0),
            Some(Command::Steer(Direction::Down))
        );
        assert_eq!(command_for_key(" ", 0), Some(Command::Restart));
    }

    #[test]
    fn test_legacy_key_codes() {
        assert_eq!(
            command_for_key("Unidentified", 37),
            Some(Command::Steer(Direction::Left))
        );
        assert_eq!(command_for_key("", 38), Some(Command::Steer(Direction::Up)));
        assert_eq!(command_for_key("", 39), Some(Command::Steer(Direction::Right)));
        assert_eq!(command_for_key("", 40), Some(Command::Steer(Direction::Down)));
        assert_eq!(command_for_key("", 32), Some(Command::Restart));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(command_for_key("a", 65), None);
        assert_eq!(command_for_key("Enter", 13), None);
        assert_eq!(command_for_key("Escape", 27), None);
    }

    #[test]
    fn test_click_starts() {
        assert_eq!(command_for_click(), Command::Start);
    }
}
