use engine::input::KeyCode;

use crate::difficulty::Difficulty;
use crate::shift::Direction;

/// What a key press means to the game. The mapping does not depend on the current screen;
/// screens ignore commands they have no use for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Instructions,
    Quit,
    SelectDifficulty(Difficulty),
    Shift(Direction),
}

impl Command {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up => Some(Self::Shift(Direction::Up)),
            KeyCode::Down => Some(Self::Shift(Direction::Down)),
            KeyCode::Left => Some(Self::Shift(Direction::Left)),
            KeyCode::Right => Some(Self::Shift(Direction::Right)),
            KeyCode::Char(byte) => match byte.to_ascii_lowercase() {
                b'n' => Some(Self::NewGame),
                b'i' => Some(Self::Instructions),
                b'q' => Some(Self::Quit),
                b'w' => Some(Self::Shift(Direction::Up)),
                b'a' => Some(Self::Shift(Direction::Left)),
                b's' => Some(Self::Shift(Direction::Down)),
                b'd' => Some(Self::Shift(Direction::Right)),
                digit => Difficulty::from_digit(digit).map(Self::SelectDifficulty),
            },
        }
    }
}

/// Parses a replay script: printable characters are typed as-is, `^ v < >` are the arrows.
pub fn parse_key_script(script: &str) -> Vec<KeyCode> {
    script
        .chars()
        .filter_map(|ch| match ch {
            '^' => Some(KeyCode::Up),
            'v' => Some(KeyCode::Down),
            '<' => Some(KeyCode::Left),
            '>' => Some(KeyCode::Right),
            other => KeyCode::from_char(other),
        })
        .collect()
}
