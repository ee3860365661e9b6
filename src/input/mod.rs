//! Turns raw lines typed by a player into commands for the turn controller.
//!
//! Every position on the board has two keys: a digit from `1` to `9` and a
//! letter from the `QWE/ASD/ZXC` block of a keyboard, both laid out in
//! row-major order so the keys mirror the board.

use itertools::Itertools;

use crate::{Board, Coordinates};

pub const DIGIT_KEYS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];
pub const LETTER_KEYS: [char; 9] = ['Q', 'W', 'E', 'A', 'S', 'D', 'Z', 'X', 'C'];
pub const HELP_KEYS: [char; 2] = ['?', 'H'];
pub const QUIT_KEY: char = 'K';
pub const DECLINE_KEY: char = 'N';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Coordinates),
    Help,
    Quit,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RematchAnswer {
    Accept,
    Decline,
    Quit,
}

/// Parses a move prompt answer. Empty input resolves to `default` if there
/// is one.
pub fn parse_command(input: &str, default: Option<Coordinates>) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return default.map(Command::Place).unwrap_or(Command::Invalid);
    }

    let Some(key) = single_key(input) else {
        return Command::Invalid;
    };

    if key == QUIT_KEY {
        Command::Quit
    } else if HELP_KEYS.contains(&key) {
        Command::Help
    } else {
        key_to_coordinates(key)
            .map(Command::Place)
            .unwrap_or(Command::Invalid)
    }
}

/// Parses the answer to "Play Again?". Only `N` declines.
pub fn parse_rematch(input: &str) -> RematchAnswer {
    match single_key(input.trim()) {
        Some(QUIT_KEY) => RematchAnswer::Quit,
        Some(DECLINE_KEY) => RematchAnswer::Decline,
        _ => RematchAnswer::Accept,
    }
}

/// Maps a digit or letter key to its board position.
pub fn key_to_coordinates(key: char) -> Option<Coordinates> {
    let key = key.to_ascii_uppercase();
    let index = DIGIT_KEYS
        .iter()
        .position(|k| *k == key)
        .or_else(|| LETTER_KEYS.iter().position(|k| *k == key))?;
    Board::coordinates().nth(index)
}

/// Help text listing the digit keys as a 3x3 grid. The digits are always
/// shown, even to players using the letter keys.
pub fn help_lines() -> Vec<String> {
    let mut lines = vec![format!("Use the following keys or '{}' to exit: ", QUIT_KEY)];
    lines.extend(
        DIGIT_KEYS
            .chunks(Board::SIZE.1)
            .map(|row| row.iter().map(|key| format!(" {} ", key)).join("")),
    );
    lines
}

fn single_key(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Some(key.to_ascii_uppercase()),
        _ => None,
    }
}
