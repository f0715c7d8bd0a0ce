//! Square names and move text.
//!
//! Parses human-readable squares (`e4`, case-insensitive), `FROM-TO` move
//! text such as `A2-A4`, and player names.

use crate::errors::{InputError, InputResult};
use crate::game_state::chess_rules::{STANDARD_HEIGHT, STANDARD_WIDTH};
use crate::game_state::chess_types::{Color, Coordinate};

/// Parse a square name (for example: "e4" or "E4") on the standard board.
#[inline]
pub fn parse_square(square: &str) -> Option<Coordinate> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..b'a' + STANDARD_WIDTH as u8).contains(&file) {
        return None;
    }
    if !(b'1'..b'1' + STANDARD_HEIGHT as u8).contains(&rank) {
        return None;
    }

    Some(Coordinate::new((file - b'a') as i8, (rank - b'1') as i8))
}

/// Parse `FROM-TO` move text. Surrounding whitespace is ignored.
pub fn parse_move_text(text: &str) -> InputResult<(Coordinate, Coordinate)> {
    let invalid = || InputError::InvalidMove(text.to_owned());
    let (from, to) = text.trim().split_once('-').ok_or_else(invalid)?;
    let from = parse_square(from).ok_or_else(invalid)?;
    let to = parse_square(to).ok_or_else(invalid)?;
    Ok((from, to))
}

/// Parse a player name: `WHITE`, `BLACK`, `W` or `B`, any case.
pub fn parse_player(text: &str) -> InputResult<Color> {
    match text.trim().to_ascii_uppercase().as_str() {
        "WHITE" | "W" => Ok(Color::White),
        "BLACK" | "B" => Ok(Color::Black),
        _ => Err(InputError::InvalidPlayer(text.to_owned())),
    }
}
