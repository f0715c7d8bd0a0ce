//! Encoded board state.
//!
//! A state is 64 tokens in row-major order starting at rank 0. Each token is
//! empty or a color prefix (`w`/`b`) followed by a kind suffix (`p`, `r`, `b`,
//! `q`, `ki`, `kn`). On the command line the tokens are joined with commas and
//! wrapped in brackets: `[wr,wkn,...,br]`.

use tracing::debug;

use crate::errors::{InputError, InputResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{STANDARD_HEIGHT, STANDARD_WIDTH};
use crate::game_state::chess_types::{Color, PieceKind, ALL_PIECE_KINDS};

pub const CELL_COUNT: usize = STANDARD_WIDTH as usize * STANDARD_HEIGHT as usize;

pub fn piece_tag(color: Color, kind: PieceKind) -> &'static str {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => "wp",
        (Color::White, PieceKind::Knight) => "wkn",
        (Color::White, PieceKind::Bishop) => "wb",
        (Color::White, PieceKind::Rook) => "wr",
        (Color::White, PieceKind::Queen) => "wq",
        (Color::White, PieceKind::King) => "wki",
        (Color::Black, PieceKind::Pawn) => "bp",
        (Color::Black, PieceKind::Knight) => "bkn",
        (Color::Black, PieceKind::Bishop) => "bb",
        (Color::Black, PieceKind::Rook) => "br",
        (Color::Black, PieceKind::Queen) => "bq",
        (Color::Black, PieceKind::King) => "bki",
    }
}

/// Inverse of `piece_tag`.
pub fn parse_tag(tag: &str) -> Option<(Color, PieceKind)> {
    let color = match tag.get(..1)? {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return None,
    };
    ALL_PIECE_KINDS
        .into_iter()
        .find(|kind| piece_tag(color, *kind) == tag)
        .map(|kind| (color, kind))
}

/// Builds a board from cell tokens. No tokens at all yields the opening
/// layout; otherwise exactly 64 are required.
pub fn decode_cells(tokens: &[&str]) -> InputResult<Board> {
    if tokens.is_empty() {
        debug!("empty state, using the opening layout");
        return Ok(Board::starting_position());
    }
    if tokens.len() != CELL_COUNT {
        return Err(InputError::WrongCellCount {
            expected: CELL_COUNT,
            found: tokens.len(),
        });
    }

    let cells = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            if token.is_empty() {
                Ok(None)
            } else {
                parse_tag(token).map(Some).ok_or_else(|| InputError::InvalidTag {
                    index,
                    tag: (*token).to_owned(),
                })
            }
        })
        .collect::<InputResult<Vec<_>>>()?;

    let board = Board::from_cells(STANDARD_WIDTH, STANDARD_HEIGHT, &cells);
    debug!("decoded {} pieces from {} cells", board.pieces().count(), cells.len());
    Ok(board)
}

pub fn encode_cells(board: &Board) -> Vec<&'static str> {
    board
        .cells()
        .into_iter()
        .map(|cell| cell.map_or("", |(color, kind)| piece_tag(color, kind)))
        .collect()
}

/// Parses the bracketed form. Quotes and whitespace are ignored; an empty
/// string or `[]` yields the opening layout.
pub fn parse_state(text: &str) -> InputResult<Board> {
    let cleaned: String = text
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '\'' && *ch != '"')
        .collect();
    if cleaned.is_empty() {
        return decode_cells(&[]);
    }

    let inner = cleaned
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| InputError::InvalidStateForm(text.to_owned()))?;
    if inner.is_empty() {
        return decode_cells(&[]);
    }

    let tokens: Vec<&str> = inner.split(',').collect();
    decode_cells(&tokens)
}

pub fn format_state(board: &Board) -> String {
    format!("[{}]", encode_cells(board).join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Coordinate;

    const OPENING: &str = "[wr,wkn,wb,wq,wki,wb,wkn,wr,wp,wp,wp,wp,wp,wp,wp,wp,\
,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,\
bp,bp,bp,bp,bp,bp,bp,bp,br,bkn,bb,bq,bki,bb,bkn,br]";

    #[test]
    fn tags_cover_every_piece() {
        for color in [Color::White, Color::Black] {
            for kind in ALL_PIECE_KINDS {
                let tag = piece_tag(color, kind);
                assert_eq!(parse_tag(tag), Some((color, kind)), "tag {tag}");
            }
        }
        for bad in ["", "w", "x", "wk", "wking", "Wp", "bn"] {
            assert_eq!(parse_tag(bad), None, "'{bad}' should not parse");
        }
    }

    #[test]
    fn opening_state_matches_starting_position() {
        assert_eq!(format_state(&Board::starting_position()), OPENING);
        let board = parse_state(OPENING).expect("opening state should parse");
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn empty_input_yields_opening_layout() {
        for text in ["", "[]", "  ", "'[]'"] {
            let board = parse_state(text).expect("empty state should parse");
            assert_eq!(board, Board::starting_position(), "input '{text}'");
        }
    }

    #[test]
    fn quotes_and_spaces_are_ignored() {
        let spaced = OPENING.replace(',', ", ");
        let quoted = format!("'{spaced}'");
        let board = parse_state(&quoted).expect("quoted state should parse");
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn token_index_maps_to_file_and_rank() {
        let mut tokens = vec![""; CELL_COUNT];
        tokens[12] = "bq";
        tokens[63] = "wki";
        let board = decode_cells(&tokens).expect("sparse state should decode");
        let queen = board
            .get(Coordinate::new(4, 1))
            .expect("index 12 should be e2");
        assert_eq!((queen.color, queen.kind), (Color::Black, PieceKind::Queen));
        assert!(board.get(Coordinate::new(7, 7)).is_some());
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn encoding_round_trips_arbitrary_layouts() {
        let mut tokens = vec![""; CELL_COUNT];
        for (index, tag) in ["wki", "bkn", "wp", "bq", "wr", "bb"].iter().enumerate() {
            tokens[index * 11] = *tag;
        }
        let board = decode_cells(&tokens).expect("layout should decode");
        assert_eq!(encode_cells(&board), tokens);
    }

    #[test]
    fn malformed_states_are_rejected() {
        assert!(matches!(
            parse_state("[wp,bp]"),
            Err(InputError::WrongCellCount {
                expected: 64,
                found: 2
            })
        ));
        assert!(matches!(
            parse_state("wp,bp"),
            Err(InputError::InvalidStateForm(_))
        ));

        let mut tokens = vec![""; CELL_COUNT];
        tokens[5] = "wx";
        let text = format!("[{}]", tokens.join(","));
        match parse_state(&text) {
            Err(InputError::InvalidTag { index, tag }) => {
                assert_eq!(index, 5);
                assert_eq!(tag, "wx");
            }
            other => panic!("expected an invalid tag error, got {other:?}"),
        }
    }
}
