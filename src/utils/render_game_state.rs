//! Terminal-oriented Unicode board renderer.
//!
//! Draws the board boxed, rank 8 at the top, followed by a status line with
//! the side to move and its condition. Used by the `-H` flag.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Render the board and status line of `game_state`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_board(&game_state.board);
    out.push('\n');
    out.push_str(&format!(
        "{} to move: {}",
        game_state.current_player,
        game_state.condition()
    ));
    out
}

/// Render only the board grid with file letters underneath.
pub fn render_board(board: &Board) -> String {
    let (width, height) = board.size();
    let separator = format!("   +{}", "---+".repeat(width as usize));
    let mut out = String::new();

    for rank in (0..height).rev() {
        out.push_str(&separator);
        out.push('\n');
        out.push_str(&format!("{:>2} |", rank + 1));
        for file in 0..width {
            let symbol = board
                .get(Coordinate::new(file, rank))
                .map_or(' ', |piece| piece_to_unicode(piece.color, piece.kind));
            out.push(' ');
            out.push(symbol);
            out.push_str(" |");
        }
        out.push('\n');
    }

    out.push_str(&separator);
    out.push('\n');
    out.push_str("    ");
    for file in 0..width {
        out.push(' ');
        out.push(char::from(b'A' + file as u8));
        out.push_str("  ");
    }

    out.trim_end().to_owned()
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_board_renders_rank_eight_first() {
        let rendered = render_board(&Board::starting_position());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "   +---+---+---+---+---+---+---+---+");
        assert_eq!(lines[1], " 8 | ♜ | ♞ | ♝ | ♛ | ♚ | ♝ | ♞ | ♜ |");
        assert_eq!(lines[7], " 5 |   |   |   |   |   |   |   |   |");
        assert_eq!(lines[15], " 1 | ♖ | ♘ | ♗ | ♕ | ♔ | ♗ | ♘ | ♖ |");
        assert_eq!(lines[17], "     A   B   C   D   E   F   G   H");
    }

    #[test]
    fn status_line_reports_side_and_condition() {
        let game = GameState::new_game();
        let rendered = render_game_state(&game);
        assert!(rendered.ends_with("white to move: play"), "{rendered}");
    }
}
