//! Line geometry shared by the sliding pieces and castling.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Coordinate;

/// True when `a` and `b` share a file, a rank, or a diagonal.
#[inline]
pub fn is_aligned(a: Coordinate, b: Coordinate) -> bool {
    let (dx, dy) = a.delta_to(b);
    dx == 0 || dy == 0 || dx.abs() == dy.abs()
}

/// Squares strictly between `from` and `to` along their shared line, walking
/// away from `from`. Empty when the two are adjacent, equal, or not aligned.
pub fn squares_between(from: Coordinate, to: Coordinate) -> impl Iterator<Item = Coordinate> {
    let (dx, dy) = from.delta_to(to);
    let steps = if is_aligned(from, to) {
        dx.abs().max(dy.abs()) - 1
    } else {
        0
    };
    let (step_file, step_rank) = (dx.signum(), dy.signum());
    (1..=steps.max(0)).map(move |n| from.offset(step_file * n, step_rank * n))
}

/// First occupied square strictly between `from` and `to`, if any.
pub fn first_obstruction(board: &Board, from: Coordinate, to: Coordinate) -> Option<Coordinate> {
    squares_between(from, to).find(|square| !board.is_empty(*square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn squares_between_walks_lines_and_diagonals() {
        let between: Vec<Coordinate> =
            squares_between(Coordinate::new(0, 0), Coordinate::new(3, 3)).collect();
        assert_eq!(between, vec![Coordinate::new(1, 1), Coordinate::new(2, 2)]);

        let between: Vec<Coordinate> =
            squares_between(Coordinate::new(7, 4), Coordinate::new(4, 4)).collect();
        assert_eq!(between, vec![Coordinate::new(6, 4), Coordinate::new(5, 4)]);
    }

    #[test]
    fn squares_between_is_empty_for_neighbours_and_knight_jumps() {
        assert_eq!(
            squares_between(Coordinate::new(3, 3), Coordinate::new(4, 4)).count(),
            0
        );
        assert_eq!(
            squares_between(Coordinate::new(3, 3), Coordinate::new(4, 5)).count(),
            0
        );
        assert_eq!(
            squares_between(Coordinate::new(3, 3), Coordinate::new(3, 3)).count(),
            0
        );
    }

    #[test]
    fn first_obstruction_finds_nearest_blocker() {
        let mut board = Board::default();
        board.place(Coordinate::new(0, 5), PieceKind::Pawn, Color::Black);
        board.place(Coordinate::new(0, 3), PieceKind::Pawn, Color::White);
        assert_eq!(
            first_obstruction(&board, Coordinate::new(0, 0), Coordinate::new(0, 7)),
            Some(Coordinate::new(0, 3))
        );
        assert_eq!(
            first_obstruction(&board, Coordinate::new(0, 0), Coordinate::new(0, 3)),
            None
        );
    }
}
