//! King movement: one step in any direction, plus castling.

use crate::errors::MoveRejection;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{home_rank, KING_HOME_FILE};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_shared::squares_between;
use crate::moves::move_descriptions::SpecialMove;

/// Includes the null displacement; the pipeline rejects that separately.
#[inline]
pub const fn king_shape_allows(dx: i8, dy: i8) -> bool {
    (dx.abs() <= 1 && dy.abs() <= 1) || is_castling_shape(dx, dy)
}

#[inline]
pub const fn is_castling_shape(dx: i8, dy: i8) -> bool {
    dx.abs() == 2 && dy == 0
}

/// Squares a king threatens. Castling never threatens anything.
#[inline]
pub const fn king_attack_shape(dx: i8, dy: i8) -> bool {
    dx.abs() <= 1 && dy.abs() <= 1 && !(dx == 0 && dy == 0)
}

/// Castling rules for a king two-square move along its rank.
///
/// The king must stand on its home square and not be in check; a rook of its
/// color must stand on the corner of that side; everything between them must
/// be empty; and neither square the king crosses or lands on may be attacked.
/// The codec carries no move history, so pieces on their home squares count
/// as unmoved.
pub fn castling_preconditions(
    board: &Board,
    king: Piece,
    target: Coordinate,
) -> Result<SpecialMove, MoveRejection> {
    let (width, height) = board.size();
    let home = Coordinate::new(KING_HOME_FILE, home_rank(king.color, height));
    if king.location != home {
        return Err(MoveRejection::CastlingKingMoved);
    }

    if in_check(board, king.color) {
        return Err(MoveRejection::CastlingOutOfCheck);
    }

    let step = (target.file - king.location.file).signum();
    let rook_file = if step > 0 { width - 1 } else { 0 };
    let rook_from = Coordinate::new(rook_file, king.location.rank);
    match board.get(rook_from) {
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color => {}
        _ => return Err(MoveRejection::CastlingRookMissing(rook_from)),
    }

    if let Some(blocker) = squares_between(king.location, rook_from).find(|sq| !board.is_empty(*sq)) {
        return Err(MoveRejection::CastlingPathBlocked(blocker));
    }

    for distance in 1..=2 {
        let transit = king.location.offset(step * distance, 0);
        if !board.is_square_safe(transit, king.color) {
            return Err(MoveRejection::CastlingThroughAttack(transit));
        }
    }

    Ok(SpecialMove::Castling {
        rook_from,
        rook_to: king.location.offset(step, 0),
    })
}
