//! The per-piece validation pipeline and the threat probe.
//!
//! `validate_move` runs its checks in a fixed order and reports the first one
//! that fails:
//!
//! 1. the piece kind's shape allows the displacement
//! 2. the target differs from the current square
//! 3. the target lies on the board
//! 4. the target does not hold the opposing king
//! 5. the target does not hold a friendly piece
//! 6. sliding pieces have a clear path
//! 7. pawn rules, or castling rules for a king two-square move
//! 8. a king does not land on an attacked square
//!
//! `can_attack` answers the narrower question "does this piece threaten that
//! square": ordinary attack shapes only (pawns diagonally forward, kings one
//! step, never castling), so check detection cannot recurse back into the
//! castling rules.

use crate::errors::MoveRejection;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::first_obstruction;
use crate::moves::bishop_moves::bishop_shape_allows;
use crate::moves::king_moves::{
    castling_preconditions, is_castling_shape, king_attack_shape, king_shape_allows,
};
use crate::moves::knight_moves::knight_shape_allows;
use crate::moves::move_descriptions::SpecialMove;
use crate::moves::pawn_moves::{pawn_attack_shape, pawn_preconditions, pawn_shape_allows};
use crate::moves::queen_moves::queen_shape_allows;
use crate::moves::rook_moves::rook_shape_allows;

/// Geometric test for a displacement, ignoring occupancy.
#[inline]
pub fn shape_allows(kind: PieceKind, dx: i8, dy: i8) -> bool {
    match kind {
        PieceKind::Pawn => pawn_shape_allows(dx, dy),
        PieceKind::Knight => knight_shape_allows(dx, dy),
        PieceKind::Bishop => bishop_shape_allows(dx, dy),
        PieceKind::Rook => rook_shape_allows(dx, dy),
        PieceKind::Queen => queen_shape_allows(dx, dy),
        PieceKind::King => king_shape_allows(dx, dy),
    }
}

#[inline]
fn attack_shape_allows(piece: Piece, dx: i8, dy: i8) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attack_shape(piece.color, dx, dy),
        PieceKind::King => king_attack_shape(dx, dy),
        kind => shape_allows(kind, dx, dy),
    }
}

/// Whether `piece` may move to `target` on `board`, and what else the move
/// implies. Pure: the board is only read.
///
/// Only the king guards itself here (step 8). Whether other pieces may expose
/// their own king is decided by the controller's `SelfCheckPolicy`.
pub fn validate_move(
    board: &Board,
    piece: Piece,
    target: Coordinate,
) -> Result<SpecialMove, MoveRejection> {
    let (dx, dy) = piece.location.delta_to(target);

    if !shape_allows(piece.kind, dx, dy) {
        return Err(MoveRejection::ShapeNotAllowed {
            kind: piece.kind,
            dx,
            dy,
        });
    }

    if target == piece.location {
        return Err(MoveRejection::NullMove);
    }

    if !board.in_bounds(target) {
        return Err(MoveRejection::OutOfBounds);
    }

    let occupant = board.get(target);
    if matches!(occupant, Some(other) if other.kind == PieceKind::King && other.color != piece.color)
    {
        return Err(MoveRejection::TargetIsKing);
    }
    if matches!(occupant, Some(other) if other.color == piece.color) {
        return Err(MoveRejection::TargetIsFriendly);
    }

    if piece.kind.is_sliding() {
        if let Some(blocker) = first_obstruction(board, piece.location, target) {
            return Err(MoveRejection::PathObstructed(blocker));
        }
    }

    let special = match piece.kind {
        PieceKind::Pawn => pawn_preconditions(board, piece, target)?,
        PieceKind::King if is_castling_shape(dx, dy) => castling_preconditions(board, piece, target)?,
        _ => SpecialMove::None,
    };

    if piece.kind == PieceKind::King && king_lands_in_attack(board, piece, target) {
        return Err(MoveRejection::KingMovesIntoAttack);
    }

    Ok(special)
}

/// Whether `piece` threatens `target` on the current board.
pub fn can_attack(board: &Board, piece: Piece, target: Coordinate) -> bool {
    let (dx, dy) = piece.location.delta_to(target);
    if !attack_shape_allows(piece, dx, dy) || !board.in_bounds(target) {
        return false;
    }
    if matches!(board.get(target), Some(other) if other.color == piece.color) {
        return false;
    }
    !(piece.kind.is_sliding() && first_obstruction(board, piece.location, target).is_some())
}

/// Tests the king's destination with the king already standing there, so
/// that lines the king itself was blocking are seen and a captured piece no
/// longer shields the square.
fn king_lands_in_attack(board: &Board, king: Piece, target: Coordinate) -> bool {
    let mut after = board.clone();
    after.move_piece(king.location, target);
    is_square_attacked(&after, target, king.color.opposite())
}
