//! Pawn movement: shape, attack shape, and the pawn-only preconditions.
//!
//! The shape is color-blind (one or two squares along the file, or one square
//! diagonally); direction, blocking, the starting-rank rule, captures,
//! en passant and promotion are all settled in `pawn_preconditions`.

use crate::errors::MoveRejection;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_start_rank, promotion_rank};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::SpecialMove;

#[inline]
pub const fn pawn_shape_allows(dx: i8, dy: i8) -> bool {
    (dx == 0 && (dy.abs() == 1 || dy.abs() == 2)) || (dx.abs() == 1 && dy.abs() == 1)
}

/// Squares a pawn threatens: one step diagonally forward.
#[inline]
pub const fn pawn_attack_shape(color: Color, dx: i8, dy: i8) -> bool {
    dx.abs() == 1 && dy == color.forward()
}

/// Pawn-specific rules for a move that already passed the shared checks
/// (shape, bounds, no king or friendly piece on the target).
pub fn pawn_preconditions(
    board: &Board,
    pawn: Piece,
    target: Coordinate,
) -> Result<SpecialMove, MoveRejection> {
    let (dx, dy) = pawn.location.delta_to(target);
    let forward = pawn.color.forward();
    let (_, height) = board.size();

    if dy.signum() != forward {
        return Err(MoveRejection::PawnWrongDirection);
    }

    let special = if dx == 0 {
        if dy.abs() == 1 {
            if !board.is_empty(target) {
                return Err(MoveRejection::PawnAdvanceBlocked(target));
            }
            SpecialMove::None
        } else {
            if pawn.location.rank != pawn_start_rank(pawn.color, height) {
                return Err(MoveRejection::PawnNotOnStartingRank);
            }
            let skipped = pawn.location.offset(0, forward);
            for square in [skipped, target] {
                if !board.is_empty(square) {
                    return Err(MoveRejection::PawnAdvanceBlocked(square));
                }
            }
            SpecialMove::DoubleStep {
                en_passant_exposed: en_passant_exposed(board, pawn.color, target),
            }
        }
    } else if board.get(target).is_some() {
        // Only an opposing non-king piece can be left here by the shared checks.
        SpecialMove::None
    } else {
        let beside = Coordinate::new(target.file, pawn.location.rank);
        match board.get(beside) {
            Some(victim) if victim.kind == PieceKind::Pawn && victim.color != pawn.color => {
                SpecialMove::EnPassant { captured: beside }
            }
            _ => return Err(MoveRejection::PawnNoCaptureTarget),
        }
    };

    if target.rank == promotion_rank(pawn.color, height) {
        let en_passant = match special {
            SpecialMove::EnPassant { captured } => Some(captured),
            _ => None,
        };
        return Ok(SpecialMove::Promotion {
            promote_to: PieceKind::Queen,
            en_passant,
        });
    }

    Ok(special)
}

/// Whether an opposing pawn stands directly beside `landing`, able to take a
/// pawn that just double-stepped there.
fn en_passant_exposed(board: &Board, color: Color, landing: Coordinate) -> bool {
    [-1, 1].into_iter().any(|side| {
        let beside = landing.offset(side, 0);
        board.in_bounds(beside)
            && matches!(
                board.get(beside),
                Some(piece) if piece.kind == PieceKind::Pawn && piece.color != color
            )
    })
}
