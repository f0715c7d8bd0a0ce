//! Board mutation for validated moves.
//!
//! No legality is checked here: the caller has already validated the move
//! and passes the resulting `MoveDescription`. The castling rook is moved
//! with the raw board primitive, without a second validation.

use crate::errors::{MoveError, MoveResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::{MoveDescription, SpecialMove};

/// Returns a new board with `description` played on it.
pub fn apply_move(board: &Board, description: &MoveDescription) -> MoveResult<Board> {
    let mut next = board.clone();
    apply_move_in_place(&mut next, description)?;
    Ok(next)
}

/// Plays `description` on `board`, returning the captured piece if any.
pub fn apply_move_in_place(board: &mut Board, description: &MoveDescription) -> MoveResult<Option<Piece>> {
    let mover = board.get(description.from).ok_or_else(|| {
        MoveError::InvalidState(format!("no piece on from-square {}", description.from))
    })?;
    if mover.kind != description.piece {
        return Err(MoveError::InvalidState(format!(
            "expected a {} on {}, found a {}",
            description.piece, description.from, mover.kind
        )));
    }

    let mut captured = board.move_piece(description.from, description.to);

    match description.special {
        SpecialMove::Castling { rook_from, rook_to } => {
            board.move_piece(rook_from, rook_to);
        }
        SpecialMove::EnPassant { captured: victim } => {
            captured = board.remove(victim);
        }
        SpecialMove::Promotion {
            promote_to,
            en_passant,
        } => {
            if let Some(victim) = en_passant {
                captured = board.remove(victim);
            }
            board.set_kind(description.to, promote_to);
        }
        SpecialMove::DoubleStep { .. } | SpecialMove::None => {}
    }

    Ok(captured)
}
