//! Check, checkmate and stalemate detection.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::CheckmatePolicy;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{generate_moves, has_any_legal_move};
use crate::move_generation::legal_move_validation::can_attack;
use crate::moves::move_descriptions::MoveDescription;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Coordinate> {
    board.king_of(color).map(|king| king.location)
}

/// True when any piece of `attacker_color` threatens `square`.
pub fn is_square_attacked(board: &Board, square: Coordinate, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|piece| can_attack(board, piece, square))
}

pub fn attackers_to_square(board: &Board, square: Coordinate, attacker_color: Color) -> Vec<Piece> {
    board
        .pieces_of(attacker_color)
        .filter(|piece| can_attack(board, *piece, square))
        .collect()
}

/// True when `color` has a king and an opposing piece threatens it. A side
/// without a king is never in check.
#[inline]
pub fn in_check(board: &Board, color: Color) -> bool {
    let Some(king) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king, color.opposite())
}

/// Plays `description` on a copy of the board and reports whether the mover's
/// king is attacked afterwards.
pub fn leaves_king_in_check(board: &Board, description: &MoveDescription) -> bool {
    let Some(mover) = board.get(description.from) else {
        return false;
    };
    match apply_move(board, description) {
        Ok(after) => in_check(&after, mover.color),
        Err(_) => false,
    }
}

/// `color` is in check and cannot get out of it, as judged by `policy`.
pub fn checkmate(board: &Board, color: Color, policy: CheckmatePolicy) -> bool {
    if !in_check(board, color) {
        return false;
    }
    match policy {
        CheckmatePolicy::KingMobility => match board.king_of(color) {
            Some(king) => generate_moves(board, king).is_empty(),
            None => false,
        },
        CheckmatePolicy::AnyPiece => !has_any_legal_move(board, color),
    }
}

/// `color` is not in check but has no legal move at all.
pub fn stalemate(board: &Board, color: Color) -> bool {
    !in_check(board, color) && !has_any_legal_move(board, color)
}
