//! Move listing built on the validation pipeline.
//!
//! `generate_moves` is the per-piece listing: every cell that passes
//! `validate_move`, with only the king guarding itself. `legal_moves`
//! additionally drops moves that expose the mover's king, and is what the
//! terminal-state checks rely on. Lists are rebuilt on every call.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::SelfCheckPolicy;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::leaves_king_in_check;
use crate::move_generation::legal_move_validation::validate_move;
use crate::moves::move_descriptions::{GeneratedMove, MoveDescription};

pub fn generate_moves(board: &Board, piece: Piece) -> Vec<GeneratedMove> {
    board
        .coordinates()
        .filter_map(|to| {
            validate_move(board, piece, to)
                .ok()
                .map(|special| GeneratedMove {
                    to,
                    kind: piece.kind,
                    special,
                })
        })
        .collect()
}

/// Per-piece listing filtered by `policy`.
pub fn legal_moves(board: &Board, piece: Piece, policy: SelfCheckPolicy) -> Vec<GeneratedMove> {
    let mut moves = generate_moves(board, piece);
    if policy == SelfCheckPolicy::Uniform {
        moves.retain(|generated| {
            let description =
                MoveDescription::new(piece.location, generated.to, piece.kind, generated.special);
            !leaves_king_in_check(board, &description)
        });
    }
    moves
}

/// Every move available to `color` under `policy`.
pub fn generate_all_moves(
    board: &Board,
    color: Color,
    policy: SelfCheckPolicy,
) -> Vec<MoveDescription> {
    board
        .pieces_of(color)
        .flat_map(|piece| {
            legal_moves(board, piece, policy)
                .into_iter()
                .map(move |generated| {
                    MoveDescription::new(piece.location, generated.to, piece.kind, generated.special)
                })
        })
        .collect()
}

/// Whether `color` has any move that keeps its king safe.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|piece| !legal_moves(board, piece, SelfCheckPolicy::Uniform).is_empty())
}
