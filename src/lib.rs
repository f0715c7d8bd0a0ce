//! Crate root module declarations for the chess arbiter.
//!
//! The arbiter decides whether a single requested move is legal on a given
//! board, plays it, and reports check, checkmate or stalemate for the side to
//! move next. This file exposes the board model, the per-piece move rules,
//! the validation and check machinery, and the text helpers used by the
//! command-line front end.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_move_validation;
}

pub mod utils {
    pub mod algebraic;
    pub mod logging;
    pub mod render_game_state;
    pub mod state_codec;
}
