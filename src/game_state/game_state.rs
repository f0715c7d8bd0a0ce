//! Move controller: one board, the side to move, and the rule policies.
//!
//! `validate` answers whether a requested move is legal without touching the
//! board. `apply_move` validates, commits, hands the turn to the opponent and
//! reports the opponent's resulting condition. Logging happens here and
//! nowhere below.

use tracing::{debug, error, info};

use crate::errors::{MoveError, MoveRejection, MoveResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{RuleConfig, SelfCheckPolicy};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_checks::{
    attackers_to_square, checkmate, in_check, king_square, leaves_king_in_check, stalemate,
};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::legal_move_validation::validate_move;
use crate::moves::move_descriptions::{GeneratedMove, MoveDescription, SpecialMove};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub rules: RuleConfig,
}

/// What a committed move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub description: MoveDescription,
    pub captured: Option<Piece>,
    /// Condition of the side now to move.
    pub condition: Condition,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Opening layout, white to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::starting_position(), Color::White)
    }

    pub fn from_board(board: Board, current_player: Color) -> Self {
        Self {
            board,
            current_player,
            rules: RuleConfig::default(),
        }
    }

    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Checks a move for the side to move without changing anything.
    pub fn validate(&self, from: Coordinate, to: Coordinate) -> MoveResult<MoveDescription> {
        if !self.board.in_bounds(from) {
            return Err(MoveError::NoPieceAtSource(from));
        }
        let piece = self
            .board
            .get(from)
            .ok_or(MoveError::NoPieceAtSource(from))?;

        if piece.color != self.current_player {
            return Err(MoveError::WrongPlayer {
                location: from,
                owner: piece.color,
                player: self.current_player,
            });
        }

        let special = validate_move(&self.board, piece, to)
            .map_err(|reason| MoveError::Rejected { from, to, reason })?;
        let description = MoveDescription::new(from, to, piece.kind, special);

        if self.rules.self_check == SelfCheckPolicy::Uniform
            && leaves_king_in_check(&self.board, &description)
        {
            return Err(MoveError::Rejected {
                from,
                to,
                reason: MoveRejection::ExposesOwnKing,
            });
        }

        Ok(description)
    }

    /// Validates and commits one move. On error nothing changes.
    pub fn apply_move(&mut self, from: Coordinate, to: Coordinate) -> MoveResult<MoveReport> {
        let description = self.validate(from, to).inspect_err(|err| {
            error!("{} cannot move {from}-{to}: {err}", self.current_player);
        })?;

        let captured = apply_move_in_place(&mut self.board, &description)?;
        debug!(
            "{} {} moved {from}-{to}",
            self.current_player, description.piece
        );
        log_side_effects(&description, captured);

        self.current_player = self.current_player.opposite();
        let condition = self.condition();
        if condition != Condition::Play {
            let checkers = king_square(&self.board, self.current_player)
                .map(|king| attackers_to_square(&self.board, king, self.current_player.opposite()))
                .unwrap_or_default();
            info!(
                "{} to move: {condition} ({} attacker(s))",
                self.current_player,
                checkers.len()
            );
        }

        Ok(MoveReport {
            description,
            captured,
            condition,
        })
    }

    /// Condition of the side to move.
    pub fn condition(&self) -> Condition {
        self.condition_for(self.current_player)
    }

    pub fn condition_for(&self, color: Color) -> Condition {
        if in_check(&self.board, color) {
            if checkmate(&self.board, color, self.rules.checkmate) {
                Condition::Checkmate
            } else {
                Condition::Check
            }
        } else if stalemate(&self.board, color) {
            Condition::Draw
        } else {
            Condition::Play
        }
    }

    /// Destinations available to the piece on `from` under the active
    /// self-check policy. Works for either color.
    pub fn legal_moves_from(&self, from: Coordinate) -> MoveResult<Vec<GeneratedMove>> {
        if !self.board.in_bounds(from) {
            return Err(MoveError::NoPieceAtSource(from));
        }
        let piece = self
            .board
            .get(from)
            .ok_or(MoveError::NoPieceAtSource(from))?;
        Ok(legal_moves(&self.board, piece, self.rules.self_check))
    }
}

fn log_side_effects(description: &MoveDescription, captured: Option<Piece>) {
    match description.special {
        SpecialMove::Castling { rook_from, rook_to } => {
            debug!("castling: rook {rook_from}-{rook_to}");
        }
        SpecialMove::EnPassant { captured: victim } => {
            debug!("en passant: removed pawn on {victim}");
        }
        SpecialMove::Promotion {
            promote_to,
            en_passant,
        } => {
            if let Some(victim) = en_passant {
                debug!("en passant: removed pawn on {victim}");
            }
            debug!("pawn on {} promoted to {promote_to}", description.to);
        }
        SpecialMove::DoubleStep {
            en_passant_exposed: true,
        } => {
            debug!("pawn on {} may be taken en passant", description.to);
        }
        SpecialMove::DoubleStep { .. } | SpecialMove::None => {}
    }
    if let Some(piece) = captured {
        debug!("captured {} {} on {}", piece.color, piece.kind, piece.location);
    }
}
