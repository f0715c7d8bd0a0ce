//! Structured results of move validation.
//!
//! Validation never mutates anything. Whatever a legal move implies beyond
//! moving one piece (a rook hop, a pawn removed from beside the mover, a
//! promotion) is described by `SpecialMove` and carried out by
//! `legal_move_apply`.

use crate::game_state::chess_types::{Coordinate, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialMove {
    /// A quiet move or an ordinary capture.
    #[default]
    None,
    /// Pawn two-square advance. `en_passant_exposed` is set when an opposing
    /// pawn now stands beside the destination and may take it en passant.
    DoubleStep { en_passant_exposed: bool },
    /// King two-square move; the rook on `rook_from` hops to `rook_to`.
    Castling {
        rook_from: Coordinate,
        rook_to: Coordinate,
    },
    /// Diagonal pawn move onto an empty square removing the pawn on `captured`.
    EnPassant { captured: Coordinate },
    /// Pawn reaching its last rank; it becomes `promote_to`. `en_passant`
    /// holds the bypassed pawn when the move was an en-passant capture.
    Promotion {
        promote_to: PieceKind,
        en_passant: Option<Coordinate>,
    },
}

/// A validated move ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub from: Coordinate,
    pub to: Coordinate,
    pub piece: PieceKind,
    pub special: SpecialMove,
}

impl MoveDescription {
    #[inline]
    pub const fn new(from: Coordinate, to: Coordinate, piece: PieceKind, special: SpecialMove) -> Self {
        Self {
            from,
            to,
            piece,
            special,
        }
    }
}

/// A destination produced by move generation, tagged with the kind of the
/// piece that would move there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub to: Coordinate,
    pub kind: PieceKind,
    pub special: SpecialMove,
}
