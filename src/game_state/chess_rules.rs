//! Canonical rule constants and the configurable rule policies.
//!
//! Board extents are stored on the `Board` itself; the constants here are the
//! standard values used to build it and the fixed files/ranks the opening
//! layout and castling refer to.

use clap::ValueEnum;

use crate::game_state::chess_types::{Color, PieceKind};

pub const STANDARD_WIDTH: i8 = 8;
pub const STANDARD_HEIGHT: i8 = 8;

/// File the king starts on; castling is only available from here.
pub const KING_HOME_FILE: i8 = 4;

/// Back-rank piece order from file a to file h.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Rank holding a color's king and rooks at the start of the game.
#[inline]
pub const fn home_rank(color: Color, height: i8) -> i8 {
    match color {
        Color::White => 0,
        Color::Black => height - 1,
    }
}

/// Rank a color's pawns start on; the two-square advance is only legal here.
#[inline]
pub const fn pawn_start_rank(color: Color, height: i8) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => height - 2,
    }
}

/// Rank on which a color's pawn promotes.
#[inline]
pub const fn promotion_rank(color: Color, height: i8) -> i8 {
    match color {
        Color::White => height - 1,
        Color::Black => 0,
    }
}

/// Who guards against a move leaving its own king attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SelfCheckPolicy {
    /// Only the king refuses to step into attack; other pieces may expose it.
    KingOnly,
    /// Every move is tried on a copy of the board and refused if the mover's
    /// king is attacked afterwards.
    #[default]
    Uniform,
}

/// How checkmate is decided once a side is in check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CheckmatePolicy {
    /// Mate when the checked king itself has no move.
    #[default]
    KingMobility,
    /// Mate when no piece of the checked side has a legal move.
    AnyPiece,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleConfig {
    pub self_check: SelfCheckPolicy,
    pub checkmate: CheckmatePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_mirror_between_colors() {
        assert_eq!(home_rank(Color::White, 8), 0);
        assert_eq!(home_rank(Color::Black, 8), 7);
        assert_eq!(pawn_start_rank(Color::White, 8), 1);
        assert_eq!(pawn_start_rank(Color::Black, 8), 6);
        assert_eq!(promotion_rank(Color::White, 8), 7);
        assert_eq!(promotion_rank(Color::Black, 8), 0);
    }

    #[test]
    fn default_rules_enforce_self_check_for_every_piece() {
        let rules = RuleConfig::default();
        assert_eq!(rules.self_check, SelfCheckPolicy::Uniform);
        assert_eq!(rules.checkmate, CheckmatePolicy::KingMobility);
    }

    #[test]
    fn policies_parse_from_flag_values() {
        assert_eq!(
            SelfCheckPolicy::from_str("king-only", false).expect("king-only"),
            SelfCheckPolicy::KingOnly
        );
        assert_eq!(
            CheckmatePolicy::from_str("any-piece", false).expect("any-piece"),
            CheckmatePolicy::AnyPiece
        );
    }
}
