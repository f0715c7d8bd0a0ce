//! Core value types shared by the board, the move rules, and the controller.
//!
//! Everything here is `Copy`: pieces are small values owned by the board's
//! cells, and coordinates are plain (file, rank) pairs.

use std::fmt;

/// Side owning a piece, and the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction a pawn of this color advances in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Bishop, Rook and Queen move along lines and can be blocked.
    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// A (file, rank) pair. Signed so that displacements and off-board probes can
/// be expressed without wrapping; only coordinates inside the board extents
/// may be used to address a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub file: i8,
    pub rank: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Self {
        Self {
            file: self.file + d_file,
            rank: self.rank + d_rank,
        }
    }

    /// Displacement `(dx, dy)` needed to travel from `self` to `target`.
    #[inline]
    pub const fn delta_to(self, target: Coordinate) -> (i8, i8) {
        (target.file - self.file, target.rank - self.rank)
    }
}

impl From<(i8, i8)> for Coordinate {
    fn from((file, rank): (i8, i8)) -> Self {
        Self::new(file, rank)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.file) && self.rank >= 0 {
            write!(f, "{}{}", char::from(b'a' + self.file as u8), self.rank + 1)
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

/// A piece standing on the board. The board owns it; `location` always
/// matches the cell that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub location: Coordinate,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, location: Coordinate) -> Self {
        Self {
            kind,
            color,
            location,
        }
    }
}

/// Game status reported after a move, for the side now to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Play,
    Check,
    Checkmate,
    Draw,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Condition::Play => "play",
            Condition::Check => "check",
            Condition::Checkmate => "checkmate",
            Condition::Draw => "draw",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_delta_and_offset_agree() {
        let from = Coordinate::new(4, 1);
        let to = Coordinate::new(6, 4);
        let (dx, dy) = from.delta_to(to);
        assert_eq!((dx, dy), (2, 3));
        assert_eq!(from.offset(dx, dy), to);
    }

    #[test]
    fn coordinate_display_uses_algebraic_names() {
        assert_eq!(Coordinate::new(0, 0).to_string(), "a1");
        assert_eq!(Coordinate::new(7, 7).to_string(), "h8");
        assert_eq!(Coordinate::new(-1, 3).to_string(), "(-1, 3)");
    }

    #[test]
    fn only_line_movers_slide() {
        let sliding: Vec<PieceKind> = ALL_PIECE_KINDS
            .into_iter()
            .filter(|kind| kind.is_sliding())
            .collect();
        assert_eq!(
            sliding,
            vec![PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]
        );
    }
}
