//! Errors used throughout the arbiter.
//!
//! Three families, one per boundary:
//! - `MoveRejection`: why the validation pipeline refused a destination.
//! - `MoveError`: what the controller reports for a refused move. Recoverable;
//!   the board is left untouched.
//! - `InputError`: malformed state strings, move text, CLI arguments or log
//!   setup caught by the front end before the engine runs. Fatal to the
//!   invocation.
//!
//! Coordinates outside the board reaching `Board::get` are programming errors
//! and panic instead of appearing here.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Coordinate, PieceKind};

/// First failing check of the validation pipeline.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("{kind} cannot move by ({dx}, {dy})")]
    ShapeNotAllowed { kind: PieceKind, dx: i8, dy: i8 },

    #[error("target is the current square")]
    NullMove,

    #[error("target is outside the board")]
    OutOfBounds,

    #[error("kings cannot be captured")]
    TargetIsKing,

    #[error("target holds a friendly piece")]
    TargetIsFriendly,

    #[error("path is obstructed at {0}")]
    PathObstructed(Coordinate),

    #[error("pawns cannot move backwards")]
    PawnWrongDirection,

    #[error("pawn advance is blocked at {0}")]
    PawnAdvanceBlocked(Coordinate),

    #[error("two-square advance is only allowed from the starting rank")]
    PawnNotOnStartingRank,

    #[error("diagonal pawn move needs something to capture")]
    PawnNoCaptureTarget,

    #[error("king has left its home square and cannot castle")]
    CastlingKingMoved,

    #[error("cannot castle while in check")]
    CastlingOutOfCheck,

    #[error("no unmoved rook on {0} to castle with")]
    CastlingRookMissing(Coordinate),

    #[error("castling path is blocked at {0}")]
    CastlingPathBlocked(Coordinate),

    #[error("king would pass through attacked square {0}")]
    CastlingThroughAttack(Coordinate),

    #[error("king would move into attack")]
    KingMovesIntoAttack,

    #[error("move would leave the own king in check")]
    ExposesOwnKing,
}

pub type MoveResult<T> = Result<T, MoveError>;

/// Controller-level refusal of a requested move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPieceAtSource(Coordinate),

    #[error("piece on {location} belongs to {owner}, but {player} is to move")]
    WrongPlayer {
        location: Coordinate,
        owner: Color,
        player: Color,
    },

    #[error("illegal move {from}-{to}: {reason}")]
    Rejected {
        from: Coordinate,
        to: Coordinate,
        reason: MoveRejection,
    },

    #[error("board is inconsistent: {0}")]
    InvalidState(String),
}

pub type InputResult<T> = Result<T, InputError>;

/// Malformed input caught before the engine runs.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("state must contain {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },

    #[error("unknown piece tag '{tag}' in cell {index}")]
    InvalidTag { index: usize, tag: String },

    #[error("state must be enclosed in brackets: {0}")]
    InvalidStateForm(String),

    #[error("invalid move format '{0}', expected FROM-TO such as A2-A4")]
    InvalidMove(String),

    #[error("invalid player '{0}', expected WHITE, BLACK, W or B")]
    InvalidPlayer(String),

    #[error("a move (-m) is required when a state is given")]
    MissingMove,

    #[error("a player (-p) is required when a state is given")]
    MissingPlayer,

    #[error("cannot open log file: {0}")]
    LogFile(#[from] std::io::Error),

    #[error("cannot install logger: {0}")]
    LoggerInstall(String),
}
