//! Error types.
//!
//! Malformed notation is fatal and reported once (`NotationError`). Rule
//! violations are collected into a list of `MoveError`s so the caller sees
//! every problem with a move at once.

use thiserror::Error;

use crate::core::{Axis, Square};

/// Text that could not be read as notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The move text does not match the notation grammar.
    #[error("Invalid PTN format: {notation:?}")]
    Malformed { notation: String },

    /// A piece token is not `w`, `b` or one of those prefixed by `S` / `C`.
    #[error("Invalid piece {token:?}")]
    MalformedPiece { token: String },

    /// Board rows do not describe a supported square grid.
    #[error("Board rows describe a {rows}x{columns} grid, expected a square board of size 3 to 8")]
    MalformedBoard { rows: usize, columns: usize },
}

/// A single legality violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Cannot pick up more pieces than the carry limit ({stack_total} > {board_size})")]
    CarryLimit { stack_total: usize, board_size: usize },

    #[error("No more capstones available to play")]
    NoCapstonesLeft,

    #[error("No pieces left to play")]
    NoPiecesLeft,

    #[error(
        "PTN does not contain a valid stack distribution \
         (count {declared}, distribution sums to {distributed})"
    )]
    DistributionMismatch { declared: usize, distributed: usize },

    /// `step` is one-based.
    #[error("PTN drops no pieces at step {step}")]
    EmptyDrop { step: usize },

    #[error("PTN is not a movement or placement")]
    NotMovementOrPlacement,

    /// `position` is one-based, so it can be 0 or negative for trajectories
    /// running off the low edge.
    #[error("{axis} trajectory of {position} is out of bounds for a board size of {board_size}")]
    TrajectoryOutOfBounds { axis: Axis, position: i32, board_size: usize },

    #[error("Cannot move on first turn")]
    FirstTurnMovement,

    #[error("Must place a flat on first turn")]
    FirstTurnSpecial,

    #[error("Cannot place a piece on a non-empty square at {square}")]
    NonEmptyPlacement { square: Square },

    #[error("Cannot move a stack not owned by player at {square}")]
    NotOwned { square: Square },

    #[error("Cannot pick up more pieces than hand size ({stack_total} > {board_size})")]
    OverHandSize { stack_total: usize, board_size: usize },

    #[error("Cannot pick up {stack_total} pieces from a stack of {height} at {square}")]
    StackTooShort { square: Square, stack_total: usize, height: usize },

    #[error("Square {square} is not on the board")]
    OffBoard { square: Square },

    #[error("Cannot move off the board from {origin} at step {step}")]
    PathOffBoard { origin: Square, step: usize },

    #[error("Cannot move on top of a capstone at {square}")]
    CapstoneTarget { square: Square },

    #[error("Cannot move on top of a wall at {square}")]
    WallTarget { square: Square },

    #[error("Cannot flatten wall at {square} unless capstone is last piece")]
    WallSmashNotLast { square: Square },
}

/// Why `TakRules::attempt_move` refused a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error(transparent)]
    Malformed(#[from] NotationError),

    #[error("Illegal move: {}", join_messages(.0))]
    Illegal(Vec<MoveError>),
}

impl MoveRejected {
    /// The collected rule violations (empty for malformed notation).
    #[must_use]
    pub fn errors(&self) -> &[MoveError] {
        match self {
            MoveRejected::Malformed(_) => &[],
            MoveRejected::Illegal(errors) => errors,
        }
    }
}

impl From<Vec<MoveError>> for MoveRejected {
    fn from(errors: Vec<MoveError>) -> Self {
        MoveRejected::Illegal(errors)
    }
}

fn join_messages(errors: &[MoveError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unsupported board size {0}: must be between 3 and 8")]
    UnsupportedBoardSize(usize),
}
