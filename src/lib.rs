//! # tak-rules
//!
//! A rules engine for the board game Tak.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: every legal move produces a new `BoardState`;
//!    earlier snapshots are never modified. Stacks are `im` persistent
//!    vectors, so snapshots are cheap to clone and share structure.
//!
//! 2. **Two error tiers**: malformed notation fails immediately with a single
//!    `NotationError`. Rule violations are collected into a list of
//!    `MoveError`s and returned without touching any state.
//!
//! 3. **No orchestration**: turn order, history and player bookkeeping belong
//!    to the caller. The engine consumes a board, a reserve and a move.
//!
//! ## Modules
//!
//! - `core`: colors, pieces, squares, reserves, configuration
//! - `notation`: move notation parsing and structural validation
//! - `board`: board snapshots, queries, debug rendering
//! - `rules`: move engine, win detection, rules facade
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use tak_rules::{Color, GameConfig, TakRules};
//!
//! let rules = TakRules::new(GameConfig::for_size(3).unwrap());
//! let mut board = rules.new_board();
//! let mut white = rules.starting_reserve(Color::White);
//!
//! for (ptn, first_ply) in [("a1", true), ("a2", false), ("a3", false)] {
//!     let applied = rules.attempt_move(&board, &white, ptn, first_ply).unwrap();
//!     board = applied.board;
//!     white = applied.reserve;
//! }
//!
//! // a1 holds black's flat (first-ply rule), so white has no road yet.
//! assert_eq!(rules.check_win(&board, Color::White), None);
//! assert_eq!(white.pieces, 7);
//! ```

pub mod core;
pub mod notation;
pub mod board;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, Direction, GameConfig, Piece, PieceKind, PlayerReserve, Square,
};

pub use crate::notation::MoveDescriptor;

pub use crate::board::{BoardState, FlatCounts, Stack};

pub use crate::rules::{
    AppliedMove, GameResult, MoveEngine, MoveOutcome, TakRules, WinDetector, WinKind,
};

pub use crate::error::{ConfigError, MoveError, MoveRejected, NotationError};
