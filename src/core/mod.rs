//! Core value types: colors, pieces, squares, reserves, configuration.
//!
//! Everything here is a small `Copy` value with no board knowledge.

pub mod color;
pub mod piece;
pub mod square;
pub mod reserve;
pub mod config;

pub use color::{Color, ColorMap};
pub use piece::{Piece, PieceKind};
pub use square::{Axis, Direction, Square, FILES, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use reserve::PlayerReserve;
pub use config::GameConfig;
