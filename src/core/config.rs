//! Game configuration: board size and starting reserves.
//!
//! The standard reserve table is used by `GameConfig::for_size`. Builder
//! methods override individual counts for variants.

use serde::{Deserialize, Serialize};

use super::square::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Starting (capstones, pieces) per player, indexed by `size - 3`.
const RESERVE_TABLE: [(u8, u8); 6] = [(0, 10), (0, 15), (1, 21), (1, 30), (2, 40), (2, 50)];

/// Configuration for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension (3 to 8).
    pub board_size: usize,

    /// Capstones each player starts with.
    pub capstones: u8,

    /// Flats and walls each player starts with.
    pub pieces: u8,
}

impl GameConfig {
    /// Standard configuration for a board size.
    pub fn for_size(board_size: usize) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(ConfigError::UnsupportedBoardSize(board_size));
        }

        let (capstones, pieces) = RESERVE_TABLE[board_size - MIN_BOARD_SIZE];
        Ok(Self {
            board_size,
            capstones,
            pieces,
        })
    }

    /// Override the capstone count.
    #[must_use]
    pub fn with_capstones(mut self, capstones: u8) -> Self {
        self.capstones = capstones;
        self
    }

    /// Override the piece count.
    #[must_use]
    pub fn with_pieces(mut self, pieces: u8) -> Self {
        self.pieces = pieces;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 5,
            capstones: 1,
            pieces: 21,
        }
    }
}
