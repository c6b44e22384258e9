//! Player reserves: pieces not yet placed on the board.
//!
//! Reserves are plain values. Spending a piece returns a new record and
//! leaves the original untouched.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::config::GameConfig;
use super::piece::PieceKind;

/// Remaining pieces for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerReserve {
    pub color: Color,
    pub capstones: u8,
    /// Flats and walls share one pool.
    pub pieces: u8,
}

impl PlayerReserve {
    #[must_use]
    pub const fn new(color: Color, capstones: u8, pieces: u8) -> Self {
        Self {
            color,
            capstones,
            pieces,
        }
    }

    /// Starting reserve for a configured game.
    #[must_use]
    pub const fn starting(color: Color, config: &GameConfig) -> Self {
        Self::new(color, config.capstones, config.pieces)
    }

    /// Remaining count in the pool a kind is drawn from.
    #[must_use]
    pub const fn available(&self, kind: PieceKind) -> u8 {
        match kind {
            PieceKind::Capstone => self.capstones,
            PieceKind::Flat | PieceKind::Wall => self.pieces,
        }
    }

    /// Reserve after placing one piece of `kind`.
    ///
    /// Returns `None` if the pool is already empty.
    #[must_use]
    pub fn spend(&self, kind: PieceKind) -> Option<Self> {
        let mut next = *self;
        match kind {
            PieceKind::Capstone => next.capstones = self.capstones.checked_sub(1)?,
            PieceKind::Flat | PieceKind::Wall => next.pieces = self.pieces.checked_sub(1)?,
        }
        Some(next)
    }

    /// Both pools are empty.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.capstones == 0 && self.pieces == 0
    }
}
