//! Pieces: a color plus an orientation.
//!
//! Text form follows move notation: a bare color letter is a flat,
//! `S` prefixes a wall (standing stone) and `C` a capstone.
//!
//! ```
//! use tak_rules::core::{Color, Piece, PieceKind};
//!
//! let piece: Piece = "Sb".parse().unwrap();
//! assert_eq!(piece, Piece::new(Color::Black, PieceKind::Wall));
//! assert_eq!(piece.to_string(), "Sb");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::color::Color;
use crate::error::NotationError;

/// Orientation of a piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// Lying flat. Counts for roads and flat wins.
    #[default]
    Flat,
    /// Standing stone. Blocks roads and movement.
    Wall,
    /// Road-eligible, smashes walls, cannot be covered.
    Capstone,
}

impl PieceKind {
    /// True for walls and capstones.
    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, PieceKind::Flat)
    }

    /// Notation prefix (`S`, `C`, or none for flats).
    #[must_use]
    pub const fn prefix(self) -> Option<char> {
        match self {
            PieceKind::Flat => None,
            PieceKind::Wall => Some('S'),
            PieceKind::Capstone => Some('C'),
        }
    }

    /// Parse a notation prefix.
    #[must_use]
    pub const fn from_prefix(c: char) -> Option<Self> {
        match c {
            'S' => Some(PieceKind::Wall),
            'C' => Some(PieceKind::Capstone),
            _ => None,
        }
    }
}

/// A single piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[must_use]
    pub const fn flat(color: Color) -> Self {
        Self::new(color, PieceKind::Flat)
    }

    #[must_use]
    pub const fn wall(color: Color) -> Self {
        Self::new(color, PieceKind::Wall)
    }

    #[must_use]
    pub const fn capstone(color: Color) -> Self {
        Self::new(color, PieceKind::Capstone)
    }

    /// Flats and capstones take part in roads; walls never do.
    #[must_use]
    pub const fn is_road_piece(self) -> bool {
        !matches!(self.kind, PieceKind::Wall)
    }

    /// The same piece laid flat (used when a capstone smashes a wall).
    #[must_use]
    pub const fn flattened(self) -> Self {
        Self::flat(self.color)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(prefix) = self.kind.prefix() {
            write!(f, "{}", prefix)?;
        }
        write!(f, "{}", self.color.letter())
    }
}

impl FromStr for Piece {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || NotationError::MalformedPiece { token: s.to_string() };
        let mut chars = s.chars();
        let first = chars.next().ok_or_else(malformed)?;

        let (kind, color_char) = match PieceKind::from_prefix(first) {
            Some(kind) => (kind, chars.next().ok_or_else(malformed)?),
            None => (PieceKind::Flat, first),
        };

        if chars.next().is_some() {
            return Err(malformed());
        }

        let color = Color::from_letter(color_char).ok_or_else(malformed)?;
        Ok(Piece::new(color, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::flat(Color::White).to_string(), "w");
        assert_eq!(Piece::wall(Color::Black).to_string(), "Sb");
        assert_eq!(Piece::capstone(Color::White).to_string(), "Cw");
    }

    #[test]
    fn test_piece_parse() {
        assert_eq!("b".parse::<Piece>().unwrap(), Piece::flat(Color::Black));
        assert_eq!("Cw".parse::<Piece>().unwrap(), Piece::capstone(Color::White));
        assert!("".parse::<Piece>().is_err());
        assert!("S".parse::<Piece>().is_err());
        assert!("Cwx".parse::<Piece>().is_err());
        assert!("x".parse::<Piece>().is_err());
    }

    #[test]
    fn test_road_pieces() {
        assert!(Piece::flat(Color::White).is_road_piece());
        assert!(Piece::capstone(Color::White).is_road_piece());
        assert!(!Piece::wall(Color::White).is_road_piece());
    }

    #[test]
    fn test_flattened() {
        assert_eq!(Piece::wall(Color::Black).flattened(), Piece::flat(Color::Black));
    }

    #[test]
    fn test_kind_is_special() {
        assert!(!PieceKind::Flat.is_special());
        assert!(PieceKind::Wall.is_special());
        assert!(PieceKind::Capstone.is_special());
    }
}
