//! Parsed moves and their board-independent validation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::scanner::scan;
use crate::core::{Axis, Direction, PieceKind, Square};
use crate::error::{MoveError, NotationError};

/// A move as described by its notation.
///
/// ## Example
///
/// ```
/// use tak_rules::notation::MoveDescriptor;
/// use tak_rules::core::{Direction, Square};
///
/// let ptn = MoveDescriptor::parse("3d3+111").unwrap();
///
/// assert_eq!(ptn.piece_count, Some(3));
/// assert_eq!(ptn.origin, Square::new(2, 3));
/// assert_eq!(ptn.direction, Some(Direction::Up));
/// assert_eq!(ptn.stack_distribution(), &[1, 1, 1]);
/// assert_eq!(ptn.stack_total(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// The text this descriptor was read from.
    pub notation: String,

    /// Declared number of pieces picked up. Filled in for movements.
    pub piece_count: Option<usize>,

    /// Kind of piece placed (flat unless prefixed by `S` or `C`).
    pub kind: PieceKind,

    /// Origin square.
    pub origin: Square,

    /// Movement direction; `None` for placements.
    pub direction: Option<Direction>,

    /// Pieces dropped at each step, nearest square first.
    /// SmallVec fits the longest legal path (8 drops) inline.
    pub distribution: SmallVec<[u8; 8]>,

    /// Trailing `*` marker.
    pub wall_smash: bool,
}

impl MoveDescriptor {
    /// Parse move notation.
    ///
    /// Fails immediately on text that does not match the grammar. For
    /// movements a missing count and a missing distribution default to each
    /// other, and both default to 1.
    pub fn parse(text: &str) -> Result<Self, NotationError> {
        let raw = scan(text)?;
        let mut piece_count = raw.count.map(usize::from);
        let mut distribution = raw.distribution;

        if raw.direction.is_some() {
            if piece_count.is_none() {
                piece_count = Some(if distribution.is_empty() {
                    1
                } else {
                    distribution.iter().map(|&d| usize::from(d)).sum()
                });
            }
            if distribution.is_empty() {
                distribution.push(raw.count.unwrap_or(1));
            }
        }

        Ok(Self {
            notation: text.to_string(),
            piece_count,
            kind: raw.kind,
            origin: raw.origin,
            direction: raw.direction,
            distribution,
            wall_smash: raw.wall_smash,
        })
    }

    /// A placement of `kind` on `square`.
    #[must_use]
    pub fn placement(square: Square, kind: PieceKind) -> Self {
        let mut descriptor = Self {
            notation: String::new(),
            piece_count: None,
            kind,
            origin: square,
            direction: None,
            distribution: SmallVec::new(),
            wall_smash: false,
        };
        descriptor.notation = descriptor.to_string();
        descriptor
    }

    /// A movement from `origin` dropping `drops` pieces at successive squares.
    #[must_use]
    pub fn movement(origin: Square, direction: Direction, drops: &[u8]) -> Self {
        let mut descriptor = Self {
            notation: String::new(),
            piece_count: Some(drops.iter().map(|&d| usize::from(d)).sum()),
            kind: PieceKind::Flat,
            origin,
            direction: Some(direction),
            distribution: SmallVec::from_slice(drops),
            wall_smash: false,
        };
        descriptor.notation = descriptor.to_string();
        descriptor
    }

    /// Mark the movement as flattening a wall.
    #[must_use]
    pub fn with_wall_smash(mut self) -> Self {
        self.wall_smash = true;
        self.notation = self.to_string();
        self
    }

    // === Shape ===

    #[must_use]
    pub fn is_movement(&self) -> bool {
        self.direction.is_some()
    }

    /// No movement suffix and no count.
    #[must_use]
    pub fn is_placement(&self) -> bool {
        !self.is_movement() && self.piece_count.is_none()
    }

    /// Per-step drop counts (empty for placements).
    #[must_use]
    pub fn stack_distribution(&self) -> &[u8] {
        &self.distribution
    }

    /// Number of pieces picked up: the distribution sum, or 1 without one.
    #[must_use]
    pub fn stack_total(&self) -> usize {
        if self.distribution.is_empty() {
            return 1;
        }
        self.distribution.iter().map(|&d| usize::from(d)).sum()
    }

    /// Declared count agrees with the distribution.
    #[must_use]
    pub fn has_valid_distribution(&self) -> bool {
        match self.piece_count {
            None if self.distribution.is_empty() => true,
            declared => declared == Some(self.stack_total()),
        }
    }

    /// The first problem with a movement's drops, if any.
    ///
    /// Every step must drop at least one piece, and the drops must add up
    /// to the declared count. Placements have no drops to check.
    #[must_use]
    pub fn distribution_error(&self) -> Option<MoveError> {
        if !self.is_movement() {
            return None;
        }
        if self.distribution.is_empty() {
            return Some(MoveError::EmptyDrop { step: 1 });
        }
        if let Some(i) = self.distribution.iter().position(|&drop| drop == 0) {
            return Some(MoveError::EmptyDrop { step: i + 1 });
        }
        (!self.has_valid_distribution()).then(|| MoveError::DistributionMismatch {
            declared: self.piece_count.unwrap_or(0),
            distributed: self.stack_total(),
        })
    }

    // === Trajectory ===

    /// (row delta, column delta) per step; (0, 0) for placements.
    #[must_use]
    pub fn direction_vector(&self) -> (i32, i32) {
        self.direction.map_or((0, 0), Direction::vector)
    }

    /// Zero-based row reached by moving `stack_total` squares.
    #[must_use]
    pub fn row_trajectory(&self) -> i32 {
        self.origin.row as i32 + self.direction_vector().0 * self.stack_total() as i32
    }

    /// Zero-based column reached by moving `stack_total` squares.
    #[must_use]
    pub fn column_trajectory(&self) -> i32 {
        self.origin.column as i32 + self.direction_vector().1 * self.stack_total() as i32
    }

    // === Validation ===

    /// Board-independent checks, all of them collected.
    ///
    /// `capstones` and `pieces` are the mover's remaining reserves. On a
    /// first ply the placed piece is always a flat, so only `pieces` is
    /// consulted.
    pub fn validate(
        &self,
        board_size: usize,
        capstones: u8,
        pieces: u8,
        first_ply: bool,
    ) -> Result<(), Vec<MoveError>> {
        let mut errors = Vec::new();
        let stack_total = self.stack_total();

        if stack_total > board_size {
            errors.push(MoveError::CarryLimit {
                stack_total,
                board_size,
            });
        }

        if self.is_placement() {
            let capstone = self.kind == PieceKind::Capstone && !first_ply;
            if capstone && capstones == 0 {
                errors.push(MoveError::NoCapstonesLeft);
            } else if !capstone && pieces == 0 {
                errors.push(MoveError::NoPiecesLeft);
            }
        }

        if let Some(error) = self.distribution_error() {
            errors.push(error);
        }

        if !self.is_movement() && !self.is_placement() {
            errors.push(MoveError::NotMovementOrPlacement);
        }

        let bounds = 0..board_size as i32;
        for (axis, trajectory) in [
            (Axis::Column, self.column_trajectory()),
            (Axis::Row, self.row_trajectory()),
        ] {
            if !bounds.contains(&trajectory) {
                errors.push(MoveError::TrajectoryOutOfBounds {
                    axis,
                    position: trajectory + 1,
                    board_size,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Whether `validate` passes.
    #[must_use]
    pub fn is_valid(&self, board_size: usize, capstones: u8, pieces: u8, first_ply: bool) -> bool {
        self.validate(board_size, capstones, pieces, first_ply).is_ok()
    }
}

impl FromStr for MoveDescriptor {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical notation: count omitted when 1, distribution omitted when it is
/// a single drop of the whole hand. A declared count that disagrees with the
/// drops is written as declared.
impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(direction) = self.direction else {
            if let Some(count) = self.piece_count {
                write!(f, "{}", count)?;
            }
            if let Some(prefix) = self.kind.prefix() {
                write!(f, "{}", prefix)?;
            }
            return write!(f, "{}", self.origin);
        };

        let total = self.stack_total();
        let count = self.piece_count.unwrap_or(total);
        if count != 1 || count != total {
            write!(f, "{}", count)?;
        }
        write!(f, "{}{}", self.origin, direction.symbol())?;
        if self.distribution.len() > 1 || self.distribution.first() != Some(&(count as u8)) {
            for drop in &self.distribution {
                write!(f, "{}", drop)?;
            }
        }
        if self.wall_smash {
            write!(f, "*")?;
        }
        Ok(())
    }
}
