//! Board-dependent move validation and application.
//!
//! `MoveEngine` works on its own copy of the caller's board. The copy is
//! O(1) thanks to persistent stacks, and the caller's snapshot is never
//! touched: `apply` either returns a finished new snapshot or the collected
//! errors.
//!
//! ## Rules checked
//!
//! - First ply: placements only, and never a wall or capstone.
//! - Placement: the origin square must be empty.
//! - Movement: the mover must own the origin stack, every step must drop
//!   at least one piece, and the hand may not exceed the board size or the
//!   stack's height.
//! - Path: no step may land on a capstone; a wall may only be entered on
//!   the last step by a hand topped with a capstone, which flattens it.

use crate::board::BoardState;
use crate::core::{Color, Direction, Piece, PieceKind, Square};
use crate::error::MoveError;
use crate::notation::MoveDescriptor;

/// Result of applying a legal move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The new snapshot.
    pub board: BoardState,

    /// Kind drawn from the mover's reserve; `None` for movements.
    pub placed: Option<PieceKind>,
}

/// Validates and applies one move for one color.
///
/// ## Example
///
/// ```
/// use tak_rules::board::BoardState;
/// use tak_rules::core::{Color, Piece, Square};
/// use tak_rules::notation::MoveDescriptor;
/// use tak_rules::rules::MoveEngine;
///
/// let ptn = MoveDescriptor::parse("d3").unwrap();
/// let board = BoardState::new(5);
///
/// // First-ply placements put down the opponent's flat.
/// let outcome = MoveEngine::new(&ptn, &board, Color::White, true).apply().unwrap();
/// assert_eq!(outcome.board.top(Square::new(2, 3)), Some(Piece::flat(Color::Black)));
/// assert!(board.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct MoveEngine<'a> {
    descriptor: &'a MoveDescriptor,
    board: BoardState,
    color: Color,
    first_ply: bool,
}

impl<'a> MoveEngine<'a> {
    /// Create an engine over a private copy of `board`.
    ///
    /// `first_ply` marks one of the game's first two plies.
    #[must_use]
    pub fn new(
        descriptor: &'a MoveDescriptor,
        board: &BoardState,
        color: Color,
        first_ply: bool,
    ) -> Self {
        Self {
            descriptor,
            board: board.clone(),
            color,
            first_ply,
        }
    }

    /// The acting color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Check every board-dependent rule.
    pub fn validate(&self) -> Result<(), Vec<MoveError>> {
        let mut errors = Vec::new();
        let ptn = self.descriptor;

        if self.first_ply {
            if !ptn.is_placement() {
                errors.push(MoveError::FirstTurnMovement);
            } else if ptn.kind.is_special() {
                errors.push(MoveError::FirstTurnSpecial);
            }
            if !errors.is_empty() {
                return Err(errors);
            }
        }

        if !ptn.origin.is_on_board(self.board.size()) {
            return Err(vec![MoveError::OffBoard { square: ptn.origin }]);
        }

        match ptn.direction {
            None if ptn.is_placement() => self.check_placement(&mut errors),
            None => errors.push(MoveError::NotMovementOrPlacement),
            Some(direction) => {
                self.check_pickup(&mut errors);
                if errors.is_empty() {
                    self.check_path(direction, &mut errors);
                }
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
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Apply the move, consuming the engine.
    ///
    /// Re-runs validation first; on failure the errors are returned and no
    /// board is produced.
    pub fn apply(self) -> Result<MoveOutcome, Vec<MoveError>> {
        self.validate()?;

        let direction = self.descriptor.direction;
        match direction {
            None => Ok(self.place()),
            Some(direction) => self.spread(direction),
        }
    }

    // === Validation ===

    fn check_placement(&self, errors: &mut Vec<MoveError>) {
        let origin = self.descriptor.origin;
        if self.board.height(origin) > 0 {
            errors.push(MoveError::NonEmptyPlacement { square: origin });
        }
    }

    fn check_pickup(&self, errors: &mut Vec<MoveError>) {
        let origin = self.descriptor.origin;
        let stack_total = self.descriptor.stack_total();
        let board_size = self.board.size();
        let height = self.board.height(origin);

        if !self.board.is_controlled_by(origin, self.color) {
            errors.push(MoveError::NotOwned { square: origin });
        }

        if let Some(error) = self.descriptor.distribution_error() {
            errors.push(error);
            return;
        }

        if stack_total > board_size {
            errors.push(MoveError::OverHandSize {
                stack_total,
                board_size,
            });
        } else if height > 0 && stack_total > height {
            errors.push(MoveError::StackTooShort {
                square: origin,
                stack_total,
                height,
            });
        }
    }

    /// Walk the path, stopping at the first illegal step.
    fn check_path(&self, direction: Direction, errors: &mut Vec<MoveError>) {
        let origin = self.descriptor.origin;
        let steps = self.descriptor.stack_distribution().len();
        let capstone_in_hand = matches!(
            self.board.top(origin),
            Some(Piece { kind: PieceKind::Capstone, .. })
        );

        for step in 1..=steps {
            let Some(square) = origin.offset(direction, step, self.board.size()) else {
                errors.push(MoveError::PathOffBoard { origin, step });
                return;
            };

            let error = match self.board.top(square).map(|piece| piece.kind) {
                Some(PieceKind::Capstone) => Some(MoveError::CapstoneTarget { square }),
                Some(PieceKind::Wall) if !capstone_in_hand => {
                    Some(MoveError::WallTarget { square })
                }
                Some(PieceKind::Wall) if step != steps => {
                    Some(MoveError::WallSmashNotLast { square })
                }
                _ => None,
            };

            if let Some(error) = error {
                errors.push(error);
                return;
            }
        }
    }

    // === Application ===

    fn place(self) -> MoveOutcome {
        let (piece, placed) = if self.first_ply {
            (Piece::flat(self.color.opponent()), PieceKind::Flat)
        } else {
            (Piece::new(self.color, self.descriptor.kind), self.descriptor.kind)
        };

        MoveOutcome {
            board: self.board.with_piece(self.descriptor.origin, piece),
            placed: Some(placed),
        }
    }

    /// Lift the hand and drop it along the path, bottom pieces first.
    fn spread(self, direction: Direction) -> Result<MoveOutcome, Vec<MoveError>> {
        let origin = self.descriptor.origin;
        let drops = self.descriptor.stack_distribution();
        let size = self.board.size();

        let mut stack = self.board.stack(origin).clone();
        let mut hand = stack.split_off(stack.len() - self.descriptor.stack_total());
        let mut board = self.board.with_stack(origin, stack);

        for (i, &drop) in drops.iter().enumerate() {
            let step = i + 1;
            let target = next_square(origin, direction, step, size)?;
            let mut target_stack = board.stack(target).clone();

            if step == drops.len() {
                if let Some(top) = target_stack.back_mut() {
                    if top.kind == PieceKind::Wall {
                        *top = top.flattened();
                    }
                }
            }

            let rest = hand.split_off(usize::from(drop));
            target_stack.append(hand);
            hand = rest;
            board = board.with_stack(target, target_stack);
        }

        Ok(MoveOutcome { board, placed: None })
    }
}

fn next_square(
    origin: Square,
    direction: Direction,
    step: usize,
    size: usize,
) -> Result<Square, Vec<MoveError>> {
    origin
        .offset(direction, step, size)
        .ok_or_else(|| vec![MoveError::PathOffBoard { origin, step }])
}
