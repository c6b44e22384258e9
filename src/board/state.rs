//! Immutable board snapshots.
//!
//! A `BoardState` is an N x N grid of stacks stored row-major in an
//! `im::Vector`. Cloning is O(1) and every update returns a new snapshot
//! that shares unchanged stacks with the old one, so earlier snapshots can
//! be kept or dropped freely.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorMap, Piece, PieceKind, Square, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::NotationError;

/// Pieces on one square, bottom first. The top piece is the last element.
pub type Stack = Vector<Piece>;

/// Squares topped by a flat, per color.
pub type FlatCounts = ColorMap<usize>;

/// Snapshot of every stack on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    size: usize,
    squares: Vector<Stack>,
}

impl BoardState {
    /// Create an empty board.
    ///
    /// Panics if `size` is outside 3..=8.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "Board size must be between 3 and 8"
        );

        Self {
            size,
            squares: (0..size * size).map(|_| Stack::new()).collect(),
        }
    }

    /// Build a board from text rows, highest rank first.
    ///
    /// Cells are separated by `|`; a cell lists its pieces bottom first,
    /// separated by spaces. An empty cell is an empty square.
    ///
    /// ```
    /// use tak_rules::board::BoardState;
    /// use tak_rules::core::{Color, Piece, Square};
    ///
    /// let board = BoardState::from_rows(&[
    ///     "   |      |  ",
    ///     "   | Cw   |  ",
    ///     "w  | w Sb |  ",
    /// ]).unwrap();
    ///
    /// assert_eq!(board.top(Square::new(0, 1)), Some(Piece::wall(Color::Black)));
    /// assert_eq!(board.height(Square::new(0, 1)), 2);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, NotationError> {
        let size = rows.len();
        let mut board_rows = Vec::with_capacity(size);

        for row in rows {
            let cells: Vec<&str> = row.split('|').collect();
            if cells.len() != size {
                return Err(NotationError::MalformedBoard {
                    rows: size,
                    columns: cells.len(),
                });
            }
            board_rows.push(cells);
        }

        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(NotationError::MalformedBoard {
                rows: size,
                columns: size,
            });
        }

        let mut board = Self::new(size);
        for (i, cells) in board_rows.iter().enumerate() {
            let row = (size - 1 - i) as u8;
            for (column, cell) in cells.iter().enumerate() {
                let stack = cell
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Stack, _>>()?;
                board = board.with_stack(Square::new(row, column as u8), stack);
            }
        }

        Ok(board)
    }

    /// Board dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterate over all squares, row-major from a1.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let size = self.size as u8;
        (0..size).flat_map(move |row| (0..size).map(move |column| Square::new(row, column)))
    }

    // === Stacks ===

    /// The stack on a square.
    ///
    /// Panics if the square is off the board.
    #[must_use]
    pub fn stack(&self, square: Square) -> &Stack {
        &self.squares[square.index(self.size)]
    }

    /// The stack on a square, or `None` if it is off the board.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<&Stack> {
        if square.is_on_board(self.size) {
            self.squares.get(square.index(self.size))
        } else {
            None
        }
    }

    /// The top piece on a square.
    #[must_use]
    pub fn top(&self, square: Square) -> Option<Piece> {
        self.get(square)?.last().copied()
    }

    /// Number of pieces on a square.
    #[must_use]
    pub fn height(&self, square: Square) -> usize {
        self.get(square).map_or(0, Stack::len)
    }

    /// Snapshot with `square` holding `stack`.
    #[must_use]
    pub fn with_stack(&self, square: Square, stack: Stack) -> Self {
        let mut next = self.clone();
        next.squares.set(square.index(self.size), stack);
        next
    }

    /// Snapshot with `piece` added to the top of `square`.
    #[must_use]
    pub fn with_piece(&self, square: Square, piece: Piece) -> Self {
        let mut stack = self.stack(square).clone();
        stack.push_back(piece);
        self.with_stack(square, stack)
    }

    // === Queries ===

    /// No square holds a piece.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Vector::is_empty)
    }

    /// Every square holds at least one piece.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|stack| !stack.is_empty())
    }

    /// Total pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.iter().map(Vector::len).sum()
    }

    /// Squares topped by a flat of each color. Walls and capstones never
    /// count, whatever their depth.
    #[must_use]
    pub fn flat_counts(&self) -> FlatCounts {
        let mut counts = FlatCounts::with_value(0);
        for stack in &self.squares {
            if let Some(Piece { color, kind: PieceKind::Flat }) = stack.last().copied() {
                counts[color] += 1;
            }
        }
        counts
    }

    /// Grid indexed `[row][column]`: true where the top piece is a flat or
    /// capstone of `color`.
    #[must_use]
    pub fn road_mask(&self, color: Color) -> Vec<Vec<bool>> {
        let size = self.size as u8;
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|column| {
                        self.top(Square::new(row, column))
                            .is_some_and(|piece| piece.color == color && piece.is_road_piece())
                    })
                    .collect()
            })
            .collect()
    }

    /// Whether the top of `square` belongs to `color`.
    #[must_use]
    pub fn is_controlled_by(&self, square: Square, color: Color) -> bool {
        self.top(square).is_some_and(|piece| piece.color == color)
    }
}
