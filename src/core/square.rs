//! Board coordinates and movement directions.
//!
//! Squares are zero-based: `row` is the rank minus one and `column` is the
//! file index (`a` = 0). Rank 1 is row 0, so `Up` increases the row.

use serde::{Deserialize, Serialize};

/// Largest supported board dimension.
pub const MAX_BOARD_SIZE: usize = 8;

/// Smallest supported board dimension.
pub const MIN_BOARD_SIZE: usize = 3;

/// File letters in column order.
pub const FILES: &[u8; MAX_BOARD_SIZE] = b"abcdefgh";

/// A square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub column: u8,
}

impl Square {
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Row-major index on a board of the given size.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row as usize * size + self.column as usize
    }

    /// Check whether the square lies on a board of the given size.
    #[must_use]
    pub const fn is_on_board(self, size: usize) -> bool {
        (self.row as usize) < size && (self.column as usize) < size
    }

    /// Step `steps` squares in `direction`, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, direction: Direction, steps: usize, size: usize) -> Option<Square> {
        let (drow, dcolumn) = direction.vector();
        let steps = steps as i32;
        let row = self.row as i32 + drow * steps;
        let column = self.column as i32 + dcolumn * steps;

        if (0..size as i32).contains(&row) && (0..size as i32).contains(&column) {
            Some(Square::new(row as u8, column as u8))
        } else {
            None
        }
    }

    /// File letter (`a`..`h`).
    #[must_use]
    pub fn file(self) -> char {
        FILES[self.column as usize] as char
    }

    /// One-based rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.row + 1
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Direction of a stack movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `+`: towards higher ranks.
    Up,
    /// `-`: towards lower ranks.
    Down,
    /// `<`: towards file `a`.
    Left,
    /// `>`: towards file `h`.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector as (row delta, column delta).
    #[must_use]
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Notation symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Direction::Up => '+',
            Direction::Down => '-',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }

    /// Parse a notation symbol.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Direction::Up),
            '-' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            '>' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Board axis, used when reporting trajectories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "Row"),
            Axis::Column => write!(f, "Column"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_display() {
        assert_eq!(Square::new(0, 0).to_string(), "a1");
        assert_eq!(Square::new(2, 3).to_string(), "d3");
        assert_eq!(Square::new(7, 7).to_string(), "h8");
    }

    #[test]
    fn test_square_index() {
        assert_eq!(Square::new(0, 0).index(5), 0);
        assert_eq!(Square::new(1, 2).index(5), 7);
        assert_eq!(Square::new(4, 4).index(5), 24);
    }

    #[test]
    fn test_offset() {
        let d3 = Square::new(2, 3);

        assert_eq!(d3.offset(Direction::Up, 1, 5), Some(Square::new(3, 3)));
        assert_eq!(d3.offset(Direction::Down, 2, 5), Some(Square::new(0, 3)));
        assert_eq!(d3.offset(Direction::Left, 3, 5), Some(Square::new(2, 0)));
        assert_eq!(d3.offset(Direction::Right, 1, 5), Some(Square::new(2, 4)));
        assert_eq!(d3.offset(Direction::Right, 2, 5), None);
        assert_eq!(d3.offset(Direction::Down, 3, 5), None);
    }

    #[test]
    fn test_direction_symbols() {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(Direction::from_symbol(direction.symbol()), Some(direction));
        }
        assert_eq!(Direction::from_symbol('*'), None);
    }

    #[test]
    fn test_is_on_board() {
        assert!(Square::new(2, 2).is_on_board(3));
        assert!(!Square::new(3, 0).is_on_board(3));
    }
}
