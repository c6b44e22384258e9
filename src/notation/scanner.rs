//! Single-pass scanner for move notation.
//!
//! Grammar (whole input, case-sensitive):
//!
//! ```text
//! [count]?[C|S]?[a-h][1-8]([<|>|+|-][digits]?[*]?)?
//! ```
//!
//! `count` is one digit 0-9 and every distribution digit is 1-9. The scanner
//! only recognises shape; defaults are filled in by `MoveDescriptor`, and a
//! zero count is left for validation to report.

use smallvec::SmallVec;

use crate::core::{Direction, PieceKind, Square, FILES};
use crate::error::NotationError;

/// Fields exactly as written, before any defaulting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawNotation {
    pub count: Option<u8>,
    pub kind: PieceKind,
    pub origin: Square,
    pub direction: Option<Direction>,
    pub distribution: SmallVec<[u8; 8]>,
    pub wall_smash: bool,
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consume the next byte if `accept` maps it to a value.
    fn eat<T>(&mut self, accept: impl Fn(u8) -> Option<T>) -> Option<T> {
        let value = accept(self.peek()?)?;
        self.pos += 1;
        Some(value)
    }

    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

fn digit(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}

fn nonzero_digit(b: u8) -> Option<u8> {
    matches!(b, b'1'..=b'9').then(|| b - b'0')
}

fn file(b: u8) -> Option<u8> {
    FILES.iter().position(|&f| f == b).map(|i| i as u8)
}

fn rank(b: u8) -> Option<u8> {
    matches!(b, b'1'..=b'8').then(|| b - b'1')
}

/// Scan `text` into its raw fields.
pub(crate) fn scan(text: &str) -> Result<RawNotation, NotationError> {
    let malformed = || NotationError::Malformed {
        notation: text.to_string(),
    };
    let mut scanner = Scanner::new(text.trim());

    let count = scanner.eat(digit);
    let kind = scanner
        .eat(|b| PieceKind::from_prefix(b as char))
        .unwrap_or_default();
    let column = scanner.eat(file).ok_or_else(malformed)?;
    let row = scanner.eat(rank).ok_or_else(malformed)?;

    let direction = scanner.eat(|b| Direction::from_symbol(b as char));
    let mut distribution = SmallVec::new();
    let mut wall_smash = false;

    if direction.is_some() {
        while let Some(drop) = scanner.eat(nonzero_digit) {
            distribution.push(drop);
        }
        wall_smash = scanner.eat(|b| (b == b'*').then_some(())).is_some();
    }

    if !scanner.at_end() {
        return Err(malformed());
    }

    Ok(RawNotation {
        count,
        kind,
        origin: Square::new(row, column),
        direction,
        distribution,
        wall_smash,
    })
}
