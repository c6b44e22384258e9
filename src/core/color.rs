//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! Tak is strictly two-player: `White` moves first, `Black` second.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for flat counts and
//! player reserves.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, white first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Slot index (white = 0, black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Notation letter (`w` or `b`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Parse a notation letter.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tak_rules::core::{Color, ColorMap};
///
/// let mut flats: ColorMap<usize> = ColorMap::with_value(0);
/// flats[Color::Black] += 2;
///
/// assert_eq!(flats[Color::White], 0);
/// assert_eq!(flats[Color::Black], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::White), factory(Color::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs, white first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn test_color_letters() {
        assert_eq!(Color::White.letter(), 'w');
        assert_eq!(Color::from_letter('b'), Some(Color::Black));
        assert_eq!(Color::from_letter('x'), None);
        assert_eq!(format!("{}", Color::White), "white");
    }

    #[test]
    fn test_color_map_new() {
        let map = ColorMap::new(|c| c.index() * 10);

        assert_eq!(map[Color::White], 0);
        assert_eq!(map[Color::Black], 10);
    }

    #[test]
    fn test_color_map_mutation() {
        let mut map: ColorMap<i32> = ColorMap::with_value(0);

        map[Color::White] = 3;
        *map.get_mut(Color::Black) += 1;

        assert_eq!(map[Color::White], 3);
        assert_eq!(map[Color::Black], 1);
    }

    #[test]
    fn test_color_map_iter() {
        let map = ColorMap::new(|c| c.letter());
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Color::White, &'w'), (Color::Black, &'b')]);
    }

    #[test]
    fn test_color_map_serialization() {
        let map = ColorMap::new(|c| c.index() as u8 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ColorMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
