//! Win detection: roads by connectivity search, flats by counting.
//!
//! ## Road search
//!
//! A road joins two opposite edges through orthogonally adjacent squares
//! topped by the player's flats or capstone. The detector first searches
//! from the a1 corner, accepting either far edge. It then roots an
//! edge-constrained search at every square of the first rank (goal: last
//! rank) and of the a-file (goal: h-side file), since a road can touch its
//! starting edge anywhere.
//!
//! Every root gets a fresh visited set. Searches use an explicit worklist,
//! so stack depth does not grow with the board.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{BoardState, FlatCounts};
use crate::core::{Color, Direction, Square};

/// How a game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinKind {
    Road,
    Flat,
    /// No winner (game continues, or a flat-count draw).
    None,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A completed road. `double_road` is set when both colors completed
    /// one on the same ply; the mover is then the winner.
    Road { winner: Color, double_road: bool },
    /// More flats on a full board or after a reserve ran out.
    Flat { winner: Color, flats: FlatCounts },
    /// Equal flat counts.
    Draw { flats: FlatCounts },
}

impl GameResult {
    /// The winning color, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Road { winner, .. } | GameResult::Flat { winner, .. } => Some(*winner),
            GameResult::Draw { .. } => None,
        }
    }

    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        self.winner() == Some(color)
    }

    #[must_use]
    pub fn kind(&self) -> WinKind {
        match self {
            GameResult::Road { .. } => WinKind::Road,
            GameResult::Flat { .. } => WinKind::Flat,
            GameResult::Draw { .. } => WinKind::None,
        }
    }
}

/// Edge a search must reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Goal {
    /// Last rank or last file, for searches rooted at a1.
    EitherEdge,
    LastRow,
    LastColumn,
}

impl Goal {
    fn reached(self, square: Square, size: usize) -> bool {
        let last = (size - 1) as u8;
        match self {
            Goal::EitherEdge => square.row == last || square.column == last,
            Goal::LastRow => square.row == last,
            Goal::LastColumn => square.column == last,
        }
    }
}

/// Win queries over one snapshot.
#[derive(Clone, Copy, Debug)]
pub struct WinDetector<'a> {
    board: &'a BoardState,
}

impl<'a> WinDetector<'a> {
    #[must_use]
    pub fn new(board: &'a BoardState) -> Self {
        Self { board }
    }

    /// Road-eligible squares for `color`; see `BoardState::road_mask`.
    #[must_use]
    pub fn road_eligible(&self, color: Color) -> Vec<Vec<bool>> {
        self.board.road_mask(color)
    }

    /// Whether `color` has a road.
    #[must_use]
    pub fn is_road_win(&self, color: Color) -> bool {
        let eligible = self.road_eligible(color);
        let size = self.board.size();

        if search(&eligible, Square::new(0, 0), Goal::EitherEdge) {
            trace!(%color, "road found from corner");
            return true;
        }

        let found = (0..size as u8).any(|n| {
            search(&eligible, Square::new(0, n), Goal::LastRow)
                || search(&eligible, Square::new(n, 0), Goal::LastColumn)
        });
        trace!(%color, found, "edge road search finished");
        found
    }

    /// Compare flat counts: more flats wins, equal counts draw.
    #[must_use]
    pub fn check_flat_win(&self) -> GameResult {
        let flats = self.board.flat_counts();
        let (white, black) = (flats[Color::White], flats[Color::Black]);

        if white > black {
            GameResult::Flat { winner: Color::White, flats }
        } else if black > white {
            GameResult::Flat { winner: Color::Black, flats }
        } else {
            GameResult::Draw { flats }
        }
    }

    /// Road results for both colors, falling back to flats on a full board.
    ///
    /// `mover` made the ply that produced this board; it wins a double road.
    #[must_use]
    pub fn check_win(&self, mover: Color) -> Option<GameResult> {
        let white = self.is_road_win(Color::White);
        let black = self.is_road_win(Color::Black);

        match (white, black) {
            (true, true) => Some(GameResult::Road {
                winner: mover,
                double_road: true,
            }),
            (true, false) => Some(GameResult::Road {
                winner: Color::White,
                double_road: false,
            }),
            (false, true) => Some(GameResult::Road {
                winner: Color::Black,
                double_road: false,
            }),
            (false, false) if self.board.is_full() => Some(self.check_flat_win()),
            (false, false) => None,
        }
    }
}

/// Depth-first walk from `start` through eligible squares.
fn search(eligible: &[Vec<bool>], start: Square, goal: Goal) -> bool {
    let size = eligible.len();
    let mut visited = FxHashSet::default();
    let mut worklist = vec![start];

    while let Some(square) = worklist.pop() {
        if !eligible[square.row as usize][square.column as usize] || !visited.insert(square) {
            continue;
        }
        if goal.reached(square, size) {
            return true;
        }
        worklist.extend(
            Direction::ALL
                .into_iter()
                .filter_map(|direction| square.offset(direction, 1, size))
                .filter(|next| !visited.contains(next)),
        );
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_eligible_ignores_walls() {
        let board = BoardState::from_rows(&["Sw| | ", "Cw|b| ", "w|w Sw|b w"]).unwrap();
        let grid = WinDetector::new(&board).road_eligible(Color::White);

        assert_eq!(
            grid,
            vec![
                vec![true, false, true],
                vec![true, false, false],
                vec![false, false, false],
            ]
        );
    }

    #[test]
    fn test_vertical_road() {
        let board = BoardState::from_rows(&["w| | ", "w| | ", "w| | "]).unwrap();
        let detector = WinDetector::new(&board);

        assert!(detector.is_road_win(Color::White));
        assert!(!detector.is_road_win(Color::Black));
    }

    #[test]
    fn test_road_away_from_corner() {
        let board = BoardState::from_rows(&[
            " | |b| ",
            " |b|b| ",
            " |b| | ",
            " |b| | ",
        ])
        .unwrap();

        assert!(WinDetector::new(&board).is_road_win(Color::Black));
    }

    #[test]
    fn test_horizontal_road_through_middle() {
        let board = BoardState::from_rows(&[
            " | | | ",
            "b|b| | ",
            " |b|Cb|b",
            " | | | ",
        ])
        .unwrap();

        assert!(WinDetector::new(&board).is_road_win(Color::Black));
    }

    #[test]
    fn test_wall_breaks_road() {
        let board = BoardState::from_rows(&["w| | ", "Sw| | ", "w| | "]).unwrap();

        assert!(!WinDetector::new(&board).is_road_win(Color::White));
    }

    #[test]
    fn test_winding_road() {
        let board = BoardState::from_rows(&[
            " | | |w|",
            "w|w|w|w|",
            "w| | | |",
            "w|w|w|w|",
            " | | |w|",
        ])
        .unwrap();

        assert!(WinDetector::new(&board).is_road_win(Color::White));
    }

    #[test]
    fn test_flat_win() {
        let board = BoardState::from_rows(&[
            "w  | w  | Sb",
            "w  | b  | Sb",
            "Cb | Cw | Sb",
        ])
        .unwrap();

        let result = WinDetector::new(&board).check_flat_win();

        assert!(result.is_winner(Color::White));
        assert_eq!(result.kind(), WinKind::Flat);
    }

    #[test]
    fn test_flat_draw() {
        let board = BoardState::from_rows(&["w|b| ", " | | ", " | | "]).unwrap();
        let result = WinDetector::new(&board).check_flat_win();

        assert!(matches!(result, GameResult::Draw { .. }));
        assert!(!result.has_winner());
        assert_eq!(result.kind(), WinKind::None);
    }

    #[test]
    fn test_double_road_goes_to_mover() {
        let board = BoardState::from_rows(&["w|b| ", "w|b| ", "w|b| "]).unwrap();
        let result = WinDetector::new(&board).check_win(Color::Black).unwrap();

        assert_eq!(
            result,
            GameResult::Road {
                winner: Color::Black,
                double_road: true
            }
        );
    }

    #[test]
    fn test_no_result_on_open_board() {
        let board = BoardState::from_rows(&["w| | ", " | | ", " | |b"]).unwrap();

        assert_eq!(WinDetector::new(&board).check_win(Color::White), None);
    }
}
