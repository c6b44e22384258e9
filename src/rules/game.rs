//! Entry points for an orchestration layer.
//!
//! `TakRules` strings the pieces together: parse, structural validation,
//! board validation, application, and win checks. It holds no game state;
//! turn order, history and player bookkeeping stay with the caller.

use tracing::debug;

use super::engine::{MoveEngine, MoveOutcome};
use super::win::{GameResult, WinDetector};
use crate::board::BoardState;
use crate::core::{Color, ColorMap, GameConfig, PieceKind, PlayerReserve};
use crate::error::{MoveError, MoveRejected};
use crate::notation::MoveDescriptor;

/// A legal move's effect on the board and the mover's reserve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    /// The parsed move.
    pub descriptor: MoveDescriptor,

    /// The new snapshot.
    pub board: BoardState,

    /// Kind drawn from the reserve; `None` for movements.
    pub placed: Option<PieceKind>,

    /// The mover's reserve after the move.
    pub reserve: PlayerReserve,
}

/// Rules for one configured game.
///
/// ## Example
///
/// ```
/// use tak_rules::core::{Color, GameConfig};
/// use tak_rules::rules::TakRules;
///
/// let rules = TakRules::new(GameConfig::for_size(5).unwrap());
/// let board = rules.new_board();
/// let white = rules.starting_reserve(Color::White);
///
/// let applied = rules.attempt_move(&board, &white, "a1", true).unwrap();
/// assert_eq!(applied.reserve.pieces, 20);
///
/// let rejected = rules.attempt_move(&applied.board, &white, "a1", false).unwrap_err();
/// assert_eq!(rejected.errors().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TakRules {
    config: GameConfig,
}

impl TakRules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// An empty board of the configured size.
    #[must_use]
    pub fn new_board(&self) -> BoardState {
        BoardState::new(self.config.board_size)
    }

    /// A full starting reserve for `color`.
    #[must_use]
    pub fn starting_reserve(&self, color: Color) -> PlayerReserve {
        PlayerReserve::starting(color, &self.config)
    }

    /// Parse, validate and apply `notation` for the reserve's color.
    ///
    /// `first_ply` marks the game's first two plies. Malformed notation is
    /// reported on its own; every rule violation found at the first failing
    /// stage is reported together. On a first ply the mover's reserve pays
    /// for the opponent-colored flat.
    pub fn attempt_move(
        &self,
        board: &BoardState,
        reserve: &PlayerReserve,
        notation: &str,
        first_ply: bool,
    ) -> Result<AppliedMove, MoveRejected> {
        let descriptor = MoveDescriptor::parse(notation)?;

        let outcome = descriptor
            .validate(board.size(), reserve.capstones, reserve.pieces, first_ply)
            .and_then(|()| MoveEngine::new(&descriptor, board, reserve.color, first_ply).apply());

        let MoveOutcome { board, placed } = match outcome {
            Ok(outcome) => outcome,
            Err(errors) => {
                debug!(color = %reserve.color, notation, ?errors, "move rejected");
                return Err(MoveRejected::Illegal(errors));
            }
        };

        let reserve = match placed {
            Some(kind) => reserve.spend(kind).ok_or_else(|| exhausted_pool(kind))?,
            None => *reserve,
        };

        debug!(color = %reserve.color, ptn = %descriptor, "move applied");
        Ok(AppliedMove {
            descriptor,
            board,
            placed,
            reserve,
        })
    }

    /// Road check for both colors, with a flat result on a full board.
    #[must_use]
    pub fn check_win(&self, board: &BoardState, mover: Color) -> Option<GameResult> {
        WinDetector::new(board).check_win(mover)
    }

    /// Whether the game has ended after `mover`'s ply.
    ///
    /// Roads take precedence; otherwise the game ends on flats when the
    /// board is full or either player has no pieces of any kind left.
    #[must_use]
    pub fn is_terminal(
        &self,
        board: &BoardState,
        mover: Color,
        reserves: &ColorMap<PlayerReserve>,
    ) -> Option<GameResult> {
        let detector = WinDetector::new(board);
        if let Some(result) = detector.check_win(mover) {
            return Some(result);
        }

        let exhausted = reserves.iter().any(|(_, reserve)| reserve.is_exhausted());
        exhausted.then(|| detector.check_flat_win())
    }
}

fn exhausted_pool(kind: PieceKind) -> MoveRejected {
    let error = match kind {
        PieceKind::Capstone => MoveError::NoCapstonesLeft,
        PieceKind::Flat | PieceKind::Wall => MoveError::NoPiecesLeft,
    };
    MoveRejected::Illegal(vec![error])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Square;
    use crate::rules::WinKind;

    fn rules(size: usize) -> TakRules {
        TakRules::new(GameConfig::for_size(size).unwrap())
    }

    #[test]
    fn test_attempt_move_spends_reserve() {
        let rules = rules(5);
        let black = rules.starting_reserve(Color::Black);
        let board = rules.new_board();

        let applied = rules.attempt_move(&board, &black, "Cc3", false).unwrap();

        assert_eq!(applied.placed, Some(PieceKind::Capstone));
        assert_eq!(applied.reserve.capstones, 0);
        assert_eq!(applied.reserve.pieces, 21);
        assert_eq!(black.capstones, 1); // Original untouched
    }

    #[test]
    fn test_movement_keeps_reserve() {
        let rules = rules(3);
        let white = rules.starting_reserve(Color::White);
        let board = BoardState::from_rows(&[" | | ", " | | ", "w| | "]).unwrap();

        let applied = rules.attempt_move(&board, &white, "a1+", false).unwrap();

        assert_eq!(applied.placed, None);
        assert_eq!(applied.reserve, white);
        assert_eq!(applied.board.height(Square::new(1, 0)), 1);
    }

    #[test]
    fn test_malformed_notation() {
        let rules = rules(5);
        let white = rules.starting_reserve(Color::White);

        let rejected = rules.attempt_move(&rules.new_board(), &white, "9z", false).unwrap_err();

        assert!(matches!(rejected, MoveRejected::Malformed(_)));
    }

    #[test]
    fn test_structural_errors_come_first() {
        let rules = rules(3);
        let white = PlayerReserve::new(Color::White, 0, 10);

        let rejected = rules.attempt_move(&rules.new_board(), &white, "Cd4", false).unwrap_err();

        assert_eq!(rejected.errors()[0], MoveError::NoCapstonesLeft);
        assert_eq!(rejected.errors().len(), 3);
    }

    #[test]
    fn test_terminal_on_exhausted_reserve() {
        let rules = rules(3);
        let board = BoardState::from_rows(&["b| | ", "b| | ", "w| |w"]).unwrap();
        let reserves = ColorMap::new(|color| match color {
            Color::White => PlayerReserve::new(Color::White, 0, 0),
            Color::Black => PlayerReserve::new(Color::Black, 0, 4),
        });

        let result = rules.is_terminal(&board, Color::White, &reserves).unwrap();

        assert_eq!(result.kind(), WinKind::None); // 2-2 draw
        assert!(!result.has_winner());
    }

    #[test]
    fn test_not_terminal_mid_game() {
        let rules = rules(3);
        let board = BoardState::from_rows(&["b| | ", " | | ", "w| | "]).unwrap();
        let reserves = ColorMap::new(|color| rules.starting_reserve(color));

        assert_eq!(rules.is_terminal(&board, Color::Black, &reserves), None);
    }
}
