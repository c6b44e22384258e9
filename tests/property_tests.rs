//! Property tests for board and move invariants.

use proptest::prelude::*;

use tak_rules::board::{BoardState, Stack};
use tak_rules::core::{Color, Direction, GameConfig, Piece, PieceKind, Square};
use tak_rules::notation::MoveDescriptor;
use tak_rules::rules::{MoveEngine, TakRules};

fn piece() -> impl Strategy<Value = Piece> {
    (any::<bool>(), 0u8..3).prop_map(|(white, kind)| {
        let color = if white { Color::White } else { Color::Black };
        let kind = match kind {
            0 => PieceKind::Flat,
            1 => PieceKind::Wall,
            _ => PieceKind::Capstone,
        };
        Piece::new(color, kind)
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn board() -> impl Strategy<Value = BoardState> {
    (3usize..=8).prop_flat_map(|size| {
        let stacks = prop::collection::vec(prop::collection::vec(piece(), 0..4), size * size);
        stacks.prop_map(move |stacks| {
            let empty = BoardState::new(size);
            empty
                .squares()
                .zip(stacks)
                .fold(empty.clone(), |board, (square, pieces)| {
                    board.with_stack(square, pieces.into_iter().collect::<Stack>())
                })
        })
    })
}

proptest! {
    /// Flat counts only ever see flats on top.
    #[test]
    fn prop_flat_counts_ignore_walls_and_capstones(board in board()) {
        let counts = board.flat_counts();

        for color in Color::ALL {
            let expected = board
                .squares()
                .filter(|&square| board.top(square) == Some(Piece::flat(color)))
                .count();
            prop_assert_eq!(counts[color], expected);
        }
    }

    /// A structurally valid movement drops exactly what it picks up and stays on the board.
    #[test]
    fn prop_valid_movement_is_consistent(
        size in 3usize..=8,
        row in 0u8..8,
        column in 0u8..8,
        direction in direction(),
        drops in prop::collection::vec(1u8..=3, 1..=4),
    ) {
        let origin = Square::new(row % size as u8, column % size as u8);
        let ptn = MoveDescriptor::movement(origin, direction, &drops);

        if ptn.is_valid(size, 1, 21, false) {
            let sum: usize = drops.iter().map(|&d| usize::from(d)).sum();
            prop_assert_eq!(ptn.piece_count, Some(sum));
            prop_assert_eq!(ptn.stack_total(), sum);
            prop_assert!((0..size as i32).contains(&ptn.row_trajectory()));
            prop_assert!((0..size as i32).contains(&ptn.column_trajectory()));
        }
    }

    /// Placing grows the target square by one and draws one piece from the reserve.
    #[test]
    fn prop_placement_adds_one_piece(
        board in board(),
        row in 0u8..8,
        column in 0u8..8,
        kind in 0u8..3,
        white in any::<bool>(),
    ) {
        let size = board.size();
        let square = Square::new(row % size as u8, column % size as u8);
        let board = board.with_stack(square, Stack::new());
        let kind = [PieceKind::Flat, PieceKind::Wall, PieceKind::Capstone][usize::from(kind)];
        let color = if white { Color::White } else { Color::Black };

        let rules = TakRules::new(GameConfig::for_size(size).unwrap().with_capstones(1));
        let reserve = rules.starting_reserve(color);
        let notation = MoveDescriptor::placement(square, kind).notation;

        let applied = rules.attempt_move(&board, &reserve, &notation, false).unwrap();

        prop_assert_eq!(applied.board.height(square), 1);
        prop_assert_eq!(applied.board.piece_count(), board.piece_count() + 1);
        prop_assert_eq!(
            u32::from(applied.reserve.capstones) + u32::from(applied.reserve.pieces) + 1,
            u32::from(reserve.capstones) + u32::from(reserve.pieces)
        );
    }

    /// A legal movement never creates or destroys pieces.
    #[test]
    fn prop_movement_preserves_piece_count(
        board in board(),
        row in 0u8..8,
        column in 0u8..8,
        direction in direction(),
        drops in prop::collection::vec(1u8..=3, 1..=4),
    ) {
        let size = board.size();
        let origin = Square::new(row % size as u8, column % size as u8);
        let Some(mover) = board.top(origin).map(|piece| piece.color) else {
            return Ok(());
        };
        let ptn = MoveDescriptor::movement(origin, direction, &drops);

        if let Ok(outcome) = MoveEngine::new(&ptn, &board, mover, false).apply() {
            prop_assert_eq!(outcome.placed, None);
            prop_assert_eq!(outcome.board.piece_count(), board.piece_count());
            prop_assert_eq!(
                outcome.board.height(origin),
                board.height(origin) - ptn.stack_total()
            );
        }
    }
}
