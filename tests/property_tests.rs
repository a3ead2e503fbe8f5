//! Property tests for the board contracts both searches rely on.

use proptest::prelude::*;

use connect_four_search::board::{Board, MoveScope};
use connect_four_search::core::Player;
use connect_four_search::minimax::{Minimax, MinimaxConfig};

/// Replay `columns` permanently, skipping illegal ones and stopping at a win.
fn play_out(columns: &[usize]) -> Board {
    let mut board = Board::default();
    for &column in columns {
        if board.check_winner().is_some() {
            break;
        }
        let player = board.to_play();
        board.apply_permanent_move(column, player);
    }
    board
}

fn assert_gravity(board: &Board) {
    for col in 0..board.columns() {
        let filled: Vec<bool> = (0..board.rows()).map(|r| board.cell(r, col).is_some()).collect();
        let height = filled.iter().filter(|&&f| f).count();
        assert_eq!(height, board.height(col));
        // Filled cells are exactly the bottom `height` rows.
        assert!(filled
            .iter()
            .enumerate()
            .all(|(r, &f)| f == (r >= board.rows() - height)));
    }
}

proptest! {
    #[test]
    fn prop_temporary_moves_round_trip(
        setup in prop::collection::vec(0usize..7, 0..12),
        trial in prop::collection::vec(0usize..9, 0..30),
    ) {
        let mut board = play_out(&setup);
        let before = board.clone();

        let mut applied = Vec::new();
        let mut player = board.to_play();
        for column in trial {
            if let Ok(token) = board.apply_temporary_move(column, player) {
                applied.push((column, token));
                player = player.opponent();
            }
        }
        for (column, token) in applied.into_iter().rev() {
            board.undo_move(column, token);
        }

        prop_assert_eq!(board, before);
    }

    #[test]
    fn prop_gravity_holds(columns in prop::collection::vec(0usize..7, 0..60)) {
        let board = play_out(&columns);
        assert_gravity(&board);
        prop_assert_eq!(
            board.move_count(),
            (0..board.columns()).map(|c| board.height(c)).sum::<usize>()
        );
    }

    #[test]
    fn prop_scope_restores_on_drop(
        setup in prop::collection::vec(0usize..7, 0..12),
        trial in prop::collection::vec(0usize..7, 0..20),
    ) {
        let mut board = play_out(&setup);
        let before = board.clone();
        {
            let mut scope = MoveScope::new(&mut board);
            let mut player = Player::One;
            for column in trial {
                if scope.play(column, player).is_ok() {
                    player = player.opponent();
                }
            }
            assert_gravity(scope.board());
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn prop_evaluate_is_never_nan(columns in prop::collection::vec(0usize..7, 0..30)) {
        let board = play_out(&columns);
        if board.check_winner().is_none() {
            prop_assert!(!board.evaluate(Player::One).is_nan());
            prop_assert!(!board.evaluate(Player::Two).is_nan());
        }
    }

    #[test]
    fn prop_legal_moves_are_open_columns(columns in prop::collection::vec(0usize..7, 0..45)) {
        let board = play_out(&columns);
        let expected: Vec<usize> = (0..board.columns())
            .filter(|&c| board.cell(0, c).is_none())
            .collect();
        prop_assert_eq!(board.available_moves(), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_alpha_beta_matches_plain_minimax(
        columns in prop::collection::vec(0usize..7, 0..10),
        depth in 0u32..4,
    ) {
        let start = play_out(&columns);
        let ai = start.to_play();

        let mut board = start.clone();
        let plain = Minimax::with_config(
            &mut board,
            MinimaxConfig::default().with_max_depth(depth).with_pruning(false),
        )
        .search_best(ai);

        let mut board = start.clone();
        let pruned = Minimax::with_config(
            &mut board,
            MinimaxConfig::default().with_max_depth(depth),
        )
        .search_best(ai);

        prop_assert_eq!(plain.column, pruned.column);
        prop_assert_eq!(plain.score, pruned.score);
        prop_assert!(pruned.nodes_explored <= plain.nodes_explored);
        prop_assert_eq!(board, start);
    }
}
