//! Minimax integration tests: tactical positions and search contracts.

use connect_four_search::board::Board;
use connect_four_search::core::{BoardConfig, Player};
use connect_four_search::minimax::{best_move, ForcedLossPolicy, Minimax, MinimaxConfig};

fn position(moves: &[usize]) -> Board {
    Board::from_moves(BoardConfig::default(), moves).unwrap()
}

// =============================================================================
// Tactical Tests
// =============================================================================

#[test]
fn test_opening_move_is_center() {
    let mut board = Board::default();
    assert_eq!(best_move(&mut board, 1, Player::One, true), Some(3));
}

#[test]
fn test_takes_immediate_win_over_block() {
    // One: bottom row 0,1,2. Two: column 6 three high. One to move.
    let mut board = position(&[0, 6, 1, 6, 2, 6]);
    let result = Minimax::new(&mut board).search_best(Player::One);

    assert_eq!(result.column, Some(3));
    assert_eq!(result.score, f64::INFINITY);
}

#[test]
fn test_blocks_vertical_threat() {
    // Two has three stacked in column 5 and One has nothing comparable.
    let mut board = position(&[0, 5, 1, 5, 6, 5]);
    assert_eq!(board.to_play(), Player::One);

    let mut minimax = Minimax::new(&mut board);
    assert_eq!(minimax.get_best_move(2, Player::One), Some(5));
}

#[test]
fn test_finds_win_for_second_player() {
    let mut board = position(&[6, 0, 6, 1, 5, 2]);
    assert_eq!(board.to_play(), Player::One);
    board.set_to_play(Player::Two);

    let mut minimax = Minimax::new(&mut board);
    assert_eq!(minimax.get_best_move(3, Player::Two), Some(3));
}

#[test]
fn test_prefers_own_win_to_blocking() {
    // One threatens column 1 vertically, Two threatens column 5 on the bottom row.
    let mut board = position(&[1, 2, 1, 3, 1, 4]);
    assert_eq!(board.to_play(), Player::One);

    let config = MinimaxConfig::default()
        .with_max_depth(2)
        .with_forced_loss(ForcedLossPolicy::FirstLegal);
    let result = Minimax::with_config(&mut board, config).search_best(Player::One);

    assert_eq!(result.column, Some(1));
    assert_eq!(result.score, f64::INFINITY);
}

// =============================================================================
// Contract Tests
// =============================================================================

#[test]
fn test_search_leaves_board_untouched() {
    let mut board = position(&[3, 3, 2, 4, 2]);
    let before = board.clone();

    for depth in 1..=5 {
        let _ = best_move(&mut board, depth, Player::Two, true);
        assert_eq!(board, before, "board changed after depth {depth}");
    }
}

#[test]
fn test_node_counter_resets_per_decision() {
    let mut board = Board::default();
    let mut minimax = Minimax::new(&mut board);

    minimax.get_best_move(3, Player::One);
    let first = minimax.nodes_explored();
    minimax.get_best_move(3, Player::One);

    assert!(first > 0);
    assert_eq!(minimax.nodes_explored(), first);
}

#[test]
fn test_pruning_only_changes_effort() {
    for moves in [&[][..], &[3, 3, 4][..], &[0, 6, 1, 5, 3, 3][..]] {
        let start = position(moves);
        let ai = start.to_play();

        let mut board = start.clone();
        let plain = Minimax::with_config(&mut board, MinimaxConfig::default().with_pruning(false))
            .search_best(ai);
        let mut board = start.clone();
        let pruned = Minimax::with_config(&mut board, MinimaxConfig::default()).search_best(ai);

        assert_eq!(plain.column, pruned.column);
        assert_eq!(plain.score, pruned.score);
        assert!(pruned.nodes_explored <= plain.nodes_explored);
    }
}

#[test]
fn test_non_heuristic_variant_still_sees_wins() {
    let mut board = position(&[0, 6, 1, 6, 2, 5]);
    assert_eq!(best_move(&mut board, 2, Player::One, false), Some(3));
}

#[test]
fn test_finished_game_returns_no_move_only_when_full() {
    // Won but not full: moves remain legal and one is returned.
    let mut board = position(&[0, 6, 1, 6, 2, 6, 3]);
    assert!(board.is_terminal());
    assert!(best_move(&mut board, 2, Player::Two, true).is_some());
}
