//! The board and its rules.
//!
//! Row 0 is the top row and row `rows - 1` the bottom one; tokens fall to the
//! lowest empty cell of their column. A per-column height makes placement and
//! legality O(1), and keeps the gravity invariant checkable on undo.
//!
//! ```text
//! row 0  [ ][ ][ ][ ][ ][ ][ ]   <- a column is legal while this cell is empty
//! row 1  [ ][ ][ ][ ][ ][ ][ ]
//!  ...
//! row 5  [ ][ ][ ][O][ ][ ][ ]   <- first token of a column lands here
//!         0  1  2  3  4  5  6
//! ```

use serde::{Deserialize, Serialize};

use super::lines::{all_windows, Window};
use crate::core::{BoardConfig, Player, CONNECT};
use crate::error::{BoardSetupError, ConfigError, MoveError};

/// Row at which a temporary move landed.
///
/// Needed to undo exactly that move later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveToken(usize);

impl MoveToken {
    /// The landing row.
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }
}

/// State of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Someone completed a line of four.
    Winner(Player),
    /// Board full, no line.
    Draw,
    /// Game continues.
    InProgress,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Reward in `[0, 1]` from `player`'s point of view: 1 win, 0.5 draw, 0 loss.
    ///
    /// Returns `None` for games still in progress.
    #[must_use]
    pub fn reward(self, player: Player) -> Option<f64> {
        match self {
            Outcome::Winner(winner) if winner == player => Some(1.0),
            Outcome::Winner(_) => Some(0.0),
            Outcome::Draw => Some(0.5),
            Outcome::InProgress => None,
        }
    }
}

/// A connect-four board.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: BoardConfig,
    /// Row-major cells, `None` = empty.
    cells: Vec<Option<Player>>,
    /// Filled cells per column, counted from the bottom.
    heights: Vec<usize>,
    to_play: Player,
    filled: usize,
    windows: Vec<Window>,
}

impl Default for Board {
    fn default() -> Self {
        Self::from_valid_config(BoardConfig::default())
    }
}

impl Board {
    /// Create an empty board.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: BoardConfig) -> Self {
        let rows = config.rows;
        let columns = config.columns;
        Self {
            cells: vec![None; rows * columns],
            heights: vec![0; columns],
            to_play: config.starting_player,
            filled: 0,
            windows: all_windows(rows, columns),
            config,
        }
    }

    /// Build a board by replaying columns permanently, alternating from the
    /// starting player.
    pub fn from_moves(config: BoardConfig, columns: &[usize]) -> Result<Self, BoardSetupError> {
        let mut board = Self::new(config)?;
        for &column in columns {
            let player = board.to_play;
            board.try_apply_permanent_move(column, player)?;
        }
        Ok(board)
    }

    // === Accessors ===

    /// The configuration this board was built from.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.config.columns
    }

    /// Contents of a cell.
    ///
    /// # Panics
    /// If the coordinates are off the board.
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        assert!(row < self.rows() && col < self.columns(), "cell ({row}, {col}) off the board");
        self.cells[row * self.columns() + col]
    }

    /// Number of tokens in a column.
    #[must_use]
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    /// Total number of tokens on the board.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.filled
    }

    /// Player whose turn it is in the real game.
    #[must_use]
    pub fn to_play(&self) -> Player {
        self.to_play
    }

    /// Override the player to move, e.g. when the orchestrator picks who starts.
    pub fn set_to_play(&mut self, player: Player) {
        self.to_play = player;
    }

    /// The 4-cell windows of this board in scan order.
    #[must_use]
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    // === Moves ===

    /// Check if a column can take another token.
    #[must_use]
    pub fn is_legal(&self, column: usize) -> bool {
        column < self.columns() && self.heights[column] < self.rows()
    }

    /// Legal columns, left to right. Empty when the board is full.
    #[must_use]
    pub fn available_moves(&self) -> Vec<usize> {
        (0..self.columns()).filter(|&c| self.is_legal(c)).collect()
    }

    /// Drop a token without changing whose turn it is.
    ///
    /// Returns the landing row, which must be passed back to `undo_move`.
    pub fn apply_temporary_move(
        &mut self,
        column: usize,
        player: Player,
    ) -> Result<MoveToken, MoveError> {
        if column >= self.columns() {
            return Err(MoveError::OutOfRange {
                column,
                columns: self.columns(),
            });
        }
        if self.heights[column] >= self.rows() {
            return Err(MoveError::ColumnFull { column });
        }

        let row = self.rows() - 1 - self.heights[column];
        let idx = row * self.columns() + column;
        self.cells[idx] = Some(player);
        self.heights[column] += 1;
        self.filled += 1;
        Ok(MoveToken(row))
    }

    /// Remove the token placed by a temporary move.
    ///
    /// # Panics
    /// If `token` is not the topmost token of `column`: undoing out of LIFO
    /// order (or without a matching apply) would break gravity, and always
    /// indicates a bug in the caller.
    pub fn undo_move(&mut self, column: usize, token: MoveToken) {
        assert!(column < self.columns(), "undo in column {column} off the board");
        let height = self.heights[column];
        assert!(height > 0, "undo in empty column {column}");
        let top = self.rows() - height;
        assert_eq!(
            token.row(),
            top,
            "undo out of order in column {column}: token row {}, top row {top}",
            token.row()
        );

        let idx = top * self.columns() + column;
        self.cells[idx] = None;
        self.heights[column] -= 1;
        self.filled -= 1;
    }

    /// Drop a token and pass the turn to the other player.
    ///
    /// Returns `false` (and leaves the board untouched) if the move is illegal.
    pub fn apply_permanent_move(&mut self, column: usize, player: Player) -> bool {
        self.try_apply_permanent_move(column, player).is_ok()
    }

    /// `apply_permanent_move` reporting why a move was rejected.
    pub fn try_apply_permanent_move(
        &mut self,
        column: usize,
        player: Player,
    ) -> Result<MoveToken, MoveError> {
        let token = self.apply_temporary_move(column, player)?;
        self.to_play = player.opponent();
        Ok(token)
    }

    // === Game state ===

    /// Check if every column is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Owner of the first complete line found in scan order.
    #[must_use]
    pub fn check_winner(&self) -> Option<Player> {
        self.winning_window().and_then(|w| self.cell(w.row, w.col))
    }

    /// Coordinates of the first complete line, for highlighting.
    #[must_use]
    pub fn winning_line(&self) -> Option<[(usize, usize); CONNECT]> {
        self.winning_window().map(Window::coords)
    }

    fn winning_window(&self) -> Option<Window> {
        self.windows.iter().copied().find(|&window| {
            let mut cells = window.cells().map(|(r, c)| self.cell(r, c));
            match cells.next().flatten() {
                Some(first) => cells.all(|cell| cell == Some(first)),
                None => false,
            }
        })
    }

    /// Check if the game is over (line completed or board full).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.check_winner().is_some()
    }

    /// Result of the game so far.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.check_winner() {
            Some(player) => Outcome::Winner(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.available_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.to_play(), Player::One);
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert!(board.check_winner().is_none());
    }

    #[test]
    fn test_gravity() {
        let mut board = Board::default();
        let first = board.apply_temporary_move(2, Player::One).unwrap();
        let second = board.apply_temporary_move(2, Player::Two).unwrap();

        assert_eq!(first.row(), 5);
        assert_eq!(second.row(), 4);
        assert_eq!(board.cell(5, 2), Some(Player::One));
        assert_eq!(board.cell(4, 2), Some(Player::Two));
        assert_eq!(board.height(2), 2);
    }

    #[test]
    fn test_temporary_move_keeps_turn() {
        let mut board = Board::default();
        board.apply_temporary_move(0, Player::One).unwrap();
        assert_eq!(board.to_play(), Player::One);

        assert!(board.apply_permanent_move(1, Player::One));
        assert_eq!(board.to_play(), Player::Two);
    }

    #[test]
    fn test_illegal_moves() {
        let mut board = Board::default();
        for _ in 0..6 {
            board.apply_temporary_move(4, Player::One).unwrap();
        }

        assert_eq!(
            board.apply_temporary_move(4, Player::Two),
            Err(MoveError::ColumnFull { column: 4 })
        );
        assert_eq!(
            board.apply_temporary_move(7, Player::Two),
            Err(MoveError::OutOfRange { column: 7, columns: 7 })
        );
        assert!(!board.apply_permanent_move(4, Player::Two));
        assert_eq!(board.to_play(), Player::One);
        assert!(!board.available_moves().contains(&4));
    }

    #[test]
    fn test_undo_restores_board() {
        let mut board = Board::default();
        let before = board.clone();

        let a = board.apply_temporary_move(3, Player::One).unwrap();
        let b = board.apply_temporary_move(3, Player::Two).unwrap();
        board.undo_move(3, b);
        board.undo_move(3, a);

        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "undo out of order")]
    fn test_undo_out_of_order_panics() {
        let mut board = Board::default();
        let a = board.apply_temporary_move(3, Player::One).unwrap();
        let _b = board.apply_temporary_move(3, Player::Two).unwrap();
        board.undo_move(3, a);
    }

    #[test]
    #[should_panic(expected = "undo in empty column")]
    fn test_undo_without_apply_panics() {
        let mut board = Board::default();
        board.undo_move(0, MoveToken(5));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for c in 1..5 {
            board.apply_temporary_move(c, Player::Two).unwrap();
        }
        assert_eq!(board.check_winner(), Some(Player::Two));
        assert_eq!(board.winning_line(), Some([(5, 1), (5, 2), (5, 3), (5, 4)]));
        assert_eq!(board.outcome(), Outcome::Winner(Player::Two));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.apply_temporary_move(6, Player::One).unwrap();
        }
        assert_eq!(board.check_winner(), Some(Player::One));
    }

    #[test]
    fn test_diagonal_wins() {
        // `/` diagonal: One at (5,0), (4,1), (3,2), (2,3).
        let board = Board::from_moves(
            BoardConfig::default(),
            &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3],
        )
        .unwrap();
        assert_eq!(board.check_winner(), Some(Player::One));
        assert_eq!(board.winning_line(), Some([(5, 0), (4, 1), (3, 2), (2, 3)]));

        // `\` diagonal, mirrored.
        let board = Board::from_moves(
            BoardConfig::default(),
            &[6, 5, 5, 4, 4, 3, 4, 3, 3, 0, 3],
        )
        .unwrap();
        assert_eq!(board.check_winner(), Some(Player::One));
        assert_eq!(board.winning_line(), Some([(2, 3), (3, 4), (4, 5), (5, 6)]));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let mut board = Board::default();
        for c in 0..3 {
            board.apply_temporary_move(c, Player::One).unwrap();
        }
        assert!(board.check_winner().is_none());
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_outcome_rewards() {
        assert_eq!(Outcome::Winner(Player::One).reward(Player::One), Some(1.0));
        assert_eq!(Outcome::Winner(Player::One).reward(Player::Two), Some(0.0));
        assert_eq!(Outcome::Draw.reward(Player::Two), Some(0.5));
        assert_eq!(Outcome::InProgress.reward(Player::One), None);
    }

    #[test]
    fn test_from_moves_rejects_illegal() {
        let err = Board::from_moves(BoardConfig::default(), &[0, 0, 0, 0, 0, 0, 0]).unwrap_err();
        assert_eq!(err, BoardSetupError::Move(MoveError::ColumnFull { column: 0 }));
    }
}
