//! Scoped temporary moves.
//!
//! `MoveScope` borrows the board mutably and records every temporary move
//! made through it. Dropping the scope undoes whatever is still recorded in
//! reverse order, so a search cannot leave a token behind on any exit path,
//! early return and `?` included.
//!
//! ```
//! use connect_four_search::board::{Board, MoveScope};
//! use connect_four_search::core::Player;
//!
//! let mut board = Board::default();
//! {
//!     let mut scope = MoveScope::new(&mut board);
//!     scope.play(3, Player::One).unwrap();
//!     scope.play(3, Player::Two).unwrap();
//!     assert_eq!(scope.board().move_count(), 2);
//! }
//! assert_eq!(board.move_count(), 0);
//! ```

use smallvec::SmallVec;

use super::grid::{Board, MoveToken};
use crate::core::Player;
use crate::error::MoveError;

/// Temporary moves on a borrowed board, undone on drop.
#[derive(Debug)]
pub struct MoveScope<'a> {
    board: &'a mut Board,
    /// Applied `(column, token)` pairs, oldest first.
    played: SmallVec<[(usize, MoveToken); 64]>,
}

impl<'a> MoveScope<'a> {
    /// Open a scope with no moves applied yet.
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            played: SmallVec::new(),
        }
    }

    /// Apply a temporary move and record it for undo.
    pub fn play(&mut self, column: usize, player: Player) -> Result<MoveToken, MoveError> {
        let token = self.board.apply_temporary_move(column, player)?;
        self.played.push((column, token));
        Ok(token)
    }

    /// Undo the most recent recorded move. Returns its column.
    pub fn undo_last(&mut self) -> Option<usize> {
        let (column, token) = self.played.pop()?;
        self.board.undo_move(column, token);
        Some(column)
    }

    /// Undo every recorded move, newest first.
    pub fn undo_all(&mut self) {
        while self.undo_last().is_some() {}
    }

    /// Number of moves currently applied through this scope.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.played.len()
    }

    /// Read access to the board in its current (temporarily modified) state.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Mutable access for nested searches.
    ///
    /// Anything applied through this reference must be undone before the
    /// next call on the scope; opening a nested `MoveScope` on it does that.
    pub fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveScope<'_> {
    fn drop(&mut self) {
        self.undo_all();
    }
}
