//! Error types.
//!
//! Illegal moves are routine (humans and external move sources propose them
//! all the time) and are always reported as values. Undoing a move out of
//! order is a bug in the caller and panics instead; see `Board::undo_move`.

use thiserror::Error;

/// An attempted move that the board rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    OutOfRange { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Invalid board configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("board must be at least 4x4 to fit a line of four, got {rows}x{columns}")]
    TooSmall { rows: usize, columns: usize },

    #[error("expected {expected} column weights, got {actual}")]
    WeightCount { expected: usize, actual: usize },

    #[error("column weight {index} is not finite")]
    NonFiniteWeight { index: usize },

    #[error("evaluation weight {field} is not finite")]
    NonFiniteEval { field: &'static str },

    #[error("both players use the symbol {0:?}")]
    DuplicateSymbols(char),
}

/// Why `Board::from_moves` could not build a position.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BoardSetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors that can occur while running a Monte Carlo search.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SearchError {
    /// A move stored in the tree could not be replayed on the live board.
    #[error("tree move rejected by board: {0}")]
    IllegalTreeMove(#[from] MoveError),

    /// The live board was changed behind the engine's back.
    #[error("live board no longer matches the search tree root")]
    BoardMismatch,
}
