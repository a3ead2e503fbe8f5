//! # connect-four-search
//!
//! Adversarial search for connect four: a board with reversible moves, a
//! depth-bounded alpha-beta minimax and a Monte Carlo Tree Search that keeps
//! its tree across real moves.
//!
//! ## Design Principles
//!
//! 1. **One shared board**: searches never clone the position. They apply
//!    temporary moves and undo them in strict LIFO order through
//!    `MoveScope`, so the board is restored on every exit path.
//!
//! 2. **Illegal moves are values**: humans and external move sources propose
//!    bad columns routinely, so moves return `Result`/`bool`. Undoing out of
//!    order is a caller bug and panics.
//!
//! 3. **Configuration over constants**: board size, symbols, heuristic
//!    weights and search parameters live in serde structs.
//!
//! ## Modules
//!
//! - `core`: players, configuration, seeded RNG
//! - `board`: grid, rules, heuristic, scoped moves, rendering
//! - `minimax`: alpha-beta search for a single decision
//! - `mcts`: persistent Monte Carlo Tree Search
//! - `error`: error types

pub mod board;
pub mod core;
pub mod error;
pub mod mcts;
pub mod minimax;

// Re-export commonly used types
pub use crate::core::{BoardConfig, EvalWeights, Player, SearchRng};

pub use crate::board::{Board, GridSnapshot, MoveScope, MoveToken, Outcome};

pub use crate::error::{BoardSetupError, ConfigError, MoveError, SearchError};

pub use crate::minimax::{best_move, ForcedLossPolicy, Minimax, MinimaxConfig, MinimaxResult};

pub use crate::mcts::{
    MCTSConfig, MCTSEngine, MCTSNode, MCTSTree, MoveStats, NodeId, SearchStats, TreeStats,
};
