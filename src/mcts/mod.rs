//! Monte Carlo Tree Search.
//!
//! ## Overview
//!
//! - **Persistent tree**: one engine lives for a whole game and re-roots its
//!   tree on every real move, so earlier search carries forward
//! - **UCB1 selection**, uniform random rollouts, per-mover win credit
//! - **Configurable policies**: selection and simulation are traits
//! - **Serializable**: tree, config and statistics can be saved/loaded
//!
//! ## Usage
//!
//! ```rust
//! use connect_four_search::board::Board;
//! use connect_four_search::core::Player;
//! use connect_four_search::mcts::{MCTSConfig, MCTSEngine};
//!
//! let mut board = Board::default();
//! let mut mcts = MCTSEngine::new(&mut board, Player::One, MCTSConfig::default());
//!
//! mcts.run_for_rollouts(500)?;
//! if let Some(column) = mcts.best_move() {
//!     mcts.move_to(column)?;
//! }
//!
//! for (column, stats) in mcts.statistics() {
//!     println!("{column}: {:.1}/{}", stats.wins, stats.visits);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use policy::{RandomRollout, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::MCTSEngine;
pub use stats::{MoveStats, SearchStats};
pub use tree::{MCTSTree, TreeStats};
