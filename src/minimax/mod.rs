//! Minimax with alpha-beta pruning.
//!
//! A fixed-depth search that plays every candidate move on the shared board
//! through a `MoveScope`, recurses, and lets the scope undo it. Leaves are
//! scored with `Board::evaluate` (or a flat 0), finished games with +/-inf.

pub mod config;
pub mod search;

pub use config::{ForcedLossPolicy, MinimaxConfig};
pub use search::{best_move, Minimax, MinimaxResult};
