//! Board and rules engine.
//!
//! ## Overview
//!
//! - `Board`: grid state, legality, win/draw detection, reversible moves
//! - `MoveScope`: temporary moves that are undone when the scope drops
//! - Heuristic evaluation (`Board::evaluate`) used at minimax leaves
//! - `GridSnapshot` and `Display` for external consumers
//!
//! Searches never clone the board. They apply temporary moves, which leave
//! `to_play` alone, and undo them in strict LIFO order. Only the game loop
//! makes permanent moves.

pub mod grid;
pub mod heuristic;
pub mod lines;
pub mod render;
pub mod scope;

pub use grid::{Board, MoveToken, Outcome};
pub use lines::Window;
pub use render::GridSnapshot;
pub use scope::MoveScope;
