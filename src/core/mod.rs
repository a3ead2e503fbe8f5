//! Core types shared by the board and both search engines: players,
//! configuration and the seeded RNG.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{column_weights_for, BoardConfig, EvalWeights, CONNECT, STANDARD_COLUMN_WEIGHTS};
pub use player::Player;
pub use rng::SearchRng;
