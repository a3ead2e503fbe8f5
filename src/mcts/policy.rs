//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to choose which child to descend into (UCB1)
//! - `SimulationPolicy`: How to play out a position to the end (random)

use crate::board::{Board, MoveScope};
use crate::core::{Player, SearchRng};
use crate::error::MoveError;

use super::config::MCTSConfig;
use super::node::{MCTSNode, NodeId};
use super::tree::MCTSTree;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Pick the `(column, child)` to descend into from `node`.
    ///
    /// Returns `None` when the node has no children.
    fn select(&self, tree: &MCTSTree, node: NodeId, config: &MCTSConfig) -> Option<(usize, NodeId)>;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high win rate) with exploration (low visits).
/// Formula: wins/n + c * sqrt(ln(N) / n)
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl UCB1 {
    /// UCB1 value of `child` under a parent visited `parent_visits` times.
    ///
    /// Infinite while either side is unvisited.
    #[must_use]
    pub fn score(child: &MCTSNode, parent_visits: u32, exploration_constant: f64) -> f64 {
        if child.visits == 0 || parent_visits == 0 {
            return f64::INFINITY;
        }
        let visits = f64::from(child.visits);
        let exploration = (f64::from(parent_visits).ln() / visits).sqrt();
        child.wins / visits + exploration_constant * exploration
    }
}

impl SelectionPolicy for UCB1 {
    fn select(&self, tree: &MCTSTree, node: NodeId, config: &MCTSConfig) -> Option<(usize, NodeId)> {
        let parent = tree.get(node);
        let mut best: Option<((usize, NodeId), f64)> = None;

        for &(column, child) in &parent.children {
            let score = Self::score(tree.get(child), parent.visits, config.exploration_constant);
            // Strictly greater: the first maximum wins ties.
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some(((column, child), score));
            }
        }
        best.map(|(pick, _)| pick)
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf position.
pub trait SimulationPolicy: Send + Sync {
    /// Play the position on `board` out to the end, `to_move` moving first.
    ///
    /// Returns the outcome from `reference`'s point of view: 1.0 win,
    /// 0.5 draw, 0.0 loss. The board must be restored before returning.
    fn simulate(
        &self,
        board: &mut Board,
        to_move: Player,
        reference: Player,
        rng: &mut SearchRng,
    ) -> Result<f64, MoveError>;
}

/// Random simulation policy.
///
/// Plays uniformly random legal columns, alternating sides, until the game
/// ends.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl SimulationPolicy for RandomRollout {
    fn simulate(
        &self,
        board: &mut Board,
        to_move: Player,
        reference: Player,
        rng: &mut SearchRng,
    ) -> Result<f64, MoveError> {
        let mut scope = MoveScope::new(board);
        let mut mover = to_move;

        while !scope.board().is_terminal() {
            let moves = scope.board().available_moves();
            let Some(&column) = rng.choose(&moves) else {
                break;
            };
            scope.play(column, mover)?;
            mover = mover.opponent();
        }

        // Terminal here, so there is always a reward.
        Ok(scope.board().outcome().reward(reference).unwrap_or(0.5))
    }
}
