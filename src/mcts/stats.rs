//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during MCTS search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Rollouts (full iterations) performed.
    pub rollouts: u64,

    /// Nodes added to the tree.
    pub nodes_expanded: u64,

    /// Deepest node a rollout started from, relative to the root at the time.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold another run's statistics into these.
    pub fn merge(&mut self, other: &SearchStats) {
        self.rollouts += other.rollouts;
        self.nodes_expanded += other.nodes_expanded;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.time_us += other.time_us;
    }

    /// Calculate rollouts per second.
    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.rollouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate average nodes added per rollout.
    #[must_use]
    pub fn avg_nodes_per_rollout(&self) -> f64 {
        if self.rollouts == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / self.rollouts as f64
        }
    }
}

/// Win credit and visit count of one root move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveStats {
    /// Credit from the point of view of the player making the move.
    pub wins: f64,
    pub visits: u32,
}

impl MoveStats {
    /// Mean credit per visit; 0 when unvisited.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / f64::from(self.visits)
        }
    }
}
