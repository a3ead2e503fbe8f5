//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

/// What to play when every move loses against best play.
///
/// All such moves score -inf, so ranking them is meaningless; the search
/// still has to return a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForcedLossPolicy {
    /// Uniformly random legal column (seeded).
    Random,
    /// Leftmost legal column.
    FirstLegal,
}

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Plies searched below the root move, counting the root move as ply 1.
    pub max_depth: u32,

    /// Score depth-cutoff leaves with the heuristic. When false they score a
    /// flat 0, which makes only forced wins and losses visible.
    pub use_heuristic: bool,

    /// Alpha-beta pruning. Disabling it gives plain minimax with identical
    /// results and more nodes explored.
    pub pruning: bool,

    /// Fallback for forced losses.
    pub forced_loss: ForcedLossPolicy,

    /// Seed for the forced-loss fallback.
    pub seed: u64,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            use_heuristic: true,
            pruning: true,
            forced_loss: ForcedLossPolicy::Random,
            seed: 42,
        }
    }
}

impl MinimaxConfig {
    /// Create a new config with custom depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with the heuristic switched on or off.
    #[must_use]
    pub fn with_heuristic(mut self, use_heuristic: bool) -> Self {
        self.use_heuristic = use_heuristic;
        self
    }

    /// Create a new config with pruning switched on or off.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Create a new config with a custom forced-loss fallback.
    #[must_use]
    pub fn with_forced_loss(mut self, policy: ForcedLossPolicy) -> Self {
        self.forced_loss = policy;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MinimaxConfig::default();
        assert_eq!(config.max_depth, 4);
        assert!(config.use_heuristic);
        assert!(config.pruning);
        assert_eq!(config.forced_loss, ForcedLossPolicy::Random);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MinimaxConfig::default()
            .with_max_depth(6)
            .with_heuristic(false)
            .with_pruning(false)
            .with_forced_loss(ForcedLossPolicy::FirstLegal)
            .with_seed(7);

        assert_eq!(config.max_depth, 6);
        assert!(!config.use_heuristic);
        assert!(!config.pruning);
        assert_eq!(config.forced_loss, ForcedLossPolicy::FirstLegal);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_serialization() {
        let config = MinimaxConfig::default().with_max_depth(2);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MinimaxConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
