//! Board configuration.
//!
//! Dimensions, player symbols and heuristic weights are passed into the
//! board at construction instead of living in global constants:
//! - `BoardConfig`: grid shape, rendering symbols, starting player, column weights
//! - `EvalWeights`: pattern bonuses used by the heuristic evaluation

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::ConfigError;

/// Length of a winning line.
pub const CONNECT: usize = 4;

/// Positional weights for the standard seven-column board.
pub const STANDARD_COLUMN_WEIGHTS: [f64; 7] = [40.0, 70.0, 120.0, 200.0, 120.0, 70.0, 40.0];

/// Pattern bonuses for the heuristic evaluation.
///
/// All values are from the evaluated player's point of view; the opponent's
/// patterns subtract the same amounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Three tokens and one gap in a window with at most one open end.
    pub three_in_window: f64,

    /// Two tokens and two gaps in a window with both ends open.
    pub open_two: f64,

    /// Two tokens and two gaps with exactly one open end, indexed by how many
    /// empty cells continue the line past that end. Counts beyond the table
    /// use the last entry.
    pub extendability: Vec<f64>,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            three_in_window: 900_000.0,
            open_two: 50_000.0,
            extendability: vec![0.0, 0.0, 10_000.0, 20_000.0, 30_000.0, 40_000.0],
        }
    }
}

impl EvalWeights {
    /// Check that every bonus is finite, so evaluations never turn NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.three_in_window.is_finite() {
            return Err(ConfigError::NonFiniteEval { field: "three_in_window" });
        }
        if !self.open_two.is_finite() {
            return Err(ConfigError::NonFiniteEval { field: "open_two" });
        }
        if !self.extendability.iter().all(|w| w.is_finite()) {
            return Err(ConfigError::NonFiniteEval { field: "extendability" });
        }
        Ok(())
    }

    /// Bonus for a two-token window whose single open end extends `free`
    /// empty cells.
    #[must_use]
    pub fn extendability_score(&self, free: usize) -> f64 {
        match self.extendability.last() {
            None => 0.0,
            Some(&cap) => self.extendability.get(free).copied().unwrap_or(cap),
        }
    }
}

/// Configuration for a board.
///
/// ```
/// use connect_four_search::core::{BoardConfig, Player};
///
/// let config = BoardConfig::default()
///     .with_dimensions(5, 8)
///     .with_symbols(['R', 'Y'])
///     .with_starting_player(Player::Two);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.column_weights.len(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub columns: usize,

    /// Render symbols for `Player::One` and `Player::Two`.
    pub symbols: [char; 2],

    /// Render symbol for empty cells.
    pub empty_symbol: char,

    /// Player to move on a fresh board.
    pub starting_player: Player,

    /// Positional weight of a token in each column.
    pub column_weights: Vec<f64>,

    /// Pattern bonuses.
    pub eval: EvalWeights,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 7,
            symbols: ['O', 'X'],
            empty_symbol: ' ',
            starting_player: Player::One,
            column_weights: STANDARD_COLUMN_WEIGHTS.to_vec(),
            eval: EvalWeights::default(),
        }
    }
}

impl BoardConfig {
    /// Change the grid shape. Column weights are regenerated for the new width.
    #[must_use]
    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self.column_weights = column_weights_for(columns);
        self
    }

    /// Change the player render symbols.
    #[must_use]
    pub fn with_symbols(mut self, symbols: [char; 2]) -> Self {
        self.symbols = symbols;
        self
    }

    /// Change who moves first.
    #[must_use]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Replace the positional weights.
    #[must_use]
    pub fn with_column_weights(mut self, weights: Vec<f64>) -> Self {
        self.column_weights = weights;
        self
    }

    /// Symbol for a player.
    #[must_use]
    pub fn symbol(&self, player: Player) -> char {
        self.symbols[player.index()]
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < CONNECT || self.columns < CONNECT {
            return Err(ConfigError::TooSmall {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.column_weights.len() != self.columns {
            return Err(ConfigError::WeightCount {
                expected: self.columns,
                actual: self.column_weights.len(),
            });
        }
        if let Some(index) = self.column_weights.iter().position(|w| !w.is_finite()) {
            return Err(ConfigError::NonFiniteWeight { index });
        }
        self.eval.validate()?;
        if self.symbols[0] == self.symbols[1] {
            return Err(ConfigError::DuplicateSymbols(self.symbols[0]));
        }
        Ok(())
    }
}

/// Center-peaked symmetric weights for an arbitrary width.
///
/// Seven columns reproduce `STANDARD_COLUMN_WEIGHTS`; other widths fall off
/// linearly from 200 at the center to 40 at the edges.
#[must_use]
pub fn column_weights_for(columns: usize) -> Vec<f64> {
    if columns == STANDARD_COLUMN_WEIGHTS.len() {
        return STANDARD_COLUMN_WEIGHTS.to_vec();
    }
    if columns <= 1 {
        return vec![200.0; columns];
    }

    let span = (columns - 1) as f64;
    (0..columns)
        .map(|c| {
            // 0.0 at the center, 1.0 at either edge.
            let dist = (2.0 * c as f64 - span).abs() / span;
            (200.0 - 160.0 * dist).round()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 7);
        assert_eq!(config.symbol(Player::One), 'O');
        assert_eq!(config.symbol(Player::Two), 'X');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_weights_are_symmetric() {
        for columns in 4..12 {
            let weights = column_weights_for(columns);
            assert_eq!(weights.len(), columns);
            for c in 0..columns {
                assert_eq!(weights[c], weights[columns - 1 - c]);
            }
            assert_eq!(weights[0], 40.0);
        }
        assert_eq!(column_weights_for(7), STANDARD_COLUMN_WEIGHTS.to_vec());
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let small = BoardConfig::default().with_dimensions(3, 7);
        assert_eq!(
            small.validate(),
            Err(ConfigError::TooSmall { rows: 3, columns: 7 })
        );

        let weights = BoardConfig::default().with_column_weights(vec![1.0; 5]);
        assert_eq!(
            weights.validate(),
            Err(ConfigError::WeightCount { expected: 7, actual: 5 })
        );

        let mut nan = BoardConfig::default();
        nan.column_weights[2] = f64::NAN;
        assert_eq!(nan.validate(), Err(ConfigError::NonFiniteWeight { index: 2 }));

        let mut eval = BoardConfig::default();
        eval.eval.open_two = f64::NAN;
        assert_eq!(
            eval.validate(),
            Err(ConfigError::NonFiniteEval { field: "open_two" })
        );

        let symbols = BoardConfig::default().with_symbols(['A', 'A']);
        assert_eq!(symbols.validate(), Err(ConfigError::DuplicateSymbols('A')));
    }

    #[test]
    fn test_extendability_is_capped() {
        let eval = EvalWeights::default();
        assert_eq!(eval.extendability_score(0), 0.0);
        assert_eq!(eval.extendability_score(1), 0.0);
        assert_eq!(eval.extendability_score(3), 20_000.0);
        assert_eq!(eval.extendability_score(5), 40_000.0);
        assert_eq!(eval.extendability_score(9), 40_000.0);
    }

    #[test]
    fn test_non_finite_eval_weights_are_rejected() {
        let mut config = BoardConfig::default();
        config.eval.extendability = vec![0.0, f64::INFINITY];
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteEval { field: "extendability" })
        );

        config.eval.extendability = vec![0.0];
        config.eval.three_in_window = f64::NEG_INFINITY;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteEval { field: "three_in_window" })
        );
        assert!(EvalWeights::default().validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::default().with_starting_player(Player::Two);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
