//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The AI is the maximizing side. Each top-level move is searched with a
//! full (-inf, +inf) window, so its score is exact and pruning never changes
//! which move is chosen, only how many nodes it takes.
//!
//! Wins are checked before the depth cutoff: a finished game scores +/-inf
//! no matter how deep it was found, and `Board::evaluate` only ever sees
//! positions without a winner.

use tracing::{debug, warn};

use crate::board::{Board, MoveScope};
use crate::core::{Player, SearchRng};

use super::config::{ForcedLossPolicy, MinimaxConfig};

/// Result of a minimax decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimaxResult {
    /// Chosen column. `None` only when the board has no legal move.
    pub column: Option<usize>,

    /// Score of the best move from the AI's point of view. Stays -inf when
    /// the column came from the forced-loss fallback.
    pub score: f64,

    /// Positions visited by the recursive search.
    pub nodes_explored: u64,
}

/// Minimax search over a borrowed board.
///
/// Stateless across decisions apart from the node counter, which is reset at
/// the start of each one. The board is restored before every method returns.
pub struct Minimax<'a> {
    board: &'a mut Board,
    config: MinimaxConfig,
    nodes_explored: u64,
    rng: SearchRng,
}

impl<'a> Minimax<'a> {
    /// Create a search with the default configuration.
    pub fn new(board: &'a mut Board) -> Self {
        Self::with_config(board, MinimaxConfig::default())
    }

    /// Create a search with a custom configuration.
    pub fn with_config(board: &'a mut Board, config: MinimaxConfig) -> Self {
        let rng = SearchRng::new(config.seed);
        Self {
            board,
            config,
            nodes_explored: 0,
            rng,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Nodes explored by the most recent decision.
    #[must_use]
    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    /// Best column for `ai_player` searching `max_depth` plies.
    ///
    /// Heuristic, pruning and fallback settings come from the configuration;
    /// its stored depth is left alone.
    pub fn get_best_move(&mut self, max_depth: u32, ai_player: Player) -> Option<usize> {
        self.decide(ai_player, max_depth).column
    }

    /// Run a full decision with the configured depth.
    pub fn search_best(&mut self, ai_player: Player) -> MinimaxResult {
        self.decide(ai_player, self.config.max_depth)
    }

    fn decide(&mut self, ai_player: Player, max_depth: u32) -> MinimaxResult {
        let moves = self.board.available_moves();
        let mut search = AlphaBeta {
            config: &self.config,
            max_depth,
            ai_player,
            nodes: 0,
        };

        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;

        for &column in &moves {
            let mut scope = MoveScope::new(self.board);
            if scope.play(column, ai_player).is_err() {
                continue;
            }
            let score = search.search(scope.board_mut(), 1, false, f64::NEG_INFINITY, f64::INFINITY);
            drop(scope);

            // Strict comparison keeps the leftmost of equally scored moves.
            if score > best_score {
                best_score = score;
                best_move = Some(column);
            }
        }
        self.nodes_explored = search.nodes;

        if best_score == f64::NEG_INFINITY && !moves.is_empty() {
            best_move = match self.config.forced_loss {
                ForcedLossPolicy::Random => self.rng.choose(&moves).copied(),
                ForcedLossPolicy::FirstLegal => moves.first().copied(),
            };
            warn!(
                player = %ai_player,
                column = ?best_move,
                "every move loses against best play, falling back"
            );
        }

        debug!(
            player = %ai_player,
            column = ?best_move,
            score = best_score,
            nodes = self.nodes_explored,
            depth = max_depth,
            "minimax decision"
        );

        MinimaxResult {
            column: best_move,
            score: best_score,
            nodes_explored: self.nodes_explored,
        }
    }
}

/// Recursive state for one decision, kept apart from the board borrow.
struct AlphaBeta<'c> {
    config: &'c MinimaxConfig,
    max_depth: u32,
    ai_player: Player,
    nodes: u64,
}

impl AlphaBeta<'_> {
    fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes += 1;

        match board.check_winner() {
            Some(winner) if winner == self.ai_player => return f64::INFINITY,
            Some(_) => return f64::NEG_INFINITY,
            None => {}
        }

        if board.is_full() || depth >= self.max_depth {
            return if self.config.use_heuristic {
                board.evaluate(self.ai_player)
            } else {
                0.0
            };
        }

        let mover = if maximizing {
            self.ai_player
        } else {
            self.ai_player.opponent()
        };
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for column in board.available_moves() {
            let mut scope = MoveScope::new(board);
            if scope.play(column, mover).is_err() {
                continue;
            }
            let score = self.search(scope.board_mut(), depth + 1, !maximizing, alpha, beta);
            drop(scope);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            // The opponent would never allow the remaining siblings.
            if self.config.pruning && alpha >= beta {
                break;
            }
        }
        best
    }
}

/// One-shot decision with default settings apart from depth and heuristic.
pub fn best_move(
    board: &mut Board,
    max_depth: u32,
    ai_player: Player,
    use_heuristic: bool,
) -> Option<usize> {
    let config = MinimaxConfig::default()
        .with_max_depth(max_depth)
        .with_heuristic(use_heuristic);
    Minimax::with_config(board, config).search_best(ai_player).column
}
