//! Core MCTS search loop.
//!
//! The engine keeps one tree for a whole game. Each iteration walks the tree
//! with the selection policy, expands the leaf it reaches, plays a rollout
//! from one new child and credits the result back up to the root. Every move
//! an iteration makes on the live board goes through a single `MoveScope`,
//! so the board is back in its real position when the iteration returns.

use std::borrow::BorrowMut;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::board::{Board, MoveScope};
use crate::core::{Player, SearchRng};
use crate::error::{MoveError, SearchError};

use super::config::MCTSConfig;
use super::node::NodeId;
use super::policy::{RandomRollout, SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::{MoveStats, SearchStats};
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Generic over how the live board is held: `Board` to own it, `&mut Board`
/// to borrow it from the game loop.
pub struct MCTSEngine<B: BorrowMut<Board>> {
    /// The live game board.
    board: B,

    /// Player whose wins the rollouts count.
    ai_player: Player,

    /// Search configuration.
    config: MCTSConfig,

    /// The search tree, rooted at the live position.
    tree: MCTSTree,

    /// RNG for expansion choices; rollouts get forks of it.
    rng: SearchRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy>,

    /// Statistics accumulated over every run.
    stats: SearchStats,

    /// False once the board was changed behind the tree's back.
    in_sync: bool,
}

impl<B: BorrowMut<Board>> MCTSEngine<B> {
    /// Create a new engine searching on behalf of `ai_player`.
    pub fn new(board: B, ai_player: Player, config: MCTSConfig) -> Self {
        let rng = SearchRng::new(config.seed);

        Self {
            board,
            ai_player,
            config,
            tree: MCTSTree::new(),
            rng,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomRollout),
            stats: SearchStats::default(),
            in_sync: true,
        }
    }

    /// Set a custom selection policy.
    #[must_use]
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    #[must_use]
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Run iterations until `budget` has elapsed.
    ///
    /// The clock is checked between iterations, so a run overshoots by at
    /// most one rollout.
    pub fn run_for_duration(&mut self, budget: Duration) -> Result<SearchStats, SearchError> {
        self.run(|_, start| start.elapsed() < budget)
    }

    /// Run exactly `rollouts` iterations (fewer if the node cap is hit).
    pub fn run_for_rollouts(&mut self, rollouts: u64) -> Result<SearchStats, SearchError> {
        self.run(|done, _| done < rollouts)
    }

    fn run(&mut self, keep_going: impl Fn(u64, Instant) -> bool) -> Result<SearchStats, SearchError> {
        if !self.in_sync {
            return Err(SearchError::BoardMismatch);
        }

        let start = Instant::now();
        let mut run = SearchStats::default();

        while keep_going(run.rollouts, start) {
            if self.tree.len() >= self.config.max_nodes {
                warn!(
                    nodes = self.tree.len(),
                    max_nodes = self.config.max_nodes,
                    rollouts = run.rollouts,
                    "node cap reached, stopping search early"
                );
                break;
            }
            self.iteration(&mut run)?;
        }

        run.time_us = start.elapsed().as_micros() as u64;
        self.stats.merge(&run);

        debug!(
            player = %self.ai_player,
            rollouts = run.rollouts,
            elapsed_us = run.time_us,
            tree_size = self.tree.len(),
            "mcts run finished"
        );
        Ok(run)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, run: &mut SearchStats) -> Result<(), SearchError> {
        let mut scope = MoveScope::new(self.board.borrow_mut());
        let mut current = self.tree.root();
        let mut to_move = self
            .tree
            .root_node()
            .side_to_move()
            .unwrap_or_else(|| scope.board().to_play());

        // === SELECTION ===
        while let Some((column, child)) = self.selection.select(&self.tree, current, &self.config) {
            debug_assert_eq!(self.tree.get(child).player, Some(to_move));
            scope.play(column, to_move)?;
            current = child;
            to_move = to_move.opponent();
        }

        // === EXPANSION ===
        if !scope.board().is_terminal() {
            let children: Vec<(usize, NodeId)> = scope
                .board()
                .available_moves()
                .into_iter()
                .map(|column| (column, self.tree.add_child(current, column, to_move)))
                .collect();
            run.nodes_expanded += children.len() as u64;

            if let Some(&(column, child)) = self.rng.choose(&children) {
                scope.play(column, to_move)?;
                current = child;
                to_move = to_move.opponent();
            }
        }
        run.max_depth = run.max_depth.max(self.tree.get(current).depth);

        // === SIMULATION ===
        let mut rollout_rng = self.rng.fork();
        let outcome =
            self.simulation
                .simulate(scope.board_mut(), to_move, self.ai_player, &mut rollout_rng)?;

        // === BACKPROPAGATION ===
        self.tree.backpropagate(current, self.ai_player, outcome);
        run.rollouts += 1;

        // Dropping the scope takes the selection path back off the board.
        Ok(())
    }

    /// Most visited root move, ties broken by win rate and then by column.
    ///
    /// `None` when the live position is over, nothing was explored yet, or
    /// the tree went stale after a lent board came back changed.
    #[must_use]
    pub fn best_move(&self) -> Option<usize> {
        if !self.in_sync || self.board().is_terminal() {
            return None;
        }

        let mut best = None;
        for &(column, id) in &self.tree.root_node().children {
            let node = self.tree.get(id);
            let better = match best {
                None => true,
                Some((_, visits, rate)) => {
                    node.visits > visits || (node.visits == visits && node.win_rate() > rate)
                }
            };
            if better {
                best = Some((column, node.visits, node.win_rate()));
            }
        }
        best.map(|(column, ..)| column)
    }

    /// Play `column` for the side to move on the live board and re-root.
    ///
    /// An explored child keeps its statistics and subtree; anything else
    /// starts a fresh root expanded against the new position. A stale tree
    /// is never reused, and the fresh root brings the engine back in sync.
    pub fn move_to(&mut self, column: usize) -> Result<(), MoveError> {
        let board = self.board.borrow_mut();
        let player = board.to_play();
        board.try_apply_permanent_move(column, player)?;

        let reusable = if self.in_sync {
            self.tree.root_node().child(column)
        } else {
            None
        };
        self.in_sync = true;

        match reusable {
            Some(child) => {
                let discarded = self.tree.reroot(child);
                trace!(column, retained = self.tree.len(), discarded, "re-rooted search tree");
            }
            None => {
                let discarded = self.tree.len();
                self.tree.reset();
                if !board.is_terminal() {
                    let root = self.tree.root();
                    let to_move = board.to_play();
                    for column in board.available_moves() {
                        self.tree.add_child(root, column, to_move);
                    }
                }
                trace!(column, discarded, "move not in tree, starting from a fresh root");
            }
        }
        Ok(())
    }

    /// Win credit and visits of every root move, keyed by column.
    ///
    /// Empty while the tree is stale.
    #[must_use]
    pub fn statistics(&self) -> BTreeMap<usize, MoveStats> {
        if !self.in_sync {
            return BTreeMap::new();
        }
        self.tree
            .root_node()
            .children
            .iter()
            .map(|&(column, id)| {
                let node = self.tree.get(id);
                (
                    column,
                    MoveStats {
                        wins: node.wins,
                        visits: node.visits,
                    },
                )
            })
            .collect()
    }

    /// Lend the live board to another search, e.g. a minimax opponent.
    ///
    /// The borrower must leave the position as it found it. If it does not,
    /// the tree no longer describes the board and runs fail with
    /// `SearchError::BoardMismatch` until `reset` is called.
    pub fn with_board_mut<R>(&mut self, f: impl FnOnce(&mut Board) -> R) -> R {
        let board = self.board.borrow_mut();
        let before = board.clone();
        let result = f(board);
        if *board != before {
            warn!("board changed while lent out; search tree is out of sync");
            self.in_sync = false;
        }
        result
    }

    /// Drop the whole tree and start over from the current board.
    pub fn reset(&mut self) {
        self.tree.reset();
        self.in_sync = true;
        trace!("search tree reset");
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.board.borrow()
    }

    /// Give the board back.
    pub fn into_board(self) -> B {
        self.board
    }

    /// Player whose wins the search maximizes.
    #[must_use]
    pub fn ai_player(&self) -> Player {
        self.ai_player
    }

    /// Get the search tree.
    #[must_use]
    pub fn tree(&self) -> &MCTSTree {
        &self.tree
    }

    /// Statistics accumulated over every run so far.
    #[must_use]
    pub fn search_stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}
