//! MCTS node structure.
//!
//! Nodes live in the `MCTSTree` arena and refer to each other by `NodeId`.
//! A node owns its children only through the arena; the parent link is a
//! plain index used for backpropagation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Player;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Position in the arena.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One (move, resulting position) pair in the search tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSNode {
    /// Column played to reach this node. `None` for a fresh root.
    pub column: Option<usize>,

    /// Player who played `column`. `None` for a fresh root.
    pub player: Option<Player>,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// `(column, child)` pairs, left to right, columns unique.
    /// Never more than the board width, so 8 stays inline on a standard board.
    pub children: SmallVec<[(usize, NodeId); 8]>,

    /// Win credit from the point of view of `player` (draws count half).
    pub wins: f64,

    /// Backpropagations through this node.
    pub visits: u32,

    /// Depth in tree (root = 0).
    pub depth: u16,
}

impl MCTSNode {
    /// Create a node reached by `player` dropping into `column`.
    pub fn new(parent: NodeId, column: usize, player: Player, depth: u16) -> Self {
        Self {
            column: Some(column),
            player: Some(player),
            parent,
            children: SmallVec::new(),
            wins: 0.0,
            visits: 0,
            depth,
        }
    }

    /// Create a root node with no move attached.
    pub fn root() -> Self {
        Self {
            column: None,
            player: None,
            parent: NodeId::NONE,
            children: SmallVec::new(),
            wins: 0.0,
            visits: 0,
            depth: 0,
        }
    }

    /// Check if the node has been expanded.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Child reached by `column`, if explored.
    #[must_use]
    pub fn child(&self, column: usize) -> Option<NodeId> {
        self.children
            .iter()
            .find(|&&(c, _)| c == column)
            .map(|&(_, id)| id)
    }

    /// Mean credit per visit; 0 for an unvisited node.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / f64::from(self.visits)
        }
    }

    /// Side to move in this node's position, if it can be told from the node.
    ///
    /// A fresh root carries no mover; the live board decides for it.
    #[must_use]
    pub fn side_to_move(&self) -> Option<Player> {
        self.player.map(Player::opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.index(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_node_root() {
        let node = MCTSNode::root();

        assert!(node.parent.is_none());
        assert_eq!(node.depth, 0);
        assert_eq!(node.column, None);
        assert_eq!(node.player, None);
        assert_eq!(node.side_to_move(), None);
        assert_eq!(node.visits, 0);
        assert!(!node.has_children());
    }

    #[test]
    fn test_child_lookup() {
        let mut node = MCTSNode::root();
        node.children.push((0, NodeId::new(1)));
        node.children.push((3, NodeId::new(2)));

        assert_eq!(node.child(3), Some(NodeId::new(2)));
        assert_eq!(node.child(1), None);
        assert!(node.has_children());
    }

    #[test]
    fn test_win_rate() {
        let mut node = MCTSNode::new(NodeId::new(0), 2, Player::Two, 1);
        assert_eq!(node.win_rate(), 0.0);

        node.visits = 4;
        node.wins = 2.5;
        assert_eq!(node.win_rate(), 0.625);
        assert_eq!(node.side_to_move(), Some(Player::One));
    }

    #[test]
    fn test_serialization() {
        let mut node = MCTSNode::new(NodeId::new(0), 4, Player::One, 1);
        node.children.push((2, NodeId::new(7)));
        node.visits = 100;
        node.wins = 61.5;

        let json = serde_json::to_string(&node).unwrap();
        let deserialized: MCTSNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, deserialized);
    }
}
