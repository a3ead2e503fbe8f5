//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references. Re-rooting
//! copies the retained subtree into a fresh arena, so dropped siblings and
//! ancestors are freed immediately and the new root is always `NodeId(0)`.

use serde::{Deserialize, Serialize};

use super::node::{MCTSNode, NodeId};
use crate::core::Player;

/// Arena-based MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSTree {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl Default for MCTSTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MCTSTree {
    /// Create a new tree with an unexpanded root.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root());
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MCTSNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a child of `parent` for `player` dropping into `column`.
    pub fn add_child(&mut self, parent: NodeId, column: usize, player: Player) -> NodeId {
        debug_assert!(self.get(parent).child(column).is_none(), "duplicate child column {column}");
        let depth = self.get(parent).depth + 1;
        let id = self.alloc(MCTSNode::new(parent, column, player, depth));
        self.get_mut(parent).children.push((column, id));
        id
    }

    /// Credit a rollout outcome from `node` up to the root.
    ///
    /// `outcome` is from `reference`'s point of view. Nodes whose move was
    /// made by `reference` gain `outcome`, all others `1 - outcome`.
    pub fn backpropagate(&mut self, node: NodeId, reference: Player, outcome: f64) {
        let mut current = node;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.visits += 1;
            node.wins += if node.player == Some(reference) {
                outcome
            } else {
                1.0 - outcome
            };
            current = node.parent;
        }
    }

    /// Make `new_root` the root, keeping only its subtree.
    ///
    /// Statistics are carried over, depths are rebased and the parent link
    /// is cleared. Returns the number of nodes discarded.
    pub fn reroot(&mut self, new_root: NodeId) -> usize {
        let base_depth = self.get(new_root).depth;
        let mut nodes = Vec::with_capacity(self.nodes.len());

        let mut root = self.get(new_root).clone();
        root.parent = NodeId::NONE;
        root.depth = 0;
        nodes.push(root);

        // Breadth-first copy; each node's child ids are remapped when it is
        // dequeued, after its children have been pushed.
        let mut head = 0;
        while head < nodes.len() {
            let new_id = NodeId::new(head as u32);
            for i in 0..nodes[head].children.len() {
                let (column, old_child) = nodes[head].children[i];
                let mut child = self.get(old_child).clone();
                child.parent = new_id;
                child.depth -= base_depth;
                let child_id = NodeId::new(nodes.len() as u32);
                nodes.push(child);
                nodes[head].children[i] = (column, child_id);
            }
            head += 1;
        }

        let discarded = self.nodes.len() - nodes.len();
        self.nodes = nodes;
        self.root = NodeId::new(0);
        discarded
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let expanded_count = self.nodes.iter().filter(|n| n.has_children()).count();
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            leaf_count: self.nodes.len() - expanded_count,
            expanded_count,
            total_children,
        }
    }

    /// Clear the tree and reset with a new unexpanded root.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(MCTSNode::root());
        self.root = NodeId::new(0);
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth below the root.
    pub max_depth: u16,

    /// Nodes without children.
    pub leaf_count: usize,

    /// Nodes with children.
    pub expanded_count: usize,

    /// Sum of child counts over all nodes.
    pub total_children: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_count == 0 {
            0.0
        } else {
            self.total_children as f64 / self.expanded_count as f64
        }
    }
}
