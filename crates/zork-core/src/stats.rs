//! Outcome counts over a subtree.

use serde::Serialize;

use crate::node::StoryNode;

/// Counts gathered by walking one subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SubtreeStats {
    /// All nodes, the subtree root included.
    pub nodes: usize,
    /// Nodes without children.
    pub leaves: usize,
    /// Winning leaves.
    pub winning: usize,
    /// Losing leaves.
    pub losing: usize,
    /// Leaves that declare neither outcome.
    pub dead_ends: usize,
}

impl SubtreeStats {
    /// Walk the subtree rooted at `node`.
    pub fn of(node: &StoryNode) -> Self {
        node.iter().fold(Self::default(), |mut acc, n| {
            acc.nodes += 1;
            if n.is_leaf() {
                acc.leaves += 1;
            }
            if n.is_winning() {
                acc.winning += 1;
            }
            if n.is_losing() {
                acc.losing += 1;
            }
            if n.is_leaf() && !n.is_winning() && !n.is_losing() {
                acc.dead_ends += 1;
            }
            acc
        })
    }

    /// Percentage of nodes in the subtree that are winning leaves.
    ///
    /// The subtree always contains its own root, so the divisor is never zero.
    pub fn win_probability(&self) -> f64 {
        100.0 * self.winning as f64 / self.nodes.max(1) as f64
    }
}
