//! Removal of branches that contain no marked node.

use crate::model::{AdjacencyTree, MarkedSet, NodeIndex};
use log::{debug, trace};
use std::collections::VecDeque;

/// Summary of one pruning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PruneStats {
    /// Number of edges deleted from the tree
    pub removed_edges: usize,
}

/// Returns whether `node` is an unmarked leaf under the current degrees.
#[inline]
fn is_prunable(tree: &AdjacencyTree, marked: &MarkedSet, node: NodeIndex) -> bool {
    tree.is_leaf(node) && !marked.contains(node)
}

/// Prunes `tree` in place to the minimal subtree spanning all marked nodes.
///
/// Repeatedly detaches unmarked leaves. Each detach may turn the former
/// neighbour into an unmarked leaf, which is then queued as well. A queued
/// node is checked again when dequeued, since its degree may have changed
/// in the meantime.
///
/// Afterwards every leaf of the tree is marked, or no edge is left. The
/// number of nodes is unchanged; pruned nodes remain as isolated nodes.
///
/// # Example
/// ```
/// use treepatrol::model::{AdjacencyTree, MarkedSet};
/// use treepatrol::patrol::prune;
///
/// // 0 - 1 - 2 - 3, with 1 and 2 marked
/// let mut tree = AdjacencyTree::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
/// let marked = MarkedSet::from_nodes(4, [1, 2]);
/// let stats = prune(&mut tree, &marked);
/// assert_eq!(stats.removed_edges, 2);
/// assert_eq!(tree.neighbours(1), &[2]);
/// ```
pub fn prune(tree: &mut AdjacencyTree, marked: &MarkedSet) -> PruneStats {
    let mut queue: VecDeque<NodeIndex> = (0..tree.num_nodes())
        .filter(|&node| is_prunable(tree, marked, node))
        .collect();
    let mut stats = PruneStats::default();

    while let Some(current) = queue.pop_front() {
        if !is_prunable(tree, marked, current) {
            continue;
        }

        if let Some(neighbour) = tree.detach_leaf(current) {
            trace!("pruned node {current} from {neighbour}");
            stats.removed_edges += 1;
            queue.push_back(neighbour);
        }
    }

    debug!(
        "pruning removed {} edges, {} remain",
        stats.removed_edges,
        tree.num_edges()
    );
    stats
}
