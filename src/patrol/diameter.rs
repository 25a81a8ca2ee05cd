//! Tree diameter via two breadth-first sweeps.
//!
//! For any tree, the node farthest from an arbitrary start is an endpoint of
//! some longest path. A second sweep from that endpoint therefore reaches
//! the true diameter:
//!
//! 1. BFS from the first node with an incident edge
//! 2. take the farthest node (lowest index on ties)
//! 3. BFS again from it, the largest distance found is the diameter

use crate::model::{AdjacencyTree, NodeIndex};
use log::debug;
use std::collections::VecDeque;

// =#========================================================================#=
// DISTANCES
// =#========================================================================$=
/// BFS depth of every node from one source.
///
/// Nodes not reachable from the source (e.g. nodes isolated by pruning)
/// have no distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances {
    source: NodeIndex,
    depths: Vec<Option<usize>>,
}

impl Distances {
    /// Returns the node the distances are measured from.
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Returns the distance of `node` from the source,
    /// or `None` if it is unreachable.
    pub fn get(&self, node: NodeIndex) -> Option<usize> {
        self.depths.get(node).copied().flatten()
    }

    /// Returns the number of nodes reachable from the source, including itself.
    pub fn num_reachable(&self) -> usize {
        self.depths.iter().filter(|d| d.is_some()).count()
    }

    /// Returns the reachable node with maximum distance together with that
    /// distance; on ties the node with lowest index.
    pub fn farthest(&self) -> (NodeIndex, usize) {
        let mut best = (self.source, 0);
        for (node, depth) in self.depths.iter().enumerate() {
            if let Some(depth) = *depth {
                if depth > best.1 {
                    best = (node, depth);
                }
            }
        }
        best
    }
}

/// Breadth-first traversal from `source`, recording the depth of every
/// reachable node.
///
/// # Panics
/// Panics if `source` is out of bounds.
pub fn bfs_distances(tree: &AdjacencyTree, source: NodeIndex) -> Distances {
    let mut depths = vec![None; tree.num_nodes()];
    let mut queue = VecDeque::new();
    depths[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_depth = depths[current].map_or(0, |d| d + 1);
        for &next in tree.neighbours(current) {
            if depths[next].is_none() {
                depths[next] = Some(next_depth);
                queue.push_back(next);
            }
        }
    }

    Distances { source, depths }
}

/// Returns the two endpoints of a longest path found by the double sweep,
/// or `None` if the tree has no edge.
///
/// The first endpoint is the farthest node from the first node with an
/// incident edge, the second the farthest node from the first endpoint.
pub fn diameter_path_ends(tree: &AdjacencyTree) -> Option<(NodeIndex, NodeIndex)> {
    sweep(tree).map(|(first, second, _)| (first, second))
}

/// Returns the diameter of `tree`, the number of edges of a longest path.
///
/// Only the component of the first node with an incident edge is measured,
/// which after pruning is the single component containing all edges.
/// A tree without edges has diameter 0.
///
/// # Example
/// ```
/// use treepatrol::model::AdjacencyTree;
/// use treepatrol::patrol::diameter;
///
/// // 0 - 1 - 2 - 3 with a branch 1 - 4
/// let tree = AdjacencyTree::from_edges(5, [(0, 1), (1, 2), (2, 3), (1, 4)]);
/// assert_eq!(diameter(&tree), 3);
/// ```
pub fn diameter(tree: &AdjacencyTree) -> usize {
    sweep(tree).map_or(0, |(_, _, length)| length)
}

/// Runs the double sweep, returning both endpoints and the path length.
pub(crate) fn sweep(tree: &AdjacencyTree) -> Option<(NodeIndex, NodeIndex, usize)> {
    let start = tree.active_nodes().next()?;
    let (first_end, _) = bfs_distances(tree, start).farthest();
    let (second_end, length) = bfs_distances(tree, first_end).farthest();
    debug!("diameter {length} between nodes {first_end} and {second_end}");
    Some((first_end, second_end, length))
}
