//! Shortest closed patrol route visiting all marked nodes of a tree.
//!
//! The route is computed in three stages, each consuming the output of the
//! previous one:
//! 1. [`prune`] - remove all branches without a marked node
//! 2. [`diameter`] - longest path in the pruned tree (double BFS sweep)
//! 3. [`route_length_for`] - `2 * edges - diameter` of the pruned tree
//!
//! [`plan_route`] runs the whole pipeline and reports the intermediate
//! results as a [PatrolRoute], [`route_length`] only returns the length.
//!
//! # Example
//! ```
//! use treepatrol::model::{AdjacencyTree, MarkedSet};
//! use treepatrol::patrol::plan_route;
//!
//! // Path 0 - 1 - 2 - 3 - 4, only the center is marked
//! let tree = AdjacencyTree::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
//! let marked = MarkedSet::from_nodes(5, [2]);
//! let route = plan_route(tree, &marked);
//! assert_eq!(route.pruned_edges, 4);
//! assert_eq!(route.length, 0);
//! ```

pub mod diameter;
pub mod pruner;
pub mod route;

pub use diameter::{Distances, bfs_distances, diameter, diameter_path_ends};
pub use pruner::{PruneStats, prune};
pub use route::route_length_for;

use crate::model::{AdjacencyTree, MarkedSet, NodeIndex};
use log::debug;

/// Result of planning a patrol route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatrolRoute {
    /// Number of edges removed by pruning
    pub pruned_edges: usize,
    /// Number of edges left after pruning
    pub remaining_edges: usize,
    /// Diameter of the pruned tree
    pub diameter: usize,
    /// Endpoints of the longest path of the pruned tree, if it has an edge
    pub path_ends: Option<(NodeIndex, NodeIndex)>,
    /// Length of the shortest closed walk visiting all marked nodes
    pub length: usize,
}

/// Plans the patrol route for `tree` with the given marked nodes.
///
/// Consumes the tree, since pruning modifies it in place.
pub fn plan_route(mut tree: AdjacencyTree, marked: &MarkedSet) -> PatrolRoute {
    let stats = prune(&mut tree, marked);
    let (path_ends, diameter) = match diameter::sweep(&tree) {
        Some((first, second, length)) => (Some((first, second)), length),
        None => (None, 0),
    };
    let length = route_length_for(&tree, diameter);
    debug!(
        "route of length {length} over {} edges (diameter {diameter})",
        tree.num_edges()
    );

    PatrolRoute {
        pruned_edges: stats.removed_edges,
        remaining_edges: tree.num_edges(),
        diameter,
        path_ends,
        length,
    }
}

/// Returns the length of the shortest closed walk through `tree` visiting
/// every marked node.
pub fn route_length(tree: AdjacencyTree, marked: &MarkedSet) -> usize {
    plan_route(tree, marked).length
}
