//! Provides the undirected tree representation used by the patrol pipeline.
//!
//! * [AdjacencyTree] - adjacency-list tree, one neighbour list per node
//! * [NodeIndex] as type used to index nodes in the tree

use std::collections::VecDeque;

/// Index of a node in a tree, always in `[0, num_nodes)`.
pub type NodeIndex = usize;

// =$========================================================================$=
// ADJACENCY TREE
// =$========================================================================$=
/// An undirected tree stored as adjacency lists.
///
/// Every node `0..num_nodes` owns one neighbour list. Edges are stored in
/// both directions, so `b ∈ neighbours(a)` iff `a ∈ neighbours(b)`.
///
/// # Structure
/// - A freshly built tree has `num_nodes - 1` edges and is connected.
/// - After [pruning](crate::patrol::prune) the structure is a forest of
///   one component plus isolated nodes; the node count never changes, only
///   the neighbour lists shrink.
/// - No order of neighbours is maintained.
///
/// # Construction
/// Create a tree with [`AdjacencyTree::new`] and add edges one by one, or use
/// [`AdjacencyTree::from_edges`]. Test validity with [`AdjacencyTree::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTree {
    /// Neighbour list per node
    adjacency: Vec<Vec<NodeIndex>>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl AdjacencyTree {
    /// Creates a tree with `num_nodes` nodes and no edges yet.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_nodes],
        }
    }

    /// Creates a tree with `num_nodes` nodes from the given undirected edges.
    ///
    /// # Panics
    /// Panics if an edge references a node outside `[0, num_nodes)`.
    pub fn from_edges<I>(num_nodes: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeIndex, NodeIndex)>,
    {
        let mut tree = Self::new(num_nodes);
        for (a, b) in edges {
            tree.add_edge(a, b);
        }
        tree
    }

    /// Adds the undirected edge `{a, b}`.
    ///
    /// # Panics
    /// Panics if `a` or `b` is outside `[0, num_nodes)`.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) {
        assert!(
            a < self.num_nodes() && b < self.num_nodes(),
            "edge ({a}, {b}) out of range for tree with {} nodes",
            self.num_nodes()
        );
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Removes the undirected edge `{a, b}` (every copy of it).
    ///
    /// # Returns
    /// `true` if the edge was present.
    pub fn remove_edge(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        let before = self.adjacency[a].len();
        self.adjacency[a].retain(|&n| n != b);
        self.adjacency[b].retain(|&n| n != a);
        before != self.adjacency[a].len()
    }

    /// Detaches a leaf from its only neighbour and returns that neighbour.
    ///
    /// # Returns
    /// * `Some(neighbour)` - if `leaf` had degree exactly 1
    /// * `None` - otherwise, leaving the tree unchanged
    pub fn detach_leaf(&mut self, leaf: NodeIndex) -> Option<NodeIndex> {
        if !self.is_leaf(leaf) {
            return None;
        }
        let neighbour = self.adjacency[leaf].pop()?;
        self.adjacency[neighbour].retain(|&n| n != leaf);
        Some(neighbour)
    }

    /// Returns the number of nodes, including isolated ones.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of (undirected) edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the degree of the given node.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.adjacency[node].len()
    }

    /// Returns the neighbours of the given node.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn neighbours(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[node]
    }

    /// Returns whether the node has degree exactly 1.
    pub fn is_leaf(&self, node: NodeIndex) -> bool {
        self.degree(node) == 1
    }

    /// Returns whether the node has no incident edge.
    pub fn is_isolated(&self, node: NodeIndex) -> bool {
        self.adjacency[node].is_empty()
    }

    /// Returns whether `a` and `b` are adjacent.
    pub fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.adjacency[a].contains(&b)
    }

    /// Returns an iterator over all nodes with at least one incident edge,
    /// in increasing index order.
    pub fn active_nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, neighbours)| !neighbours.is_empty())
            .map(|(node, _)| node)
    }

    /// Returns the number of nodes with at least one incident edge.
    pub fn num_active_nodes(&self) -> usize {
        self.active_nodes().count()
    }

    /// Returns an iterator over all leaves (degree 1), in increasing index order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.num_nodes()).filter(|&node| self.is_leaf(node))
    }
}

// ============================================================================
// Validation (pub)
// ============================================================================
impl AdjacencyTree {
    /// Checks the structural invariants of the adjacency lists.
    ///
    /// Checks:
    /// - All neighbour indices are in bounds
    /// - No self loops
    /// - Adjacency is symmetric
    ///
    /// This holds for both freshly built and pruned trees.
    pub fn is_consistent(&self) -> bool {
        for (node, neighbours) in self.adjacency.iter().enumerate() {
            for &neighbour in neighbours {
                if neighbour >= self.num_nodes() || neighbour == node {
                    return false;
                }
                let forward = neighbours.iter().filter(|&&n| n == neighbour).count();
                let backward = self.adjacency[neighbour]
                    .iter()
                    .filter(|&&n| n == node)
                    .count();
                if forward != backward {
                    return false;
                }
            }
        }

        true
    }

    /// Validates that this is a tree spanning all of its nodes.
    ///
    /// Checks:
    /// - [`is_consistent`](Self::is_consistent)
    /// - Exactly `num_nodes - 1` edges
    /// - All nodes reachable from node 0
    ///
    /// An empty structure (zero nodes) is not a valid tree.
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.num_nodes() == 0 || !self.is_consistent() {
            return false;
        }

        if self.num_edges() != self.num_nodes() - 1 {
            return false;
        }

        self.count_reachable(0) == self.num_nodes()
    }

    /// Counts nodes reachable from `source`, including itself.
    pub(crate) fn count_reachable(&self, source: NodeIndex) -> usize {
        let mut visited = vec![false; self.num_nodes()];
        let mut queue = VecDeque::new();
        visited[source] = true;
        queue.push_back(source);
        let mut count = 0;

        while let Some(current) = queue.pop_front() {
            count += 1;
            for &next in &self.adjacency[current] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        count
    }
}

impl std::ops::Index<NodeIndex> for AdjacencyTree {
    type Output = [NodeIndex];

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.adjacency[index]
    }
}

// =$========================================================================$=
// TESTS
// =$========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detach_leaf_removes_both_directions() {
        let mut tree = AdjacencyTree::from_edges(3, [(0, 1), (1, 2)]);
        assert_eq!(tree.detach_leaf(0), Some(1));
        assert!(tree.is_isolated(0));
        assert_eq!(tree.neighbours(1), &[2]);
        assert_eq!(tree.num_edges(), 1);
    }

    #[test]
    fn test_detach_leaf_ignores_non_leaf() {
        let mut tree = AdjacencyTree::from_edges(3, [(0, 1), (1, 2)]);
        assert_eq!(tree.detach_leaf(1), None);
        assert_eq!(tree.num_edges(), 2);
    }

    #[test]
    fn test_remove_edge() {
        let mut tree = AdjacencyTree::from_edges(3, [(0, 1), (1, 2)]);
        assert!(tree.remove_edge(2, 1));
        assert!(!tree.has_edge(1, 2));
        assert!(!tree.remove_edge(2, 1));
        assert!(tree.is_consistent());
    }
}
