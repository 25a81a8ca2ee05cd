//! Provides [MarkedSet], the set of nodes a patrol route has to visit.

use crate::model::tree::NodeIndex;

// =#========================================================================#=
// MARKED SET
// =#========================================================================$=
/// Set of marked ("sushi") nodes of a tree with a fixed number of nodes.
///
/// Stored as one flag per node so that membership tests during pruning are
/// constant time.
///
/// # Example
/// ```
/// use treepatrol::model::MarkedSet;
///
/// let marked = MarkedSet::from_nodes(5, [0, 3]);
/// assert!(marked.contains(3));
/// assert!(!marked.contains(1));
/// assert_eq!(marked.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedSet {
    flags: Vec<bool>,
    len: usize,
}

impl MarkedSet {
    /// Creates an empty set for a tree with `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            flags: vec![false; num_nodes],
            len: 0,
        }
    }

    /// Creates a set for a tree with `num_nodes` nodes containing `nodes`.
    ///
    /// # Panics
    /// Panics if a node is outside `[0, num_nodes)`.
    pub fn from_nodes<I>(num_nodes: usize, nodes: I) -> Self
    where
        I: IntoIterator<Item = NodeIndex>,
    {
        let mut set = Self::new(num_nodes);
        for node in nodes {
            set.insert(node);
        }
        set
    }

    /// Marks the node.
    ///
    /// # Returns
    /// `true` if the node was not marked before.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn insert(&mut self, node: NodeIndex) -> bool {
        let newly = !self.flags[node];
        if newly {
            self.flags[node] = true;
            self.len += 1;
        }
        newly
    }

    /// Returns whether the node is marked; out-of-range nodes are never marked.
    #[inline]
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.flags.get(node).copied().unwrap_or(false)
    }

    /// Returns the number of marked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether no node is marked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes this set was created for.
    pub fn num_nodes(&self) -> usize {
        self.flags.len()
    }

    /// Returns an iterator over the marked nodes in increasing index order.
    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, marked)| **marked)
            .map(|(node, _)| node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_counts_duplicates_once() {
        let mut marked = MarkedSet::new(4);
        assert!(marked.insert(2));
        assert!(!marked.insert(2));
        assert_eq!(marked.len(), 1);
        assert_eq!(marked.iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_contains_out_of_range() {
        let marked = MarkedSet::from_nodes(2, [1]);
        assert!(!marked.contains(7));
    }
}
