//! Length of the shortest closed walk through a pruned tree.

use crate::model::AdjacencyTree;

/// Returns the length of the shortest walk covering every edge of the
/// pruned `tree`, given its `diameter`.
///
/// Walking every edge there and back costs `2 * edges`. Ending at the far
/// end of a longest path instead of returning saves that path once, so the
/// result is `2 * edges - diameter`, with `edges = active nodes - 1`.
/// A tree without edges needs no walk at all.
///
/// # Example
/// ```
/// use treepatrol::model::AdjacencyTree;
/// use treepatrol::patrol::route_length_for;
///
/// let path = AdjacencyTree::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
/// assert_eq!(route_length_for(&path, 3), 3);
/// ```
pub fn route_length_for(tree: &AdjacencyTree, diameter: usize) -> usize {
    let active = tree.num_active_nodes();
    if active == 0 {
        return 0;
    }

    let edges = active - 1;
    (2 * edges).saturating_sub(diameter)
}
