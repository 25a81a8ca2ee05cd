use treepatrol::model::{AdjacencyTree, MarkedSet};
use treepatrol::patrol::{bfs_distances, diameter, diameter_path_ends, prune};

fn path(num_nodes: usize) -> AdjacencyTree {
    AdjacencyTree::from_edges(num_nodes, (1..num_nodes).map(|i| (i - 1, i)))
}

// --- TESTS BFS ---
#[test]
fn test_bfs_distances_on_path() {
    let tree = path(5);
    let distances = bfs_distances(&tree, 1);

    assert_eq!(distances.source(), 1);
    let depths: Vec<_> = (0..5).map(|n| distances.get(n)).collect();
    assert_eq!(depths, vec![Some(1), Some(0), Some(1), Some(2), Some(3)]);
    assert_eq!(distances.farthest(), (4, 3));
}

#[test]
fn test_bfs_from_isolated_node() {
    let tree = AdjacencyTree::from_edges(3, [(1, 2)]);
    let distances = bfs_distances(&tree, 0);

    assert_eq!(distances.num_reachable(), 1);
    assert_eq!(distances.farthest(), (0, 0));
}

// --- TESTS DIAMETER ---
#[test]
fn test_diameter_of_paths() {
    for k in 2..12 {
        assert_eq!(diameter(&path(k)), k - 1, "path with {k} nodes");
    }
}

#[test]
fn test_diameter_of_single_node() {
    let tree = AdjacencyTree::new(1);
    assert_eq!(diameter(&tree), 0);
    assert_eq!(diameter_path_ends(&tree), None);
}

#[test]
fn test_diameter_of_empty_structure() {
    let tree = AdjacencyTree::new(0);
    assert_eq!(diameter(&tree), 0);
}

#[test]
fn test_diameter_of_star() {
    let tree = AdjacencyTree::from_edges(6, (1..6).map(|i| (0, i)));
    assert_eq!(diameter(&tree), 2);
}

#[test]
fn test_diameter_first_start_is_not_endpoint() {
    // Start node 0 hangs off the middle of the long path 1 - 2 - 3 - 4 - 5 - 6
    let tree = AdjacencyTree::from_edges(7, [(0, 3), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
    assert_eq!(diameter(&tree), 5);

    let (a, b) = diameter_path_ends(&tree).unwrap();
    let mut ends = [a, b];
    ends.sort();
    assert_eq!(ends, [1, 6]);
}

#[test]
fn test_diameter_ignores_pruned_nodes() {
    // 0 - 1 - 2 - 3 - 4 - 5 with only 2 and 4 marked
    let mut tree = path(6);
    let marked = MarkedSet::from_nodes(6, [2, 4]);
    prune(&mut tree, &marked);

    assert_eq!(diameter(&tree), 2);
    assert_eq!(diameter_path_ends(&tree), Some((4, 2)));
}
