//! Trait for constructing trees while parsing patrol input.
//!
//! The [`TreeBuilder`] trait decouples the [input parser](crate::input) from
//! the concrete tree representation. The parser reads the node count and
//! then calls [`add_edge`](TreeBuilder::add_edge) for each edge line.
//!
//! # Builder lifecycle
//! ```text
//! Empty ──→ init_next() ──→ Building ──→ add_edge() ──→ finish_tree() ──→ Empty
//!   ↑                                                                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```

use crate::model::tree::{AdjacencyTree, NodeIndex};
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};

// =#========================================================================#=
// TREE BUILDER (trait)
// =#========================================================================T=
/// Abstraction for constructing trees during parsing.
///
/// The parser guarantees that every index passed to
/// [`add_edge`](Self::add_edge) is below the `num_nodes` given to
/// [`init_next`](Self::init_next).
pub trait TreeBuilder {
    /// The tree type produced by this builder.
    type Tree;

    /// Prepares construction of a new tree with `num_nodes` nodes.
    fn init_next(&mut self, num_nodes: usize);

    /// Adds the undirected edge `{a, b}` to the tree under construction.
    ///
    /// # Panics
    /// May panic if [`init_next`](Self::init_next) has not been called.
    fn add_edge(&mut self, a: NodeIndex, b: NodeIndex);

    /// Finalizes the current tree and returns to the empty state.
    ///
    /// # Errors
    /// * `BuilderNotInitialized` if no tree is under construction
    /// * `InvalidTreeStructure` if the builder validates and the edges do not form a tree
    fn finish_tree(&mut self) -> Result<Self::Tree, ParsingError>;
}

// =#========================================================================#=
// ADJACENCY TREE BUILDER
// =#========================================================================$=
/// Builder that constructs [AdjacencyTree] instances.
///
/// Without validation, edges are taken as given and malformed edge sets
/// (cycles, missing edges) produce a structure the patrol pipeline does not
/// give meaningful answers for. With validation, [`finish_tree`](TreeBuilder::finish_tree)
/// rejects anything that is not a tree.
///
/// # Example
/// ```
/// use treepatrol::model::{AdjacencyTreeBuilder, TreeBuilder};
///
/// let mut builder = AdjacencyTreeBuilder::new().with_validation(true);
/// builder.init_next(3);
/// builder.add_edge(0, 1);
/// builder.add_edge(1, 2);
/// let tree = builder.finish_tree().unwrap();
/// assert_eq!(tree.num_edges(), 2);
/// ```
#[derive(Debug, Default)]
pub struct AdjacencyTreeBuilder {
    current_tree: Option<AdjacencyTree>,
    validate: bool,
}

impl AdjacencyTreeBuilder {
    /// Creates a new, non-validating builder in the empty state.
    pub fn new() -> Self {
        Self {
            current_tree: None,
            validate: false,
        }
    }

    /// Configures whether finished trees are checked to be trees.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Returns whether this builder validates finished trees.
    pub fn validates(&self) -> bool {
        self.validate
    }
}

impl TreeBuilder for AdjacencyTreeBuilder {
    type Tree = AdjacencyTree;

    fn init_next(&mut self, num_nodes: usize) {
        self.current_tree = Some(AdjacencyTree::new(num_nodes));
    }

    fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) {
        let tree = self.current_tree.as_mut().expect("init not called");
        tree.add_edge(a, b);
    }

    fn finish_tree(&mut self) -> Result<AdjacencyTree, ParsingError> {
        let tree = self.current_tree.take().ok_or_else(|| {
            ParsingError::without_context(ParsingErrorType::BuilderNotInitialized)
        })?;

        if self.validate {
            validate_tree(&tree)?;
        }

        Ok(tree)
    }
}

/// Checks that `tree` is an actual tree, naming the first violated property.
fn validate_tree(tree: &AdjacencyTree) -> Result<(), ParsingError> {
    let invalid = |msg: String| {
        Err(ParsingError::without_context(
            ParsingErrorType::InvalidTreeStructure(msg),
        ))
    };

    if tree.num_nodes() == 0 {
        return invalid("tree has no nodes".to_string());
    }

    if let Some(node) = (0..tree.num_nodes()).find(|&n| tree.has_edge(n, n)) {
        return invalid(format!("self loop at node {node}"));
    }

    let expected = tree.num_nodes() - 1;
    if tree.num_edges() != expected {
        return invalid(format!(
            "expected {expected} edges, found {}",
            tree.num_edges()
        ));
    }

    // With exactly n-1 edges, connected is equivalent to acyclic
    let reachable = tree.count_reachable(0);
    if reachable != tree.num_nodes() {
        return invalid(format!(
            "not connected, only {reachable} of {} nodes reachable from node 0",
            tree.num_nodes()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_without_init() {
        let mut builder = AdjacencyTreeBuilder::new();
        let err = builder.finish_tree().unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::BuilderNotInitialized);
    }

    #[test]
    fn test_validation_rejects_cycle() {
        let mut builder = AdjacencyTreeBuilder::new().with_validation(true);
        builder.init_next(4);
        builder.add_edge(0, 1);
        builder.add_edge(1, 2);
        builder.add_edge(2, 0);
        let err = builder.finish_tree().unwrap_err();
        assert!(matches!(
            err.kind(),
            ParsingErrorType::InvalidTreeStructure(_)
        ));
    }

    #[test]
    fn test_without_validation_accepts_forest() {
        let mut builder = AdjacencyTreeBuilder::new();
        builder.init_next(4);
        builder.add_edge(0, 1);
        let tree = builder.finish_tree().unwrap();
        assert_eq!(tree.num_edges(), 1);
        assert!(!tree.is_valid());
    }
}
