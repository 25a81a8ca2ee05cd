//! Data model for trees with marked nodes.
//!
//! # Tree representation
//! Trees are represented by [AdjacencyTree], one neighbour list per node,
//! referenced by [NodeIndex]. The nodes a route has to visit are collected in
//! a [MarkedSet].
//!
//! # Building trees
//! Trees are typically constructed during parsing via the [TreeBuilder]
//! trait, which decouples the [input parser](crate::input) from concrete tree
//! types. [AdjacencyTreeBuilder] builds an [AdjacencyTree], optionally
//! validating that the edges really form a tree.

pub mod marked_set;
pub mod tree;
pub mod tree_builder;

pub use marked_set::MarkedSet;
pub use tree::AdjacencyTree;
pub use tree::NodeIndex;
pub use tree_builder::AdjacencyTreeBuilder;
pub use tree_builder::TreeBuilder;
