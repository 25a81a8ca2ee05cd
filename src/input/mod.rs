//! Parser for patrol problem input.
//!
//! This module provides [PatrolParser], which reads a tree with marked nodes
//! from a [ByteParser] and builds it via a [TreeBuilder].
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_str`] - parses a problem from a string
//! * [`parse_file`] - parses a problem from a file
//!
//! # Format
//! * `N M` - number of nodes and number of marked nodes
//! * `M` node indices - the marked nodes
//! * `N - 1` pairs `a b` - the undirected edges
//!
//! All node indices are 0-based. Tokens may be separated by any whitespace,
//! so the line structure is not enforced; with `M = 0` the marked line may
//! be empty or missing.
//!
//! # Example
//! ```
//! use treepatrol::input::parse_str;
//!
//! let input = parse_str("4 2\n0 3\n0 1\n1 2\n2 3\n").unwrap();
//! assert_eq!(input.tree.num_edges(), 3);
//! assert!(input.marked.contains(3));
//! ```

use crate::model::{AdjacencyTree, AdjacencyTreeBuilder, MarkedSet, NodeIndex, TreeBuilder};
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::ParsingError;
use log::debug;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a patrol problem from a string using default settings.
///
/// # Errors
/// Returns a [ParsingError] if the input is malformed.
pub fn parse_str<S: AsRef<str>>(input: S) -> Result<PatrolInput<AdjacencyTree>, ParsingError> {
    let mut byte_parser = ByteParser::for_str(input.as_ref());
    PatrolParser::new_defaults().parse(&mut byte_parser)
}

/// Parses a patrol problem from a file using default settings.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Errors
/// Returns a [ParsingError] if reading the file fails or the input is malformed.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PatrolInput<AdjacencyTree>, ParsingError> {
    let mut byte_parser = ByteParser::from_file(path)?;
    PatrolParser::new_defaults().parse(&mut byte_parser)
}

// =#========================================================================#=
// PATROL INPUT
// =#========================================================================$=
/// A parsed patrol problem: the tree and the nodes to visit.
#[derive(Debug, Clone)]
pub struct PatrolInput<T> {
    /// The tree as produced by the builder
    pub tree: T,
    /// The marked nodes
    pub marked: MarkedSet,
}

// =#========================================================================#=
// PATROL PARSER
// =#========================================================================$=
/// Parser (configuration) for patrol problems.
///
/// Generic over [TreeBuilder] (construction). Node indices are always
/// range-checked, so the builder only ever receives valid indices.
///
/// # Construction
/// * [`new(tree_builder)`](Self::new) - generic constructor
/// * [`new_defaults()`](PatrolParser::new_defaults) - uses a
///   non-validating [AdjacencyTreeBuilder]
///
/// # Configuration
/// * [`with_validation(bool)`](PatrolParser::with_validation) - reject
///   duplicate marked nodes and edge sets that do not form a tree
/// * [`with_strict(bool)`](Self::with_strict) - reject any input after
///   the last edge
///
/// # Example
/// ```
/// use treepatrol::input::PatrolParser;
/// use treepatrol::parser::ByteParser;
///
/// let mut byte_parser = ByteParser::for_str("3 1\n1\n0 1\n1 2\n");
/// let input = PatrolParser::new_defaults()
///     .with_validation(true)
///     .with_strict(true)
///     .parse(&mut byte_parser)
///     .unwrap();
/// assert_eq!(input.marked.len(), 1);
/// ```
pub struct PatrolParser<T: TreeBuilder> {
    tree_builder: T,
    reject_duplicates: bool,
    strict: bool,
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl PatrolParser<AdjacencyTreeBuilder> {
    /// Creates a parser building [AdjacencyTree]s without validation.
    pub fn new_defaults() -> Self {
        Self::new(AdjacencyTreeBuilder::new())
    }

    /// Configures validation of the parsed problem.
    ///
    /// With validation, duplicate marked nodes are rejected and the builder
    /// checks that the edges form a tree.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.tree_builder = self.tree_builder.with_validation(validate);
        self.reject_duplicates = validate;
        self
    }
}

impl<T: TreeBuilder> PatrolParser<T> {
    /// Creates a new [PatrolParser] with the given tree builder.
    pub fn new(tree_builder: T) -> Self {
        Self {
            tree_builder,
            reject_duplicates: false,
            strict: false,
        }
    }

    /// Configures whether input after the last edge is an error.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Configures whether a node marked twice is an error.
    pub fn with_duplicate_check(mut self, reject_duplicates: bool) -> Self {
        self.reject_duplicates = reject_duplicates;
        self
    }

    /// Consumes the parser and returns its tree builder.
    pub fn into_tree_builder(self) -> T {
        self.tree_builder
    }
}

// ============================================================================
// Parsing (pub)
// ============================================================================
impl<T: TreeBuilder> PatrolParser<T> {
    /// Parses one patrol problem from `byte_parser`.
    ///
    /// # Errors
    /// * `UnexpectedEOF` / `InvalidInteger` for missing or malformed numbers
    /// * `NodeOutOfRange` for marked nodes or edge endpoints `>= N`
    /// * `DuplicateMarkedNode` if configured to reject duplicates
    /// * `TrailingInput` in strict mode
    /// * any error of the builder's [`finish_tree`](TreeBuilder::finish_tree)
    pub fn parse<S: ByteSource>(
        &mut self,
        byte_parser: &mut ByteParser<S>,
    ) -> Result<PatrolInput<T::Tree>, ParsingError> {
        let num_nodes = byte_parser.parse_usize()?;
        let num_marked = byte_parser.parse_usize()?;
        debug!("parsing tree with {num_nodes} nodes and {num_marked} marked nodes");

        let mut marked = MarkedSet::new(num_nodes);
        for _ in 0..num_marked {
            let node = Self::parse_node(byte_parser, num_nodes)?;
            if !marked.insert(node) && self.reject_duplicates {
                return Err(ParsingError::duplicate_marked_node(byte_parser, node));
            }
        }

        self.tree_builder.init_next(num_nodes);
        for _ in 0..num_nodes.saturating_sub(1) {
            let a = Self::parse_node(byte_parser, num_nodes)?;
            let b = Self::parse_node(byte_parser, num_nodes)?;
            self.tree_builder.add_edge(a, b);
        }

        if self.strict && !byte_parser.is_exhausted() {
            return Err(ParsingError::trailing_input(byte_parser));
        }

        let tree = self.tree_builder.finish_tree()?;
        Ok(PatrolInput { tree, marked })
    }

    /// Parses a node index and checks it against `num_nodes`.
    fn parse_node<S: ByteSource>(
        byte_parser: &mut ByteParser<S>,
        num_nodes: usize,
    ) -> Result<NodeIndex, ParsingError> {
        let node = byte_parser.parse_usize()?;
        if node >= num_nodes {
            return Err(ParsingError::node_out_of_range(byte_parser, node, num_nodes));
        }
        Ok(node)
    }
}
