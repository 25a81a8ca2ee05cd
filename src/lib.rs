//! Treepatrol computes the shortest closed patrol route through a tree that
//! visits every marked node.
//!
//! Given a tree with `N` nodes of which some are marked, the route may start
//! at any node but has to return to it. Core functionality provided:
//! - Model: [AdjacencyTree](model::AdjacencyTree) and
//!   [MarkedSet](model::MarkedSet), see [crate::model].
//! - Pipeline: pruning of unmarked branches, tree diameter by double BFS
//!   sweep, and the final `2 * edges - diameter` formula, see [crate::patrol].
//! - Input: configurable parser for the `N M` / marked nodes / edges text
//!   format, see [crate::input].
//!
//! # Usage patterns
//! 1. Quick access with default settings via [`solve_str`] and [`solve_file`].
//! 2. Parse with a configured [PatrolParser](input::PatrolParser) and run
//!    [`plan_route`](patrol::plan_route) for the intermediate results.
//!
//! ## Example Default Configuration
//! ```
//! use treepatrol::solve_str;
//!
//! // Path 0 - 1 - 2 - 3 with both ends marked
//! let length = solve_str("4 2\n0 3\n0 1\n1 2\n2 3\n").unwrap();
//! assert_eq!(length, 3);
//! ```
//!
//! ## Example Parser Configuration
//! ```
//! use treepatrol::input::PatrolParser;
//! use treepatrol::parser::ByteParser;
//! use treepatrol::patrol::plan_route;
//!
//! let mut byte_parser = ByteParser::for_str("5 2\n3 4\n0 1\n1 2\n1 3\n1 4\n");
//! let input = PatrolParser::new_defaults()
//!     .with_validation(true)
//!     .parse(&mut byte_parser)?;
//!
//! let route = plan_route(input.tree, &input.marked);
//! assert_eq!(route.pruned_edges, 2);
//! assert_eq!(route.length, 2);
//! # Ok::<(), treepatrol::parser::ParsingError>(())
//! ```

pub mod input;
pub mod model;
pub mod parser;
pub mod patrol;

use crate::parser::parsing_error::ParsingError;
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Parses a patrol problem from a string using default settings and
/// returns the length of the shortest closed route.
///
/// See [`input::parse_str`] for the input format.
pub fn solve_str<S: AsRef<str>>(input: S) -> Result<usize, ParsingError> {
    let input = input::parse_str(input)?;
    Ok(patrol::route_length(input.tree, &input.marked))
}

/// Parses a patrol problem from a file using default settings and
/// returns the length of the shortest closed route.
///
/// See [`input::parse_file`] for the input format.
pub fn solve_file<P: AsRef<Path>>(path: P) -> Result<usize, ParsingError> {
    let input = input::parse_file(path)?;
    Ok(patrol::route_length(input.tree, &input.marked))
}
