//! Error types for the patrol input parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading a patrol problem.

use crate::model::NodeIndex;
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use std::error::Error;
use std::fmt;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 30;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================$=
/// Error types that can occur while parsing patrol input.
#[derive(PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    IoError(String),
    UnexpectedEOF,
    InvalidInteger(String),
    NodeOutOfRange { node: NodeIndex, num_nodes: usize },
    DuplicateMarkedNode(NodeIndex),
    TrailingInput,
    BuilderNotInitialized,
    InvalidTreeStructure(String),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Parsing error with contextual information (position and following bytes).
#[derive(Debug)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: ParsingErrorType, parser: &ByteParser<S>) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnexpectedEOF
    pub fn unexpected_eof<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedEOF, parser)
    }

    /// Convenience constructor for InvalidInteger
    pub fn invalid_integer<S: ByteSource>(parser: &ByteParser<S>, token: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidInteger(token), parser)
    }

    /// Convenience constructor for NodeOutOfRange
    pub fn node_out_of_range<S: ByteSource>(
        parser: &ByteParser<S>,
        node: NodeIndex,
        num_nodes: usize,
    ) -> Self {
        Self::from_parser(ParsingErrorType::NodeOutOfRange { node, num_nodes }, parser)
    }

    /// Convenience constructor for DuplicateMarkedNode
    pub fn duplicate_marked_node<S: ByteSource>(parser: &ByteParser<S>, node: NodeIndex) -> Self {
        Self::from_parser(ParsingErrorType::DuplicateMarkedNode(node), parser)
    }

    /// Convenience constructor for TrailingInput
    pub fn trailing_input<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::TrailingInput, parser)
    }

    /// Create a ParsingError without parser context (for builder errors)
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Main error message
        match &self.kind {
            ParsingErrorType::IoError(msg) => write!(f, "IO error - {msg}")?,
            ParsingErrorType::UnexpectedEOF => write!(f, "Unexpected end of input")?,
            ParsingErrorType::InvalidInteger(token) => {
                write!(f, "Expected non-negative integer, found '{token}'")?
            }
            ParsingErrorType::NodeOutOfRange { node, num_nodes } => write!(
                f,
                "Node {node} out of range for tree with {num_nodes} nodes"
            )?,
            ParsingErrorType::DuplicateMarkedNode(node) => {
                write!(f, "Node {node} marked more than once")?
            }
            ParsingErrorType::TrailingInput => write!(f, "Unexpected input after last edge")?,
            ParsingErrorType::BuilderNotInitialized => write!(f, "Builder not initialized")?,
            ParsingErrorType::InvalidTreeStructure(msg) => {
                write!(f, "Invalid tree structure - {msg}")?
            }
        }

        // Additional position information
        write!(f, " at position {}", self.position)?;

        // Additional context if available
        if !self.context.is_empty() {
            write!(
                f,
                "\n  Context (next {} bytes): {}",
                self.context.len(),
                self.context
            )?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError {
            kind: ParsingErrorType::IoError(err.to_string()),
            position: 0,
            context: String::new(),
        }
    }
}
