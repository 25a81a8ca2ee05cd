//! Low-level byte-by-byte parser for ASCII text.
//!
//! This module provides [ByteParser] for reading whitespace-separated tokens
//! and non-negative integers, with context extraction for error reporting.
//! Used as the foundation of the [patrol input parser](crate::input).

use crate::parser::byte_source::ByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use crate::parser::parsing_error::ParsingError;
use std::io::Read;
use std::path::Path;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser for ASCII text with support for peeking, consuming,
/// and reading whitespace-separated integers.
///
/// # Example
/// ```
/// use treepatrol::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  5 2\n0 4\n");
/// assert_eq!(parser.parse_usize().unwrap(), 5);
/// assert_eq!(parser.parse_usize().unwrap(), 2);
/// assert_eq!(parser.next_token(), Some("0".to_string()));
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new `ByteParser` from a string by copying it into a Vec.
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Creates a new `ByteParser` from a byte slice by copying it into a Vec.
    pub fn for_bytes(input: &[u8]) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.to_vec()))
    }

    /// Creates a new `ByteParser` loading the whole file into memory.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParsingError> {
        Ok(Self::new(InMemoryByteSource::from_file(path)?))
    }

    /// Creates a new `ByteParser` reading `reader` to its end, e.g. stdin.
    ///
    /// # Errors
    /// Returns an error if reading fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParsingError> {
        Ok(Self::new(InMemoryByteSource::from_reader(reader)?))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn next_byte(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Skips (consumes) all consecutive ASCII whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.next_byte();
            } else {
                break;
            }
        }
    }

    /// Skips whitespace and consumes the following token, that is,
    /// all bytes up to the next whitespace or EOF.
    ///
    /// # Returns
    /// * `Some(String)` - The token (invalid UTF-8 replaced lossily)
    /// * `None` - If only whitespace remained
    pub fn next_token(&mut self) -> Option<String> {
        self.skip_whitespace();
        let mut token = Vec::new();
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                break;
            }
            token.push(b);
            self.next_byte();
        }

        if token.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&token).into_owned())
        }
    }

    /// Parses the next token as a non-negative integer.
    ///
    /// On failure, the parser is positioned right after the offending token.
    ///
    /// # Errors
    /// * `UnexpectedEOF` if no token is left
    /// * `InvalidInteger` if the token is not a `usize`
    pub fn parse_usize(&mut self) -> Result<usize, ParsingError> {
        let token = self
            .next_token()
            .ok_or_else(|| ParsingError::unexpected_eof(self))?;

        match token.parse::<usize>() {
            Ok(value) => Ok(value),
            Err(_) => Err(ParsingError::invalid_integer(self, token)),
        }
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Returns whether nothing but whitespace remains, consuming that whitespace.
    pub fn is_exhausted(&mut self) -> bool {
        self.skip_whitespace();
        self.is_eof()
    }

    /// Returns the current parser position in the input.
    ///
    /// Useful for error messages and tracking parser state.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns up to `k` bytes from the current position for error context.
    pub fn get_context(&self, k: usize) -> Vec<u8> {
        self.source.get_context(k)
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    pub fn get_context_as_string(&self, k: usize) -> String {
        let context_bytes = &self.get_context(k);
        String::from_utf8_lossy(context_bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parsing_error::ParsingErrorType;

    #[test]
    fn test_parse_usize_rejects_negative() {
        let mut parser = ByteParser::for_str("-3");
        let err = parser.parse_usize().unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::InvalidInteger("-3".to_string()));
    }

    #[test]
    fn test_parse_usize_at_eof() {
        let mut parser = ByteParser::for_str(" \n\t ");
        let err = parser.parse_usize().unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEOF);
    }
}
