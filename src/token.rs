//! Tokens handed to collectors by the tokenizer.
//!
//! A [`Token`] is produced once per (row, column) cell. String tokens borrow
//! their bytes from the tokenizer's source buffer; the lifetime `'a` ties the
//! token to that buffer so collectors cannot hold on to the bytes after the
//! call that received them.
//!
//! ## Examples
//!
//! ```rust
//! use column_collect::{Token, TokenKind};
//!
//! let source = b"TRUE,F,,x";
//! let cells: Vec<Token<'_>> = source
//!     .split(|&b| b == b',')
//!     .map(|field| if field.is_empty() { Token::Empty } else { Token::String(field) })
//!     .collect();
//!
//! assert_eq!(cells[0].as_bytes(), Some(&b"TRUE"[..]));
//! assert_eq!(cells[2].kind(), TokenKind::Empty);
//! ```

use std::fmt;

/// One tokenized cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// Raw field text, borrowed from the source buffer.
    String(&'a [u8]),
    /// Explicit missing-value marker from the source.
    Missing,
    /// Structurally empty field.
    Empty,
    /// The tokenizer is exhausted. Never a valid cell value.
    EndOfInput,
}

/// The variant of a [`Token`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    String,
    Missing,
    Empty,
    EndOfInput,
}

impl TokenKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::String => "string",
            TokenKind::Missing => "missing",
            TokenKind::Empty => "empty",
            TokenKind::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> Token<'a> {
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Token::String(_) => TokenKind::String,
            Token::Missing => TokenKind::Missing,
            Token::Empty => TokenKind::Empty,
            Token::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the field bytes of a string token.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            Token::String(bytes) => Some(*bytes),
            _ => None,
        }
    }

    /// Returns `true` for [`Token::Missing`] and [`Token::Empty`].
    #[inline]
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Token::Missing | Token::Empty)
    }
}

impl<'a> From<&'a [u8]> for Token<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Token::String(bytes)
    }
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(text: &'a str) -> Self {
        Token::String(text.as_bytes())
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::String(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
            other => f.write_str(other.kind().as_str()),
        }
    }
}
