//! # column_collect
//!
//! Typed column collectors for a delimited-text parsing engine.
//!
//! A tokenizer splits the input into one [`Token`] per cell. A collector turns
//! each token into a typed value and stores it in a pre-sized
//! [`ColumnBuffer`]. Before a column's type is known, a [`TypeGuesser`] asks
//! each candidate collector's capability probe whether sample text could be
//! of its type.
//!
//! This crate provides the logical (boolean) collector.
//!
//! ## Key Features
//!
//! - **Zero-copy**: string tokens borrow from the tokenizer's buffer
//! - **Three-valued**: [`TriState`] keeps "false" and "missing" apart
//! - **Write-once columns**: every row is written exactly once, out-of-range
//!   and duplicate writes are errors
//! - **Parallel fill**: columns split into disjoint [`ColumnSlice`]s for
//!   worker threads
//!
//! ## Quick Start
//!
//! ```rust
//! use column_collect::{can_parse_logical, collect_logical, Token, TriState};
//!
//! // Probe phase
//! assert!(can_parse_logical("TRUE"));
//! assert!(!can_parse_logical("true"));
//!
//! // Commit phase
//! let tokens = [
//!     Token::from("T"),
//!     Token::from("FALSE"),
//!     Token::Missing,
//!     Token::from("TRUE"),
//!     Token::from("x"),
//! ];
//! let column = collect_logical(tokens, 5).unwrap();
//! assert_eq!(
//!     column,
//!     vec![TriState::True, TriState::False, TriState::Missing, TriState::True, TriState::False]
//! );
//! ```
//!
//! ## Reading rules
//!
//! Only `T` and `TRUE` read as true. Every other string, `F` and `FALSE`
//! included, reads as false; missing and empty cells read as missing. The
//! probe is stricter: it accepts `T`, `F`, `TRUE` and `FALSE` and nothing
//! else. See [`LogicalCollector`].
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - An end-of-input token in a cell position is always an error, never a
//!   missing value

pub mod collector;
pub mod column;
pub mod error;
pub mod infer;
pub mod options;
pub mod token;
pub mod tristate;

pub use collector::{Collector, ColumnWriter, LogicalCollector};
pub use column::{ColumnBuffer, ColumnSlice, ColumnTarget};
pub use error::{Error, ParseError, Result};
pub use infer::{ColumnType, Probe, TypeGuesser};
pub use options::InferOptions;
pub use token::{Token, TokenKind};
pub use tristate::TriState;

/// Reads one token as a logical value.
///
/// # Examples
///
/// ```rust
/// use column_collect::{parse_logical, Token, TriState};
///
/// assert_eq!(parse_logical(&Token::from("T")), Ok(TriState::True));
/// assert_eq!(parse_logical(&Token::Empty), Ok(TriState::Missing));
/// assert!(parse_logical(&Token::EndOfInput).is_err());
/// ```
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedEndOfInput`] for [`Token::EndOfInput`].
pub fn parse_logical(token: &Token<'_>) -> std::result::Result<TriState, ParseError> {
    LogicalCollector::parse(token)
}

/// Returns `true` if `text` is exactly `T`, `F`, `TRUE` or `FALSE`.
///
/// # Examples
///
/// ```rust
/// use column_collect::can_parse_logical;
///
/// assert!(can_parse_logical("FALSE"));
/// assert!(!can_parse_logical("1"));
/// ```
#[must_use]
pub fn can_parse_logical(text: &str) -> bool {
    LogicalCollector::can_parse(text)
}

/// Collects a whole logical column of `rows` rows from `tokens`.
///
/// Tokens are written to rows `0..rows` in order.
///
/// # Errors
///
/// - [`Error::Parse`] if an end-of-input token appears in a cell position
/// - [`Error::RowOutOfBounds`] if there are more tokens than rows
/// - [`Error::IncompleteColumn`] if there are fewer tokens than rows
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn collect_logical<'a, I>(tokens: I, rows: usize) -> Result<Vec<TriState>>
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut column = ColumnBuffer::with_rows(rows);
    ColumnWriter::<LogicalCollector, _>::new(&mut column, 0).fill(0, tokens)?;
    column.finish()
}
