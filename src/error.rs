//! Error types for column collection.
//!
//! Two layers are distinguished:
//!
//! - [`ParseError`]: a single token could not be turned into a value. The
//!   only such condition is [`ParseError::UnexpectedEndOfInput`], which means
//!   the tokenizer and the collector have lost step with each other.
//! - [`Error`]: the crate-level error. Per-value failures are wrapped with the
//!   row and column they occurred at; column buffer misuse (out-of-range rows,
//!   double writes, unfinished columns) is reported here as well.
//!
//! Text that does not look like a value of the collector's type is **not** an
//! error. The logical collector, for example, reads any unrecognized string as
//! `FALSE`.
//!
//! ## Examples
//!
//! ```rust
//! use column_collect::{collect_logical, Error, Token};
//!
//! let tokens = [Token::from("T"), Token::EndOfInput];
//! let err = collect_logical(tokens, 2).unwrap_err();
//! assert!(matches!(err, Error::Parse { row: 1, .. }));
//! assert!(err.to_string().contains("row 1"));
//! ```

use thiserror::Error;

/// Failure to convert a single token into a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer signalled end of input where a cell value was expected.
    #[error("unexpected end of input, expected a {expected} value")]
    UnexpectedEndOfInput { expected: &'static str },
}

/// Represents all errors that can occur while collecting a column.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A token could not be parsed; fatal for the enclosing column.
    #[error("Parse error at row {row}, column {column}: {source}")]
    Parse {
        row: usize,
        column: usize,
        #[source]
        source: ParseError,
    },

    /// A write addressed a row outside the buffer.
    #[error("Row {row} is out of bounds for a column of {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    /// A row was written a second time.
    #[error("Row {row} has already been written")]
    DuplicateWrite { row: usize },

    /// The column was finished before every row had a value.
    #[error("Column incomplete: {written} of {rows} rows written, first unwritten row is {first_unwritten}")]
    IncompleteColumn {
        first_unwritten: usize,
        written: usize,
        rows: usize,
    },
}

impl Error {
    /// Wraps a [`ParseError`] with its location.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use column_collect::{Error, ParseError};
    ///
    /// let err = Error::parse(3, 0, ParseError::UnexpectedEndOfInput { expected: "logical" });
    /// assert!(err.to_string().contains("row 3, column 0"));
    /// ```
    pub fn parse(row: usize, column: usize, source: ParseError) -> Self {
        Error::Parse {
            row,
            column,
            source,
        }
    }

    pub fn row_out_of_bounds(row: usize, rows: usize) -> Self {
        Error::RowOutOfBounds { row, rows }
    }

    pub fn duplicate_write(row: usize) -> Self {
        Error::DuplicateWrite { row }
    }

    pub fn incomplete_column(first_unwritten: usize, written: usize, rows: usize) -> Self {
        Error::IncompleteColumn {
            first_unwritten,
            written,
            rows,
        }
    }

    /// Returns `true` for errors that mean tokenizer and collector are out of step.
    #[must_use]
    pub fn is_desync(&self) -> bool {
        matches!(
            self,
            Error::Parse {
                source: ParseError::UnexpectedEndOfInput { .. },
                ..
            }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
