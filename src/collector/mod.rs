//! Per-type collectors and the writer that binds them to a column.
//!
//! A [`Collector`] turns tokens into values of one column type and answers
//! whether sample text could belong to that type. Collectors carry no state:
//! every operation is an associated function, so sibling types (one per
//! supported column type) can be registered with a
//! [`TypeGuesser`](crate::TypeGuesser) without instantiating anything.
//!
//! A [`ColumnWriter`] pairs a collector with the storage it fills and the
//! column index used in error messages. It is the only place values are
//! written.
//!
//! ## Examples
//!
//! ```rust
//! use column_collect::{ColumnBuffer, ColumnWriter, LogicalCollector, Token, TriState};
//!
//! let mut column = ColumnBuffer::with_rows(3);
//! let mut writer = ColumnWriter::<LogicalCollector, _>::new(&mut column, 0);
//! writer.set_value(0, &Token::from("TRUE")).unwrap();
//! writer.set_value(1, &Token::Missing).unwrap();
//! writer.set_value(2, &Token::from("no")).unwrap();
//!
//! assert_eq!(
//!     column.finish().unwrap(),
//!     vec![TriState::True, TriState::Missing, TriState::False]
//! );
//! ```

mod logical;

pub use logical::LogicalCollector;

use crate::column::ColumnTarget;
use crate::error::ParseError;
use crate::infer::ColumnType;
use crate::token::Token;
use crate::{Error, Result};
use std::marker::PhantomData;

/// Conversion from tokens to values of one column type.
pub trait Collector {
    /// The value stored per row.
    type Value: Copy + Default;

    /// The column type this collector produces.
    fn column_type() -> ColumnType;

    /// Converts one cell token into a value.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] only for tokens that can never be a cell
    /// value. Text that does not look like this type is handled by the
    /// collector's own policy, not reported as an error.
    fn parse(token: &Token<'_>) -> std::result::Result<Self::Value, ParseError>;

    /// Capability probe used during type inference on raw sample text.
    fn can_parse(text: &str) -> bool;
}

/// Writes parsed values for one column into a [`ColumnTarget`].
pub struct ColumnWriter<C, T> {
    target: T,
    column: usize,
    _collector: PhantomData<fn() -> C>,
}

impl<C, T> ColumnWriter<C, T>
where
    C: Collector,
    T: ColumnTarget<C::Value>,
{
    /// Creates a writer for column index `column` over `target`.
    pub fn new(target: T, column: usize) -> Self {
        ColumnWriter {
            target,
            column,
            _collector: PhantomData,
        }
    }

    /// Parses `token` and stores the result at `row`.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if the token cannot be a cell value; buffer errors
    /// from the target otherwise. Nothing is written on error.
    pub fn set_value(&mut self, row: usize, token: &Token<'_>) -> Result<()> {
        let value = match C::parse(token) {
            Ok(value) => value,
            Err(source) => {
                tracing::debug!(
                    row,
                    column = self.column,
                    token = %token.kind(),
                    "token stream out of step with collector"
                );
                return Err(Error::parse(row, self.column, source));
            }
        };
        self.target.write(row, value)
    }

    /// Writes `tokens` to consecutive rows starting at `start_row`.
    ///
    /// Stops at the first error. Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// See [`set_value`](Self::set_value).
    pub fn fill<'a, I>(&mut self, start_row: usize, tokens: I) -> Result<usize>
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        let mut written = 0;
        for (row, token) in (start_row..).zip(tokens) {
            self.set_value(row, &token)?;
            written += 1;
        }
        Ok(written)
    }

    /// Releases the underlying target.
    pub fn into_inner(self) -> T {
        self.target
    }
}
