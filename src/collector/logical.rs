//! Logical (boolean) column collector.
//!
//! Reading a cell:
//!
//! | Token | Value |
//! |-------|-------|
//! | `String("T")`, `String("TRUE")` | `TRUE` |
//! | any other `String` | `FALSE` |
//! | `Missing`, `Empty` | `NA` |
//! | `EndOfInput` | error |
//!
//! Probing sample text accepts exactly `T`, `F`, `TRUE` and `FALSE`. The probe
//! decides whether a column is logical at all; once it is, `F`, `FALSE` and
//! every other string read as `FALSE` through the same fallback.

use super::Collector;
use crate::error::ParseError;
use crate::infer::ColumnType;
use crate::token::Token;
use crate::tristate::TriState;

/// Collector for logical columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalCollector;

impl LogicalCollector {
    /// Reads field bytes as a logical value.
    ///
    /// Exact byte comparison: no trimming, no case folding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use column_collect::{LogicalCollector, TriState};
    ///
    /// assert_eq!(LogicalCollector::parse_bytes(b"TRUE"), TriState::True);
    /// assert_eq!(LogicalCollector::parse_bytes(b"true"), TriState::False);
    /// assert_eq!(LogicalCollector::parse_bytes(b"FALSE"), TriState::False);
    /// ```
    #[inline]
    #[must_use]
    pub fn parse_bytes(bytes: &[u8]) -> TriState {
        match bytes {
            b"T" | b"TRUE" => TriState::True,
            _ => TriState::False,
        }
    }
}

impl Collector for LogicalCollector {
    type Value = TriState;

    fn column_type() -> ColumnType {
        ColumnType::Logical
    }

    #[inline]
    fn parse(token: &Token<'_>) -> Result<TriState, ParseError> {
        match token {
            Token::String(bytes) => Ok(Self::parse_bytes(bytes)),
            Token::Missing | Token::Empty => Ok(TriState::Missing),
            Token::EndOfInput => Err(ParseError::UnexpectedEndOfInput {
                expected: ColumnType::Logical.as_str(),
            }),
        }
    }

    #[inline]
    fn can_parse(text: &str) -> bool {
        matches!(text, "T" | "F" | "TRUE" | "FALSE")
    }
}
