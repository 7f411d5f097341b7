//! Three-valued logical values.
//!
//! A logical column must tell "known false" apart from "no value", so cells
//! hold a [`TriState`] rather than a plain `bool`.
//!
//! ## Examples
//!
//! ```rust
//! use column_collect::TriState;
//!
//! assert_eq!(TriState::from(true), TriState::True);
//! assert_eq!(TriState::from(None), TriState::Missing);
//! assert_eq!(TriState::False.as_bool(), Some(false));
//! assert_eq!(TriState::Missing.to_string(), "NA");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A logical value that may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    True,
    False,
    #[default]
    Missing,
}

impl TriState {
    /// Returns the boolean value, or `None` when missing.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            TriState::True => Some(true),
            TriState::False => Some(false),
            TriState::Missing => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, TriState::Missing)
    }

    #[inline]
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, TriState::True)
    }

    #[inline]
    #[must_use]
    pub const fn is_false(&self) -> bool {
        matches!(self, TriState::False)
    }
}

impl From<bool> for TriState {
    fn from(b: bool) -> Self {
        if b {
            TriState::True
        } else {
            TriState::False
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(b: Option<bool>) -> Self {
        b.map_or(TriState::Missing, TriState::from)
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        value.as_bool()
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TriState::True => "TRUE",
            TriState::False => "FALSE",
            TriState::Missing => "NA",
        })
    }
}

// Serialized as a nullable boolean so JSON consumers see true/false/null.
impl Serialize for TriState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_bool().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TriState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<bool>::deserialize(deserializer).map(TriState::from)
    }
}
