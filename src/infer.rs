//! Column type inference from sample text.
//!
//! Type inference runs in two phases. While **probing**, a [`TypeGuesser`]
//! offers raw sample text to the capability probe of each registered column
//! type, in registration order, and nothing is written anywhere. Once a type
//! is picked the guesser is [committed](TypeGuesser::commit) and consumed;
//! from then on the column is parsed row by row with that type's collector.
//!
//! Which types are registered, and in which order, is the caller's policy.
//!
//! ## Examples
//!
//! ```rust
//! use column_collect::{InferOptions, LogicalCollector, TypeGuesser};
//!
//! let guesser = TypeGuesser::new(InferOptions::new())
//!     .with_collector::<LogicalCollector>()
//!     .with_probe("character", |_| true);
//!
//! assert_eq!(guesser.guess(&["T", "FALSE", "NA", "TRUE"]), Some("logical"));
//! assert_eq!(guesser.guess(&["T", "yes"]), Some("character"));
//! ```

use crate::collector::Collector;
use crate::options::InferOptions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Column types with a collector in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ColumnType {
    Logical,
}

impl ColumnType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Logical => "logical",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A capability probe: can this text be a value of the type?
pub type Probe = fn(&str) -> bool;

/// Ordered registry of column-type probes.
#[derive(Clone, Default)]
pub struct TypeGuesser {
    probes: IndexMap<Cow<'static, str>, Probe>,
    options: InferOptions,
}

impl fmt::Debug for TypeGuesser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeGuesser")
            .field("types", &self.probes.keys().collect::<Vec<_>>())
            .field("options", &self.options)
            .finish()
    }
}

impl TypeGuesser {
    #[must_use]
    pub fn new(options: InferOptions) -> Self {
        TypeGuesser {
            probes: IndexMap::new(),
            options,
        }
    }

    /// Registers the probe of collector `C` under its column type name.
    #[must_use]
    pub fn with_collector<C: Collector>(self) -> Self {
        self.with_probe(C::column_type().as_str(), C::can_parse)
    }

    /// Registers `probe` under `name`.
    ///
    /// Re-registering a name replaces its probe but keeps its position.
    #[must_use]
    pub fn with_probe(mut self, name: impl Into<Cow<'static, str>>, probe: Probe) -> Self {
        self.probes.insert(name.into(), probe);
        self
    }

    #[must_use]
    pub fn options(&self) -> &InferOptions {
        &self.options
    }

    /// Registered type names in trial order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.probes.keys().map(|name| &**name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Returns the first registered type whose probe accepts every
    /// non-missing sample.
    ///
    /// At most [`guess_max`](InferOptions::guess_max) samples are examined.
    /// If all examined samples are missing, the first registered type wins.
    /// Returns `None` when no probe accepts the samples.
    pub fn guess<S: AsRef<str>>(&self, samples: &[S]) -> Option<&str> {
        let values: Vec<&str> = samples
            .iter()
            .take(self.options.guess_max)
            .map(|s| {
                let s = s.as_ref();
                if self.options.trim_ws {
                    s.trim()
                } else {
                    s
                }
            })
            .filter(|s| !self.options.is_na(s))
            .collect();

        let guessed = self
            .probes
            .iter()
            .find(|&(_, probe)| values.iter().all(|&s| probe(s)))
            .map(|(name, _)| &**name);

        match guessed {
            Some(name) => {
                tracing::debug!(column_type = name, samples = values.len(), "guessed column type")
            }
            None => tracing::debug!(samples = values.len(), "no registered type accepts samples"),
        }
        guessed
    }

    /// Ends the probing phase and returns the chosen type name.
    ///
    /// The guesser is consumed; a committed column is not probed again.
    pub fn commit<S: AsRef<str>>(self, samples: &[S]) -> Option<Cow<'static, str>> {
        let index = self.guess(samples).and_then(|name| self.probes.get_index_of(name))?;
        let (name, _) = self.probes.into_iter().nth(index)?;
        tracing::trace!(column_type = %name, "column type committed");
        Some(name)
    }
}
