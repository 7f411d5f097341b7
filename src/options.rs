//! Configuration for column type inference.
//!
//! [`InferOptions`] controls which samples a [`TypeGuesser`](crate::TypeGuesser)
//! looks at and how they are cleaned before probing:
//!
//! - `guess_max`: how many samples to examine
//! - `na`: sample texts that count as missing and are skipped
//! - `trim_ws`: whether surrounding whitespace is stripped first
//!
//! Options are built with chained `with_*` calls starting from
//! [`InferOptions::new`].

/// Options controlling how samples are examined.
///
/// # Examples
///
/// ```rust
/// use column_collect::InferOptions;
///
/// let options = InferOptions::new()
///     .with_guess_max(100)
///     .with_na(["", "NA", "-"])
///     .with_trim_ws(false);
/// assert_eq!(options.guess_max, 100);
/// assert!(options.is_na("-"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InferOptions {
    /// Maximum number of samples examined.
    pub guess_max: usize,
    /// Sample texts treated as missing and skipped.
    pub na: Vec<String>,
    /// Trim surrounding whitespace before probing.
    pub trim_ws: bool,
}

impl Default for InferOptions {
    fn default() -> Self {
        InferOptions {
            guess_max: 1000,
            na: vec![String::new(), "NA".to_string()],
            trim_ws: true,
        }
    }
}

impl InferOptions {
    /// Creates default options: 1000 samples, `""` and `"NA"` as missing,
    /// whitespace trimmed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_guess_max(mut self, guess_max: usize) -> Self {
        self.guess_max = guess_max;
        self
    }

    /// Replaces the set of missing-value texts.
    #[must_use]
    pub fn with_na<I, S>(mut self, na: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.na = na.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_trim_ws(mut self, trim_ws: bool) -> Self {
        self.trim_ws = trim_ws;
        self
    }

    /// Returns `true` if `text` is one of the configured missing-value texts.
    #[must_use]
    pub fn is_na(&self, text: &str) -> bool {
        self.na.iter().any(|na| na == text)
    }
}
