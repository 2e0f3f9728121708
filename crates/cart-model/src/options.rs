//! Configuration options for cart conversion.

use serde::{Deserialize, Serialize};

/// Default number of rows scanned for a header.
pub const DEFAULT_SCAN_ROWS: usize = 60;

/// Default maximum length of a `" / "`-separated spec segment.
pub const DEFAULT_MAX_SPEC_LEN: usize = 40;

/// How the header row is located.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HeaderStrategy {
    /// Score rows against the canonical column keywords.
    #[default]
    Keywords,
    /// Take the first row containing one vendor-unique label (e.g. `순번`).
    Sentinel { label: String },
}

/// Options for header resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Rows scanned from the top before giving up.
    pub scan_rows: usize,
    pub strategy: HeaderStrategy,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            scan_rows: DEFAULT_SCAN_ROWS,
            strategy: HeaderStrategy::Keywords,
        }
    }
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan window. Zero falls back to [`DEFAULT_SCAN_ROWS`].
    #[must_use]
    pub fn with_scan_rows(mut self, rows: usize) -> Self {
        self.scan_rows = if rows == 0 { DEFAULT_SCAN_ROWS } else { rows };
        self
    }

    #[must_use]
    pub fn with_sentinel(mut self, label: impl Into<String>) -> Self {
        self.strategy = HeaderStrategy::Sentinel {
            label: label.into(),
        };
        self
    }
}

/// What to do with a named row whose quantity is missing or not positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingQuantityPolicy {
    /// Treat the row as a single unit.
    #[default]
    DefaultToOne,
    /// Drop the row.
    SkipRow,
}

/// Options for item normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    pub missing_quantity: MissingQuantityPolicy,

    /// Merge `label: value` rows without numbers into the preceding item's spec.
    pub option_lines: bool,

    /// Pull `[12345678]`-style codes out of product names when no code column
    /// value is present.
    pub extract_embedded_codes: bool,

    /// Longest trailing `" / "` segment still treated as a spec.
    pub max_spec_len: usize,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            missing_quantity: MissingQuantityPolicy::DefaultToOne,
            option_lines: true,
            extract_embedded_codes: true,
            max_spec_len: DEFAULT_MAX_SPEC_LEN,
        }
    }
}

impl NormalizerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_missing_quantity(mut self, policy: MissingQuantityPolicy) -> Self {
        self.missing_quantity = policy;
        self
    }

    #[must_use]
    pub fn with_option_lines(mut self, enable: bool) -> Self {
        self.option_lines = enable;
        self
    }

    #[must_use]
    pub fn with_embedded_codes(mut self, enable: bool) -> Self {
        self.extract_embedded_codes = enable;
        self
    }
}

/// Options for a whole conversion request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub resolver: ResolverOptions,
    pub normalizer: NormalizerOptions,
}
