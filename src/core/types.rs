use std::fmt;
use std::path::PathBuf;

/// Default prefix of the pair report files, followed by the query length
pub const DEFAULT_SOURCE_PREFIX: &str = "sonuclar_";

/// Tolerance used when comparing a match ratio against the similarity threshold.
///
/// Thresholds are computed as `(100 - tol) / 100`, which is not always exactly
/// representable; a ratio that equals the threshold on paper must still match.
pub const RATIO_EPSILON: f64 = 1e-9;

/// Which field of a pair report carries the query sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOrder {
    /// `-ord 1`: the `Refer:` line
    Refer,
    /// `-ord 2`: the `Query:` line
    Query,
}

impl FieldOrder {
    /// Map the numeric `-ord` value onto a field
    pub fn from_ord(ord: u8) -> Option<Self> {
        match ord {
            1 => Some(FieldOrder::Refer),
            2 => Some(FieldOrder::Query),
            _ => None,
        }
    }

    /// Prefix that identifies the field line (without the separating space)
    pub fn prefix(self) -> &'static str {
        match self {
            FieldOrder::Refer => "Refer:",
            FieldOrder::Query => "Query:",
        }
    }
}

impl fmt::Display for FieldOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().trim_end_matches(':'))
    }
}

/// How far the sliding window travels along a reference body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowScan {
    /// Try every offset at which a full window fits
    #[default]
    Full,
    /// Stop one offset early (`0..len(body) - length`), as older runs did
    SkipLast,
}

/// Serialization of the per-length match report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// `RNA_<len>.txt`
    #[default]
    Text,
    /// `RNA_<len>.json`
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// Minimum fraction of agreeing positions, derived from a tolerance percentage
#[must_use]
pub fn similarity_threshold(tolerance_percent: u8) -> f64 {
    (100.0 - f64::from(tolerance_percent)) / 100.0
}

/// Maximum number of gap symbols a query of `length` may carry
#[must_use]
pub fn gap_allowance(gap_percent: u8, length: u32) -> f64 {
    (f64::from(gap_percent) / 100.0) * f64::from(length)
}

/// Fully resolved settings for one search run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub min_len: u32,
    pub max_len: u32,
    pub order: FieldOrder,
    /// Allowed percentage of `-` symbols in a query
    pub gap_percent: u8,
    /// Allowed percentage of mismatching positions
    pub tolerance_percent: u8,
    pub target: PathBuf,
    pub source_dir: PathBuf,
    pub source_prefix: String,
    pub output_dir: PathBuf,
    pub format: ReportFormat,
    pub window: WindowScan,
}

impl SearchSettings {
    #[must_use]
    pub fn similarity(&self) -> f64 {
        similarity_threshold(self.tolerance_percent)
    }

    /// Query lengths to process, inclusive on both ends
    pub fn lengths(&self) -> std::ops::RangeInclusive<u32> {
        self.min_len..=self.max_len
    }

    /// File name prefix of the pair reports for one query length
    #[must_use]
    pub fn source_prefix_for(&self, length: u32) -> String {
        format!("{}{length}", self.source_prefix)
    }
}
