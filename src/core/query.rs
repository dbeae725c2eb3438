/// Symbol marking an insertion/deletion in a pair report alignment
pub const GAP_SYMBOL: char = '-';

/// Count the gap symbols in a sequence
#[must_use]
pub fn count_gaps(text: &str) -> usize {
    text.chars().filter(|&c| c == GAP_SYMBOL).count()
}

/// A query sequence pulled out of a pair report
///
/// Queries are short-lived: one is built per qualifying report line and
/// handed straight to the matching engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Extracted text, case preserved
    pub text: String,

    /// Name of the report file the query came from
    pub source_file: String,

    /// 1-based line number of the field line in the report
    pub source_line: usize,

    /// Number of gap symbols in the field before truncation
    pub gaps: usize,
}

impl Query {
    pub fn new(
        text: impl Into<String>,
        source_file: impl Into<String>,
        source_line: usize,
        gaps: usize,
    ) -> Self {
        Self {
            text: text.into(),
            source_file: source_file.into(),
            source_line,
            gaps,
        }
    }

    /// Aggregation key for this query
    #[must_use]
    pub fn normalized(&self) -> String {
        self.text.to_uppercase()
    }
}
