use serde::{Deserialize, Serialize};

/// One place where a query approximately matched a reference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Line at which the matched reference record ends
    pub reference_line: usize,

    /// Report file the query was extracted from
    pub source_file: String,

    /// Line of the query field in that report
    pub source_line: usize,
}

impl MatchRecord {
    pub fn new(reference_line: usize, source_file: impl Into<String>, source_line: usize) -> Self {
        Self {
            reference_line,
            source_file: source_file.into(),
            source_line,
        }
    }
}
