use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::record::MatchRecord;
use crate::core::types::ReportFormat;
use crate::output::{self, OutputError};

/// Matches collected for one query length.
///
/// Entries are keyed by the uppercase query and kept in discovery order, both
/// for the keys and for the records under each key. One aggregator exists per
/// length pass and is consumed by [`MatchAggregator::save`].
#[derive(Debug, Clone)]
pub struct MatchAggregator {
    length: u32,
    entries: Vec<(String, Vec<MatchRecord>)>,
    index: HashMap<String, usize>,
}

impl MatchAggregator {
    pub fn new(length: u32) -> Self {
        Self {
            length,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Query length this aggregator collects for
    pub fn length(&self) -> u32 {
        self.length
    }

    fn slot(&mut self, query: &str) -> &mut Vec<MatchRecord> {
        let key = query.to_uppercase();
        let next = self.entries.len();
        let position = *self.index.entry(key.clone()).or_insert(next);
        if position == next {
            self.entries.push((key, Vec::new()));
        }
        &mut self.entries[position].1
    }

    /// Append one match under `query`
    pub fn record(&mut self, query: &str, record: MatchRecord) {
        self.slot(query).push(record);
    }

    /// Append several matches under `query`, keeping their order
    pub fn extend(&mut self, query: &str, records: impl IntoIterator<Item = MatchRecord>) {
        self.slot(query).extend(records);
    }

    pub fn get(&self, query: &str) -> Option<&[MatchRecord]> {
        self.index
            .get(query)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Queries with their matches in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MatchRecord])> {
        self.entries
            .iter()
            .map(|(query, records)| (query.as_str(), records.as_slice()))
    }

    /// Number of distinct queries with at least one match
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of match records across all queries
    pub fn total_matches(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }

    /// Path of the report this aggregator writes into `dir`
    pub fn report_path(&self, dir: &Path, format: ReportFormat) -> PathBuf {
        dir.join(output::report_file_name(self.length, format))
    }

    /// Write the report for this length and consume the aggregator.
    ///
    /// Nothing is written when no match was recorded.
    ///
    /// # Errors
    ///
    /// Returns `OutputError` if the report cannot be created or written.
    pub fn save(self, dir: &Path, format: ReportFormat) -> Result<Option<PathBuf>, OutputError> {
        if self.is_empty() {
            return Ok(None);
        }

        let path = self.report_path(dir, format);
        output::write_report(&self, &path, format)?;

        info!("\n\n{} saved to disk!\n", path.display());
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_keeps_discovery_order() {
        let mut aggregator = MatchAggregator::new(20);
        aggregator.record("TTTT", MatchRecord::new(10, "b.txt", 4));
        aggregator.record("AAAA", MatchRecord::new(3, "a.txt", 1));
        aggregator.record("TTTT", MatchRecord::new(2, "a.txt", 9));

        let keys: Vec<_> = aggregator.iter().map(|(q, _)| q).collect();
        assert_eq!(keys, vec!["TTTT", "AAAA"]);

        let lines: Vec<_> = aggregator
            .get("TTTT")
            .unwrap()
            .iter()
            .map(|r| r.reference_line)
            .collect();
        assert_eq!(lines, vec![10, 2]);
        assert_eq!(aggregator.len(), 2);
        assert_eq!(aggregator.total_matches(), 3);
    }

    #[test]
    fn test_keys_are_uppercase() {
        let mut aggregator = MatchAggregator::new(5);
        aggregator.record("acgu", MatchRecord::new(1, "a.txt", 1));
        aggregator.extend("ACGU", vec![MatchRecord::new(2, "a.txt", 2)]);

        assert_eq!(aggregator.len(), 1);
        assert_eq!(aggregator.get("ACGU").unwrap().len(), 2);
    }

    #[test]
    fn test_save_empty_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let aggregator = MatchAggregator::new(22);
        let path = aggregator.report_path(dir.path(), ReportFormat::Text);

        assert_eq!(aggregator.save(dir.path(), ReportFormat::Text).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_writes_named_report() {
        let dir = TempDir::new().unwrap();
        let mut aggregator = MatchAggregator::new(21);
        aggregator.record("ACGT", MatchRecord::new(4, "sonuclar_21.txt", 8));

        let path = aggregator.save(dir.path(), ReportFormat::Text).unwrap().unwrap();
        assert_eq!(path, dir.path().join("RNA_21.txt"));
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "> ACGT\n    Line:4, Src: sonuclar_21.txt: 8\n");
    }
}
