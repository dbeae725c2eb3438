//! Brute-force approximate matching of a query against reference records.
//!
//! For each record the query is slid across the body one offset at a time.
//! The match ratio of a window is the fraction of positions where the query
//! and the window hold the same symbol; there is no alignment, so an indel
//! shifts every following position. The first window reaching the similarity
//! threshold is the record's hit and the rest of the record is not examined,
//! so a record contributes at most one [`MatchRecord`] per query.

use tracing::trace;

use crate::core::record::MatchRecord;
use crate::core::types::{similarity_threshold, WindowScan, RATIO_EPSILON};
use crate::core::Query;
use crate::matching::aggregator::MatchAggregator;
use crate::matching::progress::{Progress, ProgressTicker, REFERENCE_PROGRESS_INTERVAL};
use crate::parsing::reference::ReferenceLines;

/// Fraction of positions where `query` and `window` agree.
///
/// Positions past the end of `window` count as mismatches. An empty query has
/// ratio 0.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Query lengths are small
pub fn match_ratio(query: &[u8], window: &[u8]) -> f64 {
    if query.is_empty() {
        return 0.0;
    }
    let matches = query
        .iter()
        .zip(window)
        .filter(|(q, w)| q == w)
        .count();

    matches as f64 / query.len() as f64
}

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Configured query length of the current pass; bounds the window offsets
    pub length: usize,
    /// Minimum match ratio for a window to count as a hit
    pub similarity: f64,
    pub window: WindowScan,
}

impl MatchingConfig {
    pub fn new(length: usize, tolerance_percent: u8) -> Self {
        Self {
            length,
            similarity: similarity_threshold(tolerance_percent),
            window: WindowScan::default(),
        }
    }

    #[must_use]
    pub fn with_window(mut self, window: WindowScan) -> Self {
        self.window = window;
        self
    }

    /// Number of window offsets tried on a body of `body_len` symbols
    fn offsets(&self, body_len: usize) -> usize {
        match self.window {
            WindowScan::Full if body_len >= self.length => body_len - self.length + 1,
            WindowScan::Full => 0,
            WindowScan::SkipLast => body_len.saturating_sub(self.length),
        }
    }
}

/// Slide `query` over `body` and report whether any window reaches `similarity`.
///
/// Offsets run from 0 while a window of the configured length fits (see
/// [`WindowScan`]); the window compared at each offset is as long as the query.
/// Windows that would run past the end of the body never match.
#[must_use]
pub fn compare_seqs(query: &[u8], body: &[u8], config: &MatchingConfig) -> bool {
    if query.is_empty() {
        return false;
    }

    (0..config.offsets(body.len())).any(|offset| {
        let Some(window) = body.get(offset..offset + query.len()) else {
            return false;
        };
        match_ratio(query, window) + RATIO_EPSILON >= config.similarity
    })
}

/// Runs queries against every record of a reference
pub struct SearchEngine<'a> {
    reference: &'a ReferenceLines,
    config: MatchingConfig,
}

impl<'a> SearchEngine<'a> {
    pub fn new(reference: &'a ReferenceLines, config: MatchingConfig) -> Self {
        Self { reference, config }
    }

    /// Find every record the query matches, in reference order.
    ///
    /// The reference lines are re-scanned on each call.
    pub fn find_matches(&self, query: &Query, progress: &mut dyn Progress) -> Vec<MatchRecord> {
        let normalized = query.normalized();
        let needle = normalized.as_bytes();
        let mut ticker = ProgressTicker::new(REFERENCE_PROGRESS_INTERVAL);
        let mut hits = Vec::new();

        for record in self.reference.records() {
            if ticker.tick(record.end_line) {
                progress.scanning_reference(self.reference.name(), record.end_line);
            }
            if compare_seqs(needle, record.body.as_bytes(), &self.config) {
                trace!(
                    "{normalized} matched record ending at line {}",
                    record.end_line
                );
                hits.push(MatchRecord::new(
                    record.end_line,
                    query.source_file.as_str(),
                    query.source_line,
                ));
            }
        }

        hits
    }

    /// Search one query and record its hits under the uppercase query.
    ///
    /// Returns the number of records matched.
    pub fn search_match(
        &self,
        query: &Query,
        aggregator: &mut MatchAggregator,
        progress: &mut dyn Progress,
    ) -> usize {
        let hits = self.find_matches(query, progress);
        let count = hits.len();
        if count > 0 {
            aggregator.extend(&query.normalized(), hits);
        }
        count
    }
}
