use std::io::Write;

use serde::Serialize;

use crate::core::record::MatchRecord;
use crate::matching::aggregator::MatchAggregator;

#[derive(Serialize)]
struct QueryEntry<'a> {
    query: &'a str,
    matches: &'a [MatchRecord],
}

#[derive(Serialize)]
struct Report<'a> {
    length: u32,
    queries: Vec<QueryEntry<'a>>,
}

/// Write the JSON report, preserving discovery order
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization or the write fails.
pub fn write<W: Write>(aggregator: &MatchAggregator, writer: &mut W) -> serde_json::Result<()> {
    let report = Report {
        length: aggregator.length(),
        queries: aggregator
            .iter()
            .map(|(query, matches)| QueryEntry { query, matches })
            .collect(),
    };
    serde_json::to_writer_pretty(writer, &report)
}
