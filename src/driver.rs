//! Length-by-length orchestration of a search run.
//!
//! For every query length in the configured range the driver finds the pair
//! reports named `<prefix><length>*`, extracts their queries, searches each one
//! against the reference and saves one report. A length without reports is
//! skipped entirely. A length's report is only written after all of its
//! sources were processed, so an aborted run never leaves a partial report.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::core::types::{gap_allowance, SearchSettings};
use crate::matching::aggregator::MatchAggregator;
use crate::matching::engine::{MatchingConfig, SearchEngine};
use crate::matching::progress::{Progress, ProgressTicker, SOURCE_PROGRESS_INTERVAL};
use crate::output::OutputError;
use crate::parsing::reference::{ReferenceError, ReferenceLines};
use crate::parsing::report::{ReportError, ReportLines};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("Failed to list source directory {path}: {source}")]
    SourceDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What happened for one query length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthSummary {
    pub length: u32,
    /// Number of pair reports processed
    pub sources: usize,
    /// Number of qualifying queries searched
    pub queries: usize,
    /// Number of match records collected
    pub matches: usize,
    /// Report written for this length, if any match was found
    pub report: Option<PathBuf>,
}

/// Find the regular files in `dir` whose name starts with `prefix`, sorted by name
///
/// # Errors
///
/// Returns `SearchError::SourceDir` if the directory cannot be listed.
pub fn discover_sources(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, SearchError> {
    let dir_error = |source| SearchError::SourceDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(dir_error)? {
        let entry = entry.map_err(dir_error)?;
        if !entry.file_name().to_string_lossy().starts_with(prefix) {
            continue;
        }
        // Follows symlinks; directories and dangling links are skipped
        let path = entry.path();
        if path.is_file() {
            sources.push(path);
        }
    }

    sources.sort();
    Ok(sources)
}

/// Process a single query length against an already loaded reference.
///
/// Returns `None` when no pair report exists for this length.
///
/// # Errors
///
/// Returns an error if a report cannot be read or the output cannot be written.
pub fn search_length(
    settings: &SearchSettings,
    reference: &ReferenceLines,
    length: u32,
    progress: &mut dyn Progress,
) -> Result<Option<LengthSummary>, SearchError> {
    let sources = discover_sources(&settings.source_dir, &settings.source_prefix_for(length))?;
    if sources.is_empty() {
        debug!("No sources for length {length}");
        return Ok(None);
    }

    let config = MatchingConfig::new(length as usize, settings.tolerance_percent)
        .with_window(settings.window);
    let engine = SearchEngine::new(reference, config);
    let mut aggregator = MatchAggregator::new(length);
    let max_gaps = gap_allowance(settings.gap_percent, length);

    let mut queries = 0;
    for path in &sources {
        let report = ReportLines::load(path)?;
        info!("Processing {}", report.file_name());

        let mut ticker = ProgressTicker::new(SOURCE_PROGRESS_INTERVAL);
        for query in report.queries(settings.order, max_gaps) {
            if ticker.tick(query.source_line) {
                progress.scanning_source(report.file_name(), query.source_line);
            }
            engine.search_match(&query, &mut aggregator, progress);
            queries += 1;
        }
    }

    let matches = aggregator.total_matches();
    let report = aggregator.save(&settings.output_dir, settings.format)?;

    Ok(Some(LengthSummary {
        length,
        sources: sources.len(),
        queries,
        matches,
        report,
    }))
}

/// Run the whole search described by `settings`
///
/// # Errors
///
/// Returns an error if the target or any report cannot be read, the source
/// directory cannot be listed, or a report cannot be written.
pub fn run_search(
    settings: &SearchSettings,
    progress: &mut dyn Progress,
) -> Result<Vec<LengthSummary>, SearchError> {
    let reference = ReferenceLines::load(&settings.target)?;
    debug!(
        "Loaded {} lines ({} records) from {}",
        reference.len(),
        reference.header_count(),
        reference.name()
    );

    let mut summaries = Vec::new();
    for length in settings.lengths() {
        if let Some(summary) = search_length(settings, &reference, length, progress)? {
            summaries.push(summary);
        }
    }
    Ok(summaries)
}
