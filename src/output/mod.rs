//! Writers for the per-length match reports.
//!
//! | Format | File            | Layout                                        |
//! |--------|-----------------|-----------------------------------------------|
//! | text   | `RNA_<len>.txt` | `> QUERY` followed by indented match lines    |
//! | json   | `RNA_<len>.json`| `{ "length", "queries": [{ "query", "matches" }] }` |

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::ReportFormat;
use crate::matching::aggregator::MatchAggregator;

pub mod json;
pub mod text;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Base name of the report for one query length
#[must_use]
pub fn report_file_name(length: u32, format: ReportFormat) -> String {
    format!("RNA_{length}.{}", format.extension())
}

/// Write an aggregator's matches to `path` in the requested format
///
/// # Errors
///
/// Returns `OutputError::Io` if the file cannot be written, or
/// `OutputError::Json` if JSON serialization fails.
pub fn write_report(
    aggregator: &MatchAggregator,
    path: &Path,
    format: ReportFormat,
) -> Result<(), OutputError> {
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);

    match format {
        ReportFormat::Text => text::write(aggregator, &mut writer).map_err(io_error)?,
        ReportFormat::Json => {
            json::write(aggregator, &mut writer).map_err(|source| OutputError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    writer.flush().map_err(io_error)
}
