//! Query extraction from pair report files.
//!
//! A report is scanned line by line with a two-state machine:
//!
//! ```text
//!            "Found in pair..."                field line ("Refer:"/"Query:")
//!   Idle ─────────────────────────▶ Armed ─────────────────────────────────▶ Idle
//!                                     │  ▲                                   (emits field)
//!                                     └──┘ any other line
//! ```
//!
//! Every field line seen while armed produces a candidate and disarms the
//! scanner, whether or not the candidate passes the gap filter. Lines that match
//! neither the trigger nor the selected field are ignored.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::query::{count_gaps, Query};
use crate::core::types::FieldOrder;

/// Line prefix that arms the scanner
pub const TRIGGER_PREFIX: &str = "Found in pair";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scanner state while walking a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    /// A trigger line was seen and the next field line will be extracted
    Armed,
}

impl ScanState {
    /// Apply one line to the state machine.
    ///
    /// Returns the next state and, when a field line is consumed while armed,
    /// the text following the field prefix.
    #[must_use]
    pub fn advance(self, line: &str, order: FieldOrder) -> (ScanState, Option<&str>) {
        let state = if line.starts_with(TRIGGER_PREFIX) {
            ScanState::Armed
        } else {
            self
        };

        match state {
            ScanState::Armed => match field_text(line, order) {
                Some(text) => (ScanState::Idle, Some(text)),
                None => (ScanState::Armed, None),
            },
            ScanState::Idle => (ScanState::Idle, None),
        }
    }
}

/// Text of a field line after its prefix and one separating space
fn field_text(line: &str, order: FieldOrder) -> Option<&str> {
    let rest = line.strip_prefix(order.prefix())?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Drop the final character of an extracted field.
///
/// Report fields carry one trailing symbol that is not part of the query.
fn drop_last_char(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next_back();
    chars.as_str()
}

/// Lines of a single pair report
#[derive(Debug, Clone)]
pub struct ReportLines {
    file_name: String,
    lines: Vec<String>,
}

impl ReportLines {
    /// Read a report from disk
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Io` if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        Ok(Self::from_text(file_name, &content))
    }

    pub fn from_text(file_name: impl Into<String>, text: &str) -> Self {
        Self {
            file_name: file_name.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lazily extract the qualifying queries of this report.
    ///
    /// `max_gaps` is the gap allowance of the current length pass; a candidate
    /// is kept when its gap count does not exceed it.
    pub fn queries(&self, order: FieldOrder, max_gaps: f64) -> QueryExtractor<'_> {
        QueryExtractor {
            report: self,
            lines: self.lines.iter().enumerate(),
            state: ScanState::Idle,
            order,
            max_gaps,
        }
    }
}

/// Iterator yielding the qualifying [`Query`] values of a report
pub struct QueryExtractor<'a> {
    report: &'a ReportLines,
    lines: std::iter::Enumerate<std::slice::Iter<'a, String>>,
    state: ScanState,
    order: FieldOrder,
    max_gaps: f64,
}

impl Iterator for QueryExtractor<'_> {
    type Item = Query;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            let (state, field) = self.state.advance(line, self.order);
            self.state = state;

            let Some(candidate) = field else {
                continue;
            };
            if candidate.is_empty() {
                continue;
            }

            let line_no = index + 1;
            let gaps = count_gaps(candidate);
            #[allow(clippy::cast_precision_loss)] // Gap counts are tiny
            let too_many_gaps = gaps as f64 > self.max_gaps;
            if too_many_gaps {
                debug!(
                    "{}:{line_no}: skipping query with {gaps} gaps (allowed {:.2})",
                    self.report.file_name, self.max_gaps
                );
                continue;
            }

            let text = drop_last_char(candidate);
            if text.is_empty() {
                continue;
            }

            return Some(Query::new(text, self.report.file_name.as_str(), line_no, gaps));
        }
        None
    }
}
