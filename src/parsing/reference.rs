//! Reference store for FASTA-like target files.
//!
//! The target is kept as its raw list of lines. Records are recovered on demand
//! by [`ReferenceLines::records`], which applies the single header rule in
//! [`is_header_line`]: every line starting with `>` opens a new record, every
//! other line is appended to the current record's body.

use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;

/// First character of a record header line
pub const HEADER_MARKER: char = '>';

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Failed to read target {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Returns true if the line opens a new reference record
#[must_use]
pub fn is_header_line(line: &str) -> bool {
    line.starts_with(HEADER_MARKER)
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// One reference record recovered from the line list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    /// Body lines concatenated without separators
    pub body: String,

    /// 1-based line number of the next header, or one past the last line at EOF
    pub end_line: usize,
}

/// Raw lines of a target file, read once per run and shared by every search
#[derive(Debug, Clone, Default)]
pub struct ReferenceLines {
    name: String,
    lines: Vec<String>,
}

impl ReferenceLines {
    /// Read a target file, transparently decompressing `.gz`/`.bgz` input
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::Io` if the file cannot be opened or read.
    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let to_error = |source| ReferenceError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = std::fs::File::open(path).map_err(to_error)?;
        let reader: Box<dyn Read> = if is_gzipped(path) {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        let lines = BufReader::new(reader)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_error)?;

        Ok(Self {
            name: path.display().to_string(),
            lines,
        })
    }

    /// Build from in-memory text, splitting on line terminators
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Display name of the target, used in progress messages
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of header lines in the target
    pub fn header_count(&self) -> usize {
        self.lines.iter().filter(|l| is_header_line(l)).count()
    }

    /// Re-scan the lines and yield every record with a non-empty body
    pub fn records(&self) -> Records<'_> {
        Records {
            lines: self.lines.iter(),
            line_no: 0,
            body: String::new(),
            done: false,
        }
    }
}

/// Iterator over the records of a [`ReferenceLines`]
pub struct Records<'a> {
    lines: std::slice::Iter<'a, String>,
    line_no: usize,
    body: String,
    done: bool,
}

impl Iterator for Records<'_> {
    type Item = ReferenceRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_no += 1;
            if is_header_line(line) {
                if !self.body.is_empty() {
                    return Some(ReferenceRecord {
                        body: std::mem::take(&mut self.body),
                        end_line: self.line_no,
                    });
                }
            } else {
                self.body.push_str(line);
            }
        }

        self.done = true;
        if self.body.is_empty() {
            None
        } else {
            Some(ReferenceRecord {
                body: std::mem::take(&mut self.body),
                end_line: self.line_no + 1,
            })
        }
    }
}
