//! Core data types shared by the extractor, the matching engine and the writers.
//!
//! - [`Query`]: a sequence taken from a pair report, with provenance
//! - [`MatchRecord`]: where a query matched (reference line, source file, source line)
//! - [`SearchSettings`]: the resolved run configuration
//! - [`FieldOrder`], [`WindowScan`], [`ReportFormat`]: small configuration enums

pub mod query;
pub mod record;
pub mod types;

pub use query::Query;
pub use record::MatchRecord;
pub use types::{FieldOrder, ReportFormat, SearchSettings, WindowScan};
