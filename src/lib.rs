//! # rna-search
//!
//! Approximate matching of short nucleotide queries against a large
//! FASTA-like reference.
//!
//! Queries come from pair report files (`sonuclar_<length>*`): after each
//! `Found in pair` line, the next `Refer:` or `Query:` field holds one query.
//! Every query is slid across every reference record and a record is reported
//! when some window agrees with the query on enough positions. Matches are
//! grouped by query length and written to one `RNA_<length>` report each.
//!
//! ## Example
//!
//! ```rust
//! use rna_search::core::FieldOrder;
//! use rna_search::matching::{MatchAggregator, MatchingConfig, SearchEngine};
//! use rna_search::matching::progress::NoProgress;
//! use rna_search::parsing::reference::ReferenceLines;
//! use rna_search::parsing::report::ReportLines;
//!
//! let reference = ReferenceLines::from_text("ref.fna", ">rec1\nTTACGTAAT\n>rec2\nGGGGGGGG\n");
//! let report = ReportLines::from_text("sonuclar_6.txt", "Found in pair\nRefer: ACGTAX\n");
//!
//! let engine = SearchEngine::new(&reference, MatchingConfig::new(6, 0));
//! let mut aggregator = MatchAggregator::new(6);
//! for query in report.queries(FieldOrder::Refer, 0.0) {
//!     engine.search_match(&query, &mut aggregator, &mut NoProgress);
//! }
//!
//! assert_eq!(aggregator.get("ACGTA").unwrap().len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: queries, match records and run settings
//! - [`parsing`]: target and pair report parsers
//! - [`matching`]: matching engine, aggregator and progress observer
//! - [`output`]: report writers
//! - [`driver`]: per-length orchestration
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod driver;
pub mod matching;
pub mod output;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::types::*;
pub use crate::core::{MatchRecord, Query};
pub use driver::{run_search, LengthSummary, SearchError};
pub use matching::{MatchAggregator, MatchingConfig, SearchEngine};
