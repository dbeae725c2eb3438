//! Approximate matching of queries against the reference.
//!
//! - [`engine`]: sliding-window comparison and the per-query search
//! - [`aggregator`]: per-length collection of matches, flushed to a report
//! - [`progress`]: optional progress observer used during long scans
//!
//! ## Example
//!
//! ```rust
//! use rna_search::core::Query;
//! use rna_search::matching::aggregator::MatchAggregator;
//! use rna_search::matching::engine::{MatchingConfig, SearchEngine};
//! use rna_search::matching::progress::NoProgress;
//! use rna_search::parsing::reference::ReferenceLines;
//!
//! let reference = ReferenceLines::from_text("ref.fna", ">rec1\nAAAAA\n>rec2\nAAAAT\n");
//! let engine = SearchEngine::new(&reference, MatchingConfig::new(5, 0));
//! let mut aggregator = MatchAggregator::new(5);
//!
//! let query = Query::new("aaaaa", "sonuclar_5.txt", 2, 0);
//! engine.search_match(&query, &mut aggregator, &mut NoProgress);
//!
//! assert_eq!(aggregator.get("AAAAA").unwrap()[0].reference_line, 3);
//! ```

pub mod aggregator;
pub mod engine;
pub mod progress;

pub use aggregator::MatchAggregator;
pub use engine::{MatchingConfig, SearchEngine};
