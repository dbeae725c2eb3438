//! Parsers for the two kinds of input file.
//!
//! - [`reference`]: the FASTA-like target (`>` headers, concatenated bodies)
//! - [`report`]: pair report files that carry the query sequences

pub mod reference;
pub mod report;
