//! Command-line interface for rna-search.
//!
//! ## Usage
//!
//! ```text
//! # Search queries of length 24..=34 taken from the "Refer:" field,
//! # allowing 20% gap symbols and 15% mismatching positions
//! rna-search -min 24 -max 34 -ord 1 -rid 20 -tol 15 -target ex.fna
//!
//! # Same, with double-dash flags and JSON reports written elsewhere
//! rna-search --min 24 --max 34 --ord 1 --rid 20 --tol 15 --target ex.fna \
//!     --out-dir results --format json
//! ```
//!
//! The single-dash long flags of older scripts are accepted and rewritten by
//! [`normalize_args`] before clap sees them.

use std::ffi::OsString;

use clap::Parser;

pub mod search;

/// Long flags that older invocations pass with a single dash
const LEGACY_FLAGS: &[&str] = &["-min", "-max", "-ord", "-rid", "-tol", "-target"];

#[derive(Parser, Debug)]
#[command(name = "rna-search")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find approximate matches of pair-report queries in a reference")]
#[command(
    long_about = "rna-search extracts short sequences from pair report files (sonuclar_<length>*) and slides each one across every record of a FASTA-like target.\n\nA record is reported once per query when some window agrees with the query on at least (100 - tol)% of positions. Matches are written to RNA_<length>.txt, one block per query."
)]
pub struct Cli {
    #[command(flatten)]
    pub search: search::SearchArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Rewrite `-min`-style flags to their `--min` form, leaving everything else untouched
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let legacy = arg
                .to_str()
                .is_some_and(|flag| LEGACY_FLAGS.contains(&flag));
            if legacy {
                let mut long = OsString::from("-");
                long.push(&arg);
                long
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_args() {
        let args = normalize_args(["rna-search", "-min", "20", "-target", "-x.fna", "-v"]);
        assert_eq!(
            args,
            vec!["rna-search", "--min", "20", "--target", "-x.fna", "-v"]
                .into_iter()
                .map(OsString::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_parse_legacy_invocation() {
        let cli = Cli::try_parse_from(normalize_args([
            "rna-search", "-min", "24", "-max", "34", "-ord", "1", "-rid", "20", "-tol", "15",
            "-target", "ex.fna",
        ]))
        .unwrap();

        assert_eq!(cli.search.min, Some(24));
        assert_eq!(cli.search.max, Some(34));
        assert_eq!(cli.search.ord, Some(1));
        assert_eq!(cli.search.rid, Some(20));
        assert_eq!(cli.search.tol, Some(15));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_missing_flag_is_rejected() {
        let result = Cli::try_parse_from(normalize_args([
            "rna-search", "-min", "24", "-max", "34", "-ord", "1", "-rid", "20", "-tol", "15",
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let base = ["rna-search", "-min", "24", "-max", "34", "-rid", "20", "-target", "t.fna"];

        let bad_ord = Cli::try_parse_from(normalize_args(
            base.iter().copied().chain(["-ord", "3", "-tol", "15"]),
        ));
        assert!(bad_ord.is_err());

        let bad_tol = Cli::try_parse_from(normalize_args(
            base.iter().copied().chain(["-ord", "2", "-tol", "101"]),
        ));
        assert!(bad_tol.is_err());
    }

    #[test]
    fn test_legacy_defaults_need_no_flags() {
        let cli = Cli::try_parse_from(["rna-search", "--legacy-defaults"]).unwrap();
        assert!(cli.search.legacy_defaults);
    }
}
