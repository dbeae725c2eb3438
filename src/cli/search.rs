//! The search command: resolve arguments, run every length, report timing.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::Args;
use tracing::warn;

use crate::core::types::{
    FieldOrder, ReportFormat, SearchSettings, WindowScan, DEFAULT_SOURCE_PREFIX,
};
use crate::driver;
use crate::matching::progress::LogProgress;

/// Settings used by `--legacy-defaults`, ignoring the length, field and threshold flags
const LEGACY_MIN_LEN: u32 = 20;
const LEGACY_MAX_LEN: u32 = 24;
const LEGACY_ORD: u8 = 1;
const LEGACY_RID: u8 = 0;
const LEGACY_TOL: u8 = 0;
const LEGACY_TARGET: &str = "GCF_Copy.fna";

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Minimum query length
    #[arg(long, required_unless_present = "legacy_defaults")]
    pub min: Option<u32>,

    /// Maximum query length
    #[arg(long, required_unless_present = "legacy_defaults")]
    pub max: Option<u32>,

    /// Report field holding the query: 1 = "Refer:", 2 = "Query:"
    #[arg(
        long,
        required_unless_present = "legacy_defaults",
        value_parser = clap::value_parser!(u8).range(1..=2)
    )]
    pub ord: Option<u8>,

    /// Allowed percentage of gap symbols (-) in a query (0-100)
    #[arg(
        long,
        required_unless_present = "legacy_defaults",
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub rid: Option<u8>,

    /// Tolerated percentage of mismatching positions (0-100)
    #[arg(
        long,
        required_unless_present = "legacy_defaults",
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub tol: Option<u8>,

    /// Target reference file (FASTA-like, optionally gzipped)
    #[arg(long, required_unless_present = "legacy_defaults")]
    pub target: Option<PathBuf>,

    /// Directory containing the pair reports
    #[arg(long, default_value = ".")]
    pub src_dir: PathBuf,

    /// File name prefix of the pair reports, followed by the query length
    #[arg(long, default_value = DEFAULT_SOURCE_PREFIX)]
    pub prefix: String,

    /// Directory the RNA_<length> reports are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Do not try the last window offset of each record
    #[arg(long)]
    pub skip_last_window: bool,

    /// Ignore -min/-max/-ord/-rid/-tol/-target and use the built-in debug
    /// settings (20..=24, ord 1, rid 0, tol 0, GCF_Copy.fna)
    #[arg(long)]
    pub legacy_defaults: bool,
}

impl SearchArgs {
    /// Turn parsed flags into run settings
    ///
    /// # Errors
    ///
    /// Returns an error if a mandatory value is missing or `min` exceeds `max`.
    pub fn resolve(&self) -> anyhow::Result<SearchSettings> {
        let (min_len, max_len, ord, rid, tol, target) = if self.legacy_defaults {
            warn!("--legacy-defaults given: ignoring -min, -max, -ord, -rid, -tol and -target");
            (
                LEGACY_MIN_LEN,
                LEGACY_MAX_LEN,
                LEGACY_ORD,
                LEGACY_RID,
                LEGACY_TOL,
                PathBuf::from(LEGACY_TARGET),
            )
        } else {
            (
                self.min.context("-min is mandatory")?,
                self.max.context("-max is mandatory")?,
                self.ord.context("-ord is mandatory")?,
                self.rid.context("-rid is mandatory")?,
                self.tol.context("-tol is mandatory")?,
                self.target.clone().context("-target is mandatory")?,
            )
        };

        let Some(order) = FieldOrder::from_ord(ord) else {
            bail!("-ord must be 1 or 2, given: {ord}");
        };
        if min_len > max_len {
            bail!("-min ({min_len}) must not exceed -max ({max_len})");
        }

        Ok(SearchSettings {
            min_len,
            max_len,
            order,
            gap_percent: rid,
            tolerance_percent: tol,
            target,
            source_dir: self.src_dir.clone(),
            source_prefix: self.prefix.clone(),
            output_dir: self.out_dir.clone(),
            format: self.format,
            window: if self.skip_last_window {
                WindowScan::SkipLast
            } else {
                WindowScan::Full
            },
        })
    }
}

/// Format a duration as `HH:MM:SS.ss`
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let whole = elapsed.as_secs();
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    #[allow(clippy::cast_precision_loss)] // Under an hour of seconds
    let seconds = (whole % 60) as f64 + f64::from(elapsed.subsec_nanos()) / 1e9;
    format!("{hours:0>2}:{minutes:0>2}:{seconds:05.2}")
}

/// Execute the search
///
/// # Errors
///
/// Returns an error if the arguments are inconsistent or any file cannot be
/// read or written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, verbose: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    let settings = args.resolve()?;

    if verbose {
        eprintln!(
            "Lengths {}..={}, field {}, gaps <= {}%, similarity >= {:.2}, target {}",
            settings.min_len,
            settings.max_len,
            settings.order,
            settings.gap_percent,
            settings.similarity(),
            settings.target.display(),
        );
    }

    let summaries = driver::run_search(&settings, &mut LogProgress)?;

    if verbose {
        for summary in &summaries {
            eprintln!(
                "Length {}: {} sources, {} queries, {} matches",
                summary.length, summary.sources, summary.queries, summary.matches
            );
        }
    }

    println!("\n---------------------");
    println!("Completed processing!");
    println!("---------------------");
    println!("Elapsed time: {}", format_elapsed(start.elapsed()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{normalize_args, Cli};
    use clap::Parser;

    fn parse(args: &[&str]) -> SearchArgs {
        let argv = std::iter::once("rna-search").chain(args.iter().copied());
        Cli::try_parse_from(normalize_args(argv)).unwrap().search
    }

    #[test]
    fn test_resolve_flags() {
        let args = parse(&[
            "-min", "20", "-max", "22", "-ord", "2", "-rid", "10", "-tol", "5", "-target", "t.fna",
        ]);
        let settings = args.resolve().unwrap();

        assert_eq!(settings.min_len, 20);
        assert_eq!(settings.max_len, 22);
        assert_eq!(settings.order, FieldOrder::Query);
        assert_eq!(settings.gap_percent, 10);
        assert_eq!(settings.tolerance_percent, 5);
        assert_eq!(settings.target, PathBuf::from("t.fna"));
        assert_eq!(settings.source_prefix, "sonuclar_");
        assert_eq!(settings.window, WindowScan::Full);
        assert_eq!(settings.format, ReportFormat::Text);
    }

    #[test]
    fn test_resolve_rejects_inverted_range() {
        let args = parse(&[
            "-min", "30", "-max", "22", "-ord", "1", "-rid", "0", "-tol", "0", "-target", "t.fna",
        ]);
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_legacy_defaults_override_flags() {
        let args = parse(&[
            "-min", "30", "-max", "40", "-ord", "2", "-rid", "50", "-tol", "50", "-target",
            "mine.fna", "--legacy-defaults", "--skip-last-window",
        ]);
        let settings = args.resolve().unwrap();

        assert_eq!(settings.min_len, 20);
        assert_eq!(settings.max_len, 24);
        assert_eq!(settings.order, FieldOrder::Refer);
        assert_eq!(settings.gap_percent, 0);
        assert_eq!(settings.tolerance_percent, 0);
        assert_eq!(settings.target, PathBuf::from("GCF_Copy.fna"));
        assert_eq!(settings.window, WindowScan::SkipLast);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(1_500)), "00:00:01.50");
        assert_eq!(format_elapsed(Duration::from_secs(3_725)), "01:02:05.00");
    }
}
