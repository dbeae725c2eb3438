use clap::Parser;
use tracing_subscriber::EnvFilter;

use rna_search::cli;

fn main() -> anyhow::Result<()> {
    let cli = match cli::Cli::try_parse_from(cli::normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        // Usage errors exit with status 1; --help and --version keep clap's behaviour
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("rna_search=debug,info")
    } else {
        EnvFilter::new("rna_search=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    cli::search::run(cli.search, cli.verbose)
}
