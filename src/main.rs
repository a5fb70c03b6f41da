//! Benchsum - benchmark CSV summarizer
//!
//! A CLI tool that reads a header-less CSV of benchmark samples
//! (time, memory, cpu) and prints total elapsed time, peak memory,
//! peak cpu, average memory and average cpu.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (missing file, empty input, malformed row)

mod aggregator;
mod cli;
mod models;
mod report;

use anyhow::Result;
use cli::Args;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    init_logging();

    debug!("Benchsum v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => {}
        Err(e) => {
            error!("Summary failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize logging. Verbosity comes from RUST_LOG; defaults to warn
/// so the five report lines are the only output on a clean run.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Run the complete summary workflow.
fn run(args: Args) -> Result<()> {
    info!("Reading samples from {}", args.benchmark_file.display());

    let summary = aggregator::aggregate_file(&args.benchmark_file)?;
    let output = report::render(&summary)?;

    print!("{}", output);
    Ok(())
}
