//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation.

use clap::Parser;
use std::path::PathBuf;

/// Benchsum - summarize benchmark sample CSVs
///
/// Reads a header-less CSV of benchmark samples (time, memory, cpu) and
/// prints total elapsed time, peak memory, peak cpu, average memory and
/// average cpu to stdout.
///
/// Examples:
///   benchsum --benchmark-file run.csv
///   benchsum -f run.csv
///   RUST_LOG=debug benchsum -f run.csv
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the benchmark CSV file
    ///
    /// Three columns per row, no header: time (seconds), memory (bytes),
    /// cpu (percent).
    #[arg(short = 'f', long, value_name = "PATH")]
    pub benchmark_file: PathBuf,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if !self.benchmark_file.exists() {
            return Err(format!(
                "Benchmark file does not exist: {}",
                self.benchmark_file.display()
            ));
        }
        if !self.benchmark_file.is_file() {
            return Err(format!(
                "Benchmark path is not a file: {}",
                self.benchmark_file.display()
            ));
        }
        Ok(())
    }
}
