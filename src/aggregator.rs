//! Streaming aggregation of benchmark samples.
//!
//! The [`Aggregator`] consumes CSV rows one at a time in file order and
//! keeps running totals, running maxima and the time span. The full input
//! is never buffered. Lifecycle is strictly linear: new, consume each row,
//! finalize once.

use crate::models::{Report, RowError, Sample};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Error produced while aggregating the sample stream.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// A row could not be parsed; the aggregator state is left untouched.
    #[error(transparent)]
    Row(#[from] RowError),

    /// The stream contained no rows, so averages would divide by zero.
    #[error("benchmark file contains no samples; cannot compute averages")]
    EmptyInput,
}

/// Running state over the sample stream.
///
/// Counts, sums and maxima only ever increase as rows are consumed;
/// there is no rollback.
#[derive(Debug, Default)]
pub struct Aggregator {
    rows: u64,
    start_time: Option<f64>,
    end_time: f64,
    memory_sum: f64,
    cpu_sum: f64,
    memory_max: f64,
    cpu_max: f64,
}

impl Aggregator {
    /// Create an empty aggregator: zero rows, zero sums, zero maxima,
    /// start and end time unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one CSV row.
    ///
    /// Parsing happens before any state is touched, so a malformed row
    /// leaves the aggregator unchanged. The first row's timestamp becomes
    /// the start time; every row's timestamp becomes the tentative end
    /// time, so after the stream is exhausted the end time is the last
    /// row's timestamp.
    pub fn consume(&mut self, record: &StringRecord) -> Result<(), AggregateError> {
        let sample = Sample::from_record(record, self.rows + 1)?;

        if self.start_time.is_none() {
            self.start_time = Some(sample.time_secs);
        }
        self.end_time = sample.time_secs;
        self.rows += 1;

        self.memory_sum += sample.memory_bytes;
        self.cpu_sum += sample.cpu_percent;

        // Strict comparison: a tie with the current maximum keeps the
        // first occurrence.
        if sample.memory_bytes > self.memory_max {
            self.memory_max = sample.memory_bytes;
        }
        if sample.cpu_percent > self.cpu_max {
            self.cpu_max = sample.cpu_percent;
        }

        Ok(())
    }

    /// Number of rows consumed so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Derive the final report.
    ///
    /// Fails with [`AggregateError::EmptyInput`] if no rows were consumed.
    /// A single row yields a total time of zero. Negative total times are
    /// passed through unmodified; input is assumed to be time-ordered and
    /// out-of-order timestamps are not rejected.
    pub fn finalize(self) -> Result<Report, AggregateError> {
        let start = self.start_time.ok_or(AggregateError::EmptyInput)?;
        let n = self.rows as f64;

        Ok(Report {
            total_time_secs: self.end_time - start,
            max_memory_bytes: self.memory_max,
            max_cpu_percent: self.cpu_max,
            avg_memory_bytes: self.memory_sum / n,
            avg_cpu_percent: self.cpu_sum / n,
        })
    }
}

/// Stream a benchmark CSV file through a fresh [`Aggregator`].
///
/// The file is read as header-less CSV with three columns per row:
/// time (seconds), memory (bytes), cpu (percent). Any failure - missing
/// file, short row, non-numeric field, empty input - is fatal and no
/// report is produced.
pub fn aggregate_file(path: &Path) -> Result<Report> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open benchmark file: {}", path.display()))?;

    // flexible: record length is enforced positionally per row, not
    // against the first record.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut aggregator = Aggregator::new();
    for result in reader.records() {
        let record = result
            .with_context(|| format!("Failed to read CSV record from {}", path.display()))?;
        aggregator.consume(&record)?;
    }

    debug!("Aggregated {} samples from {}", aggregator.rows(), path.display());

    let report = aggregator.finalize()?;
    Ok(report)
}
