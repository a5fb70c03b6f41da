//! Data models for the benchmark summarizer.
//!
//! This module contains the core data structures: a single benchmark
//! sample parsed from one CSV row, and the final report derived from
//! all consumed samples.

use csv::StringRecord;
use thiserror::Error;

/// Column position of the timestamp field.
pub const TIME_INDEX: usize = 0;
/// Column position of the memory field.
pub const MEMORY_INDEX: usize = 1;
/// Column position of the cpu field.
pub const CPU_INDEX: usize = 2;

/// Error produced when one CSV row cannot be turned into a [`Sample`].
#[derive(Debug, Error)]
pub enum RowError {
    /// The row has fewer fields than the fixed positional layout requires.
    #[error("row {row} has no field at column {column} (expected at least 3 fields)")]
    MissingField { row: u64, column: usize },

    /// A field is present but is not a valid floating-point number.
    #[error("row {row}, column {column}: {value:?} is not a valid number")]
    InvalidNumber { row: u64, column: usize, value: String },
}

/// One benchmark sample: a single parsed CSV row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Timestamp in seconds since the start of the benchmark run.
    pub time_secs: f64,
    /// Memory usage in bytes.
    pub memory_bytes: f64,
    /// CPU usage in percent (may exceed 100 on multi-core hosts).
    pub cpu_percent: f64,
}

impl Sample {
    /// Parse a sample from a CSV record using the fixed positional layout.
    ///
    /// `row` is the 1-based row number, used only for error reporting.
    /// Fails without producing a partial sample if any of the three fields
    /// is missing or not numeric.
    pub fn from_record(record: &StringRecord, row: u64) -> Result<Self, RowError> {
        let field = |column: usize| -> Result<f64, RowError> {
            let raw = record
                .get(column)
                .ok_or(RowError::MissingField { row, column })?;
            raw.trim().parse::<f64>().map_err(|_| RowError::InvalidNumber {
                row,
                column,
                value: raw.to_string(),
            })
        };

        Ok(Self {
            time_secs: field(TIME_INDEX)?,
            memory_bytes: field(MEMORY_INDEX)?,
            cpu_percent: field(CPU_INDEX)?,
        })
    }
}

/// The final five-value summary derived from all consumed samples.
///
/// A read-only view over the aggregator's final state; produced exactly
/// once when the input stream is exhausted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Elapsed time between the first and last sample, in seconds.
    pub total_time_secs: f64,
    /// Peak memory usage across all samples, in bytes.
    pub max_memory_bytes: f64,
    /// Peak cpu usage across all samples, in percent.
    pub max_cpu_percent: f64,
    /// Mean memory usage across all samples, in bytes.
    pub avg_memory_bytes: f64,
    /// Mean cpu usage across all samples, in percent.
    pub avg_cpu_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_valid_row() {
        let sample = Sample::from_record(&record(&["1.5", "2048", "42.0"]), 1).unwrap();
        assert_eq!(sample.time_secs, 1.5);
        assert_eq!(sample.memory_bytes, 2048.0);
        assert_eq!(sample.cpu_percent, 42.0);
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let sample = Sample::from_record(&record(&["0.0", " 100 ", "10"]), 1).unwrap();
        assert_eq!(sample.memory_bytes, 100.0);
    }

    #[test]
    fn test_short_row_is_missing_field() {
        let err = Sample::from_record(&record(&["1.0", "100"]), 3).unwrap_err();
        match err {
            RowError::MissingField { row: 3, column } => assert_eq!(column, CPU_INDEX),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_field_is_invalid_number() {
        let err = Sample::from_record(&record(&["1.0", "oops", "10"]), 2).unwrap_err();
        match err {
            RowError::InvalidNumber { row: 2, column, value } => {
                assert_eq!(column, MEMORY_INDEX);
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        // Only the first three columns are mapped; trailing fields are not
        // part of the layout.
        let sample = Sample::from_record(&record(&["1.0", "100", "10", "junk"]), 1).unwrap();
        assert_eq!(sample.cpu_percent, 10.0);
    }
}
