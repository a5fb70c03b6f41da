//! Report rendering.
//!
//! This module turns the final [`Report`] into the five fixed output
//! lines, including the human-readable byte formatting used for the
//! memory figures.

use crate::models::Report;
use thiserror::Error;

/// Binary units for the human-readable byte formatter, smallest first.
const UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Error produced while rendering a report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The byte count does not fit even the EiB unit.
    #[error("memory value of {bytes} bytes exceeds the representable EiB range")]
    SizeOutOfRange { bytes: f64 },
}

/// Format a non-negative byte count as a human-readable size.
///
/// Exactly 1 becomes "1 Byte"; anything below 1 KiB becomes an integer
/// byte count (truncated toward zero) with a "Bytes" suffix. Larger
/// values are divided by 1024 until they round below 1024 and formatted
/// with one decimal and the matching binary unit. Returns `None` for
/// values beyond the EiB range.
pub fn human_readable_size(bytes: f64) -> Option<String> {
    if bytes == 1.0 {
        return Some("1 Byte".to_string());
    }
    if bytes < 1024.0 {
        return Some(format!("{} Bytes", bytes.trunc() as u64));
    }

    let mut value = bytes;
    for unit in UNITS {
        value /= 1024.0;
        // Rounding here keeps a value like 1023.96 from rendering as
        // "1024.0" in the smaller unit.
        if value.round() < 1024.0 {
            return Some(format!("{value:.1} {unit}"));
        }
    }

    None
}

/// Render the five report lines, in fixed order.
///
/// Fails instead of producing undefined output when a memory figure
/// exceeds the EiB range.
pub fn render(report: &Report) -> Result<String, RenderError> {
    let size = |bytes: f64| {
        human_readable_size(bytes).ok_or(RenderError::SizeOutOfRange { bytes })
    };

    let mut output = String::new();
    output.push_str(&format!("Total time: {:.3} seconds\n", report.total_time_secs));
    output.push_str(&format!("Max memory: {}\n", size(report.max_memory_bytes)?));
    output.push_str(&format!("Max cpu: {:.1} percent\n", report.max_cpu_percent));
    output.push_str(&format!("Average memory: {}\n", size(report.avg_memory_bytes)?));
    output.push_str(&format!("Average cpu: {:.1} percent\n", report.avg_cpu_percent));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_byte_is_singular() {
        assert_eq!(human_readable_size(1.0).unwrap(), "1 Byte");
    }

    #[test]
    fn test_small_counts_are_plain_bytes() {
        assert_eq!(human_readable_size(0.0).unwrap(), "0 Bytes");
        assert_eq!(human_readable_size(512.0).unwrap(), "512 Bytes");
        assert_eq!(human_readable_size(1023.0).unwrap(), "1023 Bytes");
    }

    #[test]
    fn test_fractional_bytes_truncate_toward_zero() {
        assert_eq!(human_readable_size(512.9).unwrap(), "512 Bytes");
    }

    #[test]
    fn test_binary_units() {
        assert_eq!(human_readable_size(1024.0).unwrap(), "1.0 KiB");
        assert_eq!(human_readable_size(1536.0).unwrap(), "1.5 KiB");
        assert_eq!(human_readable_size(1_048_576.0).unwrap(), "1.0 MiB");
        assert_eq!(
            human_readable_size(114.0 * 1024.0 * 1024.0).unwrap(),
            "114.0 MiB"
        );
        assert_eq!(
            human_readable_size(2.5 * 1024.0 * 1024.0 * 1024.0).unwrap(),
            "2.5 GiB"
        );
    }

    #[test]
    fn test_value_rounding_to_1024_moves_to_next_unit() {
        // 1023.96 KiB would print as "1024.0 KiB"; it must roll over.
        assert_eq!(human_readable_size(1023.96 * 1024.0).unwrap(), "1.0 MiB");
    }

    #[test]
    fn test_beyond_eib_is_none() {
        let beyond = 1024f64.powi(7) * 1024.0;
        assert!(human_readable_size(beyond).is_none());
    }

    #[test]
    fn test_render_fixed_five_lines() {
        let report = Report {
            total_time_secs: 1.81,
            max_memory_bytes: 119_537_664.0,
            max_cpu_percent: 208.3,
            avg_memory_bytes: (2.0 * 46_137_344.0 + 119_537_664.0) / 3.0,
            avg_cpu_percent: 140.5,
        };

        let output = render(&report).unwrap();
        assert_eq!(
            output,
            "Total time: 1.810 seconds\n\
             Max memory: 114.0 MiB\n\
             Max cpu: 208.3 percent\n\
             Average memory: 67.3 MiB\n\
             Average cpu: 140.5 percent\n"
        );
    }

    #[test]
    fn test_render_fails_beyond_eib() {
        let report = Report {
            total_time_secs: 0.0,
            max_memory_bytes: 1024f64.powi(8),
            max_cpu_percent: 0.0,
            avg_memory_bytes: 0.0,
            avg_cpu_percent: 0.0,
        };
        assert!(matches!(
            render(&report),
            Err(RenderError::SizeOutOfRange { .. })
        ));
    }
}
