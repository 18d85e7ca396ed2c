use crate::workload::WorkloadSummary;

/// The one-line report: `"<pixels> pixels computed in <seconds> seconds"`.
///
/// Seconds are printed with six decimal places; downstream tooling greps
/// for this exact shape, so it never changes.
pub fn format_report(summary: &WorkloadSummary) -> String {
    format!(
        "{} pixels computed in {:.6} seconds",
        summary.pixels, summary.elapsed_seconds
    )
}

/// JSON rendering of the full summary for machine consumption.
pub fn format_json(summary: &WorkloadSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Compact single-line JSON for sweep output, one summary per line, so a
/// multi-step run is consumable as NDJSON.
pub fn format_json_line(summary: &WorkloadSummary) -> serde_json::Result<String> {
    serde_json::to_string(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> WorkloadSummary {
        WorkloadSummary {
            pixels: 2_073_600,
            total_iterations: 2_073_600 * 1024,
            interior: 2_073_600,
            elapsed_seconds: 1.5,
        }
    }

    #[test]
    fn report_line_matches_expected_shape() {
        assert_eq!(
            format_report(&summary()),
            "2073600 pixels computed in 1.500000 seconds"
        );
    }

    #[test]
    fn report_keeps_six_decimal_places() {
        let mut s = summary();
        s.elapsed_seconds = 0.000001;
        assert_eq!(
            format_report(&s),
            "2073600 pixels computed in 0.000001 seconds"
        );
    }

    #[test]
    fn json_roundtrips_the_summary() {
        let json = format_json(&summary()).unwrap();
        let restored: WorkloadSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, summary());
    }

    #[test]
    fn json_line_is_single_line_and_roundtrips() {
        let line = format_json_line(&summary()).unwrap();
        assert!(!line.contains('\n'), "sweep JSON must be one line per step");
        let restored: WorkloadSummary = serde_json::from_str(&line).unwrap();
        assert_eq!(restored, summary());
    }
}
