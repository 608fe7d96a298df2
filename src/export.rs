//! CSV export and JSON summaries of a session.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::data::{format_value, Stats, Thresholds, ValueLog};
use crate::error::{Error, Result};

/// Name of the single CSV column.
pub const CSV_HEADER: &str = "Valor";

/// File name used when no export path is configured.
pub const DEFAULT_EXPORT_FILE: &str = "historico_aviator.csv";

/// Render values as CSV: a header line followed by one row per value, in order.
pub fn to_csv(values: &[f64]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + values.len() * 6);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for value in values {
        out.push_str(&format_value(*value));
        out.push('\n');
    }
    out
}

/// Write the log to `path` as UTF-8 CSV.
///
/// Returns the number of rows written. An empty log has nothing to export
/// and yields [`Error::EmptyLog`] without touching the file system.
pub fn write_csv(path: &Path, log: &ValueLog) -> Result<usize> {
    if log.is_empty() {
        return Err(Error::EmptyLog);
    }

    fs::write(path, to_csv(log.all()))?;
    info!(rows = log.len(), path = %path.display(), "exported history");
    Ok(log.len())
}

/// Build a JSON summary of the session: values plus derived stats.
///
/// `stats` is `null` while the log is empty.
pub fn summary_json(log: &ValueLog, thresholds: &Thresholds) -> serde_json::Value {
    let stats = Stats::compute(log, thresholds).ok();
    let row_classes: Vec<&str> = log
        .all()
        .iter()
        .map(|v| thresholds.row_class(*v).label())
        .collect();

    serde_json::json!({
        "count": log.len(),
        "values": log.all(),
        "row_classes": row_classes,
        "stats": stats,
        "thresholds": thresholds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_keeps_chronological_order() {
        assert_eq!(to_csv(&[1.1, 2.2, 3.3]), "Valor\n1.1\n2.2\n3.3\n");
    }

    #[test]
    fn csv_whole_numbers_keep_a_decimal() {
        assert_eq!(to_csv(&[2.0, 10.0]), "Valor\n2.0\n10.0\n");
    }

    #[test]
    fn csv_of_nothing_is_just_the_header() {
        assert_eq!(to_csv(&[]), "Valor\n");
    }

    #[test]
    fn write_csv_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        let log = ValueLog::from_values([1.1, 2.2, 3.3]);

        let rows = write_csv(&path, &log).unwrap();

        assert_eq!(rows, 3);
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["Valor", "1.1", "2.2", "3.3"]);
    }

    #[test]
    fn write_csv_refuses_empty_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        let err = write_csv(&path, &ValueLog::new()).unwrap_err();

        assert!(matches!(err, Error::EmptyLog));
        assert!(!path.exists());
    }

    #[test]
    fn write_csv_reports_io_errors() {
        let log = ValueLog::from_values([1.0]);
        let err = write_csv(Path::new("/nonexistent/dir/out.csv"), &log).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn summary_includes_stats_and_alert() {
        let log = ValueLog::from_values([5.0, 5.0, 1.0]);
        let summary = summary_json(&log, &Thresholds::default());

        assert_eq!(summary["count"], 3);
        assert_eq!(summary["values"][2], 1.0);
        assert_eq!(summary["row_classes"][0], "at-or-above-threshold");
        assert_eq!(summary["row_classes"][2], "below-threshold");
        assert_eq!(summary["stats"]["tier"], "high");
        assert_eq!(summary["stats"]["alert"]["kind"], "single_low");
    }

    #[test]
    fn summary_of_empty_log_has_null_stats() {
        let summary = summary_json(&ValueLog::new(), &Thresholds::default());
        assert_eq!(summary["count"], 0);
        assert!(summary["stats"].is_null());
    }
}
