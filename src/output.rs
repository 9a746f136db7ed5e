//! Machine-readable output for a top-rated result.
//!
//! Supports pretty JSON and CSV export.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use tracing::debug;

use crate::aggregate::AggregatedRow;

/// A result together with the selection that produced it.
#[derive(Debug, Serialize)]
pub struct TopRatedReport {
    pub location: String,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<AggregatedRow>,
}

impl TopRatedReport {
    pub fn new(location: &str, rows: Vec<AggregatedRow>) -> Self {
        TopRatedReport {
            location: location.to_string(),
            generated_at: Utc::now(),
            rows,
        }
    }
}

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &TopRatedReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes rows as CSV with a header row. Missing means become empty fields.
pub fn write_csv<W: Write>(writer: W, rows: &[AggregatedRow]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes rows to a CSV file, replacing any existing content.
pub fn write_csv_file(path: &str, rows: &[AggregatedRow]) -> Result<()> {
    debug!(path, rows = rows.len(), "Writing CSV export");
    let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
    write_csv(file, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_rows() -> Vec<AggregatedRow> {
        vec![
            AggregatedRow {
                name: "Toit".into(),
                approx_cost: Some(1500.0),
                rate: Some(4.7),
            },
            AggregatedRow {
                name: "New Place".into(),
                approx_cost: None,
                rate: None,
            },
        ]
    }

    #[test]
    fn test_to_json_fields() {
        let report = TopRatedReport::new("Indiranagar", sample_rows());
        let json = to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["location"], "Indiranagar");
        assert!(value["generated_at"].is_string());
        assert_eq!(value["rows"][0]["name"], "Toit");
        assert_eq!(value["rows"][0]["rate"], 4.7);
        assert!(value["rows"][1]["rate"].is_null());
    }

    #[test]
    fn test_write_csv_header_and_empty_fields() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample_rows()).unwrap();
        let content = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = content.lines().collect();

        assert_eq!(lines[0], "name,approx_cost,rate");
        assert_eq!(lines[1], "Toit,1500.0,4.7");
        assert_eq!(lines[2], "New Place,,");
    }

    #[test]
    fn test_write_csv_file_overwrites() {
        let path = temp_path("zomato_explorer_test_export.csv");
        let _ = fs::remove_file(&path);

        write_csv_file(&path, &sample_rows()).unwrap();
        write_csv_file(&path, &sample_rows()[..1]).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        fs::remove_file(&path).unwrap();
    }
}
