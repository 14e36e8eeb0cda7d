// src/report/file.rs
// =============================================================================
// Writes the ledger to the report file, once, at the end of the run.
//
// Formats:
// - CSV (default): header row + one row per broken reference
// - JSON: an array of objects using the same four column names as keys
//
// An empty ledger writes nothing at all: no file is created or truncated.
// =============================================================================

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ledger::{BrokenReference, Ledger};
use crate::cli::ReportFormat;

/// One report row. The renames are the column headers.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Broken_URL")]
    broken_url: &'a str,
    #[serde(rename = "Found_On_Page")]
    found_on_page: String,
    #[serde(rename = "Page_Title")]
    page_title: &'a str,
}

impl<'a> From<&'a BrokenReference> for ReportRow<'a> {
    fn from(r: &'a BrokenReference) -> Self {
        Self {
            kind: r.kind.to_string(),
            broken_url: r.broken_url.as_str(),
            found_on_page: r.referrer.to_string(),
            page_title: r.page_title.as_deref().unwrap_or("N/A"),
        }
    }
}

/// Writes the report. Returns `Ok(false)` when the ledger is empty and the
/// write was skipped.
pub fn write_report(ledger: &Ledger, path: &Path, format: ReportFormat) -> Result<bool> {
    if ledger.is_empty() {
        return Ok(false);
    }

    let rows: Vec<ReportRow> = ledger.entries().iter().map(ReportRow::from).collect();

    let written = match format {
        ReportFormat::Csv => write_csv(&rows, path),
        ReportFormat::Json => write_json(&rows, path),
    };
    written.with_context(|| format!("Failed to write report to '{}'", path.display()))?;

    Ok(true)
}

fn write_csv(rows: &[ReportRow], path: &Path) -> Result<()> {
    // serialize() emits the header row from the field renames on first call
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(rows: &[ReportRow], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Referrer;
    use url::Url;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.record(BrokenReference::page(
            Url::parse("https://example.com/about/gone").unwrap(),
            Referrer::Page(Url::parse("https://example.com/about/").unwrap()),
        ));
        ledger.record(BrokenReference::image(
            Url::parse("https://example.com/img/x.png").unwrap(),
            Url::parse("https://example.com/about/").unwrap(),
            "About, us",
        ));
        ledger
    }

    #[test]
    fn test_csv_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        assert!(write_report(&sample_ledger(), &path, ReportFormat::Csv).unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Type,Broken_URL,Found_On_Page,Page_Title");
        assert_eq!(
            lines[1],
            "Page,https://example.com/about/gone,https://example.com/about/,N/A"
        );
        // Titles containing commas are quoted
        assert_eq!(
            lines[2],
            "Image,https://example.com/img/x.png,https://example.com/about/,\"About, us\""
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        assert!(write_report(&sample_ledger(), &path, ReportFormat::Json).unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Type"], "Page");
        assert_eq!(rows[0]["Page_Title"], "N/A");
        assert_eq!(rows[1]["Found_On_Page"], "https://example.com/about/");
    }

    #[test]
    fn test_empty_ledger_skips_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        assert!(!write_report(&Ledger::new(), &path, ReportFormat::Csv).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_ledger_leaves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        std::fs::write(&path, "previous run").unwrap();

        assert!(!write_report(&Ledger::new(), &path, ReportFormat::Csv).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run");
    }
}
