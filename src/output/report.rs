// CSV report writer: the run's durable artifact.
//
// Column names and category tokens are a compatibility surface. Rows appear
// in sector input order, and identical inputs produce byte-identical output.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::classify::engine::SectorRecord;

const COLUMNS: [&str; 4] = ["Industry Sector", "Category", "Comments", "Match Score"];

#[derive(Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "Industry Sector")]
    sector: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Comments")]
    comments: &'a str,
    #[serde(rename = "Match Score")]
    match_score: u8,
}

impl<'a> From<&'a SectorRecord> for ReportRow<'a> {
    fn from(record: &'a SectorRecord) -> Self {
        Self {
            sector: &record.sector,
            category: record.resolution.as_report_str(),
            comments: &record.comment,
            match_score: record.best_score,
        }
    }
}

/// Render the report to a string: the header row plus one row per sector.
pub fn render_report(records: &[SectorRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if records.is_empty() {
        // serialize() emits the header with the first row; an empty run
        // still gets one
        writer.write_record(COLUMNS)?;
    }
    for record in records {
        writer.serialize(ReportRow::from(record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush report: {e}"))?;
    String::from_utf8(bytes).context("Report was not valid UTF-8")
}

/// Write the report to disk, replacing any previous run's output.
pub fn write_report(records: &[SectorRecord], path: &Path) -> Result<()> {
    let rendered = render_report(records)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
