// Company-activity corpus loaders.
//
// Company files are CSV with a header row. The fuzzy engine scans the
// nature-of-activity column, which appears in the wild under two spellings;
// the exact-match mode additionally needs the company name column.

use std::path::Path;

use anyhow::{anyhow, Context, Result};

use super::{Source, SourceEntry, SourceKind};

/// Accepted spellings of the activity column, in preference order,
/// resolved once per file.
pub const ACTIVITY_COLUMN_ALIASES: [&str; 2] = ["Nature Of Activity", "Nature of Activity"];

const COMPANY_NAME_COLUMN: &str = "Company Name";
const BASIC_INDUSTRY_COLUMN: &str = "Basic Industry";

/// One record of a company-activity file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRow {
    pub company_name: String,
    pub nature_of_activity: Option<String>,
}

/// One record of the company classification index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRow {
    pub company_name: String,
    pub basic_industry: String,
}

/// Load one company file as a scannable source over its activity column.
///
/// Record positions are offset by 2 (header row plus the 1-based display
/// convention) so a cited position is the spreadsheet row.
/// Empty activity cells are skipped but still consume a position.
pub fn load_source(path: &Path) -> Result<Source> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read headers in {}", path.display()))?
        .clone();
    let activity_index = activity_column(&headers).ok_or_else(|| {
        anyhow!(
            "Activity column not found in {} (expected one of {:?})",
            path.display(),
            ACTIVITY_COLUMN_ALIASES
        )
    })?;

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to read record in {}", path.display()))?;
        let Some(activity) = record.get(activity_index) else {
            continue;
        };
        if activity.trim().is_empty() {
            continue;
        }
        entries.push(SourceEntry {
            position: index + 2,
            text: activity.to_string(),
        });
    }

    Ok(Source {
        name: super::source_name(path),
        kind: SourceKind::CompanyActivity,
        entries,
    })
}

/// Resolve the activity column, trying the aliases in order.
fn activity_column(headers: &csv::StringRecord) -> Option<usize> {
    ACTIVITY_COLUMN_ALIASES
        .iter()
        .find_map(|alias| headers.iter().position(|header| header == *alias))
}

/// Read the name + activity rows of a company file (exact-match mode).
pub fn read_company_rows(path: &Path) -> Result<Vec<CompanyRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read headers in {}", path.display()))?
        .clone();
    let name_index = headers
        .iter()
        .position(|header| header == COMPANY_NAME_COLUMN)
        .ok_or_else(|| {
            anyhow!(
                "'{}' column not found in {}",
                COMPANY_NAME_COLUMN,
                path.display()
            )
        })?;
    let activity_index = activity_column(&headers);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read record in {}", path.display()))?;
        let Some(name) = record.get(name_index) else {
            continue;
        };
        rows.push(CompanyRow {
            company_name: name.to_string(),
            nature_of_activity: activity_index
                .and_then(|index| record.get(index))
                .map(|value| value.to_string())
                .filter(|value| !value.trim().is_empty()),
        });
    }
    Ok(rows)
}

/// Read the classification index mapping companies to their basic industry
/// (exact-match mode input).
pub fn read_classification_index(path: &Path) -> Result<Vec<ClassificationRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read headers in {}", path.display()))?
        .clone();
    let name_index = headers
        .iter()
        .position(|header| header == COMPANY_NAME_COLUMN)
        .ok_or_else(|| {
            anyhow!(
                "'{}' column not found in {}",
                COMPANY_NAME_COLUMN,
                path.display()
            )
        })?;
    let industry_index = headers
        .iter()
        .position(|header| header == BASIC_INDUSTRY_COLUMN)
        .ok_or_else(|| {
            anyhow!(
                "'{}' column not found in {}",
                BASIC_INDUSTRY_COLUMN,
                path.display()
            )
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read record in {}", path.display()))?;
        let (Some(name), Some(industry)) = (record.get(name_index), record.get(industry_index))
        else {
            continue;
        };
        rows.push(ClassificationRow {
            company_name: name.to_string(),
            basic_industry: industry.to_string(),
        });
    }
    Ok(rows)
}
