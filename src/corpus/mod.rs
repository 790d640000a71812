// Corpus sources: the engine's view of the reference files.
//
// Loaders turn files into `Source` values (name + positioned text entries)
// so the matching engine never touches the file system; tests feed it
// in-memory sources the same way.

pub mod company;
pub mod discovery;
pub mod industry;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::error;

/// Which corpus a source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Industry,
    CompanyActivity,
}

/// One scannable text with its display position: the 1-based line number
/// for industry files, the record index + 2 for company files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub position: usize,
    pub text: String,
}

/// One corpus file, resolved to plain scannable entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub kind: SourceKind,
    pub entries: Vec<SourceEntry>,
}

/// The file name used for provenance and category resolution.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read the sector list: one free-text sector per line, blanks skipped.
pub fn read_sector_list(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sector list {}", path.display()))?;
    Ok(raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect())
}

/// Load every industry file, logging and skipping the ones that fail.
pub fn load_industry_sources(paths: &[PathBuf]) -> Vec<Source> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        match industry::load_source(path) {
            Ok(source) => sources.push(source),
            Err(e) => error!(file = %path.display(), error = %e, "Error reading file, skipping"),
        }
    }
    sources
}

/// Load every company-activity file. A file that fails to parse or lacks
/// the activity column is logged and skipped; the run continues.
pub fn load_company_sources(paths: &[PathBuf]) -> Vec<Source> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        match company::load_source(path) {
            Ok(source) => sources.push(source),
            Err(e) => error!(file = %path.display(), error = %e, "Error reading file, skipping"),
        }
    }
    sources
}
