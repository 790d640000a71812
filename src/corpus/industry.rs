// Industry corpus loader: plain text, one phrase per line, no header.

use std::path::Path;

use anyhow::{Context, Result};

use super::{Source, SourceEntry, SourceKind};

/// Load one industry file. Every line becomes an entry with its 1-based
/// line number, blanks included, so cited positions match the file.
pub fn load_source(path: &Path) -> Result<Source> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let entries = raw
        .lines()
        .enumerate()
        .map(|(index, line)| SourceEntry {
            position: index + 1,
            text: line.to_string(),
        })
        .collect();

    Ok(Source {
        name: super::source_name(path),
        kind: SourceKind::Industry,
        entries,
    })
}
