// Corpus discovery: which files in a directory qualify as sources.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Name conventions a file must follow to join a corpus.
pub const INDUSTRY_MARKER: &str = "_Industry_";
pub const INDUSTRY_EXTENSION: &str = ".txt";
pub const COMPANY_MARKER: &str = "_Companies_";
pub const COMPANY_EXTENSION: &str = ".csv";

/// The corpus files found in one directory. Each list is in lexical name
/// order so equal-score ties always resolve to the same file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CorpusFiles {
    pub industry: Vec<PathBuf>,
    pub company: Vec<PathBuf>,
}

pub fn discover(dir: &Path) -> Result<CorpusFiles> {
    let mut files = CorpusFiles::default();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read corpus directory {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read corpus directory {}", dir.display()))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if name.ends_with(INDUSTRY_EXTENSION) && name.contains(INDUSTRY_MARKER) {
            files.industry.push(path);
        } else if name.ends_with(COMPANY_EXTENSION) && name.contains(COMPANY_MARKER) {
            files.company.push(path);
        }
    }

    files.industry.sort();
    files.company.sort();
    Ok(files)
}
