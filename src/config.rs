use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Paths only; per-run policy knobs like the thresholds are CLI flags.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Directory scanned for corpus files (LITMUS_CORPUS_DIR, default ".").
    pub corpus_dir: PathBuf,
    /// Line-delimited sector list (LITMUS_SECTOR_LIST).
    pub sector_list: PathBuf,
    /// Company classification index used by the exact-match `companies`
    /// mode (LITMUS_CLASSIFICATION_INDEX).
    pub classification_index: PathBuf,
    /// Where the CSV report is written (LITMUS_OUTPUT).
    pub output_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables; every path has a
    /// default matching the corpus conventions.
    pub fn load() -> Result<Self> {
        Ok(Self {
            corpus_dir: env::var("LITMUS_CORPUS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            sector_list: env::var("LITMUS_SECTOR_LIST")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("NSE_BasicSector_List.txt")),
            classification_index: env::var("LITMUS_CLASSIFICATION_INDEX")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("NSE_Company_Classification.csv")),
            output_path: env::var("LITMUS_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("categorized_industry_sectors.csv")),
        })
    }

    /// Check the sector list exists.
    /// Call this before any operation that classifies the full list: a
    /// missing list is a precondition failure, not an engine error.
    pub fn require_sector_list(&self) -> Result<()> {
        if !self.sector_list.is_file() {
            anyhow::bail!(
                "Sector list not found at {}.\n\
                 Set LITMUS_SECTOR_LIST in your .env file (see .env.example).",
                self.sector_list.display()
            );
        }
        Ok(())
    }

    /// Check the classification index exists (exact-match mode only).
    pub fn require_classification_index(&self) -> Result<()> {
        if !self.classification_index.is_file() {
            anyhow::bail!(
                "Classification index not found at {}.\n\
                 Set LITMUS_CLASSIFICATION_INDEX in your .env file (see .env.example).",
                self.classification_index.display()
            );
        }
        Ok(())
    }
}
