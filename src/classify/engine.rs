// Two-stage categorization engine.
//
// Stage 1 scans the industry corpus for every sector. Sectors whose best
// match stays below the acceptance threshold fall through to stage 2, which
// scans the nature-of-activity field of the company corpus. A sector that
// clears neither stage ends the run unresolved.
//
// The engine only sees pre-loaded `Source` values; corpus discovery and
// parsing happen upstream, so tests drive it with in-memory fixtures.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::corpus::Source;
use crate::matching::tokenizer::{QueryPhrase, Tokenizer, DEFAULT_SUPPORTING_WORDS};
use crate::matching::window::{combine, WindowMatch, WindowScanner};

use super::category::{Category, CategoryTally, Resolution};

/// Engine policy knobs.
///
/// The defaults are the fixed policy values; both thresholds are exposed so
/// callers can trade precision against recall per run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum score for a match to assign a category (default 85).
    pub accept_threshold: u8,
    /// Lower score at which windows are logged as diagnostics (default 60).
    pub log_threshold: u8,
    /// Connector words stripped during normalization.
    pub supporting_words: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            accept_threshold: 85,
            log_threshold: 60,
            supporting_words: DEFAULT_SUPPORTING_WORDS
                .iter()
                .map(|word| word.to_string())
                .collect(),
        }
    }
}

/// One row of the final report. Created in stage 1, possibly overwritten in
/// stage 2, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorRecord {
    pub sector: String,
    pub resolution: Resolution,
    pub comment: String,
    pub best_score: u8,
}

/// Everything a run produces: per-sector records in input order plus the
/// aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub records: Vec<SectorRecord>,
    pub tally: CategoryTally,
    pub uncategorized: usize,
    /// Highest score across all records, ignoring zero ("none found").
    pub max_score: Option<u8>,
}

impl RunReport {
    pub fn categorized(&self) -> usize {
        self.records.len() - self.uncategorized
    }
}

pub struct Engine {
    config: EngineConfig,
    tokenizer: Tokenizer,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let tokenizer = Tokenizer::new(&config.supporting_words);
        Self { config, tokenizer }
    }

    /// Classify every sector against the industry corpus, then retry the
    /// leftovers against the company-activity corpus.
    pub fn run(&self, sectors: &[String], industry: &[Source], company: &[Source]) -> RunReport {
        let mut records = Vec::with_capacity(sectors.len());
        let mut tally = CategoryTally::default();
        let mut uncategorized = 0;

        // Stage 1: industry corpus, every sector
        let pb = ProgressBar::new(sectors.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Industry [{bar:30}] {pos}/{len} ({eta})")
                .unwrap(),
        );
        for sector in sectors {
            debug!(sector = %sector, "Categorizing sector");
            let best = self.scan_sources(sector, industry);
            records.push(self.stage_one_record(sector, best, &mut tally, &mut uncategorized));
            pb.inc(1);
        }
        pb.finish_and_clear();

        // Stage 2: company-activity corpus, uncategorized sectors only
        let pb = ProgressBar::new(uncategorized as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Companies [{bar:30}] {pos}/{len} ({eta})")
                .unwrap(),
        );
        for record in records
            .iter_mut()
            .filter(|record| matches!(record.resolution, Resolution::Uncategorized))
        {
            info!(sector = %record.sector, "Re-categorizing uncategorized sector");
            let best = self.scan_sources(&record.sector, company);
            self.stage_two_update(record, best, &mut tally, &mut uncategorized);
            pb.inc(1);
        }
        pb.finish_and_clear();

        let max_score = records
            .iter()
            .map(|record| record.best_score)
            .filter(|score| *score > 0)
            .max();

        RunReport {
            records,
            tally,
            uncategorized,
            max_score,
        }
    }

    /// Best match for one sector across one corpus. Sources are scanned in
    /// the order given (lexical from discovery), so equal scores resolve to
    /// the earliest file and line.
    fn scan_sources(&self, sector: &str, sources: &[Source]) -> Option<WindowMatch> {
        let query = QueryPhrase::new(&self.tokenizer, sector);
        let mut scanner = WindowScanner::new(&self.tokenizer, self.config.log_threshold);
        let mut best = None;
        for source in sources {
            for entry in &source.entries {
                if let Some(found) =
                    scanner.scan_entry(&query, &entry.text, &source.name, entry.position)
                {
                    best = combine(best, found);
                }
            }
        }
        best
    }

    fn stage_one_record(
        &self,
        sector: &str,
        best: Option<WindowMatch>,
        tally: &mut CategoryTally,
        uncategorized: &mut usize,
    ) -> SectorRecord {
        match best {
            Some(found) if found.score >= self.config.accept_threshold => {
                let category = Category::from_source_name(&found.source);
                tally.bump(category);
                SectorRecord {
                    sector: sector.to_string(),
                    resolution: Resolution::Categorized(category),
                    comment: format!(
                        "Matched '{}' with '{}' in file '{}' at line {}",
                        sector, found.phrase, found.source, found.position
                    ),
                    best_score: found.score,
                }
            }
            best => {
                *uncategorized += 1;
                SectorRecord {
                    sector: sector.to_string(),
                    resolution: Resolution::Uncategorized,
                    comment: "No match found".to_string(),
                    best_score: best.map_or(0, |found| found.score),
                }
            }
        }
    }

    fn stage_two_update(
        &self,
        record: &mut SectorRecord,
        best: Option<WindowMatch>,
        tally: &mut CategoryTally,
        uncategorized: &mut usize,
    ) {
        match best {
            Some(found) if found.score >= self.config.accept_threshold => {
                let category = Category::from_source_name(&found.source);
                tally.bump(category);
                // The sector was counted as uncategorized in stage 1
                *uncategorized -= 1;
                record.resolution = Resolution::Categorized(category);
                record.comment = format!(
                    "Matched with '{}' in file '{}' at line {}",
                    found.phrase, found.source, found.position
                );
                record.best_score = found.score;
            }
            Some(found) => {
                record.resolution = Resolution::Unresolved;
                record.comment = format!(
                    "No match found in company files. Closest was '{}' (score {}) in file '{}' at line {}",
                    found.phrase, found.score, found.source, found.position
                );
                record.best_score = found.score;
            }
            None => {
                record.resolution = Resolution::Unresolved;
                record.comment = "No match found in company files".to_string();
                record.best_score = 0;
            }
        }
    }
}
