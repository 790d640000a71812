use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{error, info};

use litmus::classify::engine::{Engine, EngineConfig};
use litmus::classify::exact;
use litmus::config::Config;
use litmus::corpus;
use litmus::output::{report, terminal};

/// Litmus: environmental-risk categorization for industry sectors.
///
/// Matches each sector in a list against reference corpora of industry
/// phrases and company activities, then propagates the best-matching
/// file's risk category to the sector.
#[derive(Parser)]
#[command(name = "litmus", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Categorize every sector in the sector list and write the CSV report
    Classify {
        /// Minimum score for a match to assign a category
        #[arg(long, default_value = "85")]
        accept_threshold: u8,

        /// Score at which window matches are logged as diagnostics
        #[arg(long, default_value = "60")]
        log_threshold: u8,
    },

    /// Score a single sector against the corpus without writing a report
    Score {
        /// The sector text to classify (e.g. "Oil & Gas Exploration")
        sector: String,

        /// Minimum score for a match to assign a category
        #[arg(long, default_value = "85")]
        accept_threshold: u8,

        /// Score at which window matches are logged as diagnostics
        #[arg(long, default_value = "60")]
        log_threshold: u8,
    },

    /// Categorize one sector's companies by exact name lookup
    Companies {
        /// The sector whose companies should be looked up
        sector: String,
    },

    /// List the corpus files that qualify as industry or company sources
    Sources,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("litmus=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            accept_threshold,
            log_threshold,
        } => {
            let config = Config::load()?;
            config.require_sector_list()?;

            let sectors = corpus::read_sector_list(&config.sector_list)?;
            let (industry, company) = load_corpus(&config)?;

            println!(
                "Categorizing {} sectors against {} industry and {} company sources...",
                sectors.len(),
                industry.len(),
                company.len()
            );

            let engine = Engine::new(EngineConfig {
                accept_threshold,
                log_threshold,
                ..EngineConfig::default()
            });
            let run = engine.run(&sectors, &industry, &company);

            report::write_report(&run.records, &config.output_path)?;
            terminal::display_summary(&run);
            println!(
                "\n{}",
                format!("Report saved to: {}", config.output_path.display()).bold()
            );
        }

        Commands::Score {
            sector,
            accept_threshold,
            log_threshold,
        } => {
            let config = Config::load()?;
            let (industry, company) = load_corpus(&config)?;

            let engine = Engine::new(EngineConfig {
                accept_threshold,
                log_threshold,
                ..EngineConfig::default()
            });
            let run = engine.run(std::slice::from_ref(&sector), &industry, &company);
            terminal::display_sector_detail(&run.records[0]);
        }

        Commands::Companies { sector } => {
            let config = Config::load()?;
            config.require_classification_index()?;

            let index = corpus::company::read_classification_index(&config.classification_index)?;
            let targets = exact::companies_for_sector(&index, &sector);
            if targets.is_empty() {
                println!(
                    "No companies listed for sector '{sector}' in {}",
                    config.classification_index.display()
                );
                return Ok(());
            }
            info!(
                sector = %sector,
                companies = targets.len(),
                "Companies found in classification index"
            );

            let files = corpus::discovery::discover(&config.corpus_dir)?;
            let mut company_files = Vec::with_capacity(files.company.len());
            for path in &files.company {
                match corpus::company::read_company_rows(path) {
                    Ok(rows) => company_files.push((corpus::source_name(path), rows)),
                    Err(e) => {
                        error!(file = %path.display(), error = %e, "Error reading file, skipping")
                    }
                }
            }

            let (matched, not_found) = exact::categorize_companies(&targets, &company_files);
            terminal::display_company_results(&matched, &not_found);
        }

        Commands::Sources => {
            let config = Config::load()?;
            let (industry, company) = load_corpus(&config)?;
            terminal::display_sources(&industry, &company);
        }
    }

    Ok(())
}

/// Discover and load both corpora, skipping unreadable files.
fn load_corpus(config: &Config) -> Result<(Vec<corpus::Source>, Vec<corpus::Source>)> {
    let files = corpus::discovery::discover(&config.corpus_dir)?;
    Ok((
        corpus::load_industry_sources(&files.industry),
        corpus::load_company_sources(&files.company),
    ))
}
