// Colored terminal output for run summaries and per-sector detail.

use colored::Colorize;

use crate::classify::category::{Category, Resolution};
use crate::classify::engine::{RunReport, SectorRecord};
use crate::classify::exact::CompanyCategory;
use crate::corpus::Source;

/// Display the end-of-run summary: per-category counts, totals, max score.
pub fn display_summary(run: &RunReport) {
    println!(
        "\n{}",
        format!(
            "=== Categorization Summary ({} sectors) ===",
            run.records.len()
        )
        .bold()
    );
    println!();

    for (category, count) in run.tally.entries() {
        println!("  {:<22} {}", colorize_category(category), count);
    }

    println!();
    println!("  Categorized:   {}", run.categorized());
    println!("  Uncategorized: {}", run.uncategorized);
    match run.max_score {
        Some(score) => println!("  Max score:     {score}"),
        None => println!("  Max score:     {}", "none found".dimmed()),
    }
}

/// Display one sector's outcome (the `score` subcommand).
pub fn display_sector_detail(record: &SectorRecord) {
    println!(
        "\n{}",
        format!("=== Score for '{}' ===", record.sector).bold()
    );

    let category = match record.resolution {
        Resolution::Categorized(category) => colorize_category(category).to_string(),
        Resolution::Uncategorized => "UNCATEGORIZED".yellow().to_string(),
        Resolution::Unresolved => "unresolved".dimmed().to_string(),
    };
    println!("  Category:   {category}");
    println!("  Best score: {}", record.best_score);
    println!("  {}", truncate_chars(&record.comment, 140).dimmed());
}

/// List the corpus files discovery accepted (the `sources` subcommand).
pub fn display_sources(industry: &[Source], company: &[Source]) {
    println!(
        "\n{}",
        format!(
            "=== Corpus Sources ({} industry, {} company) ===",
            industry.len(),
            company.len()
        )
        .bold()
    );
    println!();

    for source in industry {
        println!("  {:<44} {:>5} lines", source.name, source.entries.len());
    }
    for source in company {
        println!(
            "  {:<44} {:>5} activity records",
            source.name,
            source.entries.len()
        );
    }
}

/// Display exact-match results (the `companies` subcommand).
pub fn display_company_results(matched: &[CompanyCategory], not_found: &[String]) {
    if !matched.is_empty() {
        println!("\n{}", "Companies with matches found:".bold());
        for hit in matched {
            println!(
                "  {:<40} {}  {}",
                hit.company,
                colorize_category(hit.category),
                truncate_chars(&hit.nature_of_activity, 60).dimmed()
            );
        }
    }
    if !not_found.is_empty() {
        println!("\n{}", "Companies with no match found:".bold());
        for company in not_found {
            println!("  {company}");
        }
    }
}

/// Colorize a category by tier.
fn colorize_category(category: Category) -> colored::ColoredString {
    match category {
        Category::Green => category.as_str().green(),
        Category::Red => category.as_str().red().bold(),
        Category::Orange => category.as_str().yellow(),
        Category::Grey => category.as_str().dimmed(),
        Category::Unknown => category.as_str().normal(),
    }
}

/// Truncate to at most `max_chars` characters on char boundaries, appending
/// "..." if anything was dropped. Byte slicing would panic on multi-byte
/// characters in company activities.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{kept}...")
}
