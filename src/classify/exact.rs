// Exact-match company lookup.
//
// A simpler classification mode: instead of fuzzy phrase matching, take the
// companies a classification index lists under a sector and look for their
// names, verbatim after normalization, in the company corpus. The category
// still comes from the matching file's name.

use std::collections::HashSet;

use tracing::info;

use crate::corpus::company::{ClassificationRow, CompanyRow};

use super::category::Category;

/// A company resolved through the exact-match path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCategory {
    pub company: String,
    pub category: Category,
    pub nature_of_activity: String,
}

/// Trim, strip trailing dots, lower-case. "Acme Ltd." and "acme ltd"
/// compare equal.
pub fn normalize_company_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_lowercase()
}

/// The companies the index lists under the given sector, as normalized
/// names in index order, deduplicated.
pub fn companies_for_sector(index: &[ClassificationRow], sector: &str) -> Vec<String> {
    let wanted = sector.trim().to_lowercase();
    let mut seen = HashSet::new();
    index
        .iter()
        .filter(|row| row.basic_industry.trim().to_lowercase() == wanted)
        .map(|row| normalize_company_name(&row.company_name))
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Assign a category to each target company from the first corpus file
/// whose rows contain its name. Files are visited in the order given
/// (lexical from discovery); an assigned company is never overwritten.
/// Returns the matched companies and the names that were never found.
pub fn categorize_companies(
    targets: &[String],
    files: &[(String, Vec<CompanyRow>)],
) -> (Vec<CompanyCategory>, Vec<String>) {
    let mut found: Vec<Option<CompanyCategory>> = vec![None; targets.len()];

    for (file_name, rows) in files {
        info!(file = %file_name, "Searching for matched companies");
        let category = Category::from_source_name(file_name);
        for row in rows {
            let normalized = normalize_company_name(&row.company_name);
            for (index, target) in targets.iter().enumerate() {
                if found[index].is_none() && *target == normalized {
                    found[index] = Some(CompanyCategory {
                        company: target.clone(),
                        category,
                        nature_of_activity: row.nature_of_activity.clone().unwrap_or_default(),
                    });
                }
            }
        }
    }

    let mut matched = Vec::new();
    let mut not_found = Vec::new();
    for (target, result) in targets.iter().zip(found) {
        match result {
            Some(hit) => matched.push(hit),
            None => not_found.push(target.clone()),
        }
    }
    (matched, not_found)
}
