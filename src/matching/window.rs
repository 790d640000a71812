// Fixed-width sliding-window matching.
//
// The window width always equals the query's token count, so similarity
// scores are comparable across candidate lines and every accepted match can
// cite the exact phrase and position it came from.

use std::collections::HashSet;

use tracing::info;

use super::similarity::phrase_similarity;
use super::tokenizer::{QueryPhrase, Tokenizer};

/// One scored window: the joined phrase, its score, and its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowMatch {
    pub phrase: String,
    pub score: u8,
    pub source: String,
    pub position: usize,
}

/// Fold one candidate into a running best match.
///
/// Replacement requires a strictly higher score, so the first match seen at
/// any given score wins, and a zero score never becomes a match at all.
pub fn combine(current: Option<WindowMatch>, candidate: WindowMatch) -> Option<WindowMatch> {
    match current {
        None if candidate.score > 0 => Some(candidate),
        None => None,
        Some(best) if candidate.score > best.score => Some(candidate),
        Some(best) => Some(best),
    }
}

/// Every contiguous `width`-token window of `tokens`, joined with single
/// spaces. Yields exactly `tokens.len() - width + 1` phrases, or nothing
/// when the candidate is shorter than the window.
pub fn window_phrases(tokens: &[String], width: usize) -> Vec<String> {
    if tokens.len() < width {
        return Vec::new();
    }
    (0..=tokens.len() - width)
        .map(|offset| tokens[offset..offset + width].join(" "))
        .collect()
}

/// Scans candidate lines for one query, emitting a diagnostic event for
/// every window at or above the logging threshold.
///
/// The dedup set spans the scanner's lifetime (one stage of one sector),
/// so a window seen in repeated passes over the same source is reported
/// once. Diagnostics never affect which match wins.
pub struct WindowScanner<'a> {
    tokenizer: &'a Tokenizer,
    log_threshold: u8,
    reported: HashSet<(String, String, usize)>,
}

impl<'a> WindowScanner<'a> {
    pub fn new(tokenizer: &'a Tokenizer, log_threshold: u8) -> Self {
        Self {
            tokenizer,
            log_threshold,
            reported: HashSet::new(),
        }
    }

    /// Score every window of one candidate line and return the line's best
    /// match under the strict-greater-than rule.
    pub fn scan_entry(
        &mut self,
        query: &QueryPhrase,
        text: &str,
        source: &str,
        position: usize,
    ) -> Option<WindowMatch> {
        let tokens = self.tokenizer.normalize(text);
        let mut best = None;
        for phrase in window_phrases(&tokens, query.tokens.len()) {
            let score = phrase_similarity(&query.phrase, &phrase);
            if score >= self.log_threshold {
                let key = (phrase.clone(), source.to_string(), position);
                if self.reported.insert(key) {
                    info!(
                        sector = %query.raw,
                        matched = %phrase,
                        source = %source,
                        position,
                        score,
                        "Window at or above logging threshold"
                    );
                }
            }
            best = combine(
                best,
                WindowMatch {
                    phrase,
                    score,
                    source: source.to_string(),
                    position,
                },
            );
        }
        best
    }
}
