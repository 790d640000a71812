// Phrase tokenization and normalization.
//
// Sectors and corpus lines are compared as sequences of normalized word
// tokens. A small set of supporting words (connectors like "and" or a bare
// hyphen) is stripped so that purely cosmetic differences between phrasings
// don't dilute the similarity score.

use std::collections::HashSet;

/// Connector words dropped during normalization. Configurable through
/// `EngineConfig`; these are the defaults.
pub const DEFAULT_SUPPORTING_WORDS: [&str; 4] = ["&", "and", "-", "or"];

/// Splits free text into normalized tokens.
pub struct Tokenizer {
    supporting_words: HashSet<String>,
}

impl Tokenizer {
    pub fn new(supporting_words: &[impl AsRef<str>]) -> Self {
        Self {
            supporting_words: supporting_words
                .iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Split on whitespace, lower-case each piece, and drop supporting
    /// words. Token order and duplicates are preserved; empty input yields
    /// an empty sequence.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !self.supporting_words.contains(word))
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&DEFAULT_SUPPORTING_WORDS)
    }
}

/// A sector query prepared for window matching: its token sequence and the
/// space-joined phrase every candidate window is scored against. Built once
/// per sector, not once per candidate line.
pub struct QueryPhrase {
    pub raw: String,
    pub tokens: Vec<String>,
    pub phrase: String,
}

impl QueryPhrase {
    pub fn new(tokenizer: &Tokenizer, raw: &str) -> Self {
        let tokens = tokenizer.normalize(raw);
        let phrase = tokens.join(" ");
        Self {
            raw: raw.to_string(),
            tokens,
            phrase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supporting_words_removed() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.normalize("Oil & Gas - Exploration"),
            vec!["oil", "gas", "exploration"]
        );
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.normalize("Iron and Steel and Iron"),
            vec!["iron", "steel", "iron"]
        );
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.normalize("").is_empty());
        assert!(tokenizer.normalize("   \t  ").is_empty());
    }

    #[test]
    fn test_supporting_word_match_is_exact() {
        // "android" contains "and" but is not a supporting word
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.normalize("Android and iOS"), vec!["android", "ios"]);
    }

    #[test]
    fn test_custom_supporting_words() {
        let tokenizer = Tokenizer::new(&["the", "of"]);
        assert_eq!(
            tokenizer.normalize("The Bank of England"),
            vec!["bank", "england"]
        );
    }

    #[test]
    fn test_query_phrase_joins_with_single_spaces() {
        let tokenizer = Tokenizer::default();
        let query = QueryPhrase::new(&tokenizer, "Oil & Gas Exploration");
        assert_eq!(query.phrase, "oil gas exploration");
        assert_eq!(query.tokens.len(), 3);
        assert_eq!(query.raw, "Oil & Gas Exploration");
    }
}
