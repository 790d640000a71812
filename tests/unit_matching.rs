// Unit tests for the matching primitives and category resolution.
//
// Tests isolated pure functions: tokenizer normalization, similarity
// bounds, window generation counts, the best-match combine rule, and
// category/report-token resolution.

use litmus::classify::category::{Category, CategoryTally, Resolution};
use litmus::matching::similarity::phrase_similarity;
use litmus::matching::tokenizer::{QueryPhrase, Tokenizer, DEFAULT_SUPPORTING_WORDS};
use litmus::matching::window::{combine, window_phrases, WindowMatch, WindowScanner};

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

fn candidate(phrase: &str, score: u8, source: &str, position: usize) -> WindowMatch {
    WindowMatch {
        phrase: phrase.to_string(),
        score,
        source: source.to_string(),
        position,
    }
}

// ============================================================
// Tokenizer: normalization semantics
// ============================================================

#[test]
fn tokenizer_drops_supporting_words() {
    let tokenizer = Tokenizer::default();
    assert_eq!(
        tokenizer.normalize("Oil & Gas - Exploration"),
        tokens(&["oil", "gas", "exploration"])
    );
}

#[test]
fn tokenizer_lower_cases_everything() {
    let tokenizer = Tokenizer::default();
    assert_eq!(
        tokenizer.normalize("IRON ORE Mining"),
        tokens(&["iron", "ore", "mining"])
    );
}

#[test]
fn tokenizer_keeps_duplicates_in_order() {
    let tokenizer = Tokenizer::default();
    assert_eq!(
        tokenizer.normalize("steel or steel"),
        tokens(&["steel", "steel"])
    );
}

#[test]
fn tokenizer_empty_and_whitespace_input() {
    let tokenizer = Tokenizer::default();
    assert!(tokenizer.normalize("").is_empty());
    assert!(tokenizer.normalize(" \t \n ").is_empty());
}

#[test]
fn tokenizer_supporting_words_only_input() {
    let tokenizer = Tokenizer::default();
    assert!(tokenizer.normalize("and & or -").is_empty());
}

#[test]
fn default_supporting_words_match_documented_values() {
    assert_eq!(DEFAULT_SUPPORTING_WORDS, ["&", "and", "-", "or"]);
}

// ============================================================
// Similarity: bounds and monotonicity
// ============================================================

#[test]
fn similarity_identical_is_100() {
    assert_eq!(phrase_similarity("cement manufacturing", "cement manufacturing"), 100);
}

#[test]
fn similarity_is_bounded() {
    let score = phrase_similarity("abc", "xyzxyzxyzxyz");
    assert!(score <= 100);
}

#[test]
fn similarity_shared_prefix_beats_disjoint() {
    let close = phrase_similarity("mining services", "mining supplies");
    let far = phrase_similarity("mining services", "zzzzzz qqqqqqqq");
    assert!(close > far);
}

#[test]
fn similarity_known_edit_distances() {
    // 20 chars, 3 substitutions: 1 - 3/20 = 0.85
    assert_eq!(
        phrase_similarity(&"a".repeat(20), &format!("{}bbb", "a".repeat(17))),
        85
    );
    // 25 chars, 4 substitutions: 1 - 4/25 = 0.84
    assert_eq!(
        phrase_similarity(&"a".repeat(25), &format!("{}bbbb", "a".repeat(21))),
        84
    );
}

// ============================================================
// Window generation: exactly m - n + 1 positions
// ============================================================

#[test]
fn window_count_n2_m5_is_4() {
    let c = tokens(&["a", "b", "c", "d", "e"]);
    assert_eq!(window_phrases(&c, 2).len(), 4);
}

#[test]
fn window_count_n_equals_m_is_1() {
    let c = tokens(&["a", "b", "c"]);
    assert_eq!(window_phrases(&c, 3), vec!["a b c"]);
}

#[test]
fn window_count_m_less_than_n_is_0() {
    let c = tokens(&["a", "b"]);
    assert!(window_phrases(&c, 3).is_empty());
}

#[test]
fn windows_are_joined_with_single_spaces() {
    let c = tokens(&["iron", "ore", "mining"]);
    assert_eq!(window_phrases(&c, 2), vec!["iron ore", "ore mining"]);
}

// ============================================================
// Combine: strict-greater-than replacement, first-seen wins
// ============================================================

#[test]
fn combine_starts_from_nonzero_candidate() {
    let best = combine(None, candidate("a", 1, "f.txt", 1));
    assert_eq!(best.unwrap().score, 1);
}

#[test]
fn combine_zero_score_is_never_a_match() {
    assert!(combine(None, candidate("a", 0, "f.txt", 1)).is_none());
}

#[test]
fn combine_strictly_higher_replaces() {
    let first = candidate("first", 84, "f.txt", 1);
    let second = candidate("second", 85, "g.txt", 9);
    let best = combine(Some(first), second).unwrap();
    assert_eq!(best.phrase, "second");
    assert_eq!(best.position, 9);
}

#[test]
fn combine_equal_score_keeps_first_seen() {
    let first = candidate("first", 85, "f.txt", 1);
    let second = candidate("second", 85, "g.txt", 9);
    let best = combine(Some(first), second).unwrap();
    assert_eq!(best.phrase, "first");
    assert_eq!(best.source, "f.txt");
}

#[test]
fn combine_is_idempotent_over_reruns() {
    // Feeding the same candidate stream twice never changes the winner
    let stream = [
        candidate("a", 40, "f.txt", 1),
        candidate("b", 90, "f.txt", 2),
        candidate("c", 90, "g.txt", 3),
    ];
    let once = stream.iter().cloned().fold(None, combine);
    let twice = stream
        .iter()
        .chain(stream.iter())
        .cloned()
        .fold(once.clone(), combine);
    assert_eq!(once, twice);
    assert_eq!(once.unwrap().phrase, "b");
}

// ============================================================
// Scanner: best window per line
// ============================================================

#[test]
fn scanner_picks_best_window_in_line() {
    let tokenizer = Tokenizer::default();
    let query = QueryPhrase::new(&tokenizer, "Gas Exploration");
    let mut scanner = WindowScanner::new(&tokenizer, 60);
    let found = scanner
        .scan_entry(
            &query,
            "Oil and Gas Exploration and Production",
            "Green_Industry_List.txt",
            7,
        )
        .unwrap();
    assert_eq!(found.phrase, "gas exploration");
    assert_eq!(found.score, 100);
    assert_eq!(found.source, "Green_Industry_List.txt");
    assert_eq!(found.position, 7);
}

#[test]
fn scanner_returns_none_for_short_lines() {
    let tokenizer = Tokenizer::default();
    let query = QueryPhrase::new(&tokenizer, "Oil Gas Exploration Services");
    let mut scanner = WindowScanner::new(&tokenizer, 60);
    assert!(scanner
        .scan_entry(&query, "Mining", "Green_Industry_List.txt", 1)
        .is_none());
}

// ============================================================
// Category resolution: ordered substring conventions
// ============================================================

#[test]
fn category_red_flag_file() {
    assert_eq!(
        Category::from_source_name("RedFlag_Industry_2024.txt"),
        Category::Red
    );
}

#[test]
fn category_no_convention_token() {
    assert_eq!(
        Category::from_source_name("Company_List.csv"),
        Category::Unknown
    );
}

#[test]
fn category_is_case_insensitive() {
    assert_eq!(
        Category::from_source_name("GREY_Companies_2023.csv"),
        Category::Grey
    );
}

#[test]
fn category_as_str_all_variants() {
    assert_eq!(Category::Green.as_str(), "GREEN");
    assert_eq!(Category::Red.as_str(), "RED");
    assert_eq!(Category::Orange.as_str(), "ORANGE");
    assert_eq!(Category::Grey.as_str(), "GREY");
    assert_eq!(Category::Unknown.as_str(), "UNKNOWN");
}

#[test]
fn category_display_matches_as_str() {
    for category in [
        Category::Green,
        Category::Red,
        Category::Orange,
        Category::Grey,
        Category::Unknown,
    ] {
        assert_eq!(category.to_string(), category.as_str());
    }
}

// ============================================================
// Report tokens: the compatibility surface
// ============================================================

#[test]
fn resolution_report_tokens() {
    assert_eq!(
        Resolution::Categorized(Category::Orange).as_report_str(),
        "ORANGE"
    );
    assert_eq!(Resolution::Uncategorized.as_report_str(), "UNCATEGORIZED");
    assert_eq!(Resolution::Unresolved.as_report_str(), "");
}

#[test]
fn tally_counts_every_category() {
    let mut tally = CategoryTally::default();
    for category in [
        Category::Green,
        Category::Green,
        Category::Red,
        Category::Unknown,
    ] {
        tally.bump(category);
    }
    assert_eq!(tally.green, 2);
    assert_eq!(tally.red, 1);
    assert_eq!(tally.orange, 0);
    assert_eq!(tally.unknown, 1);
}
