//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::HashSet;

use marksift::{QueryParser, SearchMatch, TitleIndex, WordBreaker};

// Re-export canonical test utilities from marksift::testing
pub use marksift::testing::{doc_ids, highlighted, index_of, ranges, simple_index_of};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small bookmark bar, ids are positions in the slice.
pub const BOOKMARKS: &[&str] = &[
    "The Rust Programming Language",
    "Programming Rust, 2nd Edition",
    "Rustacean Station Podcast",
    "Tokio Tutorial: Async Rust",
    "Serde: Serialization Framework",
    "crates.io: Rust Package Registry",
    "This Week in Rust",
    "Thinking in Systems",
    "The Cargo Book",
    "rust-analyzer User Manual",
];

/// Titles in scripts where case folding and prefix rules differ.
pub const MULTILINGUAL: &[&str] = &[
    "한국어 문법 안내",
    "Ελληνικά για αρχάριους",
    "Русский язык онлайн",
    "日本語の勉強",
    "Café Crème Recettes",
];

pub fn bookmarks() -> TitleIndex<usize> {
    index_of(BOOKMARKS)
}

// ============================================================================
// INVARIANT CHECKS
// ============================================================================

/// Check what every result list must satisfy, whatever the query.
pub fn assert_results_well_formed<D, B>(
    index: &TitleIndex<D, B>,
    query: &str,
    max_count: usize,
    results: &[SearchMatch<D>],
) where
    D: Ord + Clone + std::hash::Hash + std::fmt::Debug,
    B: WordBreaker,
{
    assert!(
        results.len() <= max_count,
        "query {:?} returned {} results for max_count {}",
        query,
        results.len(),
        max_count
    );

    let unique: HashSet<_> = results.iter().map(|r| r.doc.clone()).collect();
    assert_eq!(unique.len(), results.len(), "duplicate documents for {:?}", query);

    for pair in results.windows(2) {
        assert!(pair[0].doc < pair[1].doc, "results out of order for {:?}", query);
    }

    for result in results {
        let title = index
            .title(&result.doc)
            .unwrap_or_else(|| panic!("result {:?} is not indexed", result.doc));
        for pair in result.title_positions.windows(2) {
            assert!(
                pair[0].end < pair[1].start,
                "positions not coalesced for {:?} in {:?}: {:?}",
                query,
                title,
                result.title_positions
            );
        }
        for position in &result.title_positions {
            assert!(
                position.slice(title).is_some(),
                "position {:?} out of bounds in {:?}",
                position,
                title
            );
        }
    }
}

/// Brute-force reference: every title re-tokenized and matched against the
/// parsed query, in ascending id order.
pub fn oracle_matches<B: WordBreaker>(parser: &QueryParser<B>, titles: &[&str], query: &str) -> Vec<usize> {
    let Ok(nodes) = parser.parse_query_nodes(query) else {
        return Vec::new();
    };
    titles
        .iter()
        .enumerate()
        .filter(|(_, title)| {
            parser
                .tokenize_for_matching(title)
                .map(|words| marksift::does_words_match(&words, &nodes))
                .unwrap_or(false)
        })
        .map(|(id, _)| id)
        .collect()
}
