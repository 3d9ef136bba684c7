//! Which documents a query finds.
//!
//! Covers prefix matching and its length threshold, AND across words, exact
//! phrases, and case-insensitivity, against the shared bookmark fixture.

use super::common::{assert_results_well_formed, bookmarks, doc_ids, index_of, BOOKMARKS};

fn ids(query: &str) -> Vec<usize> {
    let index = bookmarks();
    let results = index.search(query, 100);
    assert_results_well_formed(&index, query, 100, &results);
    doc_ids(&results)
}

// ============================================================================
// PREFIX MATCHING
// ============================================================================

#[test]
fn long_words_match_as_prefixes() {
    assert_eq!(ids("rust"), vec![0, 1, 2, 3, 5, 6, 9]);
    assert_eq!(ids("rustac"), vec![2]);
    assert_eq!(ids("prog"), vec![0, 1]);
}

#[test]
fn three_characters_is_enough_for_a_prefix() {
    assert_eq!(ids("thi"), vec![6, 7]);
    assert_eq!(ids("the"), vec![0, 8]);
}

#[test]
fn short_words_must_match_whole_words() {
    assert_eq!(ids("in"), vec![6, 7]);
    assert!(ids("ru").is_empty());
    assert!(ids("th").is_empty());
}

#[test]
fn prefix_never_matches_mid_word() {
    // "analyzer" is its own word, "lyzer" is only a suffix of it
    assert_eq!(ids("analy"), vec![9]);
    assert!(ids("lyzer").is_empty());
}

#[test]
fn dotted_words_stay_together() {
    assert_eq!(ids("crates"), vec![5]);
    assert!(ids("io").is_empty());
}

// ============================================================================
// AND SEMANTICS
// ============================================================================

#[test]
fn every_word_must_match() {
    assert_eq!(ids("rust prog"), vec![0, 1]);
    assert_eq!(ids("prog rust"), vec![0, 1]);
    assert_eq!(ids("rust week"), vec![6]);
    assert!(ids("rust cargo").is_empty());
}

#[test]
fn one_unmatched_word_empties_the_result() {
    assert!(ids("rust programming zzz").is_empty());
}

#[test]
fn repeated_query_words_are_harmless() {
    assert_eq!(ids("rust rust rust"), ids("rust"));
}

#[test]
fn two_query_words_may_match_the_same_title_word() {
    assert_eq!(ids("rust rustacean"), vec![2]);
}

// ============================================================================
// PHRASES
// ============================================================================

#[test]
fn quoted_words_must_be_adjacent_and_in_order() {
    assert_eq!(ids("\"this week\""), vec![6]);
    assert!(ids("\"week this\"").is_empty());
    assert!(ids("\"this rust\"").is_empty());
}

#[test]
fn quoted_words_match_exactly() {
    assert!(ids("\"thi\"").is_empty());
    assert_eq!(ids("\"this\""), vec![6]);
}

#[test]
fn phrases_skip_punctuation_between_words() {
    assert_eq!(ids("\"tokio tutorial async\""), vec![3]);
}

#[test]
fn phrase_and_term_combine() {
    assert_eq!(ids("\"the\" book"), vec![8]);
    assert_eq!(ids("rust \"programming rust\""), vec![1]);
}

#[test]
fn typographic_quotes_delimit_phrases() {
    assert_eq!(ids("\u{201C}this week\u{201D}"), vec![6]);
    assert_eq!(ids("\u{00AB}this week\u{00BB}"), vec![6]);
    assert_eq!(ids("\u{201E}week this\u{201C}"), Vec::<usize>::new());
}

#[test]
fn unmatched_quote_runs_to_the_end() {
    assert_eq!(ids("\"async rust"), vec![3]);
    assert!(ids("\"async tokio").is_empty());
}

// ============================================================================
// CASE
// ============================================================================

#[test]
fn queries_are_case_insensitive() {
    for query in ["rust", "RUST", "Rust", "rUsT"] {
        assert_eq!(ids(query), vec![0, 1, 2, 3, 5, 6, 9], "query {:?}", query);
    }
    assert_eq!(ids("\"THIS WEEK\""), vec![6]);
}

#[test]
fn titles_are_case_insensitive() {
    let index = index_of(&["SHOUTING TITLE", "quiet title"]);
    assert_eq!(doc_ids(&index.search("title", 10)), vec![0, 1]);
    assert_eq!(doc_ids(&index.search("shout", 10)), vec![0]);
}

#[test]
fn every_fixture_title_finds_itself() {
    let index = bookmarks();
    for (id, title) in BOOKMARKS.iter().enumerate() {
        let found = doc_ids(&index.search(&format!("\"{}\"", title), 100));
        assert_eq!(found, vec![id], "title {:?}", title);
    }
}

#[test]
fn and_requires_both_words_in_one_title() {
    let index = index_of(&["abcx", "defy", "abcx defy"]);
    assert_eq!(doc_ids(&index.search("abc def", 10)), vec![2]);
}

#[test]
fn scenario_prefix_intersection_and_limit() {
    let index = index_of(&["abcd cdef", "abcd", "abcd cdefg"]);
    assert_eq!(doc_ids(&index.search("abc cde", 10)), vec![0, 2]);
    assert_eq!(index.search("abc", 1).len(), 1);
}

#[test]
fn every_full_word_round_trips() {
    let mut index = index_of(BOOKMARKS);
    for (id, title) in BOOKMARKS.iter().enumerate() {
        for word in index.parser().extract_query_words(title).unwrap() {
            let query = format!("\"{}\"", word);
            assert!(doc_ids(&index.search(&query, 100)).contains(&id), "{:?} in {:?}", word, title);
        }
    }
    for (id, title) in BOOKMARKS.iter().enumerate() {
        index.remove(&id, title).unwrap();
    }
    assert_eq!(index.term_count(), 0);
    assert!(index.search("rust", 100).is_empty());
}
