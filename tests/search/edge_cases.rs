//! Degenerate queries and index states.

use marksift::TitleIndex;

use super::common::{bookmarks, doc_ids, index_of};

#[test]
fn empty_and_separator_only_queries_match_nothing() {
    let index = bookmarks();
    for query in ["", "   ", ",.;:!?", "- - -", "\"\"", "\" \""] {
        assert!(index.search(query, 10).is_empty(), "query {:?}", query);
    }
}

#[test]
fn zero_max_count_returns_nothing() {
    assert!(bookmarks().search("rust", 0).is_empty());
}

#[test]
fn empty_index_matches_nothing() {
    let index: TitleIndex<u32> = TitleIndex::new();
    assert!(index.search("anything", 10).is_empty());
    assert_eq!(index.term_count(), 0);
}

#[test]
fn separator_only_titles_are_indexed_without_terms() {
    let mut index: TitleIndex<u32> = TitleIndex::new();
    index.add(1, "--- !!! ---").unwrap();
    assert!(index.contains(&1));
    assert_eq!(index.term_count(), 0);
    assert!(index.search("---", 10).is_empty());
}

#[test]
fn removing_unknown_documents_is_a_no_op() {
    let mut index = bookmarks();
    let terms = index.term_count();
    index.remove(&999, "Nothing Here").unwrap();
    assert_eq!(index.term_count(), terms);
    assert_eq!(index.len(), 10);
}

#[test]
fn shared_terms_survive_partial_removal() {
    let mut index = index_of(&["rust guide", "rust book"]);
    index.remove(&0, "rust guide").unwrap();
    assert_eq!(doc_ids(&index.search("rust", 10)), vec![1]);
    assert!(index.documents_for("guide").is_none());
    assert!(index.documents_for("rust").is_some());
}

#[test]
fn same_title_for_many_documents() {
    let titles = vec!["Untitled"; 25];
    let index = index_of(&titles);
    assert_eq!(index.term_count(), 1);
    assert_eq!(index.search("untitled", 100).len(), 25);
    assert_eq!(doc_ids(&index.search("unt", 3)), vec![0, 1, 2]);
}

#[test]
fn digits_are_words() {
    let index = index_of(&["Release 2024", "Release 1999"]);
    assert_eq!(doc_ids(&index.search("202", 10)), vec![0]);
    assert_eq!(doc_ids(&index.search("release 1999", 10)), vec![1]);
}

#[test]
fn query_longer_than_any_title_word() {
    let index = bookmarks();
    assert!(index.search("programmingly", 10).is_empty());
}
