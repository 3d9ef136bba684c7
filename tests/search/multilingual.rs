//! Non-Latin scripts and accented text.

use super::common::{assert_results_well_formed, doc_ids, index_of, ranges, MULTILINGUAL};

fn search(query: &str) -> Vec<marksift::SearchMatch<usize>> {
    let index = index_of(MULTILINGUAL);
    let results = index.search(query, 10);
    assert_results_well_formed(&index, query, 10, &results);
    results
}

#[test]
fn two_hangul_syllables_are_a_prefix() {
    let found = search("한국");
    assert_eq!(doc_ids(&found), vec![0]);
    assert_eq!(found[0].title_positions, ranges(&[(0, 6)]));
}

#[test]
fn single_hangul_syllable_is_exact() {
    assert!(search("문").is_empty());
    assert_eq!(doc_ids(&search("문법")), vec![0]);
}

#[test]
fn greek_and_cyrillic_fold_case() {
    let greek = search("ΕΛΛΗΝ");
    assert_eq!(doc_ids(&greek), vec![1]);
    assert_eq!(greek[0].title_positions, ranges(&[(0, 10)]));

    let russian = search("РУСС");
    assert_eq!(doc_ids(&russian), vec![2]);
    assert_eq!(russian[0].title_positions, ranges(&[(0, 8)]));
}

#[test]
fn accents_are_significant() {
    assert!(search("cafe").is_empty());
    assert_eq!(doc_ids(&search("CAFÉ")), vec![4]);
    assert_eq!(doc_ids(&search("crè")), vec![4]);
}

#[test]
fn accented_highlight_uses_byte_offsets() {
    let found = search("crème");
    assert_eq!(found[0].title_positions, ranges(&[(6, 12)]));
}
