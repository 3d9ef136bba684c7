//! Highlight ranges returned with each match.

use marksift::{split_highlighted, MatchPosition};

use super::common::{bookmarks, highlighted, index_of, ranges, BOOKMARKS};

fn positions_for(doc: usize, query: &str) -> Vec<MatchPosition> {
    bookmarks()
        .search(query, 100)
        .into_iter()
        .find(|m| m.doc == doc)
        .unwrap_or_else(|| panic!("doc {} not found for {:?}", doc, query))
        .title_positions
}

#[test]
fn prefix_highlight_covers_only_the_typed_part() {
    assert_eq!(positions_for(0, "prog"), ranges(&[(9, 13)]));
    assert_eq!(highlighted(BOOKMARKS[0], &positions_for(0, "prog")), vec!["Prog"]);
}

#[test]
fn positions_are_sorted_by_start() {
    assert_eq!(positions_for(6, "week this"), ranges(&[(0, 4), (5, 9)]));
    assert_eq!(positions_for(0, "lang the rust"), ranges(&[(0, 3), (4, 8), (21, 25)]));
}

#[test]
fn overlapping_ranges_are_coalesced() {
    assert_eq!(positions_for(2, "rust rustac"), ranges(&[(0, 6)]));
    assert_eq!(positions_for(2, "rustac rust"), ranges(&[(0, 6)]));
}

#[test]
fn phrase_highlight_spans_the_separators() {
    assert_eq!(positions_for(3, "\"tutorial async\""), ranges(&[(6, 21)]));
    assert_eq!(
        highlighted(BOOKMARKS[3], &positions_for(3, "\"tutorial async\"")),
        vec!["Tutorial: Async"]
    );
}

#[test]
fn only_first_occurrence_of_a_term_is_highlighted() {
    let index = index_of(&["rust and more rust"]);
    let found = index.search("rust", 10);
    assert_eq!(found[0].title_positions, ranges(&[(0, 4)]));
}

#[test]
fn highlight_keeps_original_case() {
    let positions = positions_for(0, "RUST PROG");
    assert_eq!(highlighted(BOOKMARKS[0], &positions), vec!["Rust", "Prog"]);
}

#[test]
fn split_highlighted_reassembles_the_title() {
    let positions = positions_for(0, "rust prog");
    let pieces = split_highlighted(BOOKMARKS[0], &positions);
    assert_eq!(
        pieces,
        vec![
            ("The ", false),
            ("Rust", true),
            (" ", false),
            ("Prog", true),
            ("ramming Language", false),
        ]
    );
    let joined: String = pieces.iter().map(|(piece, _)| *piece).collect();
    assert_eq!(joined, BOOKMARKS[0]);
}

#[test]
fn width_changing_fold_drops_positions_but_keeps_the_match() {
    let index = index_of(&["İzmir Guide", "Ankara Guide"]);
    let found = index.search("guide", 10);
    assert_eq!(found.len(), 2);
    assert!(found[0].title_positions.is_empty());
    assert_eq!(found[1].title_positions, ranges(&[(7, 12)]));
}
