//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::TitleIndex;
use crate::query::QueryParser;
use crate::tokenizer::SimpleWordBreaker;
use crate::types::{MatchPosition, MatchPositions, SearchMatch};

/// Index `titles` with the default breaker, ids are positions in the slice.
pub fn index_of(titles: &[&str]) -> TitleIndex<usize> {
    let mut index = TitleIndex::new();
    for (id, title) in titles.iter().enumerate() {
        index
            .add(id, title)
            .unwrap_or_else(|err| panic!("failed to index {:?}: {}", title, err));
    }
    index
}

/// Same as [`index_of`] with the whitespace/punctuation breaker.
pub fn simple_index_of(titles: &[&str]) -> TitleIndex<usize, SimpleWordBreaker> {
    let mut index = TitleIndex::with_parser(QueryParser::new(SimpleWordBreaker::new()));
    for (id, title) in titles.iter().enumerate() {
        index
            .add(id, title)
            .unwrap_or_else(|err| panic!("failed to index {:?}: {}", title, err));
    }
    index
}

/// Build positions from `(start, end)` pairs.
pub fn ranges(pairs: &[(usize, usize)]) -> MatchPositions {
    pairs.iter().copied().map(MatchPosition::from).collect()
}

/// Document handles of a result list, in result order.
pub fn doc_ids<D: Clone>(matches: &[SearchMatch<D>]) -> Vec<D> {
    matches.iter().map(|m| m.doc.clone()).collect()
}

/// The highlighted substrings of `title`.
pub fn highlighted<'a>(title: &'a str, positions: &[MatchPosition]) -> Vec<&'a str> {
    positions
        .iter()
        .map(|p| p.slice(title).expect("position out of bounds"))
        .collect()
}
