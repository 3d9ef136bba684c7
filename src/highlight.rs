// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match verification and highlight ranges.
//!
//! The index narrows a query down to candidate documents with a coarse
//! per-word prefix scan. The final word on whether a title matches comes from
//! here: the title is segmented again and every query node has to find itself
//! among its words. As a by-product that gives the ranges to highlight.
//!
//! # Invariants
//!
//! - Returned positions are sorted by start and coalesced: a range starting
//!   inside (or right at the end of) the running range extends it.
//! - Positions are byte offsets valid for the *original* text. If folding
//!   changed the byte layout, no positions are returned at all.

use crate::error::Result;
use crate::query::{QueryNode, QueryParser, QueryWord};
use crate::tokenizer::WordBreaker;
use crate::types::{MatchPosition, MatchPositions};

/// Sort `positions` by start and merge ranges that touch or overlap.
pub fn sort_and_coalesce(positions: &mut MatchPositions) {
    positions.sort();
    let mut merged: MatchPositions = Vec::with_capacity(positions.len());
    for position in positions.drain(..) {
        match merged.last_mut() {
            Some(running) if running.touches(&position) => {
                running.end = running.end.max(position.end);
            }
            _ => merged.push(position),
        }
    }
    *positions = merged;
}

/// Whether every node matches somewhere in `words`.
pub fn does_words_match(words: &[QueryWord], nodes: &[QueryNode]) -> bool {
    !nodes.is_empty() && !words.is_empty() && nodes.iter().all(|node| node.matches_words(words))
}

impl<B: WordBreaker> QueryParser<B> {
    /// Check `text` against a parsed query and compute its highlight ranges.
    ///
    /// Returns `Ok(None)` when there is nothing to match with, or when any node
    /// fails to match. `Ok(Some(vec![]))` means the text matched but its folded
    /// form can't be mapped back onto the original.
    pub fn does_query_match(
        &self,
        text: &str,
        nodes: &[QueryNode],
    ) -> Result<Option<MatchPositions>> {
        if nodes.is_empty() {
            return Ok(None);
        }
        let folded = self.normalizer().fold_with_offsets(text);
        let words = self.tokenize_folded(&folded.text)?;
        if words.is_empty() {
            return Ok(None);
        }

        let mut positions: MatchPositions = Vec::new();
        for node in nodes {
            if !node.has_match_in(&words, &mut positions) {
                return Ok(None);
            }
        }

        if !folded.offsets_preserved {
            tracing::trace!(text, "folding moved offsets, dropping highlight");
            return Ok(Some(Vec::new()));
        }
        sort_and_coalesce(&mut positions);
        debug_assert!(positions.iter().all(|p| p.slice(text).is_some()));
        Ok(Some(positions))
    }
}

/// Split `text` into `(segment, highlighted)` pieces following `positions`.
///
/// Positions that do not fit `text` are ignored.
pub fn split_highlighted<'a>(text: &'a str, positions: &[MatchPosition]) -> Vec<(&'a str, bool)> {
    let mut pieces = Vec::new();
    let mut cursor = 0;
    for position in positions {
        if position.start < cursor || position.slice(text).is_none() {
            continue;
        }
        if position.start > cursor {
            pieces.push((&text[cursor..position.start], false));
        }
        if !position.is_empty() {
            pieces.push((&text[position.start..position.end], true));
        }
        cursor = position.end;
    }
    if cursor < text.len() {
        pieces.push((&text[cursor..], false));
    }
    pieces
}
