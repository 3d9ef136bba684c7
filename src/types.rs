// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result types shared by the highlighter, the index and the CLI.
//!
//! # Invariants
//!
//! - **MatchPosition**: `start <= end`, both on UTF-8 character boundaries of the
//!   original text the position was computed for.
//! - **MatchPositions**: sorted by `start`, no two ranges touch or overlap (they
//!   would have been coalesced).

use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` byte range into an original (not normalized) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchPosition {
    pub start: usize,
    pub end: usize,
}

impl MatchPosition {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "MatchPosition start {} > end {}", start, end);
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` starts inside this range or exactly at its end.
    #[inline]
    pub fn touches(&self, other: &MatchPosition) -> bool {
        other.start >= self.start && other.start <= self.end
    }

    /// The highlighted text, or `None` if the range does not fit `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

impl From<(usize, usize)> for MatchPosition {
    fn from((start, end): (usize, usize)) -> Self {
        MatchPosition::new(start, end)
    }
}

/// Sorted, coalesced highlight ranges for one text.
pub type MatchPositions = Vec<MatchPosition>;

/// One search hit: the document handle plus where its title matched.
///
/// `title_positions` is empty when the query matched but offsets could not be
/// mapped back onto the original title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch<D> {
    pub doc: D,
    pub title_positions: MatchPositions,
}
