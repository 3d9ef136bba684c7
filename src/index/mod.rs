// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index over titles.
//!
//! An ordered map from normalized term to the set of documents whose title
//! contains it. Ordering is what makes prefix search cheap: every term starting
//! with `"pro"` sits in one contiguous run after the lower bound of `"pro"`.
//!
//! # Invariants
//!
//! 1. **TERM_PRESENT**: `(term, doc)` is in the map iff `doc`'s indexed title
//!    contains a word that normalizes to `term`.
//! 2. **NON_EMPTY**: every term maps to at least one document.
//! 3. **ATOMIC_UPDATE**: a failed `add`/`remove` leaves the map as it was.

mod branches;
mod title_index;

pub use title_index::TitleIndex;
