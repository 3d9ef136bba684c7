// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: from what the user typed to an AND of terms and phrases.
//!
//! The parser lowercases the query, segments it with a [`WordBreaker`], and
//! builds [`QueryNode`]s. Quotes (ASCII or typographic) toggle phrase mode;
//! every other piece of punctuation is dropped. Nothing about the input can
//! make parsing fail except the breaker itself.
//!
//! [`WordBreaker`]: crate::tokenizer::WordBreaker

mod node;
mod parser;

pub use node::{is_word_long_enough_for_prefix_search, MatchingAlgorithm, QueryNode, QueryTerm};
pub use parser::{is_query_quote, QueryParser};

/// A normalized word and its byte offset in the normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord {
    pub word: String,
    pub position: usize,
}

impl QueryWord {
    pub fn new(word: impl Into<String>, position: usize) -> Self {
        Self {
            word: word.into(),
            position,
        }
    }
}
