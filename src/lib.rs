// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental prefix search over short titles.
//!
//! Built for the "filter my bookmarks as I type" box: a few thousand short
//! titles that come and go, and a query re-run on every keystroke. Each query
//! word matches any title word it prefixes, all words must match (AND), and
//! quoted phrases must appear verbatim. Results carry the byte ranges to
//! highlight in the original title.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  tokenizer   │────▶│    query     │────▶│  highlight   │
//! │ (WordBreaker,│     │ (QueryParser,│     │ (does_query_ │
//! │  Span)       │     │  QueryNode)  │     │  match)      │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                        index                            │
//! │  (TitleIndex: term → documents, prefix scan, branches)  │
//! └─────────────────────────────────────────────────────────┘
//!                             ▲
//!                             │ CollectionObserver
//!                     ┌──────────────┐
//!                     │  collection  │
//!                     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use marksift::TitleIndex;
//!
//! let mut index = TitleIndex::new();
//! index.add(1u32, "The Rust Programming Language").unwrap();
//! index.add(2u32, "Programming Rust").unwrap();
//! index.add(3u32, "Rustacean Station").unwrap();
//!
//! let hits = index.search("prog rust", 10);
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits[0].doc, 1);
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod highlight;
pub mod index;
pub mod query;
pub mod tokenizer;
mod types;
pub mod util;

pub mod testing;

// Re-exports for public API
pub use collection::{CollectionObserver, TitleCollection, TitleRecord};
pub use config::IndexConfig;
pub use error::{Error, Result, TokenizerError};
pub use highlight::{does_words_match, sort_and_coalesce, split_highlighted};
pub use index::TitleIndex;
pub use query::{
    is_query_quote, is_word_long_enough_for_prefix_search, MatchingAlgorithm, QueryNode,
    QueryParser, QueryTerm, QueryWord,
};
pub use tokenizer::{
    Breaker, BreakerKind, SimpleWordBreaker, Span, SpanKind, UnicodeWordBreaker, WordBreaker,
};
pub use types::{MatchPosition, MatchPositions, SearchMatch};
pub use util::normalize::{normalize, TextNormalizer};
