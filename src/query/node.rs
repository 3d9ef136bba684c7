// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query expression tree.
//!
//! A parsed query is an implicit AND of top-level nodes. Each node is either a
//! single term (prefix-matched when long enough) or a quoted phrase whose terms
//! must appear contiguously and exactly. `List` only ever appears as the root
//! while parsing.
//!
//! # Prefix eligibility
//!
//! A term acts as a prefix only if it has at least 3 characters, or 2 when it
//! starts with a precomposed Hangul syllable (U+AC00..=U+D7A3). Shorter terms
//! match whole words only. `MatchingAlgorithm::AlwaysPrefixSearch` lifts the
//! length rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::QueryWord;
use crate::types::MatchPosition;

const MIN_PREFIX_CHARS: usize = 3;
const MIN_HANGUL_PREFIX_CHARS: usize = 2;

/// How non-literal terms decide between prefix and exact matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchingAlgorithm {
    /// Prefix match once the term is long enough, exact otherwise.
    #[default]
    #[serde(rename = "default")]
    Default,
    /// Every non-literal term is a prefix, whatever its length.
    #[serde(rename = "always-prefix")]
    AlwaysPrefixSearch,
}

#[inline]
fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Whether `word` is long enough to be used as a prefix.
pub fn is_word_long_enough_for_prefix_search(word: &str, algorithm: MatchingAlgorithm) -> bool {
    if algorithm == MatchingAlgorithm::AlwaysPrefixSearch {
        return true;
    }
    let Some(first) = word.chars().next() else {
        return false;
    };
    let minimum = if is_hangul_syllable(first) {
        MIN_HANGUL_PREFIX_CHARS
    } else {
        MIN_PREFIX_CHARS
    };
    word.chars().count() >= minimum
}

/// A single normalized query word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    text: String,
    literal: bool,
    algorithm: MatchingAlgorithm,
}

impl QueryTerm {
    pub fn new(text: impl Into<String>, algorithm: MatchingAlgorithm) -> Self {
        Self {
            text: text.into(),
            literal: false,
            algorithm,
        }
    }

    /// A term from inside a quoted phrase: exact matches only.
    pub fn literal(text: impl Into<String>, algorithm: MatchingAlgorithm) -> Self {
        Self {
            text: text.into(),
            literal: true,
            algorithm,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_literal(&self) -> bool {
        self.literal
    }

    /// Whether this term is matched as a prefix rather than a whole word.
    pub fn is_prefix(&self) -> bool {
        !self.literal && is_word_long_enough_for_prefix_search(&self.text, self.algorithm)
    }

    /// Match against one already-normalized word.
    pub fn matches(&self, word: &str, exact: bool) -> bool {
        if exact || !self.is_prefix() {
            return word == self.text;
        }
        word.starts_with(self.text.as_str())
    }

    /// First word matching this term, if any.
    fn first_match<'w>(&self, words: &'w [QueryWord]) -> Option<&'w QueryWord> {
        words.iter().find(|w| self.matches(&w.word, false))
    }

    fn append_to_sqlite_query(&self, query: &mut String) -> usize {
        query.push_str(&self.text);
        if self.is_prefix() {
            query.push('*');
        }
        1
    }
}

/// A node of the parsed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    Term(QueryTerm),
    List(Vec<QueryNode>),
    Phrase(Vec<QueryTerm>),
}

impl QueryNode {
    pub fn is_word(&self) -> bool {
        matches!(self, QueryNode::Term(_))
    }

    /// True for a list or phrase without children.
    pub fn is_empty(&self) -> bool {
        match self {
            QueryNode::Term(_) => false,
            QueryNode::List(children) => children.is_empty(),
            QueryNode::Phrase(terms) => terms.is_empty(),
        }
    }

    /// Number of word terms in this subtree.
    pub fn word_count(&self) -> usize {
        match self {
            QueryNode::Term(_) => 1,
            QueryNode::List(children) => children.iter().map(QueryNode::word_count).sum(),
            QueryNode::Phrase(terms) => terms.len(),
        }
    }

    /// Recursively drop lists and phrases left without children.
    pub fn remove_empty_subnodes(&mut self) {
        if let QueryNode::List(children) = self {
            for child in children.iter_mut() {
                child.remove_empty_subnodes();
            }
            children.retain(|child| !child.is_empty());
        }
    }

    /// Find this node in `words`, recording the first match's range.
    ///
    /// A list is never matched itself; its children are matched by the caller.
    pub fn has_match_in(&self, words: &[QueryWord], positions: &mut Vec<MatchPosition>) -> bool {
        match self {
            QueryNode::Term(term) => match term.first_match(words) {
                Some(word) => {
                    positions.push(MatchPosition::new(
                        word.position,
                        word.position + term.text.len(),
                    ));
                    true
                }
                None => false,
            },
            QueryNode::Phrase(terms) => match phrase_match(terms, words) {
                Some((first, last)) => {
                    positions.push(MatchPosition::new(
                        first.position,
                        last.position + last.word.len(),
                    ));
                    true
                }
                None => false,
            },
            QueryNode::List(_) => false,
        }
    }

    /// Like [`has_match_in`](Self::has_match_in) without recording positions.
    pub fn matches_words(&self, words: &[QueryWord]) -> bool {
        match self {
            QueryNode::Term(term) => term.first_match(words).is_some(),
            QueryNode::Phrase(terms) => phrase_match(terms, words).is_some(),
            QueryNode::List(_) => false,
        }
    }

    /// Append every term's text, ignoring phrase grouping.
    pub fn append_words(&self, out: &mut Vec<String>) {
        match self {
            QueryNode::Term(term) => out.push(term.text.clone()),
            QueryNode::List(children) => {
                for child in children {
                    child.append_words(out);
                }
            }
            QueryNode::Phrase(terms) => out.extend(terms.iter().map(|t| t.text.clone())),
        }
    }

    /// Serialize for a SQLite FTS `MATCH` clause. Returns the number of words.
    pub fn append_to_sqlite_query(&self, query: &mut String) -> usize {
        match self {
            QueryNode::Term(term) => term.append_to_sqlite_query(query),
            QueryNode::List(children) => append_children(children, query),
            QueryNode::Phrase(terms) => {
                query.push('"');
                let mut count = 0;
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        query.push(' ');
                    }
                    count += term.append_to_sqlite_query(query);
                }
                query.push('"');
                count
            }
        }
    }
}

/// Space-separated serialization of sibling nodes.
pub(crate) fn append_children(children: &[QueryNode], query: &mut String) -> usize {
    let mut count = 0;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            query.push(' ');
        }
        count += child.append_to_sqlite_query(query);
    }
    count
}

/// First run of consecutive words matching every phrase term exactly.
fn phrase_match<'w>(
    terms: &[QueryTerm],
    words: &'w [QueryWord],
) -> Option<(&'w QueryWord, &'w QueryWord)> {
    if terms.is_empty() || words.len() < terms.len() {
        return None;
    }
    words.windows(terms.len()).find_map(|run| {
        let all = run
            .iter()
            .zip(terms)
            .all(|(word, term)| term.matches(&word.word, true));
        if all {
            Some((&run[0], &run[run.len() - 1]))
        } else {
            None
        }
    })
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryNode::Term(term) if term.is_prefix() => write!(f, "{}*", term.text),
            QueryNode::Term(term) => f.write_str(&term.text),
            QueryNode::List(children) => {
                f.write_str("AND(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
            QueryNode::Phrase(terms) => {
                f.write_str("\"")?;
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    f.write_str(&term.text)?;
                }
                f.write_str("\"")
            }
        }
    }
}
