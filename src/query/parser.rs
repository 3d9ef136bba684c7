// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning query strings (and titles) into nodes and words.

use super::node::append_children;
use super::{MatchingAlgorithm, QueryNode, QueryTerm, QueryWord};
use crate::error::Result;
use crate::tokenizer::{Breaker, WordBreaker};
use crate::util::normalize::TextNormalizer;

/// Whether `c` opens or closes a quoted phrase.
pub fn is_query_quote(c: char) -> bool {
    matches!(
        c,
        '"'          // quotation mark
        | '\u{00AB}' // left-pointing double angle quotation mark
        | '\u{00BB}' // right-pointing double angle quotation mark
        | '\u{201C}' // left double quotation mark
        | '\u{201D}' // right double quotation mark
        | '\u{201E}' // double low-9 quotation mark
    )
}

/// Query parser bound to one word breaker and folding policy.
///
/// The same parser must be used for titles and queries, otherwise the words
/// extracted from each side are not comparable.
#[derive(Debug, Clone, Default)]
pub struct QueryParser<B = Breaker> {
    breaker: B,
    algorithm: MatchingAlgorithm,
    normalizer: TextNormalizer,
}

impl<B: WordBreaker> QueryParser<B> {
    pub fn new(breaker: B) -> Self {
        Self {
            breaker,
            algorithm: MatchingAlgorithm::Default,
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: MatchingAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn breaker(&self) -> &B {
        &self.breaker
    }

    pub fn algorithm(&self) -> MatchingAlgorithm {
        self.algorithm
    }

    pub fn normalizer(&self) -> TextNormalizer {
        self.normalizer
    }

    /// Parse `query` and serialize it for a SQLite full-text `MATCH`.
    ///
    /// Prefix terms get a trailing `*`, phrases are quoted. Returns the
    /// serialized query and the number of words it contains.
    pub fn parse_query(&self, query: &str) -> Result<(String, usize)> {
        let root = self.parse_root(query)?;
        let mut sqlite_query = String::new();
        let word_count = append_children(&root, &mut sqlite_query);
        Ok((sqlite_query, word_count))
    }

    /// Parse `query` into its top-level AND list.
    pub fn parse_query_nodes(&self, query: &str) -> Result<Vec<QueryNode>> {
        self.parse_root(query)
    }

    /// All words of `query`, phrases flattened.
    pub fn extract_query_words(&self, query: &str) -> Result<Vec<String>> {
        let mut words = Vec::new();
        for node in self.parse_root(query)? {
            node.append_words(&mut words);
        }
        Ok(words)
    }

    /// Normalize `text` and list its words with their offsets.
    ///
    /// Offsets are into the normalized text.
    pub fn tokenize_for_matching(&self, text: &str) -> Result<Vec<QueryWord>> {
        let folded = self.normalizer.fold(text);
        self.tokenize_folded(&folded)
    }

    /// Words of text that has already been folded.
    pub(crate) fn tokenize_folded(&self, folded: &str) -> Result<Vec<QueryWord>> {
        Ok(self
            .breaker
            .segment(folded)?
            .filter(|span| span.is_word() && !span.is_empty())
            .map(|span| QueryWord::new(span.as_str(folded), span.start))
            .collect())
    }

    fn parse_root(&self, query: &str) -> Result<Vec<QueryNode>> {
        let query = self.normalizer.fold(query);
        let mut root: Vec<QueryNode> = Vec::new();
        // Quotes don't nest, so while a phrase is open nothing else is added
        // to the root and the phrase can be attached when it closes.
        let mut phrase: Option<Vec<QueryTerm>> = None;

        for span in self.breaker.segment(&query)? {
            if span.is_word() {
                if span.is_empty() {
                    continue;
                }
                let text = span.as_str(&query);
                match phrase.as_mut() {
                    Some(terms) => terms.push(QueryTerm::literal(text, self.algorithm)),
                    None => root.push(QueryNode::Term(QueryTerm::new(text, self.algorithm))),
                }
            } else if span.first_char(&query).is_some_and(is_query_quote) {
                match phrase.take() {
                    Some(terms) => root.push(QueryNode::Phrase(terms)),
                    None => phrase = Some(Vec::new()),
                }
            }
        }
        // unmatched quote: the phrase runs to the end of the query
        if let Some(terms) = phrase {
            root.push(QueryNode::Phrase(terms));
        }

        let mut root = QueryNode::List(root);
        root.remove_empty_subnodes();
        match root {
            QueryNode::List(children) => Ok(children),
            other => Ok(vec![other]),
        }
    }
}
