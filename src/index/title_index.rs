// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The title index: terms to documents, plus the search entry point.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use super::branches::{alternatives, BranchSearch};
use crate::config::IndexConfig;
use crate::error::Result;
use crate::query::{QueryNode, QueryParser};
use crate::tokenizer::{Breaker, WordBreaker};
use crate::types::SearchMatch;

/// Inverted index over document titles.
///
/// `D` is the caller's handle for a document. The index keeps clones of it
/// and the title it was indexed under, nothing else.
#[derive(Debug, Clone)]
pub struct TitleIndex<D, B = Breaker> {
    terms: BTreeMap<String, BTreeSet<D>>,
    titles: BTreeMap<D, String>,
    parser: QueryParser<B>,
    max_match_branches: Option<usize>,
}

impl<D: Ord + Clone> TitleIndex<D, Breaker> {
    /// Empty index with Unicode word breaking and default matching.
    pub fn new() -> Self {
        Self::with_parser(QueryParser::default())
    }

    pub fn from_config(config: &IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_parser(config.parser()).with_branch_limit(config.max_match_branches))
    }
}

impl<D: Ord + Clone> Default for TitleIndex<D, Breaker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Ord + Clone, B: WordBreaker> TitleIndex<D, B> {
    pub fn with_parser(parser: QueryParser<B>) -> Self {
        Self {
            terms: BTreeMap::new(),
            titles: BTreeMap::new(),
            parser,
            max_match_branches: None,
        }
    }

    /// Cap the number of live intersection branches per search.
    pub fn with_branch_limit(mut self, limit: Option<usize>) -> Self {
        self.max_match_branches = limit;
        self
    }

    pub fn parser(&self) -> &QueryParser<B> {
        &self.parser
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn contains(&self, doc: &D) -> bool {
        self.titles.contains_key(doc)
    }

    /// The title `doc` was indexed under.
    pub fn title(&self, doc: &D) -> Option<&str> {
        self.titles.get(doc).map(String::as_str)
    }

    /// All terms in lexicographic order with their documents.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &BTreeSet<D>)> + '_ {
        self.terms.iter().map(|(term, docs)| (term.as_str(), docs))
    }

    /// Documents registered under exactly `term` (already normalized).
    pub fn documents_for(&self, term: &str) -> Option<&BTreeSet<D>> {
        self.terms.get(term)
    }

    pub fn clear(&mut self) {
        self.terms.clear();
        self.titles.clear();
    }

    /// Index `doc` under every distinct word of `title`.
    ///
    /// If `doc` is already indexed its previous title is replaced. On error the
    /// index is unchanged and `doc` stays as it was.
    pub fn add(&mut self, doc: D, title: &str) -> Result<()> {
        let terms = self.title_terms(title)?;
        if let Some(previous) = self.titles.get(&doc) {
            let stale = self.title_terms(previous)?;
            self.unregister(&doc, &stale);
        }
        for term in terms {
            self.terms.entry(term).or_default().insert(doc.clone());
        }
        self.titles.insert(doc, title.to_string());
        Ok(())
    }

    /// Remove `doc`, which was indexed under `title`.
    ///
    /// On error the index is unchanged.
    pub fn remove(&mut self, doc: &D, title: &str) -> Result<()> {
        let mut terms = self.title_terms(title)?;
        if let Some(stored) = self.titles.get(doc) {
            if stored != title {
                terms.extend(self.title_terms(stored)?);
            }
        }
        self.unregister(doc, &terms);
        self.titles.remove(doc);
        Ok(())
    }

    /// Search for titles matching every query node, up to `max_count` hits.
    ///
    /// Candidates are visited in ascending `D` order.
    pub fn search(&self, query: &str, max_count: usize) -> Vec<SearchMatch<D>> {
        self.collect_matches(query, max_count, None::<fn(&D, &D) -> Ordering>)
    }

    /// Alias of [`search`](Self::search), the collection-facing name.
    pub fn find_matches(&self, query: &str, max_count: usize) -> Vec<SearchMatch<D>> {
        self.search(query, max_count)
    }

    /// Like [`search`](Self::search), but candidates are sorted with `compare`
    /// before verification and truncation (e.g. most recently used first).
    pub fn search_ordered_by<F>(&self, query: &str, max_count: usize, compare: F) -> Vec<SearchMatch<D>>
    where
        F: FnMut(&D, &D) -> Ordering,
    {
        self.collect_matches(query, max_count, Some(compare))
    }

    fn collect_matches<F>(&self, query: &str, max_count: usize, order: Option<F>) -> Vec<SearchMatch<D>>
    where
        F: FnMut(&D, &D) -> Ordering,
    {
        if max_count == 0 {
            return Vec::new();
        }
        let nodes = match self.parser.parse_query_nodes(query) {
            Ok(nodes) => nodes,
            Err(err) => {
                tracing::warn!(%err, "query could not be tokenized");
                return Vec::new();
            }
        };
        let mut words = Vec::new();
        for node in &nodes {
            node.append_words(&mut words);
        }
        if words.is_empty() {
            return Vec::new();
        }

        let Some(candidates) = self.candidates(&words) else {
            tracing::debug!(query, words = words.len(), "no index terms match");
            return Vec::new();
        };
        let mut candidates: Vec<D> = candidates.into_iter().collect();
        if let Some(mut compare) = order {
            candidates.sort_by(|a, b| compare(a, b));
        }

        let considered = candidates.len();
        let mut results = Vec::with_capacity(max_count.min(considered));
        for doc in candidates {
            if results.len() >= max_count {
                break;
            }
            if let Some(found) = self.verify(doc, &nodes) {
                results.push(found);
            }
        }
        tracing::debug!(
            query,
            words = words.len(),
            candidates = considered,
            results = results.len(),
            "search finished"
        );
        results
    }

    /// Documents containing a term for every query word, or `None` once any
    /// word leaves nothing.
    fn candidates(&self, words: &[String]) -> Option<BTreeSet<D>> {
        let algorithm = self.parser.algorithm();
        let (first, rest) = words.split_first()?;

        let mut search = BranchSearch::start(
            alternatives(&self.terms, first, algorithm),
            self.max_match_branches,
        );
        if search.is_empty() {
            return None;
        }
        for word in rest {
            search.refine(&alternatives(&self.terms, word, algorithm));
            if search.is_empty() {
                return None;
            }
            tracing::trace!(word = word.as_str(), branches = search.len(), "refined");
        }
        Some(search.into_candidates())
    }

    /// Re-match the candidate's title to confirm it and get highlight ranges.
    fn verify(&self, doc: D, nodes: &[QueryNode]) -> Option<SearchMatch<D>> {
        let title = self.titles.get(&doc)?;
        match self.parser.does_query_match(title, nodes) {
            Ok(Some(title_positions)) => Some(SearchMatch {
                doc,
                title_positions,
            }),
            Ok(None) => {
                tracing::trace!(title = title.as_str(), "candidate rejected on verification");
                None
            }
            Err(err) => {
                tracing::warn!(%err, "could not compute highlight, returning match without positions");
                Some(SearchMatch {
                    doc,
                    title_positions: Vec::new(),
                })
            }
        }
    }

    fn title_terms(&self, title: &str) -> Result<BTreeSet<String>> {
        Ok(self
            .parser
            .tokenize_for_matching(title)?
            .into_iter()
            .map(|word| word.word)
            .collect())
    }

    fn unregister(&mut self, doc: &D, terms: &BTreeSet<String>) {
        for term in terms {
            if let Some(docs) = self.terms.get_mut(term) {
                docs.remove(doc);
                if docs.is_empty() {
                    self.terms.remove(term);
                }
            }
        }
    }
}
