// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix expansion and AND intersection across query words.
//!
//! Each query word expands to every index term it prefixes (its
//! *alternatives*). A branch is one choice of alternative per word so far,
//! together with the documents containing all of them. Adding a word crosses
//! every live branch with every alternative and keeps the non-empty
//! intersections. The first word's branches borrow their document set straight
//! from the index.
//!
//! The cross product is unbounded unless a branch limit is configured: a query
//! like `"abc abd abe"` over a vocabulary with many such prefixes multiplies
//! branches until intersections prune them.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use crate::query::{is_word_long_enough_for_prefix_search, MatchingAlgorithm};

/// The index terms `word` stands for.
///
/// Words too short for prefix search only match an identical term.
pub(super) fn alternatives<'a, D>(
    terms: &'a BTreeMap<String, BTreeSet<D>>,
    word: &str,
    algorithm: MatchingAlgorithm,
) -> Vec<(&'a str, &'a BTreeSet<D>)> {
    if !is_word_long_enough_for_prefix_search(word, algorithm) {
        return terms
            .get_key_value(word)
            .map(|(term, docs)| (term.as_str(), docs))
            .into_iter()
            .collect();
    }
    terms
        .range::<str, _>((Bound::Included(word), Bound::Unbounded))
        .take_while(|(term, _)| term.starts_with(word))
        .map(|(term, docs)| (term.as_str(), docs))
        .collect()
}

struct Branch<'a, D: Clone> {
    terms: Vec<&'a str>,
    docs: Cow<'a, BTreeSet<D>>,
}

/// Live branches of one search.
pub(super) struct BranchSearch<'a, D: Clone> {
    branches: Vec<Branch<'a, D>>,
    limit: Option<usize>,
}

impl<'a, D: Ord + Clone> BranchSearch<'a, D> {
    /// One branch per alternative of the first word.
    pub(super) fn start(alternatives: Vec<(&'a str, &'a BTreeSet<D>)>, limit: Option<usize>) -> Self {
        let mut branches: Vec<Branch<'a, D>> = alternatives
            .into_iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(term, docs)| Branch {
                terms: vec![term],
                docs: Cow::Borrowed(docs),
            })
            .collect();
        if let Some(cap) = limit {
            if branches.len() > cap {
                tracing::warn!(
                    alternatives = branches.len(),
                    cap,
                    "prefix expansion exceeds branch limit, truncating"
                );
                branches.truncate(cap);
            }
        }
        Self { branches, limit }
    }

    /// Intersect every branch with every alternative of the next word.
    pub(super) fn refine(&mut self, alternatives: &[(&'a str, &'a BTreeSet<D>)]) {
        let mut next: Vec<Branch<'a, D>> = Vec::new();
        'outer: for branch in &self.branches {
            for &(term, docs) in alternatives {
                let shared: BTreeSet<D> = branch.docs.intersection(docs).cloned().collect();
                if shared.is_empty() {
                    continue;
                }
                if self.limit.is_some_and(|cap| next.len() >= cap) {
                    tracing::warn!(
                        cap = ?self.limit,
                        "intersection branches exceed branch limit, truncating"
                    );
                    break 'outer;
                }
                let mut terms = branch.terms.clone();
                terms.push(term);
                next.push(Branch {
                    terms,
                    docs: Cow::Owned(shared),
                });
            }
        }
        self.branches = next;
    }

    pub(super) fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub(super) fn len(&self) -> usize {
        self.branches.len()
    }

    /// Union of all surviving branches.
    pub(super) fn into_candidates(self) -> BTreeSet<D> {
        let mut candidates = BTreeSet::new();
        for branch in self.branches {
            tracing::trace!(terms = ?branch.terms, docs = branch.docs.len(), "surviving branch");
            match branch.docs {
                Cow::Borrowed(docs) => candidates.extend(docs.iter().cloned()),
                Cow::Owned(docs) => candidates.extend(docs),
            }
        }
        candidates
    }
}
