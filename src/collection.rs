// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document collection side of the index.
//!
//! The index never owns documents. Whatever does (a bookmark model, a history
//! store) tells it about changes through [`CollectionObserver`]. A title change
//! is a remove under the old title followed by an add under the new one.
//!
//! [`TitleCollection`] is a minimal owner that keeps `id → title` and forwards
//! every mutation to its index. The CLI loads one from a file:
//!
//! - `*.json`: `[{"id": 1, "title": "Rust Book"}, ...]`
//! - anything else: one title per line, ids assigned from 1, blank lines skipped

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::TitleIndex;
use crate::tokenizer::{Breaker, WordBreaker};
use crate::types::SearchMatch;

/// Mutation notifications from the owning collection.
///
/// Notifications can't fail from the collection's point of view. A title that
/// can't be tokenized is logged and left unindexed.
pub trait CollectionObserver<D> {
    fn on_document_created(&mut self, doc: &D, title: &str);
    fn on_document_removed(&mut self, doc: &D, title: &str);
    fn on_document_title_changed(&mut self, doc: &D, old_title: &str, new_title: &str);
}

impl<D: Ord + Clone, B: WordBreaker> CollectionObserver<D> for TitleIndex<D, B> {
    fn on_document_created(&mut self, doc: &D, title: &str) {
        if let Err(err) = self.add(doc.clone(), title) {
            tracing::warn!(%err, title, "document left unindexed");
        }
    }

    fn on_document_removed(&mut self, doc: &D, title: &str) {
        if let Err(err) = self.remove(doc, title) {
            tracing::warn!(%err, title, "document could not be unindexed");
        }
    }

    fn on_document_title_changed(&mut self, doc: &D, old_title: &str, new_title: &str) {
        self.on_document_removed(doc, old_title);
        self.on_document_created(doc, new_title);
    }
}

/// One entry of a title file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub id: u64,
    pub title: String,
}

pub fn parse_json_records(json: &str) -> Result<Vec<TitleRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// One record per non-blank line, ids counting from 1.
pub fn parse_line_records(text: &str) -> Vec<TitleRecord> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .zip(1u64..)
        .map(|(title, id)| TitleRecord {
            id,
            title: title.to_string(),
        })
        .collect()
}

/// Read records from `path`, as JSON when the extension is `json`.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<TitleRecord>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_json_records(&raw)
    } else {
        Ok(parse_line_records(&raw))
    }
}

/// Owns titles and keeps a [`TitleIndex`] in sync with them.
#[derive(Debug, Clone)]
pub struct TitleCollection<D, B = Breaker> {
    titles: BTreeMap<D, String>,
    index: TitleIndex<D, B>,
}

impl<D: Ord + Clone> TitleCollection<D, Breaker> {
    pub fn new() -> Self {
        Self::with_index(TitleIndex::new())
    }
}

impl<D: Ord + Clone> Default for TitleCollection<D, Breaker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Ord + Clone, B: WordBreaker> TitleCollection<D, B> {
    /// Start from an empty index (e.g. one built from an `IndexConfig`).
    pub fn with_index(mut index: TitleIndex<D, B>) -> Self {
        index.clear();
        Self {
            titles: BTreeMap::new(),
            index,
        }
    }

    /// Add `doc` or change its title. Returns the previous title.
    pub fn insert(&mut self, doc: D, title: impl Into<String>) -> Option<String> {
        let title = title.into();
        match self.titles.insert(doc.clone(), title.clone()) {
            Some(previous) => {
                self.index.on_document_title_changed(&doc, &previous, &title);
                Some(previous)
            }
            None => {
                self.index.on_document_created(&doc, &title);
                None
            }
        }
    }

    /// Change the title of an existing `doc`. Unknown documents are ignored.
    pub fn rename(&mut self, doc: &D, new_title: impl Into<String>) -> Option<String> {
        let slot = self.titles.get_mut(doc)?;
        let new_title = new_title.into();
        let previous = std::mem::replace(slot, new_title.clone());
        self.index.on_document_title_changed(doc, &previous, &new_title);
        Some(previous)
    }

    /// Remove `doc`, returning its title.
    pub fn remove(&mut self, doc: &D) -> Option<String> {
        let title = self.titles.remove(doc)?;
        self.index.on_document_removed(doc, &title);
        Some(title)
    }

    pub fn get(&self, doc: &D) -> Option<&str> {
        self.titles.get(doc).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&D, &str)> + '_ {
        self.titles.iter().map(|(doc, title)| (doc, title.as_str()))
    }

    pub fn index(&self) -> &TitleIndex<D, B> {
        &self.index
    }

    pub fn find_matches(&self, query: &str, max_count: usize) -> Vec<SearchMatch<D>> {
        self.index.find_matches(query, max_count)
    }
}

impl<B: WordBreaker> TitleCollection<u64, B> {
    /// Insert every record. Returns how many ended up indexed.
    pub fn extend_records(&mut self, records: impl IntoIterator<Item = TitleRecord>) -> usize {
        let mut indexed = 0;
        for record in records {
            let id = record.id;
            self.insert(id, record.title);
            if self.index.contains(&id) {
                indexed += 1;
            }
        }
        indexed
    }
}
