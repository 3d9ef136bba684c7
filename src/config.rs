// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index configuration.
//!
//! Everything has a default that reproduces the plain behavior: Unicode word
//! breaking, length-gated prefix matching, no limits, lowercase-only folding.
//! A JSON file can override any subset:
//!
//! ```json
//! {
//!   "tokenizer": "unicode-word",
//!   "matching": "always-prefix",
//!   "max_match_branches": 4096,
//!   "max_title_len": 2048,
//!   "nfkc": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::{MatchingAlgorithm, QueryParser};
use crate::tokenizer::{Breaker, BreakerKind};
use crate::util::normalize::TextNormalizer;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Word breaker used for titles and queries.
    pub tokenizer: BreakerKind,

    /// Prefix policy for query terms.
    pub matching: MatchingAlgorithm,

    /// Upper bound on live intersection branches during one search.
    ///
    /// `None` leaves the cross product unbounded. With a cap, branches beyond
    /// it are dropped, so some matching documents may be missed for queries
    /// made of several very short, very common prefixes.
    pub max_match_branches: Option<usize>,

    /// Titles (and queries) longer than this many bytes fail tokenization.
    pub max_title_len: Option<usize>,

    /// NFKC-fold before lowercasing (needs the `unicode-normalization` feature).
    pub nfkc: bool,
}

impl IndexConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: IndexConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_match_branches == Some(0) {
            return Err(Error::InvalidConfig(
                "max_match_branches must be at least 1".into(),
            ));
        }
        if self.max_title_len == Some(0) {
            return Err(Error::InvalidConfig(
                "max_title_len must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Build the parser this configuration describes.
    pub fn parser(&self) -> QueryParser<Breaker> {
        QueryParser::new(Breaker::from_kind(self.tokenizer, self.max_title_len))
            .with_algorithm(self.matching)
            .with_normalizer(TextNormalizer::with_nfkc(self.nfkc))
    }
}
