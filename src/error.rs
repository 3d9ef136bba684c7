// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for tokenization, indexing and configuration.
//!
//! Only the tokenizer can fail during normal indexing and search. Malformed
//! queries are never errors, they resolve to a best-effort node tree. The other
//! variants cover the loading paths used by the CLI and collection helpers.

use std::io;
use thiserror::Error;

/// Failure to segment a piece of text into word and separator spans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// The text exceeds the breaker's configured length limit (in bytes).
    #[error("text of {len} bytes exceeds tokenizer limit of {max} bytes")]
    TextTooLong { len: usize, max: usize },
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
