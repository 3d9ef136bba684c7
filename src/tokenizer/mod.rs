// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word breaking: the segmentation service consumed by parser and index.
//!
//! A [`WordBreaker`] turns a string into an ordered sequence of [`Span`]s that
//! cover the text end to end. Each span is either a word or a separator run
//! (whitespace, punctuation, symbols). Breakers are used in three places that
//! must agree with each other:
//!
//! 1. **Indexing**: `TitleIndex::add` and `remove` register the words of a title.
//! 2. **Query parsing**: words become terms, separator spans carry the quotes.
//! 3. **Highlighting**: the title is segmented again to locate each match.
//!
//! So a breaker must be deterministic: the same text always yields the same
//! spans. Segmenting can fail (the text is too large for the service), in which
//! case the calling operation is abandoned before it touches any state.
//!
//! Two implementations ship with the crate:
//!
//! | Breaker                | Word rule                               |
//! |------------------------|-----------------------------------------|
//! | [`UnicodeWordBreaker`] | UAX #29 word boundaries                 |
//! | [`SimpleWordBreaker`]  | maximal alphanumeric runs               |
//!
//! [`Breaker`] wraps either one so the choice can come from configuration.

mod simple;
mod unicode;

pub use simple::{SimpleSpans, SimpleWordBreaker};
pub use unicode::{UnicodeSpans, UnicodeWordBreaker};

use crate::error::TokenizerError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Classification of one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Word,
    Separator,
}

/// A `[start, end)` byte range of the segmented text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl Span {
    #[inline]
    pub fn word(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            kind: SpanKind::Word,
        }
    }

    #[inline]
    pub fn separator(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            kind: SpanKind::Separator,
        }
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == SpanKind::Word
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span's text. `text` must be the string that was segmented.
    #[inline]
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// First character of the span, the one that delimits it.
    #[inline]
    pub fn first_char(&self, text: &str) -> Option<char> {
        text[self.start..self.end].chars().next()
    }
}

/// Segmentation service.
///
/// `segment` is the initialization step: it either fails up front or returns a
/// single-pass iterator over the spans. Calling it again starts over.
pub trait WordBreaker {
    type Spans<'a>: Iterator<Item = Span>
    where
        Self: 'a;

    fn segment<'a>(&'a self, text: &'a str) -> Result<Self::Spans<'a>, TokenizerError>;
}

/// Names of the bundled breakers, as used in configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BreakerKind {
    #[default]
    UnicodeWord,
    Simple,
}

impl BreakerKind {
    pub const fn name(&self) -> &'static str {
        match self {
            BreakerKind::UnicodeWord => "unicode-word",
            BreakerKind::Simple => "simple",
        }
    }
}

impl TryFrom<&str> for BreakerKind {
    type Error = crate::error::Error;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "unicode-word" => Ok(BreakerKind::UnicodeWord),
            "simple" => Ok(BreakerKind::Simple),
            _ => Err(crate::error::Error::InvalidConfig(format!(
                "unrecognized tokenizer: {name}"
            ))),
        }
    }
}

/// Either bundled breaker, chosen at runtime.
#[derive(Debug, Clone)]
pub enum Breaker {
    Unicode(UnicodeWordBreaker),
    Simple(SimpleWordBreaker),
}

impl Breaker {
    /// Create the breaker named by `kind`, rejecting texts over `max_text_len` bytes.
    pub fn from_kind(kind: BreakerKind, max_text_len: Option<usize>) -> Self {
        match kind {
            BreakerKind::UnicodeWord => Breaker::Unicode(UnicodeWordBreaker::with_limit(max_text_len)),
            BreakerKind::Simple => Breaker::Simple(SimpleWordBreaker::with_limit(max_text_len)),
        }
    }

    pub fn kind(&self) -> BreakerKind {
        match self {
            Breaker::Unicode(_) => BreakerKind::UnicodeWord,
            Breaker::Simple(_) => BreakerKind::Simple,
        }
    }
}

impl Default for Breaker {
    fn default() -> Self {
        Breaker::Unicode(UnicodeWordBreaker::new())
    }
}

/// Spans from whichever breaker a [`Breaker`] holds.
pub enum BreakerSpans<'a> {
    Unicode(UnicodeSpans<'a>),
    Simple(SimpleSpans<'a>),
}

impl Iterator for BreakerSpans<'_> {
    type Item = Span;

    #[inline]
    fn next(&mut self) -> Option<Span> {
        match self {
            BreakerSpans::Unicode(spans) => spans.next(),
            BreakerSpans::Simple(spans) => spans.next(),
        }
    }
}

impl WordBreaker for Breaker {
    type Spans<'a> = BreakerSpans<'a>;

    fn segment<'a>(&'a self, text: &'a str) -> Result<Self::Spans<'a>, TokenizerError> {
        match self {
            Breaker::Unicode(breaker) => breaker.segment(text).map(BreakerSpans::Unicode),
            Breaker::Simple(breaker) => breaker.segment(text).map(BreakerSpans::Simple),
        }
    }
}

/// Reject `text` if it is longer than `limit` bytes.
pub(crate) fn check_limit(text: &str, limit: Option<usize>) -> Result<(), TokenizerError> {
    match limit {
        Some(max) if text.len() > max => Err(TokenizerError::TextTooLong {
            len: text.len(),
            max,
        }),
        _ => Ok(()),
    }
}

/// Collect the word spans of `text` as slices.
pub fn words<'a, B: WordBreaker>(breaker: &'a B, text: &'a str) -> Result<Vec<&'a str>, TokenizerError> {
    Ok(breaker
        .segment(text)?
        .filter(|span| span.is_word() && !span.is_empty())
        .map(|span| span.as_str(text))
        .collect())
}
