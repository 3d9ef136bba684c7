// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! UAX #29 word breaker backed by `unicode-segmentation`.

use unicode_segmentation::{UWordBoundIndices, UnicodeSegmentation};

use super::{check_limit, Span, WordBreaker};
use crate::error::TokenizerError;

/// Word breaker following Unicode word boundaries.
///
/// A segment counts as a word when it holds at least one alphanumeric
/// character. Everything else (whitespace runs, each punctuation mark, emoji)
/// is a separator.
#[derive(Debug, Clone, Default)]
pub struct UnicodeWordBreaker {
    max_text_len: Option<usize>,
}

impl UnicodeWordBreaker {
    pub fn new() -> Self {
        Self { max_text_len: None }
    }

    pub fn with_limit(max_text_len: Option<usize>) -> Self {
        Self { max_text_len }
    }
}

pub struct UnicodeSpans<'a> {
    inner: UWordBoundIndices<'a>,
}

impl Iterator for UnicodeSpans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let (start, segment) = self.inner.next()?;
        let end = start + segment.len();
        if segment.chars().any(char::is_alphanumeric) {
            Some(Span::word(start, end))
        } else {
            Some(Span::separator(start, end))
        }
    }
}

impl WordBreaker for UnicodeWordBreaker {
    type Spans<'a> = UnicodeSpans<'a>;

    fn segment<'a>(&'a self, text: &'a str) -> Result<Self::Spans<'a>, TokenizerError> {
        check_limit(text, self.max_text_len)?;
        Ok(UnicodeSpans {
            inner: text.split_word_bound_indices(),
        })
    }
}
