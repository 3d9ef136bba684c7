// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whitespace/punctuation splitter.
//!
//! No Unicode word-boundary tables: a word is the longest run of alphanumeric
//! characters. Whitespace runs collapse into one separator span and every other
//! character is a separator of its own, so a quote next to a space is still
//! seen as the first character of its span.

use std::str::CharIndices;

use super::{check_limit, Span, WordBreaker};
use crate::error::TokenizerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Other,
}

impl CharClass {
    #[inline]
    fn of(c: char) -> Self {
        if c.is_alphanumeric() {
            CharClass::Word
        } else if c.is_whitespace() {
            CharClass::Space
        } else {
            CharClass::Other
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimpleWordBreaker {
    max_text_len: Option<usize>,
}

impl SimpleWordBreaker {
    pub fn new() -> Self {
        Self { max_text_len: None }
    }

    pub fn with_limit(max_text_len: Option<usize>) -> Self {
        Self { max_text_len }
    }
}

pub struct SimpleSpans<'a> {
    text: &'a str,
    chars: std::iter::Peekable<CharIndices<'a>>,
}

impl Iterator for SimpleSpans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let (start, first) = self.chars.next()?;
        let class = CharClass::of(first);
        let mut end = start + first.len_utf8();

        if class != CharClass::Other {
            while let Some(&(pos, c)) = self.chars.peek() {
                if CharClass::of(c) != class {
                    break;
                }
                end = pos + c.len_utf8();
                self.chars.next();
            }
        }

        debug_assert!(end <= self.text.len());
        Some(match class {
            CharClass::Word => Span::word(start, end),
            CharClass::Space | CharClass::Other => Span::separator(start, end),
        })
    }
}

impl WordBreaker for SimpleWordBreaker {
    type Spans<'a> = SimpleSpans<'a>;

    fn segment<'a>(&'a self, text: &'a str) -> Result<Self::Spans<'a>, TokenizerError> {
        check_limit(text, self.max_text_len)?;
        Ok(SimpleSpans {
            text,
            chars: text.char_indices().peekable(),
        })
    }
}
