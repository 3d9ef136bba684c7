// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text folding for case-insensitive matching.
//!
//! Titles and queries go through the same folding before tokenization, so a
//! term in the index and a word in a query compare byte-wise.
//!
//! # Algorithm (with unicode-normalization feature, `nfkc` enabled)
//!
//! 1. NFKC normalize (compatibility forms fold: "ﬁ" → "fi", full-width → ASCII)
//! 2. Lowercase
//!
//! # Algorithm (default)
//!
//! 1. Lowercase only
//!
//! Folding can change the UTF-8 length of a character ("İ" lowercases to
//! "i\u{307}", the Kelvin sign "K" to "k"). Offsets computed against folded text
//! are only meaningful for the original when every character kept its encoded
//! length, which [`TextNormalizer::fold_with_offsets`] reports.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Folded text plus whether its byte offsets line up with the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folded {
    pub text: String,
    pub offsets_preserved: bool,
}

/// Case (and optionally compatibility) folding shared by parser and index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextNormalizer {
    nfkc: bool,
}

impl TextNormalizer {
    /// Lowercase-only folding.
    pub fn new() -> Self {
        Self { nfkc: false }
    }

    /// Enable NFKC before lowercasing. Without the `unicode-normalization`
    /// feature this is ignored and folding stays lowercase-only.
    pub fn with_nfkc(nfkc: bool) -> Self {
        if nfkc && !cfg!(feature = "unicode-normalization") {
            tracing::debug!("nfkc requested but unicode-normalization is disabled");
        }
        Self { nfkc }
    }

    pub fn nfkc(&self) -> bool {
        self.nfkc && cfg!(feature = "unicode-normalization")
    }

    /// Fold `value` for matching.
    pub fn fold(&self, value: &str) -> String {
        self.compatibility(value).to_lowercase()
    }

    /// Fold `value` and check whether byte offsets survive the folding.
    pub fn fold_with_offsets(&self, value: &str) -> Folded {
        let compat = self.compatibility(value);
        let mut offsets_preserved = compat == value;
        if offsets_preserved {
            offsets_preserved = value.chars().all(lowercase_keeps_width);
        }
        Folded {
            text: compat.to_lowercase(),
            offsets_preserved,
        }
    }

    #[cfg(feature = "unicode-normalization")]
    fn compatibility(&self, value: &str) -> String {
        if self.nfkc {
            value.nfkc().collect()
        } else {
            value.to_string()
        }
    }

    #[cfg(not(feature = "unicode-normalization"))]
    fn compatibility(&self, value: &str) -> String {
        value.to_string()
    }
}

/// Lowercase folding with the default normalizer.
pub fn normalize(value: &str) -> String {
    TextNormalizer::new().fold(value)
}

/// Whether lowercasing `c` yields the same number of UTF-8 bytes.
///
/// `str::to_lowercase` maps characters independently except for final sigma,
/// and both sigma forms are two bytes wide like "Σ", so a per-character check
/// is exact.
#[inline]
fn lowercase_keeps_width(c: char) -> bool {
    if c.is_ascii() {
        return true;
    }
    c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8()
}
