// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the marksift CLI.
//!
//! OneDark on dark terminals, One Light on light ones. Plain text when
//! `NO_COLOR` is set or stdout is not a TTY, with matches in `[brackets]`.

use std::sync::OnceLock;

use marksift::{split_highlighted, MatchPosition};

/// Inner width of boxed sections, borders excluded.
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

type Rgb = (u8, u8, u8);

/// The four roles the output uses.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Counts and values
    pub value: Rgb,
    /// Matched text
    pub accent: Rgb,
    /// Section labels
    pub label: Rgb,
    /// Borders, ids, secondary text
    pub muted: Rgb,
}

const ONE_DARK: Palette = Palette {
    value: (152, 195, 121),  // #98c379
    accent: (229, 192, 123), // #e5c07b
    label: (86, 182, 194),   // #56b6c2
    muted: (92, 99, 112),    // #5c6370
};

const ONE_LIGHT: Palette = Palette {
    value: (80, 161, 79),  // #50a14f
    accent: (193, 132, 1), // #c18401
    label: (1, 132, 188),  // #0184bc
    muted: (160, 161, 167), // #a0a1a7
};

static PALETTE: OnceLock<Palette> = OnceLock::new();

/// `MARKSIFT_THEME` wins, then a light `COLORFGBG` background, then dark.
fn detect_palette() -> Palette {
    let requested = std::env::var("MARKSIFT_THEME").ok().map(|t| t.to_lowercase());
    match requested.as_deref() {
        Some("light" | "l") => return ONE_LIGHT,
        Some("dark" | "d") => return ONE_DARK,
        _ => {}
    }

    // "fg;bg": backgrounds 7 and above (except 8, dark gray) are light
    let light_background = std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg >= 7 && bg != 8);
    if light_background {
        ONE_LIGHT
    } else {
        ONE_DARK
    }
}

pub fn palette() -> &'static Palette {
    PALETTE.get_or_init(detect_palette)
}

fn escape((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub fn value_color() -> String {
    escape(palette().value)
}

pub fn accent_color() -> String {
    escape(palette().accent)
}

pub fn label_color() -> String {
    escape(palette().label)
}

pub fn muted_color() -> String {
    escape(palette().muted)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Render `title` with matched ranges emphasized.
///
/// Without colors, matches are wrapped in brackets so they stay visible.
pub fn highlight_title(title: &str, positions: &[MatchPosition]) -> String {
    let colors = use_colors();
    let mut out = String::with_capacity(title.len() + positions.len() * 16);
    for (piece, matched) in split_highlighted(title, positions) {
        match (matched, colors) {
            (true, true) => {
                out.push_str(BOLD);
                out.push_str(UNDERLINE);
                out.push_str(&accent_color());
                out.push_str(piece);
                out.push_str(RESET);
            }
            (true, false) => {
                out.push('[');
                out.push_str(piece);
                out.push(']');
            }
            (false, _) => out.push_str(piece),
        }
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = themed(muted_color, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(label_color, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(muted_color, &[], "┌"),
        label_part,
        themed(muted_color, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(muted_color, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Print `│ label   value │`
pub fn kv_row(label: &str, value: &str) {
    row(&format!(" {:<18}{}", themed(muted_color, &[], label), themed(value_color, &[], value)));
}
