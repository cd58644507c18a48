// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for lev CLI.
//!
//! Suggestions print as `rank. word (score)`. On a terminal the score is tinted
//! by closeness using OneDark or One Light. Piped output stays plain so scripts
//! can parse it. Respects `NO_COLOR`.
//!
//! # Theme detection order
//!
//! 1. `LEV_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use lev::Suggestion;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Parse a `LEV_THEME` value.
fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Guess from `COLORFGBG` ("fg;bg", where bg >= 7 is usually light).
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    // 8 is dark gray on most palettes
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("LEV_THEME").ok().as_deref().and_then(parse_theme) {
        return theme;
    }
    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
    {
        return theme;
    }
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
fn paint(color_fn: fn() -> String, modifiers: &[&str], text: &str, colored: bool) -> String {
    if colored {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Score tint: exact and near matches stand out, the rest fades.
fn score_color(score: usize) -> fn() -> String {
    match score {
        0 => GREEN,
        1 => CYAN,
        2 => YELLOW,
        _ => GRAY,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SUGGESTION OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// `Suggestions for "word"`
pub fn header(query: &str, colored: bool) -> String {
    format!(
        "Suggestions for {}",
        paint(CYAN, &[BOLD], &format!("{:?}", query), colored)
    )
}

/// `rank. word (score)`
pub fn suggestion_line(rank: usize, suggestion: &Suggestion, colored: bool) -> String {
    let score = format!("({})", suggestion.score);
    format!(
        "{}. {} {}",
        rank,
        suggestion.word,
        paint(score_color(suggestion.score), &[], &score, colored)
    )
}

/// Header plus one line per suggestion, numbered from 0.
pub fn render(query: &str, suggestions: &[Suggestion], colored: bool) -> Vec<String> {
    std::iter::once(header(query, colored))
        .chain(
            suggestions
                .iter()
                .enumerate()
                .map(|(rank, s)| suggestion_line(rank, s, colored)),
        )
        .collect()
}
