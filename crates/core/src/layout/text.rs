//! Text preparation: statement cleanup, wrapping and truncation.

use regex::Regex;
use std::sync::LazyLock;

use super::measure::{Font, TextMeasurer};

static OR_PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[or(\.{0,3}|…)\]").expect("Invalid placeholder regex"));
static ELIDED_BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]*(\.\.\.|…)[^\]]*\]").expect("Invalid bracket regex")
});
static BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").expect("Invalid bracket regex"));
static TRAILING_ELLIPSIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/\s]*(\.{2,3}|…)$").expect("Invalid ellipsis regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));
static SPACE_BEFORE_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,;:!])").expect("Invalid punctuation regex"));

const DISPOSAL_PREFIX: &str = "Dispose of contents/container";
const DISPOSAL_FALLBACK: &str = "Dispose of contents/container in accordance with local regulations.";

/// Make statement text fit for print.
///
/// - an `[or…]` placeholder becomes `or`
/// - bracketed instructions containing an ellipsis (`[and…]`) are removed;
///   other brackets are unwrapped (`[shower]` → `shower`)
/// - ellipses are removed, a trailing one becomes a full stop
/// - whitespace is collapsed and the text ends in `.` or `!`
/// - an unfinished disposal instruction gets the generic ending
pub fn clean_statement_text(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    if text.starts_with(DISPOSAL_PREFIX) {
        let bare = text.trim_end_matches('.');
        if bare.ends_with(" to") || text.chars().count() < 60 {
            return DISPOSAL_FALLBACK.to_string();
        }
    }

    let text = OR_PLACEHOLDER_RE.replace_all(text, "or");
    let text = ELIDED_BRACKET_RE.replace_all(&text, "");
    let text = BRACKET_RE.replace_all(&text, "$1");
    let text = TRAILING_ELLIPSIS_RE.replace(text.trim_end(), ".");
    let text = text.replace('…', "").replace("...", "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = SPACE_BEFORE_PUNCT_RE.replace_all(&text, "$1");
    let text = text.trim().trim_end_matches('/').trim_end();

    let mut out = text.to_string();
    if !out.is_empty() && !out.ends_with(['.', '!']) {
        out.push('.');
    }
    out
}

/// Greedy word wrap to `max_width` points.
///
/// Words wider than a whole line are split between characters, so every
/// returned line fits.
pub fn wrap_text(
    measurer: &dyn TextMeasurer,
    text: &str,
    font: Font,
    size: f64,
    max_width: f64,
) -> Vec<String> {
    let fits = |s: &str| measurer.text_width(s, font, size) <= max_width;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if fits(&candidate) {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if fits(word) {
            current = word.to_string();
            continue;
        }
        for c in word.chars() {
            current.push(c);
            if !fits(&current) && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Shorten `text` with a trailing `...` until it fits `max_width`.
pub fn truncate_to_width(
    measurer: &dyn TextMeasurer,
    text: &str,
    font: Font,
    size: f64,
    max_width: f64,
) -> String {
    if measurer.text_width(text, font, size) <= max_width {
        return text.to_string();
    }
    let mut chars: Vec<char> = text.chars().collect();
    loop {
        chars.pop();
        while chars.last().is_some_and(|c| c.is_whitespace()) {
            chars.pop();
        }
        let candidate: String = chars.iter().collect::<String>() + "...";
        if chars.is_empty() || measurer.text_width(&candidate, font, size) <= max_width {
            return if chars.is_empty() { String::new() } else { candidate };
        }
    }
}

/// Shorten supplier details for the footer: drop `®` and keep the first
/// eight words of long entries.
pub fn compact_supplier(text: &str) -> String {
    let text = text.replace('®', "");
    let words: Vec<&str> = text.split_whitespace().collect();
    if text.chars().count() > 80 && words.len() > 8 {
        format!("{}...", words[..8].join(" "))
    } else {
        words.join(" ")
    }
}
