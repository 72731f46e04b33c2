//! Advisory format detection.
//!
//! Detection looks at the first few non-empty lines of a transcript and
//! names the first rule, in table order, whose grammar matches anywhere in
//! that sample. It never influences parsing, which retries the full rule
//! table on every line.

use tracing::debug;

use crate::config::DEFAULT_SAMPLE_LINES;
use crate::rules::RuleTable;
use crate::tag::{FormatTag, UNKNOWN_FORMAT};

/// Detects the convention of `text` with the built-in table and a
/// five-line sample.
///
/// # Example
///
/// ```rust
/// use chatsift::{FormatTag, detect_format};
///
/// assert_eq!(detect_format("[10:30 AM] John: Hey"), Some(FormatTag::Bracketed));
/// assert_eq!(detect_format("no chat here"), None);
/// ```
pub fn detect_format(text: &str) -> Option<FormatTag> {
    detect_format_with(text, RuleTable::builtin(), DEFAULT_SAMPLE_LINES)
}

/// Like [`detect_format`], but reports `"unknown"` instead of `None`.
///
/// ```rust
/// use chatsift::detect_format_name;
///
/// assert_eq!(detect_format_name("John (9:00 AM): hi"), "parenthesized");
/// assert_eq!(detect_format_name(""), "unknown");
/// ```
pub fn detect_format_name(text: &str) -> &'static str {
    detect_format(text).map_or(UNKNOWN_FORMAT, |tag| tag.name())
}

/// Detects the convention of `text` against `table` using the first
/// `sample_lines` non-empty lines.
pub fn detect_format_with(text: &str, table: &RuleTable, sample_lines: usize) -> Option<FormatTag> {
    let sample = sample(text, sample_lines);
    if sample.is_empty() {
        return None;
    }

    let detected = table
        .iter()
        .find(|rule| rule.is_match(&sample))
        .map(|rule| rule.tag());

    debug!(
        format = detected.map_or(UNKNOWN_FORMAT, |tag| tag.name()),
        sample_lines, "detected transcript format"
    );
    detected
}

fn sample(text: &str, lines: usize) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(lines)
        .collect::<Vec<_>>()
        .join("\n")
}
