//! Surface-text cleanup for extracted sender names and timestamps.
//!
//! Both functions are total: any input, including the empty string,
//! produces a (possibly empty) output. Neither validates meaning; a
//! timestamp stays a string and is never parsed into a date.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Quote characters removed from sender names. Apostrophes are kept so
/// names like `O'Brien` survive.
const QUOTES: &[char] = &['"', '\u{201C}', '\u{201D}', '\u{201E}', '\u{00AB}', '\u{00BB}'];

fn glued_meridiem_regex() -> &'static Regex {
    static GLUED: OnceLock<Regex> = OnceLock::new();
    GLUED.get_or_init(|| {
        Regex::new(r"(?i)(\d)([ap]m)\b").expect("Failed to compile glued meridiem regex")
    })
}

fn meridiem_regex() -> &'static Regex {
    static MERIDIEM: OnceLock<Regex> = OnceLock::new();
    MERIDIEM.get_or_init(|| {
        Regex::new(r"(?i)(\d\s+)([ap]m)\b").expect("Failed to compile meridiem regex")
    })
}

/// Cleans a raw sender name.
///
/// Removes quote characters, collapses whitespace runs to one space, trims,
/// and strips trailing colons along with any whitespace between them, so
/// the result never ends in a separator and cleaning twice is a no-op.
///
/// # Example
///
/// ```rust
/// use chatsift::normalize::clean_user;
///
/// assert_eq!(clean_user("\"John\"  Doe: "), "John Doe");
/// assert_eq!(clean_user(""), "");
/// ```
pub fn clean_user(raw: &str) -> String {
    let unquoted: String = raw.chars().filter(|c| !QUOTES.contains(c)).collect();
    let collapsed = unquoted.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_end_matches(|c: char| c == ':' || c.is_whitespace())
        .to_string()
}

/// Canonicalizes a raw timestamp string.
///
/// Inserts a space between a digit and a glued `am`/`pm`, then uppercases
/// the meridiem marker. Everything else is left untouched.
///
/// # Example
///
/// ```rust
/// use chatsift::normalize::normalize_time;
///
/// assert_eq!(normalize_time("10:30am"), "10:30 AM");
/// assert_eq!(normalize_time("10:30 AM"), "10:30 AM");
/// assert_eq!(normalize_time("Today at 9:05 pm"), "Today at 9:05 PM");
/// ```
pub fn normalize_time(raw: &str) -> String {
    let spaced = glued_meridiem_regex().replace_all(raw, "$1 $2");
    meridiem_regex()
        .replace_all(&spaced, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}
