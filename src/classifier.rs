//! Line classification against a [`RuleTable`].
//!
//! Classification is pure: the same input and table always give the same
//! answer. Two entry points exist:
//!
//! - [`classify`] tests every rule against the text exactly as given. Fed a
//!   single split line, multi-line rules can never match.
//! - [`classify_with_lookahead`] additionally offers multi-line rules a
//!   two-line window made of the current line and the next one.

use tracing::trace;

use crate::rules::{ClassifiedLine, Rule, RuleTable};

/// Result of classifying a line with lookahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Extracted raw fields.
    pub line: ClassifiedLine,
    /// `true` if the following line was used as the first content line.
    pub consumed_next: bool,
}

/// Returns the first rule in table order whose grammar matches `text`.
///
/// # Example
///
/// ```rust
/// use chatsift::classifier::classify;
/// use chatsift::rules::RuleTable;
/// use chatsift::FormatTag;
///
/// let line = classify("[10:30 AM] John: Hey", RuleTable::builtin()).unwrap();
/// assert_eq!(line.format, FormatTag::Bracketed);
/// assert_eq!(line.sender, "John");
///
/// assert!(classify("just some words", RuleTable::builtin()).is_none());
/// ```
pub fn classify(text: &str, table: &RuleTable) -> Option<ClassifiedLine> {
    table.iter().find_map(|rule| rule.extract(text))
}

/// Returns `true` if `line` opens a message under some single-line rule.
pub fn opens_message(line: &str, table: &RuleTable) -> bool {
    table
        .iter()
        .filter(|rule| !rule.is_multi_line())
        .any(|rule| rule.extract(line).is_some())
}

/// Classifies `line`, letting multi-line rules look at `next`.
///
/// Rules are still tried strictly in table order. A multi-line rule is
/// offered the window `line + "\n" + next` only when `next` exists and does
/// not itself open a message under a single-line rule. A header never takes
/// a single-line message as its body, but a following header line can be.
///
/// # Example
///
/// ```rust
/// use chatsift::classifier::classify_with_lookahead;
/// use chatsift::rules::RuleTable;
/// use chatsift::FormatTag;
///
/// let table = RuleTable::builtin();
/// let hit = classify_with_lookahead("Jane Roe  9:15 AM", Some("Morning!"), table).unwrap();
/// assert_eq!(hit.line.format, FormatTag::Slack);
/// assert_eq!(hit.line.content, "Morning!");
/// assert!(hit.consumed_next);
/// ```
pub fn classify_with_lookahead(
    line: &str,
    next: Option<&str>,
    table: &RuleTable,
) -> Option<Classification> {
    let mut window: Option<Option<String>> = None;

    for rule in table {
        let hit = if rule.is_multi_line() {
            let window = window.get_or_insert_with(|| build_window(line, next, table));
            window.as_deref().and_then(|w| rule.extract(w))
        } else {
            rule.extract(line)
        };

        if let Some(classified) = hit {
            trace!(format = %classified.format, line, "line opens a message");
            return Some(Classification {
                line: classified,
                consumed_next: rule.is_multi_line(),
            });
        }
    }

    None
}

fn build_window(line: &str, next: Option<&str>, table: &RuleTable) -> Option<String> {
    let next = next?;
    if opens_message(next, table) {
        return None;
    }
    Some(format!("{line}\n{next}"))
}

/// Returns the rules of `table` matching anywhere in `text`, in table order.
pub fn matching_rules<'t>(text: &str, table: &'t RuleTable) -> Vec<&'t Rule> {
    table.iter().filter(|rule| rule.is_match(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::FormatTag;

    fn table() -> &'static RuleTable {
        RuleTable::builtin()
    }

    #[test]
    fn test_classify_each_single_line_convention() {
        let cases = [
            ("[1/15/24, 10:30 AM] John: Hi", FormatTag::WhatsApp),
            ("15.01.2024, 20:40 - John: Hi", FormatTag::WhatsApp),
            ("[10:30 AM] John: Hi", FormatTag::Bracketed),
            ("John (10:30 AM): Hi", FormatTag::Parenthesized),
            ("10:30 AM - John: Hi", FormatTag::Dashed),
            ("[Today at 10:30 AM] John: Hi", FormatTag::Canonical),
        ];
        for (line, expected) in cases {
            let got = classify(line, table()).map(|c| c.format);
            assert_eq!(got, Some(expected), "{line}");
        }
    }

    #[test]
    fn test_first_rule_wins_on_overlap() {
        // Bracketed, Teams and Canonical all match; Bracketed is declared first.
        let line = "[10:30 AM] John: Hi";
        let matching: Vec<FormatTag> = matching_rules(line, table())
            .into_iter()
            .map(Rule::tag)
            .collect();
        assert_eq!(
            matching,
            vec![FormatTag::Bracketed, FormatTag::Teams, FormatTag::Canonical]
        );
        assert_eq!(classify(line, table()).unwrap().format, FormatTag::Bracketed);
    }

    #[test]
    fn test_classify_never_matches_multi_line_rules_on_single_line() {
        assert!(classify("John Doe  10:30 AM", table()).is_none());
        assert!(classify("John — Today at 10:30 AM", table()).is_none());
    }

    #[test]
    fn test_lookahead_single_line_does_not_consume() {
        let hit = classify_with_lookahead("[10:30 AM] John: Hi", Some("more"), table()).unwrap();
        assert_eq!(hit.line.format, FormatTag::Bracketed);
        assert!(!hit.consumed_next);
    }

    #[test]
    fn test_lookahead_discord_header() {
        let hit =
            classify_with_lookahead("John — Yesterday at 9:00 PM", Some("gm"), table()).unwrap();
        assert_eq!(hit.line.format, FormatTag::Discord);
        assert_eq!(hit.line.sender, "John");
        assert_eq!(hit.line.timestamp, "Yesterday at 9:00 PM");
        assert!(hit.consumed_next);
    }

    #[test]
    fn test_lookahead_without_next_line() {
        assert!(classify_with_lookahead("John Doe  10:30 AM", None, table()).is_none());
    }

    #[test]
    fn test_header_does_not_swallow_next_message() {
        let hit = classify_with_lookahead("John Doe  10:30 AM", Some("[10:31 AM] Jane: Hi"), table());
        assert!(hit.is_none());
    }

    #[test]
    fn test_plain_text_is_unclassified() {
        assert!(classify_with_lookahead("see you there", Some("bye"), table()).is_none());
    }

    #[test]
    fn test_opens_message() {
        assert!(opens_message("[10:30 AM] John: Hi", table()));
        assert!(!opens_message("John Doe  10:30 AM", table()));
    }
}
