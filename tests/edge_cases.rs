//! Edge case tests for chatsift
//!
//! Boundary conditions around line classification, folding and
//! normalization that the per-module unit tests don't reach.

use chatsift::config::ParserConfig;
use chatsift::parser::TranscriptParser;
use chatsift::rules::{FieldOrder, Rule, RuleTable};
use chatsift::{ChatsiftError, FormatTag, Message, parse, to_canonical};

// =========================================================================
// Unicode and special characters
// =========================================================================

#[test]
fn test_unicode_senders_and_content() {
    let messages = parse("[10:30 AM] Иван: Привет мир!\n[10:31 AM] 田中太郎: こんにちは 👋");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].user, "Иван");
    assert_eq!(messages[0].content, "Привет мир!");
    assert_eq!(messages[1].user, "田中太郎");
    assert_eq!(messages[1].content, "こんにちは 👋");
}

#[test]
fn test_curly_quotes_removed_from_sender() {
    let messages = parse("[10:30 AM] \u{201C}Johnny\u{201D} B: hi");
    assert_eq!(messages[0].user, "Johnny B");
}

#[test]
fn test_apostrophe_survives_in_sender() {
    let messages = parse("Conan O'Brien  11:02 PM\ngood evening");
    assert_eq!(messages[0].user, "Conan O'Brien");
    assert_eq!(messages[0].format, FormatTag::Slack);
}

#[test]
fn test_colons_inside_content_stay_in_content() {
    let messages = parse("[10:30 AM] John: note: meeting at 3:00 PM");
    assert_eq!(messages[0].user, "John");
    assert_eq!(messages[0].content, "note: meeting at 3:00 PM");
}

// =========================================================================
// Whitespace handling
// =========================================================================

#[test]
fn test_indented_lines_are_trimmed() {
    let messages = parse("    [10:30 AM] John: Hi   \n\t  and more\t");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "Hi and more");
}

#[test]
fn test_inner_whitespace_of_continuations_is_kept() {
    let messages = parse("[10:30 AM] John: Hi\na  b   c");
    assert_eq!(messages[0].content, "Hi a  b   c");
}

#[test]
fn test_only_newlines() {
    assert!(parse("\n\n\n").is_empty());
    assert!(parse("\r\n\r\n").is_empty());
}

// =========================================================================
// Lines that almost open a message
// =========================================================================

#[test]
fn test_header_without_content_is_not_a_message() {
    assert!(parse("[10:30 AM] John:").is_empty());
    assert!(parse("[10:30 AM] John:    ").is_empty());
}

#[test]
fn test_lone_timestamp_is_orphan() {
    let (messages, report) = TranscriptParser::new().parse_with_report("10:30 AM");
    assert!(messages.is_empty());
    assert_eq!(report.orphans, 1);
}

#[test]
fn test_orphans_never_attach_to_later_message() {
    let messages = parse("intro line\n[10:30 AM] John: Hi");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "Hi");
}

#[test]
fn test_header_followed_by_message_line_folds() {
    // The line after the header opens its own message, so the header has no body.
    let messages = parse("[10:29 AM] Ann: hi\nJohn Doe  10:30 AM\n[10:31 AM] Jane: Hi");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "hi John Doe  10:30 AM");
    assert_eq!(messages[1].user, "Jane");
}

#[test]
fn test_consecutive_headers_take_header_as_body() {
    // Header lines are not single-line openers, so the second becomes the first one's body.
    let messages = parse("John  10:30 AM\nJane  10:31 AM\nhello");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].user, "John");
    assert_eq!(messages[0].content, "Jane  10:31 AM hello");
}

#[test]
fn test_clock_at_end_of_body_line_reads_as_header() {
    // A body line ending in a time, with a line after it, opens a Slack message.
    let text = "[1/15/24, 10:30 AM] Alice: hi\nLet's meet at 10:30 AM\nbring snacks";
    let messages = parse(text);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].fields(), ("1/15/24, 10:30 AM", "Alice", "hi"));
    assert_eq!(messages[1].fields(), ("10:30 AM", "Let's meet at", "bring snacks"));
    assert_eq!(messages[1].format, FormatTag::Slack);

    let single = TranscriptParser::with_config(ParserConfig::single_line()).parse(text);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].content, "hi Let's meet at 10:30 AM bring snacks");
}

#[test]
fn test_twenty_four_hour_times() {
    let messages = parse("[23:59] John: late\n00:01 - Jane: early");
    assert_eq!(messages[0].time, "23:59");
    assert_eq!(messages[1].time, "00:01");
    assert_eq!(messages[1].format, FormatTag::Dashed);
}

#[test]
fn test_seconds_and_lowercase_meridiem() {
    let messages = parse("[10:30:15pm] John: hi");
    assert_eq!(messages[0].time, "10:30:15 PM");
}

// =========================================================================
// Large inputs
// =========================================================================

#[test]
fn test_many_continuations() {
    let mut text = String::from("[10:30 AM] John: start");
    for _ in 0..1_000 {
        text.push_str("\nmore");
    }
    let messages = parse(&text);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content.matches("more").count(), 1_000);
}

#[test]
fn test_many_messages_keep_order() {
    let text: String = (0..500)
        .map(|i| format!("[10:{:02} AM] user{i}: message {i}\n", i % 60))
        .collect();
    let messages = parse(&text);
    assert_eq!(messages.len(), 500);
    for (i, msg) in messages.iter().enumerate() {
        assert_eq!(msg.user, format!("user{i}"));
    }
}

// =========================================================================
// Canonical form
// =========================================================================

#[test]
fn test_canonical_handles_empty_user() {
    let messages = parse("[10:30 AM] \"\": hi");
    assert_eq!(messages[0].user, "");
    let again = parse(&to_canonical(&messages));
    assert_eq!(again[0].fields(), messages[0].fields());
}

#[test]
fn test_canonical_keeps_leading_dash_in_user() {
    for text in [
        "-=Neo=-, [15.01.24 10:30]\nhi there",
        "- Bob — 01/15/2024 10:30 PM\nhi",
        "[1/15/24, 10:30 AM] - Bob: hi",
    ] {
        let messages = parse(text);
        assert_eq!(messages.len(), 1, "{text}");
        assert!(messages[0].user.starts_with('-'), "{text}");
        let again = parse(&to_canonical(&messages));
        assert_eq!(again[0].fields(), messages[0].fields(), "{text}");
    }
}

#[test]
fn test_whatsapp_dash_needs_unbracketed_time() {
    let messages = parse("[15/01/2024, 10:30] - Alice: Hi\n15/01/2024, 10:31 - Bob: Hey");
    assert_eq!(messages[0].user, "- Alice");
    assert_eq!(messages[1].user, "Bob");
    assert!(messages.iter().all(|m| m.format == FormatTag::WhatsApp));
}

#[test]
fn test_canonical_of_handmade_messages() {
    let messages = vec![Message::new("whenever", "Ann", "text", FormatTag::Slack)];
    let text = to_canonical(&messages);
    assert_eq!(text, "[whenever] Ann: text");
    assert_eq!(parse(&text)[0].format, FormatTag::Canonical);
}

// =========================================================================
// Custom rules
// =========================================================================

#[test]
fn test_invalid_pattern_is_construction_error() {
    let err = Rule::single_line(FormatTag::Dashed, r"^(unclosed", FieldOrder::new(1, 1, 1))
        .unwrap_err();
    assert!(matches!(err, ChatsiftError::InvalidPattern { tag: FormatTag::Dashed, .. }));
}

#[test]
fn test_field_order_out_of_range() {
    let err = Rule::single_line(FormatTag::Dashed, r"^(a)(b)$", FieldOrder::new(1, 2, 3))
        .unwrap_err();
    assert!(matches!(
        err,
        ChatsiftError::InvalidFieldOrder {
            group: 3,
            groups: 2,
            ..
        }
    ));
}

#[test]
fn test_empty_rule_table_parses_nothing() {
    let parser = TranscriptParser::with_rules(RuleTable::new(Vec::new()), Default::default());
    let (messages, report) = parser.parse_with_report("[10:30 AM] John: Hi");
    assert!(messages.is_empty());
    assert!(report.is_unrecognized());
    assert_eq!(parser.detect("[10:30 AM] John: Hi"), None);
}
