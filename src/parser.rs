//! Transcript parsing: line classification plus message accumulation.
//!
//! [`TranscriptParser`] walks a transcript line by line. A line that
//! classifies under some rule closes the open message and opens a new one;
//! any other line is folded into the open message as a continuation, or
//! dropped if nothing is open yet.
//!
//! # Example
//!
//! ```rust
//! use chatsift::parser::TranscriptParser;
//! use chatsift::FormatTag;
//!
//! let parser = TranscriptParser::new();
//! let messages = parser.parse("[10:30 AM] John: Hello\nstill talking\n[10:31 AM] Jane: Hi");
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].content, "Hello still talking");
//! assert_eq!(messages[1].format, FormatTag::Bracketed);
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::Message;
use crate::classifier::classify_with_lookahead;
use crate::config::ParserConfig;
use crate::detect::detect_format_with;
use crate::rules::RuleTable;
use crate::tag::FormatTag;

/// Counters describing how a transcript was consumed.
///
/// Parsing never fails, so an empty result is ambiguous on its own; a
/// report with `orphans > 0` and no messages means nothing matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Non-empty lines seen.
    pub lines: usize,
    /// Messages produced.
    pub messages: usize,
    /// Lines folded into an open message.
    pub continuations: usize,
    /// Lines dropped because no message was open yet.
    pub orphans: usize,
}

impl ParseReport {
    /// Returns `true` if lines were present but none opened a message.
    pub fn is_unrecognized(&self) -> bool {
        self.lines > 0 && self.messages == 0
    }
}

/// Parser for transcripts of unknown convention.
#[derive(Debug, Clone)]
pub struct TranscriptParser {
    config: ParserConfig,
    rules: Cow<'static, RuleTable>,
}

impl TranscriptParser {
    /// Creates a parser over the built-in rule table with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser over the built-in rule table.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            rules: Cow::Borrowed(RuleTable::builtin()),
        }
    }

    /// Creates a parser over a custom rule table.
    pub fn with_rules(rules: RuleTable, config: ParserConfig) -> Self {
        Self {
            config,
            rules: Cow::Owned(rules),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Parses `text` into messages in transcript order.
    pub fn parse(&self, text: &str) -> Vec<Message> {
        self.parse_with_report(text).0
    }

    /// Parses `text` and also returns how its lines were consumed.
    pub fn parse_with_report(&self, text: &str) -> (Vec<Message>, ParseReport) {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut acc = Accumulator::default();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            let next = if self.config.multiline_headers {
                lines.get(i + 1).copied()
            } else {
                None
            };

            match classify_with_lookahead(line, next, &self.rules) {
                Some(hit) => {
                    acc.open(Message::from_classified(hit.line));
                    i += if hit.consumed_next { 2 } else { 1 };
                }
                None => {
                    acc.fold(line);
                    i += 1;
                }
            }
        }

        let (messages, mut report) = acc.finish();
        report.lines = lines.len();

        debug!(
            lines = report.lines,
            messages = report.messages,
            continuations = report.continuations,
            orphans = report.orphans,
            "parsed transcript"
        );

        (messages, report)
    }

    /// Reports which rule matches the first few lines of `text`.
    ///
    /// Advisory only; [`parse`](Self::parse) never consults it.
    pub fn detect(&self, text: &str) -> Option<FormatTag> {
        detect_format_with(text, &self.rules, self.config.sample_lines)
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequential state: at most one open message plus the closed ones.
#[derive(Debug, Default)]
struct Accumulator {
    open: Option<Message>,
    output: Vec<Message>,
    report: ParseReport,
}

impl Accumulator {
    fn open(&mut self, message: Message) {
        if let Some(done) = self.open.replace(message) {
            self.output.push(done);
        }
    }

    fn fold(&mut self, line: &str) {
        match self.open.as_mut() {
            Some(message) => {
                message.push_continuation(line);
                self.report.continuations += 1;
            }
            None => {
                trace!(line, "dropping line before first message");
                self.report.orphans += 1;
            }
        }
    }

    fn finish(mut self) -> (Vec<Message>, ParseReport) {
        if let Some(done) = self.open.take() {
            self.output.push(done);
        }
        self.report.messages = self.output.len();
        (self.output, self.report)
    }
}

/// Parses `text` with the built-in rule table and default configuration.
///
/// Total: empty, blank or unrecognized input yields an empty vector.
///
/// # Example
///
/// ```rust
/// use chatsift::parse;
///
/// let messages = parse("[10:30 AM] John: Hey what's up\n[10:31 AM] Jane: Not much, you?");
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[1].user, "Jane");
///
/// assert!(parse("").is_empty());
/// assert!(parse("   ").is_empty());
/// ```
pub fn parse(text: &str) -> Vec<Message> {
    TranscriptParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{FieldOrder, Rule};

    #[test]
    fn test_empty_and_blank_input() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
        assert!(parse("\n\n  \t\n").is_empty());
    }

    #[test]
    fn test_bracketed_pair() {
        let messages = parse("[10:30 AM] John: Hey what's up\n[10:31 AM] Jane: Not much, you?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].fields(), ("10:30 AM", "John", "Hey what's up"));
        assert_eq!(messages[1].fields(), ("10:31 AM", "Jane", "Not much, you?"));
        assert!(messages.iter().all(|m| m.format == FormatTag::Bracketed));
    }

    #[test]
    fn test_continuation_folding() {
        let messages = parse("[10:30 AM] John: Hello\nstill talking");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "Hello still talking");
    }

    #[test]
    fn test_blank_lines_do_not_separate() {
        let messages = parse("[10:30 AM] John: Hello\n\n\nstill talking\n");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "Hello still talking");
    }

    #[test]
    fn test_leading_orphans_are_dropped() {
        let (messages, report) =
            TranscriptParser::new().parse_with_report("preamble\nmore preamble\n[10:30 AM] John: Hi");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "Hi");
        assert_eq!(report.orphans, 2);
        assert_eq!(report.lines, 3);
    }

    #[test]
    fn test_only_unmatched_lines() {
        let (messages, report) = TranscriptParser::new().parse_with_report("hello\nworld");
        assert!(messages.is_empty());
        assert!(report.is_unrecognized());
    }

    #[test]
    fn test_mixed_conventions_keep_order() {
        let text = "[10:30 AM] John: one\n10:31 AM - Jane: two\nJohn (10:32 AM): three";
        let formats: Vec<FormatTag> = parse(text).iter().map(|m| m.format).collect();
        assert_eq!(
            formats,
            vec![
                FormatTag::Bracketed,
                FormatTag::Dashed,
                FormatTag::Parenthesized
            ]
        );
    }

    #[test]
    fn test_slack_headers_with_multiline_bodies() {
        let text = "John Doe  10:30 AM\nfirst line\nsecond line\nJane Roe  10:31 AM\nreply";
        let (messages, report) = TranscriptParser::new().parse_with_report(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].fields(), ("10:30 AM", "John Doe", "first line second line"));
        assert_eq!(messages[1].fields(), ("10:31 AM", "Jane Roe", "reply"));
        assert_eq!(report.continuations, 1);
    }

    #[test]
    fn test_single_line_config_leaves_headers_unreachable() {
        let parser = TranscriptParser::with_config(ParserConfig::single_line());
        assert!(parser.parse(FormatTag::Slack.example()).is_empty());
        assert!(parser.parse(FormatTag::Discord.example()).is_empty());
        assert_eq!(parser.parse(FormatTag::Bracketed.example()).len(), 2);
    }

    #[test]
    fn test_trailing_header_without_body_folds() {
        // Nothing follows the header, so it can't open a message.
        let messages = parse("[10:30 AM] John: Hi\nJane Roe  10:31 AM");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "Hi Jane Roe  10:31 AM");
    }

    #[test]
    fn test_custom_rule_table_order() {
        // Teams ahead of Bracketed flips which tag the shared grammar reports.
        let builtin = RuleTable::builtin();
        let teams = builtin.get(FormatTag::Teams).unwrap().clone();
        let bracketed = builtin.get(FormatTag::Bracketed).unwrap().clone();
        let parser = TranscriptParser::with_rules(
            RuleTable::new(vec![teams, bracketed]),
            ParserConfig::default(),
        );
        let messages = parser.parse("[10:30 AM] John: Hi");
        assert_eq!(messages[0].format, FormatTag::Teams);
    }

    #[test]
    fn test_custom_rule() {
        let rule = Rule::single_line(
            FormatTag::Dashed,
            r"^<([^>]+)>\s+(\d{2}:\d{2})\s+(.+)$",
            FieldOrder::new(2, 1, 3),
        )
        .unwrap();
        let parser = TranscriptParser::with_rules(RuleTable::new(vec![rule]), ParserConfig::default());
        let messages = parser.parse("<alice> 09:15 morning\n<bob> 09:16 hey");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].fields(), ("09:15", "alice", "morning"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let messages = parse("[10:30 AM] John: Hello\r\nmore\r\n[10:31 AM] Jane: Hi\r\n");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "Hello more");
    }
}
