//! The ordered table of line grammars.
//!
//! A [`Rule`] is a named regex plus a [`FieldOrder`] saying which capture
//! group holds the timestamp, the sender and the content. A [`RuleTable`]
//! is a plain ordered list of rules: they are tried top to bottom and the
//! first match wins, so declaration order is part of the contract.
//!
//! Rules come in two shapes (see [`RuleShape`]):
//!
//! - **Single-line** rules see one trimmed line, e.g. `[10:30 AM] John: Hey`.
//! - **Multi-line** rules describe a header line (sender + time, no content)
//!   followed by a line break and the first content line. They only match a
//!   two-line window `header + "\n" + next`.
//!
//! # Example
//!
//! ```rust
//! use chatsift::rules::RuleTable;
//! use chatsift::FormatTag;
//!
//! let table = RuleTable::builtin();
//! assert_eq!(table.iter().next().map(|r| r.tag()), Some(FormatTag::WhatsApp));
//! assert_eq!(table.len(), FormatTag::all().len());
//! ```

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::error::{ChatsiftError, Result};
use crate::tag::FormatTag;

// Shared grammar fragments.
const CLOCK: &str = r"\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp][Mm])?";
const CLOCK_MERIDIEM: &str = r"\d{1,2}:\d{2}\s?[AaPp][Mm]";
const DATE: &str = r"\d{1,2}[/.]\d{1,2}[/.]\d{2,4}";

/// Whether a rule matches a single line or a header + content window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleShape {
    /// Sender, time and content on one line.
    SingleLine,
    /// Header line with sender and time, content on the following line.
    MultiLine,
}

/// Maps capture group indices to the three semantic fields.
///
/// Indices are 1-based regex group numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldOrder {
    pub timestamp: usize,
    pub sender: usize,
    pub content: usize,
}

impl FieldOrder {
    pub const fn new(timestamp: usize, sender: usize, content: usize) -> Self {
        Self {
            timestamp,
            sender,
            content,
        }
    }

    fn max_group(&self) -> usize {
        self.timestamp.max(self.sender).max(self.content)
    }

    fn min_group(&self) -> usize {
        self.timestamp.min(self.sender).min(self.content)
    }
}

/// Raw fields pulled out of a matching line, positioned per the rule's
/// [`FieldOrder`]. Nothing is normalized yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub timestamp: String,
    pub sender: String,
    pub content: String,
    pub format: FormatTag,
}

/// A named line grammar.
#[derive(Debug, Clone)]
pub struct Rule {
    tag: FormatTag,
    shape: RuleShape,
    regex: Regex,
    fields: FieldOrder,
}

impl Rule {
    /// Compiles a rule.
    ///
    /// Patterns are compiled in multi-line mode, so `^` and `$` anchor at
    /// line boundaries. Fails if the pattern is invalid or `fields` refers
    /// to a capture group the pattern doesn't declare.
    pub fn new(tag: FormatTag, shape: RuleShape, pattern: &str, fields: FieldOrder) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .map_err(|e| ChatsiftError::invalid_pattern(tag, e))?;

        // captures_len() counts the implicit whole-match group 0
        let groups = regex.captures_len() - 1;
        if fields.min_group() == 0 || fields.max_group() > groups {
            let group = if fields.min_group() == 0 {
                0
            } else {
                fields.max_group()
            };
            return Err(ChatsiftError::InvalidFieldOrder { tag, group, groups });
        }

        Ok(Self {
            tag,
            shape,
            regex,
            fields,
        })
    }

    /// Compiles a [`RuleShape::SingleLine`] rule.
    pub fn single_line(tag: FormatTag, pattern: &str, fields: FieldOrder) -> Result<Self> {
        Self::new(tag, RuleShape::SingleLine, pattern, fields)
    }

    /// Compiles a [`RuleShape::MultiLine`] rule.
    pub fn multi_line(tag: FormatTag, pattern: &str, fields: FieldOrder) -> Result<Self> {
        Self::new(tag, RuleShape::MultiLine, pattern, fields)
    }

    pub fn tag(&self) -> FormatTag {
        self.tag
    }

    pub fn shape(&self) -> RuleShape {
        self.shape
    }

    pub fn fields(&self) -> FieldOrder {
        self.fields
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_multi_line(&self) -> bool {
        self.shape == RuleShape::MultiLine
    }

    /// Returns `true` if the grammar matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Matches `text` from its first character and extracts the fields.
    ///
    /// A match that starts on a later line of `text` is rejected, so a
    /// window is only classified by what its first line opens.
    pub fn extract(&self, text: &str) -> Option<ClassifiedLine> {
        let caps = self.regex.captures(text)?;
        if caps.get(0).map_or(true, |m| m.start() != 0) {
            return None;
        }

        let field = |group: usize| caps.get(group).map_or("", |m| m.as_str()).to_string();
        let content = field(self.fields.content);
        if content.trim().is_empty() {
            return None;
        }

        Some(ClassifiedLine {
            timestamp: field(self.fields.timestamp),
            sender: field(self.fields.sender),
            content,
            format: self.tag,
        })
    }
}

/// An ordered list of rules. Iteration order is match priority.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Creates a table that tries `rules` in the given order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Returns the process-wide built-in table.
    pub fn builtin() -> &'static RuleTable {
        static BUILTIN: OnceLock<RuleTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            RuleTable::new(builtin_rules().expect("built-in rule patterns must compile"))
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the first rule carrying `tag`, if any.
    pub fn get(&self, tag: FormatTag) -> Option<&Rule> {
        self.rules.iter().find(|r| r.tag == tag)
    }

    /// Returns a copy of this table without the rules for which `keep` is false.
    #[must_use]
    pub fn filtered(&self, keep: impl Fn(&Rule) -> bool) -> RuleTable {
        RuleTable::new(self.rules.iter().filter(|r| keep(r)).cloned().collect())
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Builds the built-in rules in priority order.
///
/// Single-line rules come first. Among the multi-line rules, `discord`
/// must precede `slack`: a Discord header such as
/// `John — Today at 10:30 AM` also satisfies the looser Slack grammar.
fn builtin_rules() -> Result<Vec<Rule>> {
    let bracketed = format!(r"^\[({CLOCK})\]\s*([^:\n]+):\s*(.+)$");

    Ok(vec![
        // [1/15/24, 10:30:45 AM] Alice: Hi  |  15/01/2024, 10:30 - Alice: Hi
        // The dash separator only follows an unbracketed time.
        Rule::single_line(
            FormatTag::WhatsApp,
            &format!(r"^\[?({DATE},?\s+{CLOCK})(?:\]\s*|\s+-\s+)([^:\n]+?):\s*(.+)$"),
            FieldOrder::new(1, 2, 3),
        )?,
        // [10:30 AM] John: Hey
        Rule::single_line(FormatTag::Bracketed, &bracketed, FieldOrder::new(1, 2, 3))?,
        Rule::single_line(FormatTag::Teams, &bracketed, FieldOrder::new(1, 2, 3))?,
        // John (10:30 AM): Hey
        Rule::single_line(
            FormatTag::Parenthesized,
            &format!(r"^([^:()\[\]\n]+?)\s*\(({CLOCK})\):\s*(.+)$"),
            FieldOrder::new(2, 1, 3),
        )?,
        // 10:30 AM - John: Hey
        Rule::single_line(
            FormatTag::Dashed,
            &format!(r"^({CLOCK})\s+-\s+([^:\n]+):\s*(.+)$"),
            FieldOrder::new(1, 2, 3),
        )?,
        // [Today at 10:30 AM] John: Hey
        Rule::single_line(
            FormatTag::Canonical,
            r"^\[([^\]\n]+)\]\s*([^:\n]+):\s*(.+)$",
            FieldOrder::new(1, 2, 3),
        )?,
        // John — Today at 10:30 AM
        // Hey
        Rule::multi_line(
            FormatTag::Discord,
            &format!(
                r"^([^:\n]+?)\s+[—–-]\s+((?:Today|Yesterday) at {CLOCK}|{DATE}(?:,?\s+{CLOCK})?)[ \t]*\n(.+)$"
            ),
            FieldOrder::new(2, 1, 3),
        )?,
        // John Doe  10:30 AM
        // Hey
        Rule::multi_line(
            FormatTag::Slack,
            &format!(r"^([^:\[\]\n]+?)\s+({CLOCK_MERIDIEM})[ \t]*\n(.+)$"),
            FieldOrder::new(2, 1, 3),
        )?,
        // John Doe, [15.01.24 10:30]
        // Hey
        Rule::multi_line(
            FormatTag::Telegram,
            &format!(r"^([^:\[\]\n]+?),\s*\[({DATE}\s+\d{{1,2}}:\d{{2}}(?::\d{{2}})?)\][ \t]*\n(.+)$"),
            FieldOrder::new(2, 1, 3),
        )?,
    ])
}
