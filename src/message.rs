//! Normalized chat message.
//!
//! This module provides [`Message`], the single output type of the parser.
//! Whatever convention a transcript used, each message ends up as a
//! `(time, user, content)` triple plus the [`FormatTag`] of the rule that
//! recognized its opening line.
//!
//! # Examples
//!
//! ```
//! use chatsift::{FormatTag, Message};
//!
//! let msg = Message::new("10:30 AM", "John", "Hey what's up", FormatTag::Bracketed);
//! assert_eq!(msg.user(), "John");
//! assert_eq!(msg.to_string(), "[10:30 AM] John: Hey what's up");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatsift::{FormatTag, Message};
//!
//! let msg = Message::new("10:30 AM", "John", "Hi", FormatTag::Slack);
//! let json = serde_json::to_string(&msg)?;
//! assert!(json.contains("\"format\":\"slack\""));
//!
//! let parsed: Message = serde_json::from_str(&json)?;
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::{clean_user, normalize_time};
use crate::rules::ClassifiedLine;
use crate::tag::FormatTag;

/// A single chat message reconstructed from a transcript.
///
/// | Field | Description |
/// |-------|-------------|
/// | `time` | Timestamp text after [`normalize_time`] |
/// | `user` | Sender name after [`clean_user`] |
/// | `content` | Message body; continuation lines are joined with a space |
/// | `format` | Rule that matched the opening line |
///
/// `format` is not re-checked for continuation lines folded into the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Normalized timestamp text. Never parsed into a date.
    pub time: String,

    /// Normalized sender name.
    pub user: String,

    /// Message body.
    pub content: String,

    /// Which rule opened this message.
    pub format: FormatTag,
}

impl Message {
    /// Creates a message from already-normalized fields.
    pub fn new(
        time: impl Into<String>,
        user: impl Into<String>,
        content: impl Into<String>,
        format: FormatTag,
    ) -> Self {
        Self {
            time: time.into(),
            user: user.into(),
            content: content.into(),
            format,
        }
    }

    /// Builds a message from a classified line, normalizing sender and time.
    pub fn from_classified(line: ClassifiedLine) -> Self {
        Self {
            time: normalize_time(line.timestamp.trim()),
            user: clean_user(&line.sender),
            content: line.content,
            format: line.format,
        }
    }

    /// Folds a continuation line into the body, separated by one space.
    pub(crate) fn push_continuation(&mut self, line: &str) {
        self.content.push(' ');
        self.content.push_str(line);
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn format(&self) -> FormatTag {
        self.format
    }

    /// Returns the `(time, user, content)` triple, ignoring the format tag.
    pub fn fields(&self) -> (&str, &str, &str) {
        (&self.time, &self.user, &self.content)
    }
}

/// Renders the canonical `[<time>] <user>: <content>` line.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.time, self.user, self.content)
    }
}
