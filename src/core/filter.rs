//! Filter messages by user and by the rule that recognized them.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering message collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | User | [`with_user`](FilterConfig::with_user) | Messages from a specific user |
//! | Format | [`with_format`](FilterConfig::with_format) | Messages opened by one of the given rules |
//!
//! # Examples
//!
//! ```
//! use chatsift::core::filter::{FilterConfig, apply_filters};
//! use chatsift::{FormatTag, Message};
//!
//! let messages = vec![
//!     Message::new("10:30 AM", "Alice", "Hello", FormatTag::Bracketed),
//!     Message::new("10:31 AM", "Bob", "Hi there", FormatTag::Slack),
//!     Message::new("10:32 AM", "Alice", "How are you?", FormatTag::Slack),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_user("alice")
//!     .with_format(FormatTag::Slack);
//! let filtered = apply_filters(messages, &config);
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content, "How are you?");
//! ```
//!
//! # Behavior Notes
//!
//! - User matching is case-insensitive for ASCII characters
//! - Several format tags combine with OR logic
//! - The user and format filters combine with AND logic

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::tag::FormatTag;

/// Configuration for filtering messages by user and format tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Include only messages from this user (case-insensitive).
    pub user: Option<String>,

    /// Include only messages whose opening line matched one of these rules.
    /// Empty means any rule.
    pub formats: Vec<FormatTag>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user filter.
    ///
    /// ```
    /// use chatsift::core::filter::FilterConfig;
    ///
    /// // Matches "Alice", "alice", "ALICE"
    /// let config = FilterConfig::new().with_user("Alice");
    /// assert!(config.has_user_filter());
    /// ```
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Adds a format tag to the accepted set.
    #[must_use]
    pub fn with_format(mut self, tag: FormatTag) -> Self {
        if !self.formats.contains(&tag) {
            self.formats.push(tag);
        }
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_user_filter() || self.has_format_filter()
    }

    pub fn has_user_filter(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_format_filter(&self) -> bool {
        !self.formats.is_empty()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if let Some(ref user) = self.user {
            if !msg.user.eq_ignore_ascii_case(user) {
                return false;
            }
        }

        self.formats.is_empty() || self.formats.contains(&msg.format)
    }
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns the original messages unchanged if no filter is active.
/// Relative order is preserved.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}
