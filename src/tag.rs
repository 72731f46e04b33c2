//! Format tags identifying which line grammar recognized a message.
//!
//! Every [`Rule`](crate::rules::Rule) carries a [`FormatTag`], and every
//! parsed [`Message`](crate::Message) records the tag of the rule that
//! matched its opening line.
//!
//! # Example
//!
//! ```rust
//! use chatsift::FormatTag;
//! use std::str::FromStr;
//!
//! let tag = FormatTag::from_str("slack").unwrap();
//! assert_eq!(tag, FormatTag::Slack);
//! assert_eq!(tag.to_string(), "slack");
//! ```

use serde::{Deserialize, Serialize};

/// Name reported by format detection when no rule matches.
pub const UNKNOWN_FORMAT: &str = "unknown";

/// Identifier of a built-in line grammar.
///
/// Variants are declared in the same order as the built-in
/// [`RuleTable`](crate::rules::RuleTable), which is also their match priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum FormatTag {
    /// `[1/15/24, 10:30 AM] Alice: Hi` or `15/01/2024, 10:30 - Alice: Hi`
    #[serde(alias = "wa")]
    WhatsApp,

    /// `[10:30 AM] John: Hey`
    Bracketed,

    /// Same grammar as [`Bracketed`](FormatTag::Bracketed); never wins
    /// against it in the built-in table.
    Teams,

    /// `John (10:30 AM): Hey`
    Parenthesized,

    /// `10:30 AM - John: Hey`
    Dashed,

    /// `[<any time text>] John: Hey`, the form produced by
    /// [`to_canonical`](crate::to_canonical)
    Canonical,

    /// `John — Today at 10:30 AM` followed by a content line
    #[serde(alias = "dc")]
    Discord,

    /// `John Doe  10:30 AM` followed by a content line
    Slack,

    /// `John Doe, [15.01.24 10:30]` followed by a content line
    #[serde(alias = "tg")]
    Telegram,
}

impl FormatTag {
    /// Returns the stable lowercase identifier for this tag.
    pub fn name(&self) -> &'static str {
        match self {
            FormatTag::WhatsApp => "whatsapp",
            FormatTag::Bracketed => "bracketed",
            FormatTag::Teams => "teams",
            FormatTag::Parenthesized => "parenthesized",
            FormatTag::Dashed => "dashed",
            FormatTag::Canonical => "canonical",
            FormatTag::Discord => "discord",
            FormatTag::Slack => "slack",
            FormatTag::Telegram => "telegram",
        }
    }

    /// Returns all tags in built-in table order.
    pub fn all() -> &'static [FormatTag] {
        &[
            FormatTag::WhatsApp,
            FormatTag::Bracketed,
            FormatTag::Teams,
            FormatTag::Parenthesized,
            FormatTag::Dashed,
            FormatTag::Canonical,
            FormatTag::Discord,
            FormatTag::Slack,
            FormatTag::Telegram,
        ]
    }

    /// Returns all accepted names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "whatsapp",
            "wa",
            "bracketed",
            "teams",
            "parenthesized",
            "dashed",
            "canonical",
            "discord",
            "dc",
            "slack",
            "telegram",
            "tg",
        ]
    }

    /// Returns a short illustrative transcript written in this convention.
    ///
    /// Each snippet holds two messages from John and Jane. Used for
    /// documentation and tests; parsing never consults it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsift::{FormatTag, parse};
    ///
    /// let messages = parse(FormatTag::Slack.example());
    /// assert_eq!(messages.len(), 2);
    /// assert_eq!(messages[0].format, FormatTag::Slack);
    /// ```
    pub fn example(&self) -> &'static str {
        match self {
            FormatTag::WhatsApp => {
                "[1/15/24, 10:30 AM] John: Hey what's up\n[1/15/24, 10:31 AM] Jane: Not much, you?"
            }
            FormatTag::Bracketed => {
                "[10:30 AM] John: Hey what's up\n[10:31 AM] Jane: Not much, you?"
            }
            FormatTag::Teams => "[10:30 AM] John: Hey what's up\n[10:31 AM] Jane: Not much, you?",
            FormatTag::Parenthesized => {
                "John (10:30 AM): Hey what's up\nJane (10:31 AM): Not much, you?"
            }
            FormatTag::Dashed => "10:30 AM - John: Hey what's up\n10:31 AM - Jane: Not much, you?",
            FormatTag::Canonical => {
                "[Today at 10:30 AM] John: Hey what's up\n[Today at 10:31 AM] Jane: Not much, you?"
            }
            FormatTag::Discord => {
                "John — Today at 10:30 AM\nHey what's up\nJane — Today at 10:31 AM\nNot much, you?"
            }
            FormatTag::Slack => "John  10:30 AM\nHey what's up\nJane  10:31 AM\nNot much, you?",
            FormatTag::Telegram => {
                "John, [15.01.24 10:30]\nHey what's up\nJane, [15.01.24 10:31]\nNot much, you?"
            }
        }
    }
}

/// Returns the illustrative transcript for `tag`.
///
/// Free-function form of [`FormatTag::example`].
pub fn example_for(tag: FormatTag) -> &'static str {
    tag.example()
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FormatTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(FormatTag::WhatsApp),
            "bracketed" => Ok(FormatTag::Bracketed),
            "teams" => Ok(FormatTag::Teams),
            "parenthesized" => Ok(FormatTag::Parenthesized),
            "dashed" => Ok(FormatTag::Dashed),
            "canonical" => Ok(FormatTag::Canonical),
            "discord" | "dc" => Ok(FormatTag::Discord),
            "slack" => Ok(FormatTag::Slack),
            "telegram" | "tg" => Ok(FormatTag::Telegram),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                FormatTag::all_names().join(", ")
            )),
        }
    }
}
