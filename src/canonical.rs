//! Canonical serialization.
//!
//! Renders messages as `[<time>] <user>: <content>`, one per line. Feeding
//! that text back to [`parse`](crate::parse) reproduces every
//! `(time, user, content)` triple; only the format tag may change.

use crate::Message;

/// Renders `messages` in canonical form, joined with `\n`.
///
/// # Example
///
/// ```rust
/// use chatsift::{parse, to_canonical};
///
/// let messages = parse("Jane Roe  9:15 AM\nMorning!\nJohn (9:16 AM): hi");
/// assert_eq!(to_canonical(&messages), "[9:15 AM] Jane Roe: Morning!\n[9:16 AM] John: hi");
/// ```
pub fn to_canonical(messages: &[Message]) -> String {
    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
