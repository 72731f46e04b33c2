//! # Chatsift
//!
//! Turn a pasted or exported chat transcript of unknown origin into a list
//! of normalized messages.
//!
//! ## Overview
//!
//! Callers usually don't know which app produced a transcript. Chatsift
//! guesses the convention line by line against an ordered table of line
//! grammars and rebuilds message boundaries, including multi-line bodies:
//!
//! - **WhatsApp** - `[1/15/24, 10:30 AM] Alice: Hi`
//! - **Bracketed / Teams** - `[10:30 AM] John: Hey`
//! - **Parenthesized** - `John (10:30 AM): Hey`
//! - **Dashed** - `10:30 AM - John: Hey`
//! - **Discord / Slack / Telegram** - a `sender + time` header line followed by the body
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsift::prelude::*;
//!
//! let transcript = "\
//! [10:30 AM] John: Hey what's up
//! [10:31 AM] Jane: Not much, you?
//! Just got back from lunch";
//!
//! let messages = parse(transcript);
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].content, "Not much, you? Just got back from lunch");
//!
//! assert_eq!(detect_format(transcript), Some(FormatTag::Bracketed));
//! assert_eq!(
//!     to_canonical(&messages),
//!     "[10:30 AM] John: Hey what's up\n[10:31 AM] Jane: Not much, you? Just got back from lunch"
//! );
//! ```
//!
//! ## Module Structure
//!
//! - [`rules`] - [`Rule`](rules::Rule), [`RuleTable`](rules::RuleTable), the ordered grammar table
//! - [`classifier`] - first-match line classification, with two-line lookahead
//! - [`normalize`] - [`clean_user`](normalize::clean_user), [`normalize_time`](normalize::normalize_time)
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and [`parse`]
//! - [`detect`] - advisory [`detect_format`]
//! - [`canonical`] - [`to_canonical`]
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`core`] - post-processing and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat)
//! - [`error`] - [`ChatsiftError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod canonical;
pub mod classifier;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod detect;
pub mod error;
pub mod format;
pub mod message;
pub mod normalize;
pub mod parser;
pub mod rules;
pub mod tag;

// Re-export the main types at the crate root for convenience
pub use canonical::to_canonical;
pub use detect::{detect_format, detect_format_name};
pub use error::{ChatsiftError, Result};
pub use message::Message;
pub use parser::parse;
pub use tag::{FormatTag, UNKNOWN_FORMAT, example_for};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::error::{ChatsiftError, Result};
    pub use crate::tag::{FormatTag, example_for};

    // Entry points
    pub use crate::canonical::to_canonical;
    pub use crate::detect::{detect_format, detect_format_name};
    pub use crate::parser::{ParseReport, TranscriptParser, parse};

    // Rules and configuration
    pub use crate::config::ParserConfig;
    pub use crate::rules::{FieldOrder, Rule, RuleShape, RuleTable};

    // Post-processing
    pub use crate::core::{FilterConfig, OutputConfig, ProcessingStats, apply_filters, merge_consecutive};

    // Output
    pub use crate::format::{OutputFormat, to_format_string};
}
