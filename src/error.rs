//! Unified error types for chatsift.
//!
//! Parsing itself never fails: [`parse`](crate::parse),
//! [`detect_format`](crate::detect_format) and
//! [`to_canonical`](crate::to_canonical) are total over their input.
//! [`ChatsiftError`] covers everything around that core: building custom
//! rule tables, rendering output formats and the I/O done by the binary.

use std::io;

use thiserror::Error;

use crate::tag::FormatTag;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::rules::{FieldOrder, Rule};
/// use chatsift::FormatTag;
///
/// fn my_rule() -> Result<Rule> {
///     Rule::single_line(
///         FormatTag::Dashed,
///         r"^(\d{1,2}:\d{2})\s+-\s+([^:\n]+):\s*(.+)$",
///         FieldOrder::new(1, 2, 3),
///     )
/// }
/// # assert!(my_rule().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all fallible chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A rule's line grammar failed to compile.
    #[error("Invalid pattern for rule '{tag}': {source}")]
    InvalidPattern {
        /// The rule whose pattern was rejected
        tag: FormatTag,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A rule's field order points at a capture group its grammar doesn't have.
    #[error("Rule '{tag}' maps a field to capture group {group}, but its pattern has {groups}")]
    InvalidFieldOrder {
        /// The rule with the bad mapping
        tag: FormatTag,
        /// The out-of-range capture group index
        group: usize,
        /// Number of capture groups the pattern actually declares
        groups: usize,
    },

    /// A format or output name wasn't recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of name was being resolved ("output", "transcript")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV rendering error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output buffer was not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatsiftError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatsiftError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates an invalid pattern error.
    pub fn invalid_pattern(tag: FormatTag, source: regex::Error) -> Self {
        ChatsiftError::InvalidPattern { tag, source }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this error came from building a rule.
    pub fn is_rule_error(&self) -> bool {
        matches!(
            self,
            ChatsiftError::InvalidPattern { .. } | ChatsiftError::InvalidFieldOrder { .. }
        )
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatsiftError::InvalidFormat { .. })
    }
}
