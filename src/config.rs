//! Parser configuration.
//!
//! Plain serde-friendly structs with builder-style setters, usable without
//! any CLI framework.
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::ParserConfig;
//! use chatsift::parser::TranscriptParser;
//!
//! let config = ParserConfig::new()
//!     .with_multiline_headers(false)
//!     .with_sample_lines(10);
//!
//! let parser = TranscriptParser::with_config(config);
//! assert!(!parser.config().multiline_headers);
//! ```

use serde::{Deserialize, Serialize};

/// Number of non-empty lines format detection samples by default.
pub const DEFAULT_SAMPLE_LINES: usize = 5;

/// Configuration for [`TranscriptParser`](crate::parser::TranscriptParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Offer multi-line header rules a two-line window (default: true).
    ///
    /// When false, every rule only ever sees one split line, so header
    /// rules such as Slack's or Discord's never match.
    pub multiline_headers: bool,

    /// How many leading non-empty lines format detection looks at (default: 5).
    pub sample_lines: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            multiline_headers: true,
            sample_lines: DEFAULT_SAMPLE_LINES,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration where every rule only sees single lines.
    pub fn single_line() -> Self {
        Self {
            multiline_headers: false,
            ..Self::default()
        }
    }

    /// Enables or disables two-line header windows.
    #[must_use]
    pub fn with_multiline_headers(mut self, enabled: bool) -> Self {
        self.multiline_headers = enabled;
        self
    }

    /// Sets the detection sample size. Zero is treated as one.
    #[must_use]
    pub fn with_sample_lines(mut self, lines: usize) -> Self {
        self.sample_lines = lines.max(1);
        self
    }
}
