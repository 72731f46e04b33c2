//! Output format types for the chatsift library.
//!
//! Library-first format types that don't depend on CLI frameworks.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::format::{OutputFormat, to_format_string};
//! use chatsift::core::OutputConfig;
//! use chatsift::parse;
//!
//! let messages = parse("[10:30 AM] John: Hi");
//!
//! let text = to_format_string(&messages, OutputFormat::Canonical, &OutputConfig::new())?;
//! assert_eq!(text, "[10:30 AM] John: Hi");
//!
//! // Or pick the format from an output path
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::canonical::to_canonical;
use crate::core::models::OutputConfig;
use crate::error::ChatsiftError;

/// Output format for parsed messages.
///
/// - [`Canonical`](OutputFormat::Canonical) - `[time] user: content` lines, always available
/// - [`Csv`](OutputFormat::Csv) - Semicolon-delimited table
/// - [`Json`](OutputFormat::Json) - Structured array
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON object per line
///
/// # Example
///
/// ```rust
/// use chatsift::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// One `[time] user: content` line per message (default)
    ///
    /// Parses back into the same messages.
    #[default]
    Canonical,

    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    ///
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsift::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Canonical.extension(), "txt");
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Canonical => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["canonical", "txt", "csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Canonical,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Jsonl,
        ]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Canonical => "text/plain",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsift::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.txt").unwrap(), OutputFormat::Canonical);
    /// assert!(OutputFormat::from_path("out.xml").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatsiftError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" => Ok(OutputFormat::Canonical),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatsiftError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, csv, json, jsonl"),
            )),
        }
    }

    /// Cargo feature this format needs, if any.
    fn required_feature(self) -> Option<&'static str> {
        match self {
            OutputFormat::Canonical => None,
            OutputFormat::Csv => Some("csv-output"),
            OutputFormat::Json | OutputFormat::Jsonl => Some("json-output"),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Canonical => write!(f, "Canonical"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "canonical" | "txt" | "text" => Ok(OutputFormat::Canonical),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Converts messages to a string in the specified format.
///
/// [`OutputFormat::Canonical`] ignores `config`; it is exactly
/// [`to_canonical`].
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - CSV or JSON rendering fails
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[Message],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatsiftError> {
    match format {
        OutputFormat::Canonical => Ok(to_canonical(messages)),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(ChatsiftError::invalid_format(
            "output",
            format!(
                "Output format {format} requires the '{}' feature to be enabled",
                format.required_feature().unwrap_or_default()
            ),
        )),
    }
}
