//! Output format writers.
//!
//! Every writer renders to a `String`; the library never touches the
//! filesystem.
//!
//! - [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`to_jsonl`] - JSON Lines, one object per message - requires `json-output` feature
//!
//! The canonical text form lives in [`to_canonical`](crate::to_canonical)
//! and needs no feature.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::core::OutputConfig;
//! use chatsift::core::output::{to_csv, to_jsonl};
//! use chatsift::parse;
//!
//! let messages = parse("[10:30 AM] John: Hi\n[10:31 AM] Jane: Hello");
//!
//! let csv = to_csv(&messages, &OutputConfig::new())?;
//! assert!(csv.starts_with("Time;User;Content\n"));
//!
//! let jsonl = to_jsonl(&messages, &OutputConfig::new().with_format())?;
//! assert_eq!(jsonl.lines().count(), 2);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::to_csv;
#[cfg(feature = "json-output")]
pub use json_writer::to_json;
#[cfg(feature = "json-output")]
pub use jsonl_writer::to_jsonl;

#[cfg(feature = "json-output")]
use serde::Serialize;

#[cfg(feature = "json-output")]
use crate::{Message, core::models::OutputConfig};

/// Borrowed view of a message for JSON and JSONL output.
/// `format` is only present when enabled in [`OutputConfig`].
#[cfg(feature = "json-output")]
#[derive(Serialize)]
struct OutputRecord<'a> {
    time: &'a str,
    user: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
}

#[cfg(feature = "json-output")]
impl<'a> OutputRecord<'a> {
    fn new(msg: &'a Message, config: &OutputConfig) -> Self {
        Self {
            time: &msg.time,
            user: &msg.user,
            content: &msg.content,
            format: config.include_format.then(|| msg.format.name()),
        }
    }
}
