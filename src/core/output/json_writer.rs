//! JSON output writer.

use super::OutputRecord;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Renders messages as a pretty-printed JSON array.
///
/// # Format
/// ```json
/// [
///   {"time": "10:30 AM", "user": "Alice", "content": "Hello"},
///   {"time": "10:31 AM", "user": "Bob", "content": "Hi"}
/// ]
/// ```
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let records: Vec<OutputRecord<'_>> = messages
        .iter()
        .map(|m| OutputRecord::new(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}
