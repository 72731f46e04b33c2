//! JSON Lines (JSONL) output writer.
//!
//! One self-contained object per line, suited to streaming ingestion and
//! line-oriented tools.

use super::OutputRecord;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Renders messages as JSON Lines.
///
/// Each line is a valid JSON object and every line ends with `\n`:
/// ```jsonl
/// {"time":"10:30 AM","user":"Alice","content":"Hello"}
/// {"time":"10:31 AM","user":"Bob","content":"Hi"}
/// ```
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut out = String::new();

    for msg in messages {
        let line = serde_json::to_string(&OutputRecord::new(msg, config))?;
        out.push_str(&line);
        out.push('\n');
    }

    Ok(out)
}
