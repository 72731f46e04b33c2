use serde::Serialize;

use crate::Message;

/// Merges consecutive messages from the same user into single entries.
///
/// Bodies are joined with `"\n"`; the merged entry keeps the time and
/// format tag of the first message in the run. Users are compared exactly,
/// after the normalization [`parse`](crate::parse) already applied.
///
/// # Example
/// Input:  [("John", "Hi"), ("John", "You there?"), ("Jane", "Yes")]
/// Output: [("John", "Hi\nYou there?"), ("Jane", "Yes")]
pub fn merge_consecutive(messages: Vec<Message>) -> Vec<Message> {
    let mut merged: Vec<Message> = Vec::with_capacity(messages.len());

    for msg in messages {
        match merged.last_mut() {
            Some(last) if last.user == msg.user => {
                last.content.push('\n');
                last.content.push_str(&msg.content);
            }
            _ => {
                merged.push(msg);
            }
        }
    }

    merged
}

/// Statistics about a merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    pub original_count: usize,
    pub merged_count: usize,
}

impl ProcessingStats {
    pub fn new(original_count: usize, merged_count: usize) -> Self {
        Self {
            original_count,
            merged_count,
        }
    }

    /// Percentage of entries removed by merging.
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        (1.0 - (self.merged_count as f64 / self.original_count as f64)) * 100.0
    }
}
