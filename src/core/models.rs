//! Output configuration shared by the string writers.

use serde::{Deserialize, Serialize};

/// Controls which optional fields the writers emit.
///
/// `time`, `user` and `content` are always written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit the format tag of the rule that opened each message.
    pub include_format: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_format(mut self) -> Self {
        self.include_format = true;
        self
    }
}
