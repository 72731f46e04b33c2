//! Post-processing over parsed messages.
//!
//! This module contains:
//! - [`models`] - Output configuration
//! - [`filter`] - Message filtering by user and format tag
//! - [`processor`] - Message merging and statistics
//! - [`output`] - String writers (CSV, JSON, JSONL)
//!
//! Nothing here runs implicitly; [`parse`](crate::parse) always returns
//! messages exactly as they were accumulated.
//!
//! # Quick Start
//!
//! ```rust
//! use chatsift::core::{FilterConfig, apply_filters, merge_consecutive};
//! use chatsift::parse;
//!
//! let messages = parse("[10:30 AM] John: Hi\n[10:31 AM] John: You there?\n[10:32 AM] Jane: Yes");
//! let merged = merge_consecutive(messages);
//! assert_eq!(merged.len(), 2);
//!
//! let janes = apply_filters(merged, &FilterConfig::new().with_user("jane"));
//! assert_eq!(janes[0].content, "Yes");
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::OutputConfig;

pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::to_csv;
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl};

pub use processor::{ProcessingStats, merge_consecutive};
