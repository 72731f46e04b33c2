//! CSV output writer.

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Renders messages as CSV with a semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Time`, `User`, `Content`, plus `Format` when
///   [`OutputConfig::include_format`] is set
/// - Fields containing `;`, quotes or newlines are quoted
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(build_header(config))?;

    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Time", "User", "Content"];
    if config.include_format {
        header.push("Format");
    }
    header
}

fn build_record<'a>(msg: &'a Message, config: &OutputConfig) -> Vec<&'a str> {
    let mut record = vec![msg.time.as_str(), msg.user.as_str(), msg.content.as_str()];
    if config.include_format {
        record.push(msg.format.name());
    }
    record
}
