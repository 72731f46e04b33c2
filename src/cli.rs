//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Cli`] - Top-level arguments and global flags
//! - [`Command`] - The `parse`, `detect`, `example` and `formats` subcommands
//! - [`OutputFormat`] - Output format options as a clap value enum
//!
//! The argument types turn themselves into library configuration
//! ([`ParserConfig`], [`OutputConfig`], [`FilterConfig`]), so the binary
//! only has to deal with reading and writing.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::core::{FilterConfig, OutputConfig};
use crate::error::ChatsiftError;
use crate::tag::FormatTag;

/// Sift chat transcripts of unknown origin into normalized messages.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift parse chat.txt
    chatsift parse chat.txt -o messages.csv
    pbpaste | chatsift parse - -f jsonl --with-format
    chatsift detect chat.txt
    chatsift example slack")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a transcript into messages
    Parse(ParseArgs),

    /// Report which convention the first lines of a transcript follow
    Detect {
        /// Path to input file, or '-' for stdin
        input: String,
    },

    /// Print a sample transcript for a format tag
    Example {
        /// Format tag (e.g. whatsapp, slack, discord)
        tag: FormatTag,
    },

    /// List known format tags and output formats
    Formats,
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Path to input file, or '-' for stdin
    pub input: String,

    /// Path to output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (inferred from the output extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include the format tag of each message in CSV/JSON output
    #[arg(long)]
    pub with_format: bool,

    /// Merge consecutive messages from the same user
    #[arg(long)]
    pub merge: bool,

    /// Only let rules see one line at a time
    #[arg(long)]
    pub no_multiline_headers: bool,

    /// Keep only messages from this user (case-insensitive)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Keep only messages opened by these rules
    #[arg(long = "only", value_name = "TAG")]
    pub only: Vec<FormatTag>,
}

impl ParseArgs {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_multiline_headers(!self.no_multiline_headers)
    }

    pub fn output_config(&self) -> OutputConfig {
        if self.with_format {
            OutputConfig::new().with_format()
        } else {
            OutputConfig::new()
        }
    }

    pub fn filter_config(&self) -> FilterConfig {
        let mut config = FilterConfig::new();
        if let Some(ref user) = self.from {
            config = config.with_user(user.clone());
        }
        for tag in &self.only {
            config = config.with_format(*tag);
        }
        config
    }

    /// Picks the output format: `--format`, then the output extension, then canonical.
    pub fn resolve_format(&self) -> Result<crate::format::OutputFormat, ChatsiftError> {
        match (self.format, self.output.as_deref()) {
            (Some(format), _) => Ok(format.into()),
            (None, Some(path)) => crate::format::OutputFormat::from_path(path),
            (None, None) => Ok(crate::format::OutputFormat::Canonical),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[time] user: content` lines (default)
    #[default]
    #[value(alias = "txt")]
    Canonical,

    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Canonical => crate::format::OutputFormat::Canonical,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(argv: &[&str]) -> ParseArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Parse(args) => args,
            other => panic!("expected parse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse_args(&["chatsift", "parse", "chat.txt"]);
        assert_eq!(args.input, "chat.txt");
        assert!(args.output.is_none());
        assert!(!args.merge);
        assert!(args.parser_config().multiline_headers);
        assert!(!args.output_config().include_format);
        assert!(!args.filter_config().is_active());
        assert_eq!(
            args.resolve_format().unwrap(),
            crate::format::OutputFormat::Canonical
        );
    }

    #[test]
    fn test_parse_flags() {
        let args = parse_args(&[
            "chatsift",
            "parse",
            "-",
            "-f",
            "jsonl",
            "--with-format",
            "--merge",
            "--no-multiline-headers",
            "--from",
            "Jane",
            "--only",
            "slack",
            "--only",
            "dc",
        ]);
        assert_eq!(args.input, "-");
        assert!(args.merge);
        assert!(!args.parser_config().multiline_headers);
        assert!(args.output_config().include_format);

        let filter = args.filter_config();
        assert_eq!(filter.user.as_deref(), Some("Jane"));
        assert_eq!(filter.formats, vec![FormatTag::Slack, FormatTag::Discord]);
        assert_eq!(
            args.resolve_format().unwrap(),
            crate::format::OutputFormat::Jsonl
        );
    }

    #[test]
    fn test_format_inferred_from_output_path() {
        let args = parse_args(&["chatsift", "parse", "in.txt", "-o", "out.csv"]);
        assert_eq!(args.resolve_format().unwrap(), crate::format::OutputFormat::Csv);

        let args = parse_args(&["chatsift", "parse", "in.txt", "-o", "out.xml"]);
        assert!(args.resolve_format().is_err());

        let args = parse_args(&["chatsift", "parse", "in.txt", "-o", "out.xml", "-f", "json"]);
        assert_eq!(args.resolve_format().unwrap(), crate::format::OutputFormat::Json);
    }

    #[test]
    fn test_example_tag_parsing() {
        let cli = Cli::try_parse_from(["chatsift", "example", "WA"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Example {
                tag: FormatTag::WhatsApp
            }
        ));
        assert!(Cli::try_parse_from(["chatsift", "example", "irc"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["chatsift", "formats"]).unwrap();
        assert_eq!(cli.default_log_filter(), "warn");
        let cli = Cli::try_parse_from(["chatsift", "-vv", "formats"]).unwrap();
        assert_eq!(cli.default_log_filter(), "debug");
        let cli = Cli::try_parse_from(["chatsift", "formats", "-vvvv"]).unwrap();
        assert_eq!(cli.default_log_filter(), "trace");
    }

    #[test]
    fn test_format_value_aliases() {
        let args = parse_args(&["chatsift", "parse", "x", "-f", "ndjson"]);
        assert_eq!(args.format, Some(OutputFormat::Jsonl));
        let args = parse_args(&["chatsift", "parse", "x", "-f", "txt"]);
        assert_eq!(args.format, Some(OutputFormat::Canonical));
    }
}
