//! # chatsift CLI
//!
//! Command-line interface for the chatsift library. This is the only place
//! that touches the filesystem or stdin.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser as ClapParser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chatsift::cli::{Cli, Command, ParseArgs};
use chatsift::core::{ProcessingStats, apply_filters, merge_consecutive};
use chatsift::format::{OutputFormat, to_format_string};
use chatsift::parser::TranscriptParser;
use chatsift::{ChatsiftError, FormatTag, detect_format_name};

fn main() {
    let cli = <Cli as ClapParser>::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for output.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ChatsiftError> {
    match cli.command {
        Command::Parse(args) => run_parse(&args),
        Command::Detect { input } => {
            let text = read_input(&input)?;
            println!("{}", detect_format_name(&text));
            Ok(())
        }
        Command::Example { tag } => {
            println!("{}", tag.example());
            Ok(())
        }
        Command::Formats => {
            print_formats();
            Ok(())
        }
    }
}

fn run_parse(args: &ParseArgs) -> Result<(), ChatsiftError> {
    let format = args.resolve_format()?;
    let text = read_input(&args.input)?;

    let parser = TranscriptParser::with_config(args.parser_config());
    let (messages, report) = parser.parse_with_report(&text);
    info!(
        input = %args.input,
        messages = report.messages,
        orphans = report.orphans,
        "parsed input"
    );
    if report.is_unrecognized() {
        warn!(lines = report.lines, "no line matched any known convention");
    }

    let filter = args.filter_config();
    let messages = if filter.is_active() {
        apply_filters(messages, &filter)
    } else {
        messages
    };

    let messages = if args.merge {
        let before = messages.len();
        let merged = merge_consecutive(messages);
        let stats = ProcessingStats::new(before, merged.len());
        info!(
            original = stats.original_count,
            merged = stats.merged_count,
            "merged consecutive messages ({:.1}% reduction)",
            stats.compression_ratio()
        );
        merged
    } else {
        messages
    };

    let mut rendered = to_format_string(&messages, format, &args.output_config())?;
    if format == OutputFormat::Canonical && !rendered.is_empty() {
        rendered.push('\n');
    }

    write_output(args.output.as_deref(), &rendered)
}

fn read_input(input: &str) -> Result<String, ChatsiftError> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn write_output(path: Option<&str>, rendered: &str) -> Result<(), ChatsiftError> {
    match path {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path, "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn print_formats() {
    println!("Transcript conventions (priority order):");
    for tag in FormatTag::all() {
        println!("  {tag}");
    }
    println!();
    println!("Output formats:");
    for format in OutputFormat::all() {
        println!(
            "  {:<10} .{:<6} {}",
            format.to_string().to_lowercase(),
            format.extension(),
            format.mime_type()
        );
    }
}
