//! One-shot epoch validators table
//!
//! ```bash
//! epochview-render --snapshot epoch_info.json
//! curl -s http://node:3030/debug/api/epoch_info | epochview-render --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use epochview_server::logging::env_filter;
use epochview_server::{parse_snapshot, run_pass, FileSource, SnapshotSource, StaticSource};
use epochview_table::render_text;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Render the epoch validators table once
///
/// Reads the snapshot from a file, or from stdin when no file is given.
#[derive(Parser, Debug)]
#[command(name = "epochview-render")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Snapshot JSON file (defaults to stdin)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level filter for stderr logs, used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(&cli.log_level))
        .init();

    let source: Box<dyn SnapshotSource> = match &cli.snapshot {
        Some(path) => Box::new(FileSource::new(path.clone())),
        None => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read snapshot from stdin")?;
            Box::new(StaticSource::new("stdin", parse_snapshot("stdin", &json)?))
        }
    };
    debug!(source = %source.describe(), "Rendering epoch validators");

    let table = run_pass(source.as_ref()).context("Failed to build epoch validators table")?;
    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&table)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }
    Ok(())
}
