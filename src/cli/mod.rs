//! Command-line interface for message-merge.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::MergeError;
use crate::load::load_table;
use crate::merge::{merge_tables, sort_entries};
use crate::write::write_output;

/// Merge keyed JSON5 message files into one sorted, canonically formatted file
#[derive(Parser)]
#[command(name = "message-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input message files, merged in order (later files win on key collisions)
    #[arg(value_name = "INPUTS", required = true)]
    inputs: Vec<PathBuf>,

    /// Output file path (the run fails at the write stage without it)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!(inputs = cli.inputs.len(), "starting merge");

    let mut tables = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        tables.push(load_table(path)?);
    }

    let merged = merge_tables(tables);
    let entries = sort_entries(merged)?;

    // The output path is only resolved once every prior stage has succeeded,
    // so a missing -o surfaces as a write-stage failure.
    let output = cli.output.ok_or_else(|| {
        MergeError::file_access(
            PathBuf::new(),
            io::Error::new(io::ErrorKind::InvalidInput, "no output path given"),
        )
    })?;
    write_output(&output, entries)?;

    Ok(())
}
