// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Command-line entry point: package the design documents into one ZIP.

mod docs;
mod error;
mod logic;
mod models;
mod utils;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use log::{LevelFilter, debug};

use crate::docs::DEFAULT_ARCHIVE_NAME;
use crate::logic::emit::{ArchiveEmitter, EmitSummary};
use crate::logic::progress::{ConsoleProgress, Progress, SilentProgress};
use crate::models::DocumentRegistry;

#[derive(Parser, Debug)]
#[command(name = "docpack")]
#[command(version)]
#[command(about = "Package the Local Sync Board design documents into a ZIP archive")]
struct Cli {
    /// Output archive path (replaced if it exists)
    #[arg(short, long, default_value = DEFAULT_ARCHIVE_NAME)]
    output: PathBuf,

    /// Suppress progress lines
    #[arg(short, long)]
    quiet: bool,

    /// Print a digest, size and name for every written entry, plus debug logs
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// List the documents that would be packaged and exit
    #[arg(long, conflicts_with = "show")]
    list: bool,

    /// Print a single document to stdout and exit
    #[arg(long, value_name = "NAME")]
    show: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = DocumentRegistry::builtin().context("Built-in document table is invalid")?;
    ensure!(!registry.is_empty(), "Built-in document table is empty");

    let mut stdout = io::stdout();

    if cli.list {
        return list_documents(&registry, &mut stdout);
    }

    if let Some(name) = cli.show.as_deref() {
        return show_document(&registry, name, &mut stdout);
    }

    let mut console;
    let mut silent = SilentProgress;
    let progress: &mut dyn Progress = if cli.quiet {
        &mut silent
    } else {
        console = ConsoleProgress::stdout();
        &mut console
    };

    let mut emitter = ArchiveEmitter::new(&cli.output);
    let result = emitter.emit(&registry, progress);
    debug!(
        "emitter for {:?} stopped in state {:?}",
        cli.output,
        emitter.state()
    );
    let summary = result.with_context(|| format!("Failed to create archive {:?}", cli.output))?;

    if cli.verbose {
        print_summary(&summary, &mut stdout)?;
    }

    Ok(())
}

/// Send `log` records to stderr; `--verbose` lowers the threshold to debug.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// One `size  name` line per document, in archive order.
fn list_documents(registry: &DocumentRegistry, out: &mut impl Write) -> Result<()> {
    for (name, content) in registry.entries() {
        writeln!(out, "{:>8}  {}", content.len(), name)?;
    }
    Ok(())
}

/// Write the resolved text of one document.
fn show_document(registry: &DocumentRegistry, name: &str, out: &mut impl Write) -> Result<()> {
    match registry.get(name) {
        Some(content) => {
            out.write_all(content.as_bytes())?;
            Ok(())
        }
        None => bail!("No document named {name:?}"),
    }
}

/// Output path followed by `sha256  size  name` per written entry.
fn print_summary(summary: &EmitSummary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}:", summary.output.display())?;
    for record in &summary.entries {
        writeln!(out, "{}  {:>8}  {}", record.sha256, record.size, record.name)?;
    }
    Ok(())
}
