use std::collections::HashSet;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::formatter::{kindle_lines, write_block};
use crate::models::{ClipType, ParseResult};
use crate::parsers::clippings_from_path;
use crate::utils::resolve_clippings_path;

#[derive(Parser)]
#[command(name = "kclip")]
#[command(version = "0.1.0")]
#[command(about = "Parse and reformat Kindle My Clippings.txt exports", long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about a clippings file
    Stats {
        /// Clippings file (defaults to $KINDLE_CLIPPINGS)
        file: Option<PathBuf>,
    },
    /// Print every block as a JSON object, one per line
    Export {
        /// Clippings file (defaults to $KINDLE_CLIPPINGS)
        file: Option<PathBuf>,
        /// Leave unparseable blocks out of the output
        #[arg(long)]
        skip_unparseable: bool,
    },
    /// Rewrite clippings in canonical Kindle format
    Reformat {
        /// Clippings file (defaults to $KINDLE_CLIPPINGS)
        file: Option<PathBuf>,
        /// Copy unparseable blocks through verbatim instead of dropping them
        #[arg(long)]
        keep_unparseable: bool,
    },
    /// List blocks that fail to parse
    Check {
        /// Clippings file (defaults to $KINDLE_CLIPPINGS)
        file: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Stats { file }) => {
            show_stats(&resolve_clippings_path(file.as_deref())?)?;
        }
        Some(Commands::Export { file, skip_unparseable }) => {
            export_json(&resolve_clippings_path(file.as_deref())?, *skip_unparseable)?;
        }
        Some(Commands::Reformat { file, keep_unparseable }) => {
            reformat(&resolve_clippings_path(file.as_deref())?, *keep_unparseable)?;
        }
        Some(Commands::Check { file }) => {
            check(&resolve_clippings_path(file.as_deref())?)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn show_stats(path: &Path) -> Result<()> {
    let mut highlights = 0;
    let mut notes = 0;
    let mut bookmarks = 0;
    let mut unparseable = 0;
    let mut books = HashSet::new();
    let mut oldest: Option<NaiveDateTime> = None;
    let mut newest: Option<NaiveDateTime> = None;

    for result in clippings_from_path(path)? {
        let clipping = match result {
            ParseResult::Clipping(clipping) => clipping,
            ParseResult::Unparseable(_) => {
                unparseable += 1;
                continue;
            }
        };

        match clipping.clip_type {
            ClipType::Highlight => highlights += 1,
            ClipType::Note => notes += 1,
            ClipType::Bookmark => bookmarks += 1,
        }
        let datetime = clipping.datetime;
        oldest = Some(oldest.map_or(datetime, |o| o.min(datetime)));
        newest = Some(newest.map_or(datetime, |n| n.max(datetime)));
        books.insert((clipping.title, clipping.author));
    }

    println!("Kindle Clippings Statistics");
    println!("===========================");
    println!("Total blocks: {}", highlights + notes + bookmarks + unparseable);
    println!("  Highlights: {}", highlights);
    println!("  Notes: {}", notes);
    println!("  Bookmarks: {}", bookmarks);
    println!("  Unparseable: {}", unparseable);
    println!("Books: {}", books.len());
    println!();
    println!("Clippings file: {}", path.display());

    if let Some(oldest) = oldest {
        println!("Oldest clipping: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = newest {
        println!("Newest clipping: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn export_json(path: &Path, skip_unparseable: bool) -> Result<()> {
    let stream = clippings_from_path(path)?;
    let mut out = BufWriter::new(io::stdout().lock());

    for result in stream {
        if skip_unparseable && !result.is_clipping() {
            continue;
        }
        serde_json::to_writer(&mut out, &result).context("Failed to serialize clipping")?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

fn reformat(path: &Path, keep_unparseable: bool) -> Result<()> {
    let stream = clippings_from_path(path)?;
    let mut out = BufWriter::new(io::stdout().lock());

    for result in stream {
        match result {
            ParseResult::Clipping(clipping) => write_block(&mut out, &kindle_lines(&clipping))?,
            ParseResult::Unparseable(bad) if keep_unparseable => {
                write_block(&mut out, &bad.original_lines)?
            }
            ParseResult::Unparseable(_) => {}
        }
    }

    out.flush()?;
    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let mut stream = clippings_from_path(path)?;

    for bad in stream.by_ref().filter_map(ParseResult::into_unparseable) {
        println!("block {} (line {}): {}", bad.lineno, bad.start_line + 1, bad.error);
    }

    let failed = stream.failed_count();
    let total = failed + stream.parsed_count();
    if failed > 0 {
        bail!("{} of {} blocks failed to parse", failed, total);
    }

    println!("All {} blocks parsed", total);
    Ok(())
}
