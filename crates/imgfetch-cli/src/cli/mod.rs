//! CLI for imgfetch: prompt for URLs, fetch them, report each outcome.

mod report;

use anyhow::{Context, Result};
use clap::Parser;
use imgfetch_core::config::{self, ImgfetchConfig};
use imgfetch_core::fetcher::{parse_url_list, Fetcher, RunSummary};
use imgfetch_core::storage;
use std::io::{self, BufRead, Write};

/// Download images from URLs into a local folder, skipping non-images,
/// oversized files, and duplicates.
///
/// Settings (output folder, timeout, size limit) live in
/// ~/.config/imgfetch/config.toml, created with defaults on first run.
#[derive(Debug, Parser)]
#[command(name = "imgfetch", version)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdin = io::stdin();
        let stdout = io::stdout();
        run_interactive(&cfg, stdin.lock(), stdout.lock())?;
        Ok(())
    }
}

/// Greets, creates the output directory, reads one line of comma-separated
/// URLs from `input`, and fetches them in order, writing status lines to `out`.
pub fn run_interactive<R, W>(cfg: &ImgfetchConfig, mut input: R, mut out: W) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "🌍 Welcome to imgfetch")?;
    writeln!(out, "A tool for mindfully collecting images from the web\n")?;

    storage::ensure_dir(&cfg.save_dir)?;

    write!(out, "Please enter one or more image URLs (separated by commas): ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("read URLs from stdin")?;

    let urls = parse_url_list(&line);
    tracing::info!(count = urls.len(), dir = %cfg.save_dir.display(), "starting run");

    let fetcher = Fetcher::from_config(cfg);
    let mut write_err = None;
    let summary = fetcher.run(&urls, |url, outcome| {
        if write_err.is_none() {
            if let Err(e) = writeln!(out, "{}", report::describe(url, outcome)) {
                write_err = Some(e);
            }
        }
    });
    if let Some(e) = write_err {
        return Err(e).context("write status to stdout");
    }

    writeln!(out, "\n{}", report::summary_line(&summary))?;
    writeln!(out, "Connection strengthened. Community enriched. 🫶")?;
    Ok(summary)
}
