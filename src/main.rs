//! # Izvestia News Digest
//!
//! Fetches one archived snapshot of the iz.ru news listing, extracts every
//! news item (section, title, link) and prints them grouped by section.
//!
//! ## Usage
//!
//! ```sh
//! izvestia_news_digest                      # default snapshot, JSON output
//! izvestia_news_digest --html-file page.html --format text
//! ```
//!
//! ## Architecture
//!
//! A single linear pipeline, one step after another:
//! 1. **Fetching**: one GET for the listing page (or a local file read)
//! 2. **Extraction**: news containers are parsed and grouped by section
//! 3. **Output**: the grouped news, or a diagnostic line, on stdout
//!
//! Fetch failures and empty pages are reported on stdout and the process
//! still exits successfully. Only configuration problems are errors.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use config::ScraperConfig;
use outputs::diagnostics::{self, Diagnostic};
use scrapers::fetcher::{FetchResult, PageFetcher};
use scrapers::listing::NewsExtractor;

/// What a run ends up printing.
#[derive(Debug, PartialEq, Eq)]
enum Report {
    /// Rendered grouped news.
    News(String),
    Diagnostics(Vec<Diagnostic>),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr, stdout carries the result) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = resolve_config(&args)?;
    match run(&args, &config).await? {
        Report::News(rendered) => println!("{rendered}"),
        Report::Diagnostics(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}

/// Load the config file if given, then apply CLI overrides.
fn resolve_config(args: &Cli) -> Result<ScraperConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ScraperConfig::load(path)?,
        None => ScraperConfig::default(),
    };
    if let Some(url) = &args.url {
        config.archive_url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    Ok(config)
}

/// Fetch (or read) the page, extract the news and decide what to print.
#[instrument(level = "info", skip_all, fields(url = %config.archive_url))]
async fn run(args: &Cli, config: &ScraperConfig) -> Result<Report, Box<dyn Error>> {
    // Built first so a bad signature fails before any network traffic.
    let extractor = NewsExtractor::new(config)?;

    let markup = match &args.html_file {
        Some(path) => {
            info!(%path, "Reading page from file");
            tokio::fs::read_to_string(path).await?
        }
        None => {
            let fetcher = PageFetcher::new(config)?;
            match fetcher.fetch(&config.archive_url).await {
                FetchResult::Content(body) => body,
                FetchResult::Absent(failure) => {
                    warn!(%failure, "No page content; stopping");
                    return Ok(Report::Diagnostics(vec![Diagnostic::from(&failure)]));
                }
            }
        }
    };

    let extraction = extractor.extract(&markup);
    let lines = diagnostics::for_extraction(&extraction);
    if !lines.is_empty() {
        return Ok(Report::Diagnostics(lines));
    }

    Ok(Report::News(outputs::render(&extraction.news, args.format)?))
}
