//! Command-line interface definitions.
//!
//! Every option is optional: running the binary with no arguments fetches
//! the default archive snapshot with the default headers and prints JSON.

use crate::outputs::OutputFormat;
use clap::Parser;

/// Extract section-grouped headlines from an archived news listing page.
///
/// # Examples
///
/// ```sh
/// # Fetch the default snapshot and print JSON
/// izvestia_news_digest
///
/// # Extract from a saved copy of the page as a plain-text listing
/// izvestia_news_digest --html-file ./news.html --format text
///
/// # Another snapshot, overriding signatures from a YAML file
/// izvestia_news_digest -c scraper.yaml --url https://web.archive.org/web/20231001000000/https://iz.ru/news
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML scraper configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Page to fetch (overrides `archive_url` from the config)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Read the page from a local HTML file instead of fetching it
    #[arg(long, conflicts_with = "url")]
    pub html_file: Option<String>,

    /// Request timeout in seconds (overrides `timeout_secs` from the config)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Output format for the extracted news
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
