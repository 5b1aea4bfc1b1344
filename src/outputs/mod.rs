//! Rendering of extraction results and diagnostics for standard output.
//!
//! # Submodules
//!
//! - [`json`]: the grouped news as a pretty-printed JSON object
//! - [`text`]: the grouped news as an indented plain-text listing
//! - [`diagnostics`]: the one-line messages printed when there is nothing to show

pub mod diagnostics;
pub mod json;
pub mod text;

use crate::models::GroupedNews;
use clap::ValueEnum;

/// How the grouped news is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Render `news` in the requested format.
pub fn render(news: &GroupedNews, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => json::render_grouped(news),
        OutputFormat::Text => Ok(text::render_grouped(news)),
    }
}
