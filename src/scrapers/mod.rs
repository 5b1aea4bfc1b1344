//! Fetching and extraction for the news listing page.
//!
//! The pipeline runs in two strictly sequential phases:
//!
//! 1. **Fetching**: [`fetcher::PageFetcher`] issues one GET for the listing
//!    page and classifies the response
//! 2. **Extraction**: [`listing::NewsExtractor`] walks the news containers
//!    and groups the valid records by section
//!
//! Both are built from a [`crate::config::ScraperConfig`], so tests can run
//! the extractor over fixture markup without touching the network.

pub mod fetcher;
pub mod listing;
