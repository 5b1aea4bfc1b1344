//! News listing extractor.
//!
//! Walks the repeated news containers of a listing page and pulls three
//! fields out of each one:
//!
//! | Field | Source |
//! |-------|--------|
//! | Section | text of the first `<a>` anywhere in the container |
//! | Title | text of the first element whose `class` attribute is exactly the title signature |
//! | Link | `href` of the anchor matching the link signature |
//!
//! A container missing its title or its link contributes nothing. Links
//! starting with a single `/` are prefixed with the site root, `//host`
//! links take the site root's scheme, and everything else is kept as
//! written.
//!
//! The signatures are tied to the markup of the archived page and are not
//! expected to survive a redesign of the site.

use crate::config::{ConfigError, ScraperConfig, Signature};
use crate::models::{Extraction, GroupedNews, NewsRecord};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

#[derive(Debug, Clone)]
pub struct NewsExtractor {
    container: Selector,
    section: Selector,
    title: Selector,
    title_signature: Signature,
    link: Selector,
    site_root: Url,
    fallback_section: String,
}

fn compile(name: &'static str, signature: &Signature) -> Result<Selector, ConfigError> {
    let css = signature.to_css();
    Selector::parse(&css).map_err(|e| ConfigError::Signature {
        name,
        signature: css.clone(),
        reason: e.to_string(),
    })
}

impl NewsExtractor {
    /// Compile the configured signatures into selectors.
    pub fn new(config: &ScraperConfig) -> Result<Self, ConfigError> {
        let sigs = &config.signatures;
        Ok(Self {
            container: compile("container", &sigs.container)?,
            section: compile("section", &Signature::new("a", ""))?,
            title: compile("title", &Signature::new(&sigs.title.tag_css(), ""))?,
            title_signature: sigs.title.clone(),
            link: compile("link", &sigs.link)?,
            site_root: config.site_root_url()?,
            fallback_section: config.fallback_section.clone(),
        })
    }

    /// Extract every valid news record from `markup`, grouped by section.
    #[instrument(level = "info", skip_all, fields(bytes = markup.len()))]
    pub fn extract(&self, markup: &str) -> Extraction {
        let document = Html::parse_document(markup);

        let mut news = GroupedNews::new();
        let mut containers = 0usize;
        for block in document.select(&self.container) {
            containers += 1;
            let section = self.section_label(block);
            match self.record(block) {
                Some(record) => news.push(&section, record),
                None => debug!(index = containers - 1, %section, "Skipping incomplete news block"),
            }
        }

        if containers == 0 {
            warn!("No news containers found on the page");
        } else {
            info!(
                containers,
                records = news.record_count(),
                sections = news.len(),
                "Extracted news"
            );
        }

        Extraction { containers, news }
    }

    fn section_label(&self, block: ElementRef<'_>) -> String {
        block
            .select(&self.section)
            .next()
            .map(element_text)
            .unwrap_or_else(|| self.fallback_section.clone())
    }

    /// Title and link of one container, or `None` when either is missing.
    fn record(&self, block: ElementRef<'_>) -> Option<NewsRecord> {
        let title = block
            .select(&self.title)
            .find(|el| {
                el.value()
                    .attr("class")
                    .is_some_and(|class| self.title_signature.matches_class_exactly(class))
            })
            .map(element_text)?;
        let href = block
            .select(&self.link)
            .next()
            .and_then(|a| a.value().attr("href"))?;

        if title.is_empty() || href.is_empty() {
            return None;
        }

        Some(NewsRecord {
            title,
            link: self.absolutize(href),
        })
    }

    /// Prefix a path-absolute href with the site root, verbatim; leave
    /// anything else untouched. Protocol-relative `//host/...` hrefs are
    /// joined so they pick up the site root's scheme.
    pub fn absolutize(&self, href: &str) -> String {
        if !href.starts_with('/') {
            return href.to_string();
        }
        if !href.starts_with("//") {
            return format!("{}{}", self.site_root.as_str().trim_end_matches('/'), href);
        }
        match self.site_root.join(href) {
            Ok(resolved) => resolved.to_string(),
            Err(e) => {
                debug!(%href, error = %e, "Could not resolve link against site root");
                href.to_string()
            }
        }
    }
}

/// Concatenated text of an element and its descendants, trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
