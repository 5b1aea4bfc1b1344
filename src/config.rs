//! Scraper configuration.
//!
//! Everything that identifies the page and the markup shape lives here:
//! the archive URL, the site root used to absolutize links, the request
//! headers, the timeout, and the tag/class signatures of the elements the
//! extractor looks for. The defaults reproduce the September 2023 snapshot
//! of the iz.ru news listing.
//!
//! A YAML file may override any subset of the fields:
//!
//! ```yaml
//! archive_url: "https://web.archive.org/web/20230903112115/https://iz.ru/news"
//! timeout_secs: 5
//! signatures:
//!   title:
//!     tag: div
//!     classes: "node__cart__item__inside__info__title small-title-style1"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_ARCHIVE_URL: &str =
    "https://web.archive.org/web/20230903112115/https://iz.ru/news";
pub const DEFAULT_SITE_ROOT: &str = "https://iz.ru";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/127.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FALLBACK_SECTION: &str = "No section";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("invalid site root {0:?}: {1}")]
    SiteRoot(String, url::ParseError),
    #[error("invalid {name} signature {signature:?}: {reason}")]
    Signature {
        name: &'static str,
        signature: String,
        reason: String,
    },
    #[error("invalid request header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// An element signature: a tag name plus the class tokens the element must
/// carry.
///
/// Containers and links match as a token set ([`Signature::to_css`]): order
/// does not matter and extra classes are allowed. Titles match the whole
/// class string exactly ([`Signature::matches_class_exactly`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Signature {
    pub tag: String,
    /// Whitespace-separated class tokens, as they appear in the `class` attribute.
    #[serde(default)]
    pub classes: String,
}

impl Signature {
    pub fn new(tag: &str, classes: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: classes.to_string(),
        }
    }

    /// Render the signature as a compound CSS selector, e.g.
    /// `div` + `"a b"` becomes `div.a.b`.
    pub fn to_css(&self) -> String {
        let mut css = self.tag.trim().to_string();
        for class in self.classes.split_whitespace() {
            css.push('.');
            css.push_str(class);
        }
        css
    }

    /// CSS selector for the tag alone, used together with
    /// [`Signature::matches_class_exactly`].
    pub fn tag_css(&self) -> String {
        self.tag.trim().to_string()
    }

    /// Whether a `class` attribute carries exactly these tokens in this
    /// order, nothing more. Runs of whitespace compare as one separator.
    pub fn matches_class_exactly(&self, class_attr: &str) -> bool {
        class_attr
            .split_whitespace()
            .eq(self.classes.split_whitespace())
    }
}

/// The three signatures the news extractor matches against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Signatures {
    /// The repeated block holding one news item.
    pub container: Signature,
    /// The headline element inside a container.
    pub title: Signature,
    /// The anchor carrying the article link inside a container.
    pub link: Signature,
}

impl Default for Signatures {
    fn default() -> Self {
        Self {
            container: Signature::new("div", "node__cart__item show_views_and_comments"),
            title: Signature::new(
                "div",
                "node__cart__item__inside__info__title small-title-style1",
            ),
            link: Signature::new("a", "node__cart__item__inside"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Page to fetch.
    pub archive_url: String,
    /// Origin that path-absolute links are resolved against.
    pub site_root: String,
    pub user_agent: String,
    pub accept_language: String,
    pub timeout_secs: u64,
    /// Section label for containers that hold no anchor at all.
    pub fallback_section: String,
    pub signatures: Signatures,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            site_root: DEFAULT_SITE_ROOT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fallback_section: DEFAULT_FALLBACK_SECTION.to_string(),
            signatures: Signatures::default(),
        }
    }
}

impl ScraperConfig {
    /// Load a configuration from a YAML file. Missing fields keep their defaults.
    #[instrument(level = "info", skip_all, fields(%path))]
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(Path::new(path)).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        info!(archive_url = %config.archive_url, "Loaded scraper configuration");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a defaulted struct.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    pub fn site_root_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.site_root)
            .map_err(|e| ConfigError::SiteRoot(self.site_root.clone(), e))
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
