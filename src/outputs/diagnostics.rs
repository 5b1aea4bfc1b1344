//! Human-readable messages for runs that produce no news.
//!
//! A fetch failure yields exactly one message and stops the run. An empty
//! extraction always ends with [`Diagnostic::NoDataExtracted`]; when the page
//! had no news containers at all it is preceded by [`Diagnostic::NoNewsFound`].

use crate::models::Extraction;
use crate::scrapers::fetcher::FetchFailure;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    PageNotFound,
    UnexpectedStatus(u16),
    RequestFailed(String),
    NoNewsFound,
    NoDataExtracted,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::PageNotFound => write!(f, "Error 404: page not found"),
            Diagnostic::UnexpectedStatus(code) => write!(f, "Unexpected response status: {code}"),
            Diagnostic::RequestFailed(message) => write!(f, "Request failed: {message}"),
            Diagnostic::NoNewsFound => write!(f, "No news items were found on the page."),
            Diagnostic::NoDataExtracted => write!(f, "Could not extract any news data."),
        }
    }
}

impl From<&FetchFailure> for Diagnostic {
    fn from(failure: &FetchFailure) -> Self {
        match failure {
            FetchFailure::NotFound => Diagnostic::PageNotFound,
            FetchFailure::UnexpectedStatus(code) => Diagnostic::UnexpectedStatus(*code),
            FetchFailure::Transport(message) => Diagnostic::RequestFailed(message.clone()),
        }
    }
}

/// Messages to print for an extraction, in order. Empty when there is news to show.
pub fn for_extraction(extraction: &Extraction) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    if extraction.no_containers() {
        out.push(Diagnostic::NoNewsFound);
    }
    if extraction.news.is_empty() {
        out.push(Diagnostic::NoDataExtracted);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupedNews, NewsRecord};

    #[test]
    fn test_no_containers_reports_both() {
        let extraction = Extraction::default();
        assert_eq!(
            for_extraction(&extraction),
            vec![Diagnostic::NoNewsFound, Diagnostic::NoDataExtracted]
        );
    }

    #[test]
    fn test_only_incomplete_containers_reports_no_data() {
        let extraction = Extraction {
            containers: 3,
            news: GroupedNews::new(),
        };
        assert_eq!(
            for_extraction(&extraction),
            vec![Diagnostic::NoDataExtracted]
        );
    }

    #[test]
    fn test_news_present_reports_nothing() {
        let mut news = GroupedNews::new();
        news.push(
            "Politics",
            NewsRecord {
                title: "t".into(),
                link: "https://iz.ru/1".into(),
            },
        );
        let extraction = Extraction { containers: 1, news };
        assert!(for_extraction(&extraction).is_empty());
    }

    #[test]
    fn test_fetch_failure_messages() {
        assert_eq!(
            Diagnostic::from(&FetchFailure::NotFound).to_string(),
            "Error 404: page not found"
        );
        assert_eq!(
            Diagnostic::from(&FetchFailure::UnexpectedStatus(502)).to_string(),
            "Unexpected response status: 502"
        );
        assert_eq!(
            Diagnostic::from(&FetchFailure::Transport("timed out".into())).to_string(),
            "Request failed: timed out"
        );
    }

    #[test]
    fn test_diagnostics_are_distinct() {
        assert_ne!(
            Diagnostic::NoNewsFound.to_string(),
            Diagnostic::NoDataExtracted.to_string()
        );
    }
}
