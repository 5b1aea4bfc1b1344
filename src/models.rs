//! Data models for extracted news records.
//!
//! - [`NewsRecord`]: one headline with its absolute link
//! - [`GroupedNews`]: records grouped by section, in first-appearance order
//! - [`Extraction`]: the result of one extractor run over a page

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single news item taken from a listing container.
///
/// Only built when both fields were found; `title` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsRecord {
    /// The headline text, trimmed.
    pub title: String,
    /// The article link, absolutized against the site root when it was path-absolute.
    pub link: String,
}

/// News records grouped by section label.
///
/// Sections iterate in the order they were first seen while scanning the
/// page, and records within a section keep their document order. A section
/// exists only if it holds at least one record.
///
/// Serializes as a JSON object: `{"Politics": [{"title": ..., "link": ...}]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct GroupedNews(IndexMap<String, Vec<NewsRecord>>);

impl GroupedNews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its section, creating the section on first sight.
    pub fn push(&mut self, section: &str, record: NewsRecord) {
        match self.0.get_mut(section) {
            Some(records) => records.push(record),
            None => {
                self.0.insert(section.to_string(), vec![record]);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total number of records across all sections.
    pub fn record_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn get(&self, section: &str) -> Option<&[NewsRecord]> {
        self.0.get(section).map(Vec::as_slice)
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NewsRecord])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Outcome of running the extractor over one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// How many elements matched the container signature, valid or not.
    pub containers: usize,
    pub news: GroupedNews,
}

impl Extraction {
    pub fn no_containers(&self) -> bool {
        self.containers == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, link: &str) -> NewsRecord {
        NewsRecord {
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn test_push_groups_in_first_appearance_order() {
        let mut news = GroupedNews::new();
        news.push("Politics", record("a", "https://iz.ru/1"));
        news.push("Sport", record("b", "https://iz.ru/2"));
        news.push("Politics", record("c", "https://iz.ru/3"));

        assert_eq!(news.sections().collect::<Vec<_>>(), vec!["Politics", "Sport"]);
        assert_eq!(news.len(), 2);
        assert_eq!(news.record_count(), 3);
        let politics = news.get("Politics").unwrap();
        assert_eq!(politics[0].title, "a");
        assert_eq!(politics[1].title, "c");
    }

    #[test]
    fn test_empty_grouped_news() {
        let news = GroupedNews::new();
        assert!(news.is_empty());
        assert_eq!(news.record_count(), 0);
        assert!(news.get("Politics").is_none());
    }

    #[test]
    fn test_serialization_preserves_section_order() {
        let mut news = GroupedNews::new();
        news.push("Zeta", record("z", "https://iz.ru/z"));
        news.push("Alpha", record("a", "https://iz.ru/a"));

        let json = serde_json::to_string(&news).unwrap();
        assert_eq!(
            json,
            r#"{"Zeta":[{"title":"z","link":"https://iz.ru/z"}],"Alpha":[{"title":"a","link":"https://iz.ru/a"}]}"#
        );
    }

    #[test]
    fn test_deserialization_round_trip_keeps_order() {
        let json = r#"{"B":[{"title":"t","link":"l"}],"A":[]}"#;
        let news: GroupedNews = serde_json::from_str(json).unwrap();
        assert_eq!(news.sections().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn test_extraction_no_containers() {
        assert!(Extraction::default().no_containers());
        let extraction = Extraction {
            containers: 2,
            news: GroupedNews::new(),
        };
        assert!(!extraction.no_containers());
    }
}
