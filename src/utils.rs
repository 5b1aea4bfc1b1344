//! Small helpers for log formatting and archive URLs.
//!
//! - String truncation for logging response bodies
//! - Wayback Machine snapshot timestamp parsing

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

static WAYBACK_TIMESTAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"web\.archive\.org/web/(\d{14})(?:[a-z_]{2,3})?/").unwrap());

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a char boundary) with an
/// ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Capture time of a Wayback Machine snapshot URL.
///
/// `https://web.archive.org/web/20230903112115/https://iz.ru/news` was
/// captured at 2023-09-03 11:21:15 UTC. Returns `None` for URLs that are
/// not archive snapshots or carry an impossible timestamp.
pub fn snapshot_time(url: &str) -> Option<NaiveDateTime> {
    let caps = WAYBACK_TIMESTAMP.captures(url)?;
    NaiveDateTime::parse_from_str(caps.get(1)?.as_str(), "%Y%m%d%H%M%S").ok()
}
