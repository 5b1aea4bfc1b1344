//! JSON rendering of grouped news.
//!
//! Section keys appear in the order they were first seen on the page:
//!
//! ```text
//! {
//!   "Политика": [
//!     { "title": "...", "link": "https://iz.ru/..." }
//!   ],
//!   "Спорт": [ ... ]
//! }
//! ```

use crate::models::GroupedNews;
use tracing::{debug, instrument};

#[instrument(level = "debug", skip_all, fields(sections = news.len()))]
pub fn render_grouped(news: &GroupedNews) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(news)?;
    debug!(bytes = json.len(), "Rendered JSON");
    Ok(json)
}
