use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

impl Article {
    /// Parsed publication date, `None` when the feed gave something unreadable.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_pub_date(&self.pub_date)
    }

    /// Text handed to the summarizer: description, else title, else nothing.
    pub fn summary_source(&self) -> &str {
        if !self.description.trim().is_empty() {
            &self.description
        } else {
            &self.title
        }
    }
}

/// Parses the date formats seen in feeds and in rss2json output.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // rss2json normalizes to "YYYY-MM-DD HH:MM:SS" without an offset
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Sorts most recent first. Undated articles go last, ties keep their order.
pub fn sort_by_date_desc(articles: &mut [Article]) {
    articles.sort_by_cached_key(|article| std::cmp::Reverse(article.published_at()));
}
