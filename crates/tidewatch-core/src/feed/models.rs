use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A relevant, recent news item ready to be shown and summarized
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub title: String,
    pub url: String,
    /// Plain text, tags stripped, length-capped
    pub content: String,
    /// RFC 3339 or RFC 2822 on input; anything else reads as the current time
    #[serde(default = "Utc::now", deserialize_with = "lenient_date")]
    pub date: DateTime<Utc>,
}

/// Parse a feed-style timestamp, RFC 3339 first and then RFC 2822
fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    DateTime::parse_from_rfc3339(input)
        .or_else(|_| DateTime::parse_from_rfc2822(input))
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(parse_date)
        .unwrap_or_else(Utc::now))
}

/// One entry as read from a feed, before filtering
#[derive(Debug, Clone, Default)]
pub struct RawFeedItem {
    pub title: String,
    pub link: String,
    /// Entry summary, falling back to the content body
    pub snippet: String,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

impl RawFeedItem {
    /// Publication time, then update time, then `now`
    pub fn effective_date(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.published.or(self.updated).unwrap_or(now)
    }

    /// Lowercased title and snippet, the text keywords are matched against
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.snippet).to_lowercase()
    }
}
