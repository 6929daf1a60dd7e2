use feed_rs::parser;

use super::models::RawFeedItem;
use crate::{Error, Result};

/// Parse RSS/Atom content into at most `max_items` raw entries, in feed order
pub fn parse_feed(content: &[u8], max_items: usize) -> Result<Vec<RawFeedItem>> {
    let feed = parser::parse(content)
        .map_err(|e| Error::FeedParse(e.to_string()))?;

    let items = feed.entries.into_iter().take(max_items).map(|entry| {
        let title = entry.title
            .map(|t| t.content)
            .unwrap_or_else(|| "Untitled".to_string());

        let link = entry.links.first().map(|l| l.href.clone()).unwrap_or_default();

        let snippet = entry.summary
            .map(|s| s.content)
            .or_else(|| entry.content.and_then(|c| c.body))
            .unwrap_or_default();

        RawFeedItem {
            title,
            link,
            snippet,
            published: entry.published,
            updated: entry.updated,
        }
    }).collect();

    Ok(items)
}
