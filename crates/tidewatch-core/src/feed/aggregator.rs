use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::task::JoinSet;

use super::models::{Article, RawFeedItem};
use super::text::plain_excerpt;
use crate::config::{FeedSource, FeedsConfig};
use crate::Result;

/// Source of raw feed entries for one configured feed
#[async_trait::async_trait]
pub trait FeedReader: Send + Sync {
    async fn read(&self, source: &FeedSource) -> Result<Vec<RawFeedItem>>;
}

/// Pulls every configured source, keeps relevant recent entries, and ranks them newest first
pub struct FeedAggregator {
    reader: Arc<dyn FeedReader>,
    sources: Vec<FeedSource>,
    keywords: Vec<String>,
    max_age: Duration,
    max_articles: usize,
    max_content_chars: usize,
}

impl FeedAggregator {
    pub fn new(reader: Arc<dyn FeedReader>, config: &FeedsConfig) -> Result<Self> {
        Ok(Self {
            reader,
            sources: config.sources.clone(),
            keywords: config.keywords.iter().map(|k| k.to_lowercase()).collect(),
            max_age: config.max_age()?,
            max_articles: config.max_articles,
            max_content_chars: config.max_content_chars,
        })
    }

    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }

    pub async fn aggregate(&self) -> Vec<Article> {
        self.aggregate_at(Utc::now()).await
    }

    /// Aggregate relative to a fixed run time
    pub async fn aggregate_at(&self, now: DateTime<Utc>) -> Vec<Article> {
        let per_source = self.read_all().await;
        self.rank(per_source, now)
    }

    /// One task per source; a failed source yields an empty list in its slot
    async fn read_all(&self) -> Vec<Vec<RawFeedItem>> {
        let mut join_set = JoinSet::new();

        for (index, source) in self.sources.iter().cloned().enumerate() {
            let reader = Arc::clone(&self.reader);
            join_set.spawn(async move {
                let result = reader.read(&source).await;
                (index, source, result)
            });
        }

        let mut per_source = vec![Vec::new(); self.sources.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, source, Ok(mut items))) => {
                    items.truncate(source.max_items);
                    tracing::info!("Feed '{}': {} entries", source.url, items.len());
                    per_source[index] = items;
                }
                Ok((_, source, Err(e))) => {
                    tracing::warn!("Skipping feed '{}': {}", source.url, e);
                }
                Err(e) => {
                    tracing::warn!("Feed task failed: {}", e);
                }
            }
        }

        per_source
    }

    /// Filter, convert, merge in source order, and stable-sort newest first
    pub fn rank(&self, per_source: Vec<Vec<RawFeedItem>>, now: DateTime<Utc>) -> Vec<Article> {
        let mut articles: Vec<Article> = per_source
            .into_iter()
            .flatten()
            .filter(|item| self.is_relevant(item))
            .filter_map(|item| {
                let date = item.effective_date(now);
                self.is_recent(date, now).then(|| Article {
                    content: plain_excerpt(&item.snippet, self.max_content_chars),
                    title: item.title,
                    url: item.link,
                    date,
                })
            })
            .collect();

        articles.sort_by(|a, b| b.date.cmp(&a.date));
        articles.truncate(self.max_articles);

        tracing::debug!("Selected {} articles", articles.len());
        articles
    }

    /// Case-insensitive substring match against any keyword
    pub fn is_relevant(&self, item: &RawFeedItem) -> bool {
        let text = item.searchable_text();
        self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }

    fn is_recent(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(date) <= self.max_age
    }
}
