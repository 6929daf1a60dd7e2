mod aggregator;
mod fetcher;
mod models;
mod parser;
mod text;

pub use aggregator::{FeedAggregator, FeedReader};
pub use fetcher::FeedFetcher;
pub use models::{Article, RawFeedItem};
pub use parser::parse_feed;
pub use text::{plain_excerpt, strip_tags, truncate_chars};
