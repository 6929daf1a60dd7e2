pub mod config;
pub mod error;
pub mod feed;
pub mod ai;
pub mod quiz;

pub use ai::Assistant;
pub use config::AppConfig;
pub use error::{Error, Result};
pub use feed::{Article, FeedAggregator, FeedFetcher};
