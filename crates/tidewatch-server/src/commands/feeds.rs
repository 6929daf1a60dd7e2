use std::sync::Arc;

use anyhow::Result;

use tidewatch_core::{AppConfig, FeedAggregator, FeedFetcher};

pub async fn run(config: &AppConfig) -> Result<()> {
    let fetcher = FeedFetcher::new(&config.feeds)?;
    let aggregator = FeedAggregator::new(Arc::new(fetcher), &config.feeds)?;

    println!("Fetching {} feeds...\n", aggregator.sources().len());

    let articles = aggregator.aggregate().await;

    if articles.is_empty() {
        println!("No recent ocean news found.");
        return Ok(());
    }

    println!("Articles ({}):\n", articles.len());

    for article in &articles {
        println!("  {}", article.title);
        println!("    {}", article.url);
        println!("    Published: {}", article.date.format("%Y-%m-%d %H:%M"));
        println!();
    }

    Ok(())
}
