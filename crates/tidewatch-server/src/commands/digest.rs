use anyhow::Result;

use tidewatch::AppState;
use tidewatch_core::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let state = AppState::from_config(config)?;

    println!("Fetching articles...");
    let articles = state.aggregator.aggregate().await;
    println!("Summarizing {} articles...\n", articles.len());

    let summary = state.assistant.summarize(&articles).await?;

    println!("{}\n", summary.digest);
    println!("Tip of the day: {}", summary.tip_of_the_day);

    Ok(())
}
