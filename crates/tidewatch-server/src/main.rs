use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tidewatch_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "tidewatch")]
#[command(author, version, about = "Ocean news digest, Q&A and quiz service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.config/tidewatch/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Fetch and print the current ocean news articles
    Feeds,
    /// Fetch articles and print an AI digest with a tip of the day
    Digest,
    /// Generate and print a quiz
    Quiz,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load(cli.config.as_deref())?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Some(Commands::Serve { port }) => commands::serve::run(&config, port).await,
        None => commands::serve::run(&config, None).await,
        Some(Commands::Feeds) => commands::feeds::run(&config).await,
        Some(Commands::Digest) => commands::digest::run(&config).await,
        Some(Commands::Quiz) => commands::quiz::run(&config).await,
    }
}
