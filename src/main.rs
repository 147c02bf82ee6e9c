use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

use restock_watcher::{web, AppConfig, StockPoller};

#[derive(Debug, Parser)]
#[command(name = "restock-watcher", version, about)]
struct Cli {
    /// TOML file layered over the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a single poll pass and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so RUST_LOG set there reaches the filter
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("restock_watcher=debug".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    for setting in config.missing_settings() {
        warn!("Missing {}; requests depending on it will fail", setting);
    }

    let poller = Arc::new(StockPoller::from_config(&config)?);

    if cli.once {
        let summary = poller.poll_once().await;
        info!(?summary, "Single pass finished");
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    info!("Starting background stock checker...");
    let poll_task = tokio::spawn({
        let poller = Arc::clone(&poller);
        let shutdown = shutdown_rx.clone();
        async move { poller.run(shutdown).await }
    });

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for shutdown signal: {}", e);
            // Keep the sender alive so the poller and server keep running
            std::future::pending::<()>().await;
        }
        info!("Shutting down...");
        let _ = shutdown_tx.send(true);
    });

    web::serve(&config.server, shutdown_rx).await?;
    poll_task.await?;

    Ok(())
}
