//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_comanager::{
    cli::{Commands, ESPN},
    commands::{get::handle_get, serve::handle_serve},
    config::{Config, LeagueConfig},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ffl_comanager=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = ESPN::parse();

    match app.command {
        Commands::Serve { league, serve } => {
            let config = Config::from_args(&league, &serve).context("invalid configuration")?;
            handle_serve(config).await?
        }

        Commands::Get { view, league } => {
            let config = LeagueConfig::from_args(&league).context("invalid configuration")?;
            handle_get(config, view).await?
        }
    }

    Ok(())
}
