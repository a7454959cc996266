//! `serve` command implementation

use tracing::info;

use crate::{
    api::{self, AppState},
    config::Config,
    Result,
};

/// Bind the listener and serve the dashboard until the process is stopped.
pub async fn handle_serve(config: Config) -> Result<()> {
    let state = AppState::from_config(&config)?;
    let router = api::create_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        %addr,
        league_id = %config.league.league_id,
        season = %config.league.season,
        team = %config.league.team_index,
        chat_context = ?config.server.chat_context,
        private_league = config.league.credentials.is_some(),
        "serving fantasy co-manager"
    );

    axum::serve(listener, router).await?;
    Ok(())
}
