//! `get` command implementation

use serde::Serialize;

use crate::{
    cli::View,
    config::LeagueConfig,
    espn::{
        compute::{self, TOP_PERFORMER_COUNT},
        http::EspnClient,
        LeagueProvider,
    },
    league::LeagueSnapshot,
    Result,
};


/// Render one view of `snapshot` as pretty JSON, exactly as the matching
/// endpoint would serialize it.
pub fn render_view(snapshot: &LeagueSnapshot, config: &LeagueConfig, view: View) -> Result<String> {
    let idx = config.team_index;
    match view {
        View::TeamOverview => to_json(&compute::team_overview(snapshot, idx)?),
        View::TopPerformers => to_json(&compute::top_performers(
            snapshot,
            idx,
            TOP_PERFORMER_COUNT,
        )?),
        View::Projections => to_json(&compute::projections(snapshot, idx)?),
        View::LeagueInfo => to_json(&compute::league_info(snapshot)),
        View::Matchups => to_json(&compute::matchups(snapshot)),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Handle the get command
pub async fn handle_get(config: LeagueConfig, view: View) -> Result<()> {
    let client = EspnClient::with_base_url(
        &config.espn_base_url,
        config.league_id,
        config.season,
        config.credentials.as_ref(),
    )?;

    // tarpaulin::skip - HTTP call, tested via the client's mock tests
    let snapshot = client.fetch_league().await?;
    println!("{}", render_view(&snapshot, &config, view)?);

    Ok(())
}
