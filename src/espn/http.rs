use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, COOKIE},
    Client,
};
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season},
    config::EspnCredentials,
    espn::{types::LeagueResponse, LeagueProvider},
    league::LeagueSnapshot,
    Result,
};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Views requested for every league fetch: teams, rosters, and scored schedule.
pub const LEAGUE_VIEWS: [&str; 3] = ["mTeam", "mRoster", "mMatchupScore"];

/// Build request headers, adding the `SWID`/`espn_s2` cookie for private leagues.
pub fn league_headers(credentials: Option<&EspnCredentials>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(creds) = credentials {
        let cookie = format!("SWID={}; espn_s2={}", creds.swid, creds.espn_s2);
        let mut value = HeaderValue::from_str(&cookie)?;
        value.set_sensitive(true);
        h.insert(COOKIE, value);
    }
    Ok(h)
}

/// League-data provider backed by the ESPN fantasy API.
///
/// Each call to [`LeagueProvider::fetch_league`] issues one request; nothing
/// is cached between calls.
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
    league_id: LeagueId,
    season: Season,
    headers: HeaderMap,
}

impl EspnClient {
    pub fn with_base_url(
        base_url: &str,
        league_id: LeagueId,
        season: Season,
        credentials: Option<&EspnCredentials>,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ffl-comanager/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            league_id,
            season,
            headers: league_headers(credentials)?,
        })
    }

    pub fn league_url(&self) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, self.season, self.league_id
        )
    }

    /// Fetch the raw league payload.
    pub async fn get_league(&self) -> Result<LeagueResponse> {
        let url = self.league_url();
        let params: Vec<(&str, &str)> = LEAGUE_VIEWS.iter().map(|v| ("view", *v)).collect();

        debug!(%url, league_id = %self.league_id, season = %self.season, "fetching ESPN league");

        let res = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<LeagueResponse>()
            .await?;

        Ok(res)
    }
}

#[async_trait]
impl LeagueProvider for EspnClient {
    async fn fetch_league(&self) -> Result<LeagueSnapshot> {
        self.get_league()
            .await?
            .into_snapshot(self.league_id, self.season)
    }
}
