//! League-data provider: ESPN client, payload types, and pure projections.

pub mod compute;
pub mod http;
pub mod types;

use async_trait::async_trait;

use crate::{league::LeagueSnapshot, Result};

/// Anything that can produce a fresh [`LeagueSnapshot`] on demand.
#[async_trait]
pub trait LeagueProvider: Send + Sync {
    async fn fetch_league(&self) -> Result<LeagueSnapshot>;
}
