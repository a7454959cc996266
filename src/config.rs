//! Process-wide configuration.
//!
//! Built once from the parsed command line (which falls back to environment
//! variables) and shared read-only for the life of the process.

use std::path::PathBuf;

use crate::{
    cli::{types::TeamIndex, LeagueArgs, ServeArgs},
    error::{FflError, Result},
    prompt::ChatContextMode,
    LeagueId, Season,
};

/// Private-league session cookies.
#[derive(Clone, PartialEq, Eq)]
pub struct EspnCredentials {
    pub espn_s2: String,
    pub swid: String,
}

impl std::fmt::Debug for EspnCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EspnCredentials")
            .field("espn_s2", &"<redacted>")
            .field("swid", &"<redacted>")
            .finish()
    }
}

impl EspnCredentials {
    /// Both cookies or neither; public leagues need none.
    pub fn from_parts(espn_s2: Option<&str>, swid: Option<&str>) -> Result<Option<Self>> {
        let espn_s2 = espn_s2.map(str::trim).filter(|s| !s.is_empty());
        let swid = swid.map(str::trim).filter(|s| !s.is_empty());
        match (espn_s2, swid) {
            (Some(espn_s2), Some(swid)) => Ok(Some(Self {
                espn_s2: espn_s2.to_string(),
                swid: swid.to_string(),
            })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(FflError::PartialCredentials {
                present: "ESPN_S2".to_string(),
            }),
            (None, Some(_)) => Err(FflError::PartialCredentials {
                present: "SWID".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeagueConfig {
    pub league_id: LeagueId,
    pub season: Season,
    pub team_index: TeamIndex,
    pub credentials: Option<EspnCredentials>,
    pub espn_base_url: String,
}

impl LeagueConfig {
    pub fn from_args(args: &LeagueArgs) -> Result<Self> {
        Ok(Self {
            league_id: args.league_id,
            season: args.season,
            team_index: args.team,
            credentials: EspnCredentials::from_parts(
                args.espn_s2.as_deref(),
                args.swid.as_deref(),
            )?,
            espn_base_url: args.espn_base_url.clone(),
        })
    }
}

#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub template_dir: PathBuf,
    pub chat_context: ChatContextMode,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Everything `serve` needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub league: LeagueConfig,
    pub completion: CompletionConfig,
    pub server: ServerConfig,
}

impl Config {
    pub fn from_args(league: &LeagueArgs, serve: &ServeArgs) -> Result<Self> {
        let api_key = serve
            .openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| FflError::MissingSetting {
                name: "OPENAI_API_KEY".to_string(),
            })?;

        let model = serve.model.trim();
        if model.is_empty() {
            return Err(FflError::MissingSetting {
                name: "OPENAI_MODEL".to_string(),
            });
        }

        Ok(Self {
            league: LeagueConfig::from_args(league)?,
            completion: CompletionConfig {
                api_key: api_key.to_string(),
                model: model.to_string(),
                base_url: serve.openai_base_url.clone(),
            },
            server: ServerConfig {
                host: serve.host.clone(),
                port: serve.port,
                template_dir: serve.template_dir.clone(),
                chat_context: serve.chat_context,
            },
        })
    }
}
