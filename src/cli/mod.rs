//! CLI argument definitions and parsing.
//!
//! Every setting can also come from the environment (or a `.env` file), which
//! is how the server is normally deployed.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use types::{LeagueId, Season, TeamIndex};

use crate::{completion::openai, espn::http::FFL_BASE_URL, prompt::ChatContextMode};

/// League selection shared by every command.
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// ESPN league ID.
    #[clap(long, env = "LEAGUE_ID")]
    pub league_id: LeagueId,

    /// Season year (e.g. 2025).
    #[clap(long, short, env = "SEASON_YEAR", default_value_t = Season::default())]
    pub season: Season,

    /// 1-based position of your team in the league's team list.
    #[clap(long, short, env = "TEAM_ID", default_value_t = TeamIndex::default())]
    pub team: TeamIndex,

    /// `espn_s2` cookie for private leagues (requires `--swid`).
    #[clap(long, env = "ESPN_S2", hide_env_values = true)]
    pub espn_s2: Option<String>,

    /// `SWID` cookie for private leagues (requires `--espn-s2`).
    #[clap(long, env = "SWID", hide_env_values = true)]
    pub swid: Option<String>,

    /// Override the ESPN fantasy API base URL.
    #[clap(long, env = "ESPN_BASE_URL", default_value = FFL_BASE_URL, hide = true)]
    pub espn_base_url: String,
}

/// HTTP server and completion-provider settings.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// API key for the chat completion provider.
    #[clap(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Chat completion model.
    #[clap(long, env = "OPENAI_MODEL", default_value = openai::DEFAULT_MODEL)]
    pub model: String,

    /// Chat completion API base URL.
    #[clap(long, env = "OPENAI_BASE_URL", default_value = openai::OPENAI_BASE_URL)]
    pub openai_base_url: String,

    /// System context sent with each chat message.
    #[clap(long, env = "CHAT_CONTEXT", value_enum, default_value_t = ChatContextMode::League)]
    pub chat_context: ChatContextMode,

    /// Interface to bind.
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[clap(long, short, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory holding `index.html`.
    #[clap(long, env = "TEMPLATE_DIR", default_value = "templates")]
    pub template_dir: PathBuf,
}

/// Read-only views, one per JSON endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    TeamOverview,
    TopPerformers,
    Projections,
    LeagueInfo,
    Matchups,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the dashboard and JSON API
    Serve {
        #[clap(flatten)]
        league: LeagueArgs,

        #[clap(flatten)]
        serve: ServeArgs,
    },

    /// Fetch the league once and print one view as JSON
    Get {
        /// Which view to print.
        #[clap(value_enum)]
        view: View,

        #[clap(flatten)]
        league: LeagueArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-comanager",
    about = "ESPN fantasy football dashboard with an AI co-manager"
)]
pub struct ESPN {
    #[clap(subcommand)]
    pub command: Commands,
}
