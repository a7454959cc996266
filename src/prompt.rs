//! System context for chat requests.

use clap::ValueEnum;

use crate::{
    cli::types::TeamIndex,
    completion::ChatMessage,
    espn::compute::configured_team,
    league::LeagueSnapshot,
    Result,
};

/// Instruction sent in [`ChatContextMode::Static`].
pub const STATIC_INSTRUCTION: &str = "You are a fantasy football co-manager. \
Answer questions about lineups, waivers, and trades concisely.";

/// How the system message of a chat exchange is built, fixed per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChatContextMode {
    /// Summarize every team plus the configured team's roster.
    #[default]
    League,
    /// A fixed instruction; the league is not fetched.
    Static,
}

impl ChatContextMode {
    pub fn needs_league(&self) -> bool {
        matches!(self, ChatContextMode::League)
    }
}

/// Render the league-aware system context.
pub fn league_context(snapshot: &LeagueSnapshot, index: TeamIndex) -> Result<String> {
    let my_team = configured_team(snapshot, index)?;

    let overview: String = snapshot
        .teams
        .iter()
        .map(|t| format!("{} ({}), {:.1} pts\n", t.name, t.record(), t.points_for))
        .collect();
    let roster: String = my_team
        .roster
        .iter()
        .map(|p| format!("{} - {} ({})\n", p.name, p.position, p.pro_team))
        .collect();

    Ok(format!(
        "You are a fantasy football co-manager.\n\
         Here is the current ESPN league data:\n\
         \n\
         League Overview:\n\
         {overview}\
         \n\
         My Team: {name}\n\
         Record: {record}, {points:.1} points for\n\
         Roster:\n\
         {roster}",
        name = my_team.name,
        record = my_team.record(),
        points = my_team.points_for,
    ))
}

/// The two-message exchange sent to the completion provider.
pub fn build_exchange(system_context: String, message: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(system_context), ChatMessage::user(message)]
}
