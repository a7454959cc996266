//! Response records for the league views.

pub mod output;

pub use output::{LeagueTeam, MatchupSummary, Projections, TeamOverview, TopPerformer};
