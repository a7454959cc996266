//! Output models used for printing and JSON serialization.

use serde::Serialize;

/// `GET /api/team-overview`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamOverview {
    pub name: String,
    /// `W-L`
    pub record: String,
    pub standing: u32,
    pub points_for: f64,
    pub waiver_rank: u32,
}

/// One entry of `GET /api/top-performers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub name: String,
    pub position: String,
    /// NFL team abbreviation.
    pub team: String,
    pub last_week: f64,
    pub proj: f64,
}

/// `GET /api/projections`: three parallel arrays, one slot per matchup the
/// configured team plays in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Projections {
    pub weeks: Vec<String>,
    pub actuals: Vec<f64>,
    pub projected: Vec<f64>,
}

/// One entry of `GET /api/league-info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueTeam {
    pub id: u32,
    pub name: String,
    pub owner: String,
    pub record: String,
    pub points_for: f64,
    pub standing: u32,
}

/// One entry of `GET /api/matchups`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupSummary {
    pub week: u16,
    pub home: String,
    pub home_score: f64,
    pub away: String,
    pub away_score: f64,
}
