//! In-memory league snapshot.
//!
//! These are plain owned values built from one provider response. Nothing here
//! performs I/O, and nothing is kept between requests.

use crate::cli::types::{LeagueId, Season, TeamId, Week};

/// One fetch of a league's teams, rosters and schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSnapshot {
    pub league_id: LeagueId,
    pub season: Season,
    /// Scoring period ESPN considers current for the league.
    pub current_week: Week,
    /// Teams in provider order.
    pub teams: Vec<Team>,
    /// Head-to-head matchups in provider schedule order (byes excluded).
    pub schedule: Vec<Matchup>,
}

impl LeagueSnapshot {
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Team name for `id`, or the bare id when the team is no longer listed.
    pub fn team_name(&self, id: TeamId) -> String {
        self.team(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Team {}", id))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub owner: String,
    pub wins: u32,
    pub losses: u32,
    pub standing: u32,
    pub points_for: f64,
    pub waiver_rank: u32,
    /// Roster in provider order.
    pub roster: Vec<Player>,
}

impl Team {
    /// `W-L`, integer wins, a hyphen, integer losses.
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub position: String,
    pub pro_team: String,
    /// Actual points from the most recent scored period.
    pub points: f64,
    pub projected_points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub week: Week,
    pub home: MatchupSide,
    pub away: MatchupSide,
}

impl Matchup {
    /// The side `team` played on, if it played in this matchup at all.
    pub fn side_of(&self, team: TeamId) -> Option<&MatchupSide> {
        if self.home.team_id == team {
            Some(&self.home)
        } else if self.away.team_id == team {
            Some(&self.away)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchupSide {
    pub team_id: TeamId,
    pub score: f64,
    pub projected: f64,
}
