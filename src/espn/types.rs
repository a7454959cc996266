//! Deserialization targets for the ESPN v3 league payload
//! (`view=mTeam&view=mRoster&view=mMatchupScore`) and their conversion into a
//! [`LeagueSnapshot`].

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{
        position::{position_label, pro_team_abbrev},
        LeagueId, Season, TeamId, Week,
    },
    error::{FflError, Result},
    league::{LeagueSnapshot, Matchup, MatchupSide, Player, Team},
};

#[cfg(test)]
mod tests;

/// `statSplitTypeId` for a single scoring period.
pub const STAT_SPLIT_WEEKLY: u8 = 1;

/// Which `statSourceId` a stat line carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSource {
    /// Game results, `statSourceId = 0`.
    Actual,
    /// ESPN projection, `statSourceId = 1`.
    Projected,
}

impl StatSource {
    pub fn id(self) -> u8 {
        match self {
            StatSource::Actual => 0,
            StatSource::Projected => 1,
        }
    }

    pub fn matches(self, line: &PlayerStatLine) -> bool {
        line.stat_source_id == self.id()
    }
}

/// Top-level envelope for the league endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueResponse {
    #[serde(rename = "scoringPeriodId", default)]
    pub scoring_period_id: u16,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub teams: Vec<EspnTeam>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
}

/// League member; team `owners` reference these ids.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Member {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

impl Member {
    fn label(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => self.display_name.clone().unwrap_or_else(|| self.id.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EspnTeam {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(rename = "playoffSeed", default)]
    pub playoff_seed: Option<u32>,
    #[serde(rename = "rankCalculatedFinal", default)]
    pub rank_calculated_final: Option<u32>,
    #[serde(rename = "waiverRank", default)]
    pub waiver_rank: u32,
    #[serde(default)]
    pub record: TeamRecord,
    #[serde(default)]
    pub roster: Roster,
}

impl EspnTeam {
    /// Older leagues have no `name`, only `location` + `nickname`.
    fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => {
                let parts: Vec<&str> = [self.location.as_deref(), self.nickname.as_deref()]
                    .into_iter()
                    .flatten()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect();
                if parts.is_empty() {
                    format!("Team {}", self.id)
                } else {
                    parts.join(" ")
                }
            }
        }
    }

    fn owner_label(&self, members: &[Member]) -> String {
        self.owners
            .iter()
            .find_map(|owner| members.iter().find(|m| &m.id == owner))
            .map(Member::label)
            .or_else(|| self.owners.first().cloned())
            .unwrap_or_default()
    }

    fn standing(&self) -> u32 {
        match (self.playoff_seed, self.rank_calculated_final) {
            (Some(seed), _) if seed > 0 => seed,
            (_, Some(rank)) => rank,
            (Some(seed), None) => seed,
            (None, None) => 0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub overall: RecordLine,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecordLine {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(rename = "pointsFor", default)]
    pub points_for: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Roster {
    #[serde(default)]
    pub entries: Vec<RosterSlot>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterSlot {
    #[serde(rename = "playerId", default)]
    pub player_id: u64,
    #[serde(rename = "playerPoolEntry")]
    pub player_pool_entry: PlayerPoolEntry,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerPoolEntry {
    pub player: EspnPlayer,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EspnPlayer {
    pub id: u64,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: i32,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: u32,
    #[serde(default)]
    pub stats: Vec<PlayerStatLine>,
}

/// One stat line; only the applied fantasy total is needed here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerStatLine {
    #[serde(rename = "seasonId", default)]
    pub season_id: Option<u16>,
    #[serde(rename = "scoringPeriodId", default)]
    pub scoring_period_id: u16,
    #[serde(rename = "statSourceId")]
    pub stat_source_id: u8,
    #[serde(rename = "statSplitTypeId", default)]
    pub stat_split_type_id: u8,
    #[serde(rename = "appliedTotal", default)]
    pub applied_total: f64,
}

impl EspnPlayer {
    fn weekly_lines(&self, season: Season, source: StatSource) -> impl Iterator<Item = &PlayerStatLine> {
        self.stats.iter().filter(move |s| {
            source.matches(s)
                && s.stat_split_type_id == STAT_SPLIT_WEEKLY
                && s.scoring_period_id > 0
                && s.season_id.map_or(true, |id| id == season.as_u16())
        })
    }

    /// Actual points of the latest scored period, 0.0 before any games.
    pub fn recent_points(&self, season: Season) -> f64 {
        self.weekly_lines(season, StatSource::Actual)
            .max_by_key(|s| s.scoring_period_id)
            .map(|s| s.applied_total)
            .unwrap_or(0.0)
    }

    /// Projection for `current`, else the latest projected period.
    pub fn projected_points(&self, season: Season, current: Week) -> f64 {
        let lines: Vec<&PlayerStatLine> =
            self.weekly_lines(season, StatSource::Projected).collect();
        lines
            .iter()
            .find(|s| s.scoring_period_id == current.as_u16())
            .or_else(|| lines.iter().max_by_key(|s| s.scoring_period_id))
            .map(|s| s.applied_total)
            .unwrap_or(0.0)
    }

    fn into_player(self, season: Season, current: Week) -> Player {
        Player {
            points: self.recent_points(season),
            projected_points: self.projected_points(season, current),
            name: self
                .full_name
                .clone()
                .unwrap_or_else(|| format!("Player {}", self.id)),
            position: position_label(self.default_position_id),
            pro_team: pro_team_abbrev(self.pro_team_id).to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleItem {
    #[serde(rename = "matchupPeriodId")]
    pub matchup_period_id: u16,
    #[serde(default)]
    pub home: Option<ScheduleSide>,
    /// Absent on bye weeks.
    #[serde(default)]
    pub away: Option<ScheduleSide>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleSide {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "totalPoints", default)]
    pub total_points: f64,
    #[serde(rename = "totalProjectedPointsLive", default)]
    pub total_projected_points_live: Option<f64>,
}

impl From<ScheduleSide> for MatchupSide {
    fn from(side: ScheduleSide) -> Self {
        MatchupSide {
            team_id: side.team_id,
            score: side.total_points,
            projected: side.total_projected_points_live.unwrap_or(0.0),
        }
    }
}

impl LeagueResponse {
    /// Build the snapshot handlers project from. A league with no teams is
    /// treated as a bad upstream answer rather than an empty league.
    pub fn into_snapshot(self, league_id: LeagueId, season: Season) -> Result<LeagueSnapshot> {
        if self.teams.is_empty() {
            return Err(FflError::NoData { provider: "ESPN" });
        }

        let current_week = Week::new(self.scoring_period_id);
        let members = self.members;

        let teams = self
            .teams
            .into_iter()
            .map(|t| {
                let name = t.display_name();
                let owner = t.owner_label(&members);
                let standing = t.standing();
                Team {
                    id: t.id,
                    name,
                    owner,
                    wins: t.record.overall.wins,
                    losses: t.record.overall.losses,
                    standing,
                    points_for: t.record.overall.points_for,
                    waiver_rank: t.waiver_rank,
                    roster: t
                        .roster
                        .entries
                        .into_iter()
                        .map(|e| e.player_pool_entry.player.into_player(season, current_week))
                        .collect(),
                }
            })
            .collect();

        let schedule = self
            .schedule
            .into_iter()
            .filter_map(|item| match (item.home, item.away) {
                (Some(home), Some(away)) => Some(Matchup {
                    week: Week::new(item.matchup_period_id),
                    home: home.into(),
                    away: away.into(),
                }),
                _ => None,
            })
            .collect();

        Ok(LeagueSnapshot {
            league_id,
            season,
            current_week,
            teams,
            schedule,
        })
    }
}
