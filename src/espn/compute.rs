//! Projections from a [`LeagueSnapshot`] into response records.
//!
//! All functions are pure: same snapshot in, same records out.

use std::cmp::Ordering;

use crate::{
    cli::types::TeamIndex,
    league::{LeagueSnapshot, Team},
    models::{LeagueTeam, MatchupSummary, Projections, TeamOverview, TopPerformer},
    Result,
};


/// How many players `top_performers` returns at most.
pub const TOP_PERFORMER_COUNT: usize = 3;

pub fn configured_team(snapshot: &LeagueSnapshot, index: TeamIndex) -> Result<&Team> {
    index.select(&snapshot.teams)
}

pub fn team_overview(snapshot: &LeagueSnapshot, index: TeamIndex) -> Result<TeamOverview> {
    let team = configured_team(snapshot, index)?;
    Ok(TeamOverview {
        name: team.name.clone(),
        record: team.record(),
        standing: team.standing,
        points_for: team.points_for,
        waiver_rank: team.waiver_rank,
    })
}

/// Highest recent scorers on the configured team, best first.
///
/// The sort is stable, so players tied on points keep roster order.
pub fn top_performers(
    snapshot: &LeagueSnapshot,
    index: TeamIndex,
    limit: usize,
) -> Result<Vec<TopPerformer>> {
    let team = configured_team(snapshot, index)?;

    let mut players: Vec<_> = team.roster.iter().collect();
    // `-0.0` and `0.0` compare equal, so they keep roster order too.
    players.sort_by(|a, b| b.points.partial_cmp(&a.points).unwrap_or(Ordering::Equal));

    Ok(players
        .into_iter()
        .take(limit)
        .map(|p| TopPerformer {
            name: p.name.clone(),
            position: p.position.clone(),
            team: p.pro_team.clone(),
            last_week: p.points,
            proj: p.projected_points,
        })
        .collect())
}

/// Actual vs projected score for every matchup the configured team plays,
/// in schedule order.
pub fn projections(snapshot: &LeagueSnapshot, index: TeamIndex) -> Result<Projections> {
    let team = configured_team(snapshot, index)?;

    let mut out = Projections::default();
    for matchup in &snapshot.schedule {
        if let Some(side) = matchup.side_of(team.id) {
            out.weeks.push(matchup.week.label());
            out.actuals.push(side.score);
            out.projected.push(side.projected);
        }
    }
    Ok(out)
}

pub fn league_info(snapshot: &LeagueSnapshot) -> Vec<LeagueTeam> {
    snapshot
        .teams
        .iter()
        .map(|t| LeagueTeam {
            id: t.id.as_u32(),
            name: t.name.clone(),
            owner: t.owner.clone(),
            record: t.record(),
            points_for: t.points_for,
            standing: t.standing,
        })
        .collect()
}

pub fn matchups(snapshot: &LeagueSnapshot) -> Vec<MatchupSummary> {
    snapshot
        .schedule
        .iter()
        .map(|m| MatchupSummary {
            week: m.week.as_u16(),
            home: snapshot.team_name(m.home.team_id),
            home_score: m.home.score,
            away: snapshot.team_name(m.away.team_id),
            away_score: m.away.score,
        })
        .collect()
}
