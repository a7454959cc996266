//! Tests for ESPN payload deserialization and snapshot conversion

use super::*;
use serde_json::json;

fn league_payload() -> serde_json::Value {
    json!({
        "id": 12345,
        "seasonId": 2025,
        "scoringPeriodId": 3,
        "members": [
            {"id": "{AAA}", "displayName": "alpha_gm", "firstName": "Ann", "lastName": "Lee"},
            {"id": "{BBB}", "displayName": "bravo_gm"}
        ],
        "teams": [
            {
                "id": 1,
                "name": "Team Alpha",
                "owners": ["{AAA}"],
                "playoffSeed": 2,
                "waiverRank": 7,
                "record": {"overall": {"wins": 2, "losses": 0, "ties": 0, "pointsFor": 245.62}},
                "roster": {"entries": [
                    {
                        "playerId": 100,
                        "playerPoolEntry": {"player": {
                            "id": 100,
                            "fullName": "Patrick Mahomes",
                            "defaultPositionId": 1,
                            "proTeamId": 12,
                            "stats": [
                                {"seasonId": 2025, "scoringPeriodId": 1, "statSourceId": 0, "statSplitTypeId": 1, "appliedTotal": 18.5},
                                {"seasonId": 2025, "scoringPeriodId": 2, "statSourceId": 0, "statSplitTypeId": 1, "appliedTotal": 24.1},
                                {"seasonId": 2025, "scoringPeriodId": 0, "statSourceId": 0, "statSplitTypeId": 0, "appliedTotal": 42.6},
                                {"seasonId": 2025, "scoringPeriodId": 3, "statSourceId": 1, "statSplitTypeId": 1, "appliedTotal": 21.3},
                                {"seasonId": 2024, "scoringPeriodId": 17, "statSourceId": 0, "statSplitTypeId": 1, "appliedTotal": 30.0}
                            ]
                        }}
                    }
                ]}
            },
            {
                "id": 4,
                "location": "Bravo",
                "nickname": "Squad",
                "owners": ["{BBB}"],
                "playoffSeed": 0,
                "rankCalculatedFinal": 5,
                "waiverRank": 1,
                "record": {"overall": {"wins": 0, "losses": 2, "pointsFor": 180.0}}
            }
        ],
        "schedule": [
            {"id": 1, "matchupPeriodId": 1,
             "home": {"teamId": 1, "totalPoints": 120.5, "totalProjectedPointsLive": 118.0},
             "away": {"teamId": 4, "totalPoints": 95.25}},
            {"id": 2, "matchupPeriodId": 2,
             "home": {"teamId": 4, "totalPoints": 0.0}},
            {"id": 3, "matchupPeriodId": 3,
             "home": {"teamId": 4, "totalPoints": 84.0, "totalProjectedPointsLive": 90.5},
             "away": {"teamId": 1, "totalPoints": 125.12, "totalProjectedPointsLive": 122.0}}
        ]
    })
}

fn snapshot() -> LeagueSnapshot {
    let response: LeagueResponse = serde_json::from_value(league_payload()).unwrap();
    response
        .into_snapshot(LeagueId::new(12345), Season::new(2025))
        .unwrap()
}

#[test]
fn test_stat_source_matches_line() {
    let line: PlayerStatLine = serde_json::from_value(json!({
        "scoringPeriodId": 2, "statSourceId": 1, "statSplitTypeId": 1, "appliedTotal": 12.0
    }))
    .unwrap();
    assert!(StatSource::Projected.matches(&line));
    assert!(!StatSource::Actual.matches(&line));
    assert_eq!(StatSource::Actual.id(), 0);
}

#[test]
fn test_team_fields() {
    let snap = snapshot();
    assert_eq!(snap.teams.len(), 2);
    assert_eq!(snap.current_week, Week::new(3));

    let alpha = &snap.teams[0];
    assert_eq!(alpha.id, TeamId::new(1));
    assert_eq!(alpha.name, "Team Alpha");
    assert_eq!(alpha.owner, "Ann Lee");
    assert_eq!(alpha.record(), "2-0");
    assert_eq!(alpha.standing, 2);
    assert_eq!(alpha.waiver_rank, 7);
    assert_eq!(alpha.points_for, 245.62);
}

#[test]
fn test_team_name_and_standing_fallbacks() {
    let snap = snapshot();
    let bravo = &snap.teams[1];
    assert_eq!(bravo.name, "Bravo Squad");
    assert_eq!(bravo.owner, "bravo_gm");
    assert_eq!(bravo.standing, 5);
    assert!(bravo.roster.is_empty());
}

#[test]
fn test_player_points_use_latest_weekly_actual_and_current_projection() {
    let snap = snapshot();
    let player = &snap.teams[0].roster[0];
    assert_eq!(player.name, "Patrick Mahomes");
    assert_eq!(player.position, "QB");
    assert_eq!(player.pro_team, "KC");
    // Week 2 is the latest 2025 weekly actual; the season total and the
    // 2024 line are ignored.
    assert_eq!(player.points, 24.1);
    assert_eq!(player.projected_points, 21.3);
}

#[test]
fn test_player_without_stats_scores_zero() {
    let player: EspnPlayer = serde_json::from_value(json!({
        "id": 7,
        "defaultPositionId": 16,
        "proTeamId": 0
    }))
    .unwrap();
    assert_eq!(player.recent_points(Season::new(2025)), 0.0);
    assert_eq!(player.projected_points(Season::new(2025), Week::new(1)), 0.0);
}

#[test]
fn test_projection_falls_back_to_latest_projected_period() {
    let player: EspnPlayer = serde_json::from_value(json!({
        "id": 7,
        "stats": [
            {"scoringPeriodId": 4, "statSourceId": 1, "statSplitTypeId": 1, "appliedTotal": 9.0},
            {"scoringPeriodId": 6, "statSourceId": 1, "statSplitTypeId": 1, "appliedTotal": 11.5}
        ]
    }))
    .unwrap();
    assert_eq!(player.projected_points(Season::new(2025), Week::new(9)), 11.5);
    assert_eq!(player.projected_points(Season::new(2025), Week::new(4)), 9.0);
}

#[test]
fn test_schedule_skips_byes_and_keeps_order() {
    let snap = snapshot();
    assert_eq!(snap.schedule.len(), 2);

    let first = &snap.schedule[0];
    assert_eq!(first.week, Week::new(1));
    assert_eq!(first.home.team_id, TeamId::new(1));
    assert_eq!(first.home.projected, 118.0);
    assert_eq!(first.away.projected, 0.0);

    let second = &snap.schedule[1];
    assert_eq!(second.week, Week::new(3));
    assert_eq!(second.away.score, 125.12);
}

#[test]
fn test_empty_league_is_no_data() {
    let response: LeagueResponse = serde_json::from_value(json!({"teams": []})).unwrap();
    let result = response.into_snapshot(LeagueId::new(1), Season::new(2025));
    assert!(matches!(result, Err(FflError::NoData { provider: "ESPN" })));
}

#[test]
fn test_owner_falls_back_to_raw_id() {
    let team: EspnTeam = serde_json::from_value(json!({
        "id": 9,
        "owners": ["{ZZZ}"]
    }))
    .unwrap();
    assert_eq!(team.owner_label(&[]), "{ZZZ}");
    assert_eq!(team.display_name(), "Team 9");
}
