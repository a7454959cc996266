//! Fantasy football position types and ESPN pro team abbreviations.

use std::fmt;

/// Fantasy football player positions.
///
/// ESPN reports a player's natural position as `defaultPositionId`. A few ids
/// are aliases (QB is 0 or 1, TE is 4 or 6, K is 5 or 17).
///
/// # Examples
///
/// ```rust
/// use ffl_comanager::Position;
///
/// assert_eq!(Position::from_espn_id(1), Some(Position::QB));
/// assert_eq!(Position::DEF.to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DEF,
    K,
}

impl Position {
    /// Convert a single ESPN `defaultPositionId` to a Position.
    pub fn from_espn_id(id: i32) -> Option<Self> {
        match id {
            0 | 1 => Some(Position::QB),
            2 => Some(Position::RB),
            3 => Some(Position::WR),
            4 | 6 => Some(Position::TE),
            5 | 17 => Some(Position::K),
            16 => Some(Position::DEF),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DEF => "D/ST",
            Position::K => "K",
        };
        write!(f, "{}", s)
    }
}

/// Position label for an ESPN position id; unknown ids render as `UNK`.
pub fn position_label(default_position_id: i32) -> String {
    Position::from_espn_id(default_position_id)
        .map(|p| p.to_string())
        .unwrap_or_else(|| "UNK".to_string())
}

/// NFL team abbreviation for an ESPN `proTeamId`. 0 is a free agent.
pub fn pro_team_abbrev(pro_team_id: u32) -> &'static str {
    match pro_team_id {
        0 => "FA",
        1 => "ATL",
        2 => "BUF",
        3 => "CHI",
        4 => "CIN",
        5 => "CLE",
        6 => "DAL",
        7 => "DEN",
        8 => "DET",
        9 => "GB",
        10 => "TEN",
        11 => "IND",
        12 => "KC",
        13 => "LV",
        14 => "LAR",
        15 => "MIA",
        16 => "MIN",
        17 => "NE",
        18 => "NO",
        19 => "NYG",
        20 => "NYJ",
        21 => "PHI",
        22 => "ARI",
        23 => "PIT",
        24 => "LAC",
        25 => "SF",
        26 => "SEA",
        27 => "TB",
        28 => "WSH",
        29 => "CAR",
        30 => "JAX",
        33 => "BAL",
        34 => "HOU",
        _ => "UNK",
    }
}
