//! ID types for ESPN Fantasy Football.

use crate::error::{FflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for ESPN Fantasy Football League IDs.
///
/// # Examples
///
/// ```rust
/// use ffl_comanager::LeagueId;
///
/// let league_id = LeagueId::new(505229264);
/// assert_eq!(league_id.as_u32(), 505229264);
/// assert_eq!(league_id.to_string(), "505229264");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// ESPN's numeric id for a fantasy team within one league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based position of the configured team in the provider's team order.
///
/// Not a [`TeamId`]. ESPN team ids can have gaps once teams leave a league;
/// the index always counts the current teams.
///
/// ```rust
/// use ffl_comanager::TeamIndex;
///
/// let idx: TeamIndex = "8".parse().unwrap();
/// assert_eq!(idx.get(), 8);
/// assert_eq!(idx.offset(), 7);
/// assert!("0".parse::<TeamIndex>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamIndex(usize);

impl TeamIndex {
    pub fn new(index: usize) -> Result<Self> {
        if index == 0 {
            return Err(FflError::InvalidTeamIndex {
                value: index.to_string(),
            });
        }
        Ok(Self(index))
    }

    /// The 1-based value as configured.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Zero-based offset into a team collection.
    pub fn offset(&self) -> usize {
        self.0 - 1
    }

    /// Look the configured team up in `teams`, failing rather than clamping
    /// when the league has fewer teams than the index.
    pub fn select<'a, T>(&self, teams: &'a [T]) -> Result<&'a T> {
        teams
            .get(self.offset())
            .ok_or(FflError::TeamIndexOutOfRange {
                index: self.0,
                team_count: teams.len(),
            })
    }
}

impl Default for TeamIndex {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for TeamIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamIndex {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        let value: usize = s.trim().parse().map_err(|_| FflError::InvalidTeamIndex {
            value: s.to_string(),
        })?;
        Self::new(value)
    }
}
