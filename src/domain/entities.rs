//! Domain Entities
//!
//! A `Match` owns its two `TeamData` values outright; nothing else holds a
//! reference to them. Scores only change through the scoreboard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an active match. Unique among active matches only.
pub type MatchId = u64;

/// One side of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamData {
    pub name: String,
    pub score: u32,
}

impl TeamData {
    /// Creates a team with a zero score
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

/// A live match between a home and an away team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home_team: TeamData,
    pub away_team: TeamData,
}

impl Match {
    /// Creates a match at 0 - 0
    pub fn new(id: MatchId, home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            id,
            home_team: TeamData::new(home_team),
            away_team: TeamData::new(away_team),
        }
    }

    /// Sum of both scores, widened so it cannot overflow
    #[inline]
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_team.score) + u64::from(self.away_team.score)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team.name, self.home_team.score, self.away_team.name, self.away_team.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_starts_at_zero() {
        let m = Match::new(1, "Mexico", "Canada");
        assert_eq!(m.home_team.score, 0);
        assert_eq!(m.away_team.score, 0);
        assert_eq!(m.total_score(), 0);
    }

    #[test]
    fn test_total_score_does_not_overflow() {
        let mut m = Match::new(1, "A", "B");
        m.home_team.score = u32::MAX;
        m.away_team.score = u32::MAX;
        assert_eq!(m.total_score(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_display() {
        let mut m = Match::new(3, "Uruguay", "Italy");
        m.home_team.score = 6;
        m.away_team.score = 6;
        assert_eq!(m.to_string(), "Uruguay 6 - Italy 6");
    }

    #[test]
    fn test_serialize_shape() {
        let m = Match::new(7, "Spain", "Brazil");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["home_team"]["name"], "Spain");
        assert_eq!(json["away_team"]["score"], 0);
    }
}
