//! In-Memory Scoreboard
//!
//! Active matches live in a `Vec` kept in insertion order. Every lookup is a
//! linear scan; boards hold a handful of matches.
//!
//! Ids are `max(active ids) + 1`, or 1 on an empty board. This is not a
//! monotonic counter: finishing the highest-id match frees its id for the
//! next `start_match`.

use super::traits::Scoreboard;
use crate::domain::entities::{Match, MatchId};
use crate::domain::error::ScoreboardError;
use crate::domain::validation::{validate_score, validate_team_name};

#[derive(Debug, Clone, Default)]
pub struct InMemoryScoreboard {
    matches: Vec<Match>,
}

impl InMemoryScoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active matches in insertion order
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    fn next_id(&self) -> MatchId {
        self.matches.iter().map(|m| m.id).max().map_or(1, |max| max + 1)
    }

    fn position(&self, id: MatchId) -> Option<usize> {
        self.matches.iter().position(|m| m.id == id)
    }
}

impl Scoreboard for InMemoryScoreboard {
    fn start_match(
        &mut self,
        home_team: &str,
        away_team: &str,
    ) -> Result<MatchId, ScoreboardError> {
        validate_team_name("home_team", home_team)?;
        validate_team_name("away_team", away_team)?;

        let id = self.next_id();
        self.matches.push(Match::new(id, home_team, away_team));
        tracing::debug!(id, home_team, away_team, "match started");

        Ok(id)
    }

    fn finish_match(&mut self, id: MatchId) -> bool {
        match self.position(id) {
            Some(index) => {
                // `remove`, not `swap_remove`: insertion order must survive
                self.matches.remove(index);
                tracing::debug!(id, "match finished");
                true
            }
            None => {
                tracing::debug!(id, "finish ignored, no active match");
                false
            }
        }
    }

    fn update_score(
        &mut self,
        id: MatchId,
        home_score: i64,
        away_score: i64,
    ) -> Result<(), ScoreboardError> {
        let home_score = validate_score("home_score", home_score)?;
        let away_score = validate_score("away_score", away_score)?;

        let Some(index) = self.position(id) else {
            tracing::debug!(id, "score update ignored, no active match");
            return Ok(());
        };

        let game = &mut self.matches[index];
        game.home_team.score = home_score;
        game.away_team.score = away_score;
        tracing::debug!(id, home_score, away_score, "score updated");

        Ok(())
    }

    fn summary(&self) -> Vec<Match> {
        let mut ranked = self.matches.clone();
        ranked.sort_by(|a, b| {
            b.total_score()
                .cmp(&a.total_score())
                .then_with(|| b.id.cmp(&a.id))
        });
        ranked
    }

    fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    fn len(&self) -> usize {
        self.matches.len()
    }
}
