//! Scoreboard Trait - Domain Layer Abstraction
//!
//! The four scoreboard operations as a trait, so the application layer can be
//! generic over the storage behind it.
//!
//! ## Implementations
//! - `InMemoryScoreboard`: insertion-ordered `Vec<Match>`
//!
//! ## Example
//! ```rust
//! use scoreboard::domain::scoreboard::{InMemoryScoreboard, Scoreboard};
//!
//! fn open_fixture<S: Scoreboard>(board: &mut S) -> u64 {
//!     board.start_match("Mexico", "Canada").unwrap()
//! }
//!
//! let mut board = InMemoryScoreboard::new();
//! assert_eq!(open_fixture(&mut board), 1);
//! ```

use crate::domain::entities::{Match, MatchId};
use crate::domain::error::ScoreboardError;

/// Core Scoreboard trait
pub trait Scoreboard {
    /// Starts a new match at 0 - 0
    ///
    /// # Returns
    /// * `Ok(id)` - The id assigned to the new match
    /// * `Err(ScoreboardError::InvalidArgument)` - A team name is empty
    ///
    /// No duplicate-team checks are made; two matches may share team names.
    fn start_match(
        &mut self,
        home_team: &str,
        away_team: &str,
    ) -> Result<MatchId, ScoreboardError>;

    /// Removes a match from the board
    ///
    /// Returns `true` if the match was active and has been removed, `false`
    /// if no active match has this id.
    fn finish_match(&mut self, id: MatchId) -> bool;

    /// Replaces both scores of a match
    ///
    /// Scores are validated before the lookup, so a negative score is
    /// rejected even when `id` is unknown. An unknown id with valid scores is
    /// a silent no-op.
    fn update_score(
        &mut self,
        id: MatchId,
        home_score: i64,
        away_score: i64,
    ) -> Result<(), ScoreboardError>;

    /// Snapshot of active matches, highest total score first, ties broken by
    /// the higher id.
    fn summary(&self) -> Vec<Match>;

    /// Looks up an active match
    fn find_match(&self, id: MatchId) -> Option<&Match>;

    /// Number of active matches
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only enough behaviour to exercise the provided methods
    struct FixedScoreboard {
        matches: Vec<Match>,
    }

    impl Scoreboard for FixedScoreboard {
        fn start_match(&mut self, _home: &str, _away: &str) -> Result<MatchId, ScoreboardError> {
            Ok(0)
        }

        fn finish_match(&mut self, _id: MatchId) -> bool {
            false
        }

        fn update_score(&mut self, _id: MatchId, _h: i64, _a: i64) -> Result<(), ScoreboardError> {
            Ok(())
        }

        fn summary(&self) -> Vec<Match> {
            self.matches.clone()
        }

        fn find_match(&self, id: MatchId) -> Option<&Match> {
            self.matches.iter().find(|m| m.id == id)
        }

        fn len(&self) -> usize {
            self.matches.len()
        }
    }

    #[test]
    fn test_default_is_empty() {
        let empty = FixedScoreboard { matches: Vec::new() };
        assert!(empty.is_empty());

        let one = FixedScoreboard {
            matches: vec![Match::new(1, "A", "B")],
        };
        assert!(!one.is_empty());
    }
}
