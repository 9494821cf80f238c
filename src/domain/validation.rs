//! Argument Validation - Business Rule Checks
//!
//! Runs before any lookup or mutation so a rejected call leaves the
//! scoreboard untouched.
//!
//! ## Validation Rules
//! - Team names must not be empty
//! - Scores must not be negative
//! - Scores must fit the stored `u32`
//!
//! ## Usage
//! ```rust
//! use scoreboard::domain::validation::{validate_score, validate_team_name};
//!
//! assert!(validate_team_name("home_team", "Mexico").is_ok());
//! assert_eq!(validate_score("home_score", 3).unwrap(), 3);
//! assert!(validate_score("away_score", -1).is_err());
//! ```

use super::error::ScoreboardError;

/// Validates a team name
///
/// # Arguments
/// * `parameter` - Parameter name reported in the error
/// * `name` - The team name to check
pub fn validate_team_name(parameter: &'static str, name: &str) -> Result<(), ScoreboardError> {
    if name.is_empty() {
        return Err(ScoreboardError::invalid_argument(
            parameter,
            "team name cannot be empty",
        ));
    }

    Ok(())
}

/// Validates a score and narrows it to the stored width
///
/// # Returns
/// * `Ok(score)` if the score is in `0..=u32::MAX`
/// * `Err(ScoreboardError::InvalidArgument)` otherwise
pub fn validate_score(parameter: &'static str, score: i64) -> Result<u32, ScoreboardError> {
    if score < 0 {
        return Err(ScoreboardError::invalid_argument(
            parameter,
            format!("score {} cannot be negative", score),
        ));
    }

    u32::try_from(score).map_err(|_| {
        ScoreboardError::invalid_argument(
            parameter,
            format!("score {} exceeds maximum {}", score, u32::MAX),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_name() {
        assert!(validate_team_name("home_team", "Team 1").is_ok());
    }

    #[test]
    fn test_empty_team_name() {
        let err = validate_team_name("away_team", "").unwrap_err();
        assert_eq!(err.parameter(), "away_team");
    }

    #[test]
    fn test_zero_score_is_valid() {
        assert_eq!(validate_score("home_score", 0), Ok(0));
    }

    #[test]
    fn test_negative_score() {
        let err = validate_score("home_score", -1).unwrap_err();
        assert!(matches!(
            err,
            ScoreboardError::InvalidArgument { parameter: "home_score", .. }
        ));
    }

    #[test]
    fn test_score_out_of_range() {
        let too_big = i64::from(u32::MAX) + 1;
        assert!(validate_score("away_score", too_big).is_err());
        assert_eq!(validate_score("away_score", i64::from(u32::MAX)), Ok(u32::MAX));
    }
}
