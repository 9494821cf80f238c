//! Command script parsing
//!
//! One command per line:
//!
//! ```text
//! start <home team> | <away team>
//! update <id> <home score> <away score>
//! finish <id>
//! summary
//! ```
//!
//! Blank lines and `#` comments are skipped. Scores are read as signed
//! integers; rejecting negative ones is the scoreboard's job, not the parser's.

use crate::domain::entities::MatchId;
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Start { home_team: String, away_team: String },
    Update { id: MatchId, home_score: i64, away_score: i64 },
    Finish { id: MatchId },
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`start` expects `<home team> | <away team>`")]
    MissingSeparator,

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid {what} `{value}`")]
    InvalidNumber { what: &'static str, value: String },

    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

const UPDATE_USAGE: &str = "<id> <home score> <away score>";
const FINISH_USAGE: &str = "<id>";

impl ScriptCommand {
    /// Parses one script line
    ///
    /// Returns `Ok(None)` for lines that carry no command.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword {
            "start" => {
                let (home, away) = rest.split_once('|').ok_or(ParseError::MissingSeparator)?;
                ScriptCommand::Start {
                    home_team: home.trim().to_string(),
                    away_team: away.trim().to_string(),
                }
            }
            "update" => {
                let mut args = rest.split_whitespace();
                let id = next_number(&mut args, "update", UPDATE_USAGE, "match id")?;
                let home_score = next_number(&mut args, "update", UPDATE_USAGE, "home score")?;
                let away_score = next_number(&mut args, "update", UPDATE_USAGE, "away score")?;
                expect_end(args)?;
                ScriptCommand::Update {
                    id,
                    home_score,
                    away_score,
                }
            }
            "finish" => {
                let mut args = rest.split_whitespace();
                let id = next_number(&mut args, "finish", FINISH_USAGE, "match id")?;
                expect_end(args)?;
                ScriptCommand::Finish { id }
            }
            "summary" => {
                expect_end(rest.split_whitespace())?;
                ScriptCommand::Summary
            }
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn next_number<T: FromStr>(
    args: &mut SplitWhitespace<'_>,
    command: &'static str,
    expected: &'static str,
    what: &'static str,
) -> Result<T, ParseError> {
    let value = args
        .next()
        .ok_or(ParseError::MissingArgument { command, expected })?;

    value.parse().map_err(|_| ParseError::InvalidNumber {
        what,
        value: value.to_string(),
    })
}

fn expect_end(mut args: SplitWhitespace<'_>) -> Result<(), ParseError> {
    match args.next() {
        Some(extra) => Err(ParseError::TrailingInput(extra.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_with_spaces_in_names() {
        let command = ScriptCommand::parse("start  Team 1 |  Team 2 ").unwrap();
        assert_eq!(
            command,
            Some(ScriptCommand::Start {
                home_team: "Team 1".to_string(),
                away_team: "Team 2".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_start_with_empty_side() {
        // empty names reach the scoreboard, which rejects them
        let command = ScriptCommand::parse("start | Canada").unwrap();
        assert_eq!(
            command,
            Some(ScriptCommand::Start {
                home_team: String::new(),
                away_team: "Canada".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_start_without_separator() {
        assert_eq!(
            ScriptCommand::parse("start Mexico Canada"),
            Err(ParseError::MissingSeparator)
        );
        assert_eq!(ScriptCommand::parse("start"), Err(ParseError::MissingSeparator));
    }

    #[test]
    fn test_parse_update_keeps_negative_scores() {
        assert_eq!(
            ScriptCommand::parse("update 3 -1 2").unwrap(),
            Some(ScriptCommand::Update {
                id: 3,
                home_score: -1,
                away_score: 2,
            })
        );
    }

    #[test]
    fn test_parse_update_errors() {
        assert!(matches!(
            ScriptCommand::parse("update 3 1"),
            Err(ParseError::MissingArgument { command: "update", .. })
        ));
        assert!(matches!(
            ScriptCommand::parse("update x 1 1"),
            Err(ParseError::InvalidNumber { what: "match id", .. })
        ));
        assert_eq!(
            ScriptCommand::parse("update 1 1 1 1"),
            Err(ParseError::TrailingInput("1".to_string()))
        );
    }

    #[test]
    fn test_parse_finish_and_summary() {
        assert_eq!(
            ScriptCommand::parse("finish 7").unwrap(),
            Some(ScriptCommand::Finish { id: 7 })
        );
        assert_eq!(ScriptCommand::parse("summary").unwrap(), Some(ScriptCommand::Summary));
        assert!(ScriptCommand::parse("finish -1").is_err());
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        assert_eq!(ScriptCommand::parse("   ").unwrap(), None);
        assert_eq!(ScriptCommand::parse("# world cup").unwrap(), None);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            ScriptCommand::parse("pause 1"),
            Err(ParseError::UnknownCommand("pause".to_string()))
        );
    }
}
