//! Rendering of command results, as plain text or JSON lines

use crate::domain::entities::{Match, MatchId};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Result of one executed script command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptOutput {
    Started {
        id: MatchId,
        home_team: String,
        away_team: String,
    },
    Updated {
        id: MatchId,
    },
    Finished {
        id: MatchId,
        removed: bool,
    },
    Summary {
        matches: Vec<Match>,
    },
    Rejected {
        message: String,
    },
}

impl ScriptOutput {
    /// Renders the output, always newline terminated
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(format!("{}\n", self)),
            OutputFormat::Json => {
                let mut line = serde_json::to_string(self)?;
                line.push('\n');
                Ok(line)
            }
        }
    }
}

impl fmt::Display for ScriptOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptOutput::Started {
                id,
                home_team,
                away_team,
            } => write!(f, "started match {}: {} vs {}", id, home_team, away_team),
            ScriptOutput::Updated { id } => write!(f, "updated match {}", id),
            ScriptOutput::Finished { id, removed: true } => write!(f, "finished match {}", id),
            ScriptOutput::Finished { id, removed: false } => write!(f, "no active match {}", id),
            ScriptOutput::Summary { matches } if matches.is_empty() => {
                write!(f, "no matches in progress")
            }
            ScriptOutput::Summary { matches } => {
                for (rank, game) in matches.iter().enumerate() {
                    if rank > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}. {}", rank + 1, game)?;
                }
                Ok(())
            }
            ScriptOutput::Rejected { message } => write!(f, "rejected: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_summary() {
        let mut first = Match::new(2, "Spain", "Brazil");
        first.home_team.score = 10;
        first.away_team.score = 2;
        let second = Match::new(1, "Mexico", "Canada");

        let output = ScriptOutput::Summary {
            matches: vec![first, second],
        };
        assert_eq!(
            output.render(OutputFormat::Text).unwrap(),
            "1. Spain 10 - Brazil 2\n2. Mexico 0 - Canada 0\n"
        );
    }

    #[test]
    fn test_text_empty_summary() {
        let output = ScriptOutput::Summary { matches: vec![] };
        assert_eq!(output.to_string(), "no matches in progress");
    }

    #[test]
    fn test_json_is_tagged() {
        let output = ScriptOutput::Finished { id: 4, removed: false };
        assert_eq!(
            output.render(OutputFormat::Json).unwrap(),
            "{\"event\":\"finished\",\"id\":4,\"removed\":false}\n"
        );
    }
}
