//! Domain error type
//!
//! Only argument validation is an error. An unknown match id is reported
//! through return values, never through `ScoreboardError`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// An argument was rejected before the scoreboard was touched
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },
}

impl ScoreboardError {
    pub(crate) fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        ScoreboardError::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            ScoreboardError::InvalidArgument { parameter, .. } => parameter,
        }
    }
}
