//! Application Services
//!
//! Services coordinate domain logic for callers that share one scoreboard.

pub mod scoreboard_service;

pub use scoreboard_service::{ScoreboardCommand, ScoreboardHandle, ScoreboardService, ServiceError};
