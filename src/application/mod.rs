//! Application Layer - Services
//!
//! This layer puts the domain scoreboard behind an owning task so that many
//! callers can share it. It depends on the domain layer and knows nothing
//! about how commands reach it (CLI, tests, ...).
//!
//! ## Modules
//! - `services`: `ScoreboardService` and its `ScoreboardHandle`

pub mod services;

// Re-export key services
pub use services::{ScoreboardHandle, ScoreboardService, ServiceError};
