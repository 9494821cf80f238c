//! Domain Layer - Core Business Logic
//!
//! Pure scoreboard rules: no I/O, no channels, no runtime. Everything here
//! can be tested without the application or interfaces layers.
//!
//! ## Modules
//! - `entities`: `Match`, `TeamData`
//! - `error`: `ScoreboardError`
//! - `validation`: argument checks shared by the operations
//! - `scoreboard`: `Scoreboard` trait and the in-memory implementation

pub mod entities;
pub mod error;
pub mod scoreboard;
pub mod validation;

// Re-export key types
pub use entities::{Match, MatchId, TeamData};
pub use error::ScoreboardError;
pub use scoreboard::{InMemoryScoreboard, Scoreboard};
