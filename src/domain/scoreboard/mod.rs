//! Domain Layer - Scoreboard Module
//!
//! The `Scoreboard` trait is the seam the application layer depends on;
//! `InMemoryScoreboard` is the implementation behind it.

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryScoreboard;
pub use traits::Scoreboard;
