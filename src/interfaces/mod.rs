//! Interfaces Layer - External Entry Points
//!
//! ## Modules
//! - `cli`: Command-line interface (main.rs logic)

pub mod cli;
