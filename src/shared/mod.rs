//! Shared utilities used across all layers
//!
//! This module contains:
//! - Metrics (prometheus counters for the scoreboard service)

pub mod metrics;

pub use metrics::ScoreboardMetrics;
