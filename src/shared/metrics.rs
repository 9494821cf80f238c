//! Prometheus Metrics Module
//!
//! Scoreboard counters, registered on a registry owned by the metrics
//! instance rather than the process-wide default one, so several services
//! (and tests) can live side by side.
//!
//! ## Metric Types
//! - **Counter**: matches started / finished, score updates, rejected commands
//! - **Gauge**: active matches
//!
//! ## Usage
//! ```rust
//! use scoreboard::shared::metrics::ScoreboardMetrics;
//!
//! let metrics = ScoreboardMetrics::new().unwrap();
//! metrics.matches_started.inc();
//! assert!(metrics.encode().unwrap().contains("scoreboard_matches_started_total 1"));
//! ```

use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

/// Scoreboard core metrics
pub struct ScoreboardMetrics {
    registry: Registry,

    /// Matches successfully started
    pub matches_started: IntCounter,

    /// Matches removed by a finish command
    pub matches_finished: IntCounter,

    /// Score updates accepted (including no-op updates of unknown ids)
    pub score_updates: IntCounter,

    /// Commands rejected with an invalid argument (by operation)
    pub rejected_commands: IntCounterVec,

    /// Matches currently on the board
    pub active_matches: IntGauge,
}

impl ScoreboardMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let matches_started = IntCounter::new(
            "scoreboard_matches_started_total",
            "Total number of matches started",
        )?;
        let matches_finished = IntCounter::new(
            "scoreboard_matches_finished_total",
            "Total number of matches finished",
        )?;
        let score_updates = IntCounter::new(
            "scoreboard_score_updates_total",
            "Total number of accepted score updates, including no-op updates of unknown ids",
        )?;
        let rejected_commands = IntCounterVec::new(
            Opts::new(
                "scoreboard_rejected_commands_total",
                "Total number of commands rejected with an invalid argument",
            ),
            &["operation"],
        )?;
        let active_matches = IntGauge::new(
            "scoreboard_active_matches",
            "Number of matches currently in progress",
        )?;

        registry.register(Box::new(matches_started.clone()))?;
        registry.register(Box::new(matches_finished.clone()))?;
        registry.register(Box::new(score_updates.clone()))?;
        registry.register(Box::new(rejected_commands.clone()))?;
        registry.register(Box::new(active_matches.clone()))?;

        Ok(Self {
            registry,
            matches_started,
            matches_finished,
            score_updates,
            rejected_commands,
            active_matches,
        })
    }

    /// Records a rejected command for `operation`
    pub fn record_rejected(&self, operation: &str) {
        self.rejected_commands.with_label_values(&[operation]).inc();
    }

    /// Sets the active match gauge
    pub fn set_active(&self, count: usize) {
        self.active_matches.set(count as i64);
    }

    /// Encodes all metrics in the Prometheus text exposition format
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
