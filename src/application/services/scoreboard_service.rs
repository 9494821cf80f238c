//! Scoreboard Service - Single-owner Scoreboard Task
//!
//! The domain scoreboard takes `&mut self` and knows nothing about threads.
//! This service gives it one owner: a task that receives commands over an
//! MPSC channel and applies them strictly in arrival order. Callers talk to
//! it through a cloneable `ScoreboardHandle`.
//!
//! ## Architecture
//! - Receives `ScoreboardCommand`s via an unbounded MPSC channel
//! - Applies them sequentially to the owned scoreboard
//! - Answers each command on its own oneshot channel
//! - **Generic over the Scoreboard implementation**
//!
//! ## Usage
//! ```rust
//! use scoreboard::application::services::ScoreboardService;
//! use scoreboard::domain::InMemoryScoreboard;
//! use scoreboard::shared::ScoreboardMetrics;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let metrics = Arc::new(ScoreboardMetrics::new().unwrap());
//! let (service, handle) = ScoreboardService::new(InMemoryScoreboard::new(), metrics);
//! let task = tokio::spawn(service.run());
//!
//! let id = handle.start_match("Mexico", "Canada").await.unwrap();
//! handle.update_score(id, 0, 5).await.unwrap();
//! assert_eq!(handle.summary().await.unwrap()[0].away_team.score, 5);
//!
//! drop(handle);
//! let board = task.await.unwrap();
//! # let _ = board;
//! # }
//! ```

use crate::domain::entities::{Match, MatchId};
use crate::domain::error::ScoreboardError;
use crate::domain::scoreboard::Scoreboard;
use crate::shared::metrics::ScoreboardMetrics;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::oneshot;

/// Commands that the scoreboard service can receive
#[derive(Debug)]
pub enum ScoreboardCommand {
    StartMatch {
        home_team: String,
        away_team: String,
        reply: oneshot::Sender<Result<MatchId, ScoreboardError>>,
    },
    FinishMatch {
        id: MatchId,
        reply: oneshot::Sender<bool>,
    },
    UpdateScore {
        id: MatchId,
        home_score: i64,
        away_score: i64,
        reply: oneshot::Sender<Result<(), ScoreboardError>>,
    },
    GetSummary {
        reply: oneshot::Sender<Vec<Match>>,
    },
}

/// Errors seen by handle callers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Scoreboard(#[from] ScoreboardError),

    #[error("scoreboard service is no longer running")]
    Closed,
}

/// Single-owner Scoreboard Service
///
/// # Type Parameters
/// * `S` - Scoreboard implementation (must implement `Scoreboard`)
pub struct ScoreboardService<S: Scoreboard> {
    scoreboard: S,
    command_receiver: UnboundedReceiver<ScoreboardCommand>,
    metrics: Arc<ScoreboardMetrics>,
}

impl<S: Scoreboard> ScoreboardService<S> {
    /// Creates the service and the first handle connected to it
    ///
    /// The service does nothing until `run` is awaited (usually on a spawned
    /// task).
    pub fn new(scoreboard: S, metrics: Arc<ScoreboardMetrics>) -> (Self, ScoreboardHandle) {
        let (command_sender, command_receiver) = mpsc::unbounded_channel();
        metrics.set_active(scoreboard.len());

        let service = ScoreboardService {
            scoreboard,
            command_receiver,
            metrics,
        };
        (service, ScoreboardHandle { command_sender })
    }

    /// Runs the command loop
    ///
    /// Returns the owned scoreboard once every handle has been dropped.
    pub async fn run(mut self) -> S {
        tracing::info!(active = self.scoreboard.len(), "scoreboard service started");
        while let Some(command) = self.command_receiver.recv().await {
            self.process(command);
        }
        tracing::info!(active = self.scoreboard.len(), "scoreboard service stopped");
        self.scoreboard
    }

    fn process(&mut self, command: ScoreboardCommand) {
        match command {
            ScoreboardCommand::StartMatch {
                home_team,
                away_team,
                reply,
            } => {
                let result = self.scoreboard.start_match(&home_team, &away_team);
                match &result {
                    Ok(_) => self.metrics.matches_started.inc(),
                    Err(e) => self.reject("start_match", e),
                }
                self.refresh_active();
                send_reply(reply, result);
            }
            ScoreboardCommand::FinishMatch { id, reply } => {
                let removed = self.scoreboard.finish_match(id);
                if removed {
                    self.metrics.matches_finished.inc();
                }
                self.refresh_active();
                send_reply(reply, removed);
            }
            ScoreboardCommand::UpdateScore {
                id,
                home_score,
                away_score,
                reply,
            } => {
                let result = self.scoreboard.update_score(id, home_score, away_score);
                match &result {
                    Ok(()) => self.metrics.score_updates.inc(),
                    Err(e) => self.reject("update_score", e),
                }
                send_reply(reply, result);
            }
            ScoreboardCommand::GetSummary { reply } => {
                send_reply(reply, self.scoreboard.summary());
            }
        }
    }

    fn reject(&self, operation: &str, error: &ScoreboardError) {
        tracing::warn!(operation, %error, "command rejected");
        self.metrics.record_rejected(operation);
    }

    #[inline]
    fn refresh_active(&self) {
        self.metrics.set_active(self.scoreboard.len());
    }
}

fn send_reply<T>(reply: oneshot::Sender<T>, value: T) {
    if reply.send(value).is_err() {
        tracing::warn!("reply channel closed, caller went away");
    }
}

/// Cloneable client of a running `ScoreboardService`
#[derive(Debug, Clone)]
pub struct ScoreboardHandle {
    command_sender: UnboundedSender<ScoreboardCommand>,
}

impl ScoreboardHandle {
    pub async fn start_match(
        &self,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Result<MatchId, ServiceError> {
        let (reply, response) = oneshot::channel();
        self.send(ScoreboardCommand::StartMatch {
            home_team: home_team.into(),
            away_team: away_team.into(),
            reply,
        })?;
        response
            .await
            .map_err(|_| ServiceError::Closed)?
            .map_err(ServiceError::from)
    }

    pub async fn finish_match(&self, id: MatchId) -> Result<bool, ServiceError> {
        let (reply, response) = oneshot::channel();
        self.send(ScoreboardCommand::FinishMatch { id, reply })?;
        response.await.map_err(|_| ServiceError::Closed)
    }

    pub async fn update_score(
        &self,
        id: MatchId,
        home_score: i64,
        away_score: i64,
    ) -> Result<(), ServiceError> {
        let (reply, response) = oneshot::channel();
        self.send(ScoreboardCommand::UpdateScore {
            id,
            home_score,
            away_score,
            reply,
        })?;
        response
            .await
            .map_err(|_| ServiceError::Closed)?
            .map_err(ServiceError::from)
    }

    pub async fn summary(&self) -> Result<Vec<Match>, ServiceError> {
        let (reply, response) = oneshot::channel();
        self.send(ScoreboardCommand::GetSummary { reply })?;
        response.await.map_err(|_| ServiceError::Closed)
    }

    fn send(&self, command: ScoreboardCommand) -> Result<(), ServiceError> {
        self.command_sender
            .send(command)
            .map_err(|_| ServiceError::Closed)
    }
}
