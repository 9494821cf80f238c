//! Main entry point for the scoreboard application
//!
//! This serves as a thin wrapper that delegates to the interfaces layer.
//! The actual application logic is implemented in `interfaces::cli`.

use scoreboard::interfaces::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
