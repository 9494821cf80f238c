//! CLI Interface Module
//!
//! Command-line driver for the scoreboard. It reads a command script (file
//! or stdin), feeds every command to a `ScoreboardService` and writes one
//! result per command to stdout.
//!
//! ## Responsibilities
//! - Parse command-line arguments
//! - Initialize logging
//! - Start the scoreboard service and execute the script against it
//! - Optionally print the metrics after the run

pub mod output;
pub mod script;

pub use output::{OutputFormat, ScriptOutput};
pub use script::{ParseError, ScriptCommand};

use crate::application::services::{ScoreboardHandle, ScoreboardService, ServiceError};
use crate::domain::scoreboard::{InMemoryScoreboard, Scoreboard};
use crate::shared::metrics::ScoreboardMetrics;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// 比分板命令行配置
#[derive(Parser, Debug, Clone)]
#[command(name = "scoreboard")]
#[command(version = "0.1.0")]
#[command(about = "实时比赛比分板", long_about = None)]
pub struct CliConfig {
    /// 命令脚本路径（缺省时从标准输入读取）
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// 日志级别
    #[arg(short = 'l', long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    /// 运行结束后输出 Prometheus 指标
    #[arg(long, default_value_t = false)]
    pub metrics: bool,

    /// 仅显示配置不执行脚本（用于调试）
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode metrics: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("scoreboard service task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Runs the CLI application
pub async fn run() -> Result<(), CliError> {
    // 解析命令行参数
    let config = CliConfig::parse();

    // 初始化日志系统
    init_logging(&config.log_level);

    tracing::info!("配置: {:?}", config);

    if config.dry_run {
        println!("========================================");
        println!("  Scoreboard v0.1.0");
        println!("========================================");
        let script = config
            .script
            .as_ref()
            .map_or("<stdin>".into(), |p| p.display().to_string());
        println!("脚本:     {}", script);
        println!("输出格式: {:?}", config.format);
        println!("日志级别: {}", config.log_level);
        println!("指标输出: {}", if config.metrics { "启用" } else { "禁用" });
        println!("========================================");
        return Ok(());
    }

    let input: Box<dyn AsyncBufRead + Unpin + Send> = match &config.script {
        Some(path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };
    let mut stdout = tokio::io::stdout();

    run_with(&config, input, &mut stdout).await?;
    Ok(())
}

/// Starts a scoreboard service, executes `input` against it and writes the
/// results (and the metrics, when enabled) to `output`
///
/// # Returns
/// Number of commands executed.
pub async fn run_with<R, W>(
    config: &CliConfig,
    input: R,
    output: &mut W,
) -> Result<usize, CliError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let metrics = Arc::new(ScoreboardMetrics::new()?);
    let (service, handle) = ScoreboardService::new(InMemoryScoreboard::new(), metrics.clone());
    let service_task = tokio::spawn(service.run());

    let executed = run_script(input, &mut *output, &handle, config.format).await;

    // 关闭最后一个 handle，服务循环随之退出
    drop(handle);
    let board = service_task.await?;
    let executed = executed?;
    tracing::info!(executed, active = board.len(), "脚本执行完毕");

    if config.metrics {
        output.write_all(metrics.encode()?.as_bytes()).await?;
        output.flush().await?;
    }

    Ok(executed)
}

/// Executes every command of `input` and writes the results to `output`
///
/// Invalid arguments are reported as `rejected` results and do not stop the
/// run; a malformed line does.
///
/// # Returns
/// Number of commands executed.
pub async fn run_script<R, W>(
    input: R,
    output: &mut W,
    handle: &ScoreboardHandle,
    format: OutputFormat,
) -> Result<usize, CliError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut line_number = 0;
    let mut executed = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let command = match ScriptCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(source) => {
                return Err(CliError::Parse {
                    line: line_number,
                    source,
                })
            }
        };

        let result = execute(handle, command).await?;
        output.write_all(result.render(format)?.as_bytes()).await?;
        executed += 1;
    }

    output.flush().await?;
    Ok(executed)
}

async fn execute(
    handle: &ScoreboardHandle,
    command: ScriptCommand,
) -> Result<ScriptOutput, ServiceError> {
    let result = match command {
        ScriptCommand::Start {
            home_team,
            away_team,
        } => handle
            .start_match(home_team.clone(), away_team.clone())
            .await
            .map(|id| ScriptOutput::Started {
                id,
                home_team,
                away_team,
            }),
        ScriptCommand::Update {
            id,
            home_score,
            away_score,
        } => handle
            .update_score(id, home_score, away_score)
            .await
            .map(|()| ScriptOutput::Updated { id }),
        ScriptCommand::Finish { id } => handle
            .finish_match(id)
            .await
            .map(|removed| ScriptOutput::Finished { id, removed }),
        ScriptCommand::Summary => handle
            .summary()
            .await
            .map(|matches| ScriptOutput::Summary { matches }),
    };

    match result {
        Err(ServiceError::Scoreboard(error)) => Ok(ScriptOutput::Rejected {
            message: error.to_string(),
        }),
        other => other,
    }
}

/// 初始化日志系统
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    // 日志写到 stderr，stdout 只留给命令输出
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
