//! Groundlink Console
//!
//! Terminal operator console for the UAV simulator.
//!
//! - Polls vehicle status in the background
//! - Reads operator commands from stdin
//! - Prints notices, the status view and the command log

mod http;
mod render;
mod scheduler;
mod shell;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use groundlink_common::poller::start_polling;
use groundlink_common::{Announce, ClientConfig, GroundControl, MemorySession};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

use http::ReqwestApi;
use render::StdoutNotifier;
use scheduler::TokioScheduler;
use shell::ConsoleCommand;

type Station = GroundControl<ReqwestApi, StdoutNotifier, MemorySession>;

/// Groundlink terminal console.
#[derive(Parser, Debug)]
#[command(name = "groundlink-console", about = "UAV ground control console")]
struct Cli {
    /// TOML config file (`api_url`, `poll_interval_ms`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Vehicle API base URL.
    #[arg(long, env = "GROUNDLINK_API_URL")]
    api_url: Option<String>,

    /// Status poll interval in milliseconds.
    #[arg(long)]
    poll_interval_ms: Option<u64>,
}

/// File values first, then command-line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            ClientConfig::from_toml_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => ClientConfig::default(),
    };
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url)?;
    }
    if let Some(ms) = cli.poll_interval_ms {
        anyhow::ensure!(ms > 0, "--poll-interval-ms must be positive");
        config.poll_interval = Duration::from_millis(ms);
    }
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    tracing::info!(
        api_url = %config.api_url,
        poll_ms = config.poll_interval.as_millis() as u64,
        "groundlink-console starting"
    );

    LocalSet::new().run_until(run(config)).await
}

async fn run(config: ClientConfig) -> anyhow::Result<()> {
    let session = MemorySession::new();
    let station: Station = GroundControl::new(
        ReqwestApi::new(&config.api_url)?,
        StdoutNotifier,
        session.clone(),
    );

    station.refresh(Announce::Quiet).await;

    let poll_station = station.clone();
    let poll = start_polling(&TokioScheduler, config.poll_interval, move || {
        let station = poll_station.clone();
        tokio::task::spawn_local(async move {
            station.refresh(Announce::Quiet).await;
        });
    });

    println!("{}", shell::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match shell::parse_line(&line) {
                    Ok(None) => {}
                    Ok(Some(cmd)) => {
                        if !handle(&station, &session, cmd).await {
                            break;
                        }
                    }
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    poll.cancel();
    tracing::info!("groundlink-console stopped");
    Ok(())
}

/// Run one operator command. Returns false on quit.
async fn handle(station: &Station, session: &MemorySession, cmd: ConsoleCommand) -> bool {
    match cmd {
        ConsoleCommand::Dispatch(command) => {
            let report = station.execute(command).await;
            tracing::debug!(?report, "command finished");
        }
        ConsoleCommand::Mission(raw) => {
            let report = station.submit_mission(&raw).await;
            tracing::debug!(?report, "mission submit finished");
        }
        ConsoleCommand::Status => {
            if station.refresh(Announce::Success).await {
                println!("{}", render::render_status(session.status().as_ref()));
            }
        }
        ConsoleCommand::View => println!("{}", render::render_status(session.status().as_ref())),
        ConsoleCommand::Log => {
            let lines = session.log_lines();
            if lines.is_empty() {
                println!("(log empty)");
            }
            for line in lines {
                println!("{line}");
            }
        }
        ConsoleCommand::Help => println!("{}", shell::HELP),
        ConsoleCommand::Quit => return false,
    }
    true
}
