//! # Quill
//!
//! Command-line client for the blog backend: write, score and publish posts.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod output;
mod state;
mod telemetry;

use cli::Cli;
use config::AppConfig;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_telemetry(&TelemetryConfig::from_env(cli.verbose));

    let config = AppConfig::from_env().with_overrides(&cli);
    tracing::debug!(?config, "Configuration loaded");

    let state = AppState::new(&config)?;

    commands::dispatch(cli.command, &state, cli.format).await
}
