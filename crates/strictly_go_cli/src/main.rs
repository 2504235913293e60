//! Strictly Go - command-line referee
//!
//! Loads SGF records and reports scores, legal moves, board diagrams and
//! KataGo analysis queries.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_go_cli::{Cli, EngineConfig, run};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EngineConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    info!(command = ?cli.command, "Starting strictly_go");
    debug!(?config, "Effective configuration");

    let output = run(&cli, &config)?;
    println!("{output}");
    Ok(())
}
