//! Strictly Go CLI - SGF scoring, legality listing and analysis export
//!
//! The binary is a thin shell over [`run`]; everything it prints is built
//! here so it can be tested without spawning a process.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Command};
pub use commands::{
    analysis_json, legal_report, load_game, mirror_report, run, score_report, show_report,
};
pub use config::{ConfigError, EngineConfig};
