//! Command-line interface for strictly_go.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Go - Tromp-Taylor referee for SGF game records
#[derive(Parser, Debug)]
#[command(name = "strictly_go")]
#[command(about = "Score, check and export Go games under Tromp-Taylor rules", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to engine config (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Replay SGF moves without occupancy or superko checks
    #[arg(long, global = true)]
    pub unchecked: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a game and print the area score
    Score {
        /// SGF file to load
        sgf: PathBuf,
    },

    /// List candidate moves for the player to move
    Legal {
        /// SGF file to load
        sgf: PathBuf,

        /// Keep suicide moves in the list
        #[arg(long)]
        allow_suicide: bool,

        /// Leave pass out of the list
        #[arg(long)]
        no_pass: bool,
    },

    /// Print the board diagram
    Show {
        /// SGF file to load
        sgf: PathBuf,

        /// Turn to show (defaults to the final position)
        #[arg(long)]
        turn: Option<usize>,
    },

    /// Emit a KataGo analysis query for the final position
    Analysis {
        /// SGF file to load
        sgf: PathBuf,

        /// Query identifier
        #[arg(long, default_value = "strictly_go")]
        id: String,

        /// Search budget per analyzed turn
        #[arg(long)]
        max_visits: Option<u32>,

        /// Write the query here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the mirror-go reply to a GTP vertex
    Mirror {
        /// Vertex such as "D4"
        vertex: String,

        /// Board size
        #[arg(long, default_value = "19")]
        size: usize,
    },
}
