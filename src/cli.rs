//! Command-line interface for strictly_referee.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_santorini::GodPower;

/// Strictly Referee - plays scripted Santorini matches
#[derive(Parser, Debug)]
#[command(name = "strictly_referee")]
#[command(about = "Referee for scripted Santorini matches", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match script and print the result
    Play {
        /// Path to the TOML match script
        script: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List the god powers and what they do
    Gods,

    /// Write a starter match script
    New {
        /// Power for player A
        #[arg(short, long, default_value = "Mortal")]
        a: GodPower,

        /// Power for player B
        #[arg(short, long, default_value = "Mortal")]
        b: GodPower,

        /// Where to write the script (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Report format for `play`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Step log and final board
    Text,
    /// Full report as JSON
    Json,
}
