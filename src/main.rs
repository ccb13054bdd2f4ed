//! Strictly Referee - CLI
//!
//! Plays scripted Santorini matches against the rules engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command, Format};
use std::path::{Path, PathBuf};
use strictly_referee::{Referee, ScriptConfig, render_text};
use strictly_santorini::GodPower;
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so reports can be piped
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { script, format } => run_play(&script, format),
        Command::Gods => {
            list_gods();
            Ok(())
        }
        Command::New { a, b, output } => write_template(a, b, output),
    }
}

/// Play a script and print its report
#[instrument(skip(script), fields(script = %script.display()))]
fn run_play(script: &Path, format: Format) -> Result<()> {
    let config = ScriptConfig::from_file(script)?;
    let report = Referee::new(&config).run();

    match format {
        Format::Text => print!("{}", render_text(&report)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if *report.stopped_early() {
        bail!(
            "script stopped after {} of {} actions",
            report.steps().len(),
            config.actions().len()
        );
    }
    Ok(())
}

/// Print every god power with its card text
fn list_gods() {
    for god in GodPower::iter() {
        println!("{god:<11} {}", god.summary());
    }
}

/// Write a starter script to a file or stdout
#[instrument]
fn write_template(a: GodPower, b: GodPower, output: Option<PathBuf>) -> Result<()> {
    let text = ScriptConfig::template(a, b).to_toml()?;
    match output {
        Some(path) => {
            std::fs::write(&path, text)?;
            info!(path = %path.display(), "Script written");
        }
        None => print!("{text}"),
    }
    Ok(())
}
