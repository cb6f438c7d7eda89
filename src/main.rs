//! Hangman - Unified CLI
//!
//! Plays a round of hangman in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hangman::{Session, apply_overrides, load_config, to_toml};
use std::io::{BufReader, stdin, stdout};
use std::path::PathBuf;
use std::time::Duration;
use strictly_hangman::Game;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            word,
            config,
            lives,
            pause_ms,
            no_clear,
        } => run_play(word, config, lives, pause_ms, !no_clear),
        Command::Config { config } => run_config(config),
    }
}

/// Play one round
#[instrument(skip(word), fields(config_path = %config.display()))]
fn run_play(
    word: Option<String>,
    config: PathBuf,
    lives: Option<u32>,
    pause_ms: u64,
    clear: bool,
) -> Result<()> {
    let config = load_config(&config).context("Loading config")?;
    let config = apply_overrides(config, lives).context("Applying overrides")?;

    let mut session = Session::new(
        BufReader::new(stdin()),
        stdout(),
        Duration::from_millis(pause_ms),
        clear,
    );

    let mut game = match word {
        Some(word) => Game::new(word, config).context("Invalid word")?,
        None => session.prompt_game(&config)?,
    };

    let status = session.run(&mut game)?;
    info!(%status, "Round over");
    Ok(())
}

/// Print the effective configuration
#[instrument(fields(config_path = %config.display()))]
fn run_config(config: PathBuf) -> Result<()> {
    let config = load_config(&config).context("Loading config")?;
    print!("{}", to_toml(&config)?);
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
