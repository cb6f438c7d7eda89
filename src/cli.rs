//! Command-line interface for hangman.

use clap::{Parser, Subcommand};
use hangman::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

/// Hangman - guess the word before you run out of lives
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Terminal hangman", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one round
    Play {
        /// Word to guess. Prompted for (and hidden) if omitted.
        #[arg(short, long)]
        word: Option<String>,

        /// Path to the TOML config file (defaults apply if it is missing)
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Override the number of lives
        #[arg(short, long)]
        lives: Option<u32>,

        /// Pause after each guess, in milliseconds
        #[arg(long, default_value = "2000")]
        pause_ms: u64,

        /// Keep previous turns on screen instead of erasing them
        #[arg(long)]
        no_clear: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to the TOML config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}
