//! Hangman terminal front end.
//!
//! Wraps the [`strictly_hangman`] engine with what a playable binary needs:
//! a TOML config file and a line-oriented play loop.
//!
//! # Architecture
//!
//! - **Settings**: config file loading, command-line overrides
//! - **Session**: prompt, guess, report, repeat

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod session;
mod settings;

// Crate-level exports - Settings
pub use settings::{DEFAULT_CONFIG_PATH, apply_overrides, load_config, to_toml};

// Crate-level exports - Session
pub use session::{Session, SessionError, final_message, outcome_message};
