//! Strictly Hangman - pure hangman game logic.
//!
//! A [`Game`] holds one round: a hidden word, a life counter, and the letters
//! guessed so far. Every guess returns an explicit [`Result`]: either a
//! [`GuessOutcome`] or a [`HangmanError`] explaining why the guess was
//! refused. Refused guesses never change the game.
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{Game, GameStatus, GuessOutcome, HangmanConfig};
//!
//! let mut game = Game::new("cat", HangmanConfig::default().with_lives(2))?;
//! assert_eq!(game.guess("c")?, GuessOutcome::Correct);
//! assert_eq!(game.guess("z")?, GuessOutcome::Incorrect);
//! assert_eq!(game.masked_word(), "c _ _");
//!
//! // A miss never says whether it was the last one.
//! assert_eq!(game.guess("x")?, GuessOutcome::Incorrect);
//! assert_eq!(game.status(), GameStatus::Lost);
//! # Ok::<(), strictly_hangman::HangmanError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod error;
mod game;
mod invariants;
mod types;

// Crate-level exports - Configuration
pub use config::{ASCII_LOWERCASE, AllowedLetters, ConfigError, HangmanConfig};

// Crate-level exports - Engine
pub use action::Guess;
pub use error::HangmanError;
pub use game::Game;
pub use types::{GameStatus, GuessOutcome, GuessedLetters};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    Contract, GameRunning, GuessContract, LegalGuess, LetterNotGuessed, LettersAllowed, ValidWord,
};
pub use invariants::{
    HangmanInvariants, Invariant, InvariantSet, InvariantViolation, LivesBoundedInvariant,
    StatusConsistentInvariant, UniqueGuessesInvariant,
};
