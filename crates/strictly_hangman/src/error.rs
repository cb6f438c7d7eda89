//! Errors raised by the hangman engine.

use super::types::GameStatus;

/// Error that can occur when creating a game or applying a guess.
///
/// No game state changes when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HangmanError {
    /// The word or guess breaks the configured length or alphabet rules.
    #[display("{}", _0)]
    InvalidWordFormat(String),

    /// The letter was guessed earlier in this round.
    #[display("The letter {} has already been guessed.", _0)]
    LetterAlreadyGuessed(char),

    /// The round already ended.
    #[display("The game is already over ({})", _0)]
    GameOver(GameStatus),

    /// An invariant was violated (postcondition failure).
    ///
    /// Only produced by [`GuessContract::post`](crate::GuessContract), which
    /// [`Game::apply`](crate::Game::apply) runs in debug builds.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl HangmanError {
    /// Rejection of a candidate word at construction.
    pub(crate) fn invalid_word() -> Self {
        Self::InvalidWordFormat(
            "Hangman word has invalid format. Check HangmanConfig.".to_string(),
        )
    }

    /// Rejection of a single letter outside the alphabet.
    pub(crate) fn invalid_letter(letter: char) -> Self {
        Self::InvalidWordFormat(format!(
            "{} is not a valid letter. Check HangmanConfig.",
            letter
        ))
    }

    /// Rejection of a word guess containing characters outside the alphabet.
    pub(crate) fn invalid_value(value: &str) -> Self {
        Self::InvalidWordFormat(format!(
            "{} is not a valid value. Check HangmanConfig.",
            value
        ))
    }
}

impl std::error::Error for HangmanError {}
