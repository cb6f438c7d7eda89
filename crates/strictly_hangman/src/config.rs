//! Game configuration.
//!
//! A [`HangmanConfig`] is a plain value. Every [`Game`](crate::Game) owns its
//! own copy, so tweaking one session's settings never leaks into another.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

/// The 26 lowercase Latin letters.
pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Tunables for a hangman round.
///
/// Defaults: 5 lives, `_` for hidden letters, words of 3 to 15 characters
/// built from [`ASCII_LOWERCASE`].
///
/// The engine does not validate a configuration on its own. Callers that load
/// settings from an untrusted source should run [`HangmanConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct HangmanConfig {
    /// Starting number of lives.
    #[getter(copy)]
    lives: u32,

    /// Character shown in place of letters not yet guessed.
    #[getter(copy)]
    unknown_letter_repr: char,

    /// Shortest accepted word, in characters (inclusive).
    #[getter(copy)]
    min_word_len: usize,

    /// Longest accepted word, in characters (inclusive).
    #[getter(copy)]
    max_word_len: usize,

    /// Characters that may appear in the word or be guessed.
    #[setters(skip)]
    allowed_letters: AllowedLetters,
}

impl HangmanConfig {
    /// Replaces the allowed character set.
    ///
    /// Letters are lowercased and de-duplicated.
    #[instrument(skip(letters))]
    pub fn with_allowed_letters(mut self, letters: impl AsRef<str>) -> Self {
        self.allowed_letters = AllowedLetters::new(letters);
        self
    }

    /// Checks that the configuration describes a playable game.
    ///
    /// Rejects zero lives, a zero minimum length, an inverted length range,
    /// and an empty alphabet.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lives == 0 {
            warn!("Config rejected: zero lives");
            return Err(ConfigError::new("lives must be at least 1"));
        }
        if self.min_word_len == 0 {
            warn!("Config rejected: zero minimum word length");
            return Err(ConfigError::new("min_word_len must be at least 1"));
        }
        if self.min_word_len > self.max_word_len {
            warn!(
                min = self.min_word_len,
                max = self.max_word_len,
                "Config rejected: inverted length range"
            );
            return Err(ConfigError::new(format!(
                "min_word_len ({}) is greater than max_word_len ({})",
                self.min_word_len, self.max_word_len
            )));
        }
        if self.allowed_letters.is_empty() {
            warn!("Config rejected: empty alphabet");
            return Err(ConfigError::new("allowed_letters must not be empty"));
        }
        debug!("Config validated");
        Ok(())
    }
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            lives: 5,
            unknown_letter_repr: '_',
            min_word_len: 3,
            max_word_len: 15,
            allowed_letters: AllowedLetters::default(),
        }
    }
}

/// Case-insensitive set of permitted characters.
///
/// Stored lowercased. Serializes as a plain string, e.g. `"abc"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AllowedLetters(BTreeSet<char>);

impl AllowedLetters {
    /// Builds a set from the characters of `letters`, lowercasing each one.
    pub fn new(letters: impl AsRef<str>) -> Self {
        Self(letters.as_ref().chars().flat_map(char::to_lowercase).collect())
    }

    /// Returns true if `letter` is permitted.
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    /// Returns true if every character of `value` is permitted.
    ///
    /// Vacuously true for an empty string.
    pub fn contains_all(&self, value: &str) -> bool {
        value.chars().all(|c| self.contains(c))
    }

    /// Number of distinct permitted characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is permitted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the permitted characters in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl Default for AllowedLetters {
    fn default() -> Self {
        Self::new(ASCII_LOWERCASE)
    }
}

impl From<String> for AllowedLetters {
    fn from(letters: String) -> Self {
        Self::new(letters)
    }
}

impl From<&str> for AllowedLetters {
    fn from(letters: &str) -> Self {
        Self::new(letters)
    }
}

impl From<AllowedLetters> for String {
    fn from(letters: AllowedLetters) -> Self {
        letters.0.into_iter().collect()
    }
}

impl std::fmt::Display for AllowedLetters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
