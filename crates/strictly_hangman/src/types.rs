//! Core domain types for hangman.

use serde::{Deserialize, Serialize};

/// Overall state of a round.
///
/// Moves one way only: `Running` to `Won` or `Lost`, never back.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum GameStatus {
    /// Guesses are still accepted.
    Running,
    /// The word was revealed or guessed outright.
    Won,
    /// Lives ran out.
    Lost,
}

impl GameStatus {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Result of a single accepted guess.
///
/// `Incorrect` is returned for every miss, including the one that costs the
/// last life. Check [`Game::status`](crate::Game::status) to tell them apart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[repr(u8)]
pub enum GuessOutcome {
    /// The letter is not in the word, or the word guess was wrong.
    Incorrect = 0,
    /// The letter is in the word and letters remain hidden.
    Correct = 1,
    /// The guess finished the word.
    Won = 2,
}

impl From<GuessOutcome> for u8 {
    fn from(outcome: GuessOutcome) -> Self {
        outcome as u8
    }
}

/// Letters guessed so far, unique and in guessing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessedLetters(Vec<char>);

impl GuessedLetters {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `letter`. Returns false if it was already present.
    pub(crate) fn insert(&mut self, letter: char) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.0.push(letter);
        true
    }

    /// Returns true if `letter` was guessed.
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    /// Number of guessed letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was guessed yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Guessed letters in order.
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Iterates guessed letters in order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, letter: char) {
        self.0.push(letter);
    }
}

impl std::fmt::Display for GuessedLetters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", joined)
    }
}
