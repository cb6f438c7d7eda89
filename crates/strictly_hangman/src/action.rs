//! First-class guess types for hangman.
//!
//! Raw input is parsed once into a [`Guess`], so letter and word guesses
//! follow separate, explicit paths through the engine.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guess {
    /// A single character.
    Letter(char),
    /// A whole-word attempt. May be empty.
    Word(String),
}

impl Guess {
    /// Lowercases `value` and picks the mode by character count.
    ///
    /// Exactly one character is a letter guess. Anything else, including the
    /// empty string, is a word guess.
    #[instrument]
    pub fn parse(value: &str) -> Self {
        let value = value.to_lowercase();
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Guess::Letter(letter),
            _ => Guess::Word(value),
        }
    }

    /// A letter guess, lowercased.
    ///
    /// A character whose lowercase form is longer than one character
    /// becomes a word guess.
    pub fn letter(letter: char) -> Self {
        Self::parse(letter.encode_utf8(&mut [0; 4]))
    }

    /// A word guess, lowercased, regardless of length.
    pub fn word(value: &str) -> Self {
        Guess::Word(value.to_lowercase())
    }

    /// Re-applies lowercasing to a guess that may have been built by hand.
    pub(crate) fn canonical(self) -> Self {
        match self {
            Guess::Letter(letter) => Self::letter(letter),
            Guess::Word(value) => Self::word(&value),
        }
    }

    /// Returns true for letter guesses.
    pub fn is_letter(&self) -> bool {
        matches!(self, Guess::Letter(_))
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Letter(letter) => write!(f, "{}", letter),
            Guess::Word(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_is_letter() {
        assert_eq!(Guess::parse("Q"), Guess::Letter('q'));
    }

    #[test]
    fn test_multi_char_is_word() {
        assert_eq!(Guess::parse("DoG"), Guess::Word("dog".to_string()));
    }

    #[test]
    fn test_empty_is_word() {
        assert_eq!(Guess::parse(""), Guess::Word(String::new()));
    }

    #[test]
    fn test_explicit_word_keeps_single_char() {
        assert_eq!(Guess::word("A"), Guess::Word("a".to_string()));
        assert!(!Guess::word("a").is_letter());
    }

    #[test]
    fn test_canonical_lowercases_hand_built_guesses() {
        assert_eq!(Guess::Letter('Z').canonical(), Guess::Letter('z'));
        assert_eq!(
            Guess::Word("CAT".to_string()).canonical(),
            Guess::Word("cat".to_string())
        );
    }
}
