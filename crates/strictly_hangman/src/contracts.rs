//! Contract-based validation for hangman.
//!
//! Every check that can reject a word or a guess lives here, so the engine
//! only mutates state after all preconditions have passed.

use super::action::Guess;
use super::config::HangmanConfig;
use super::error::HangmanError;
use super::game::Game;
use super::invariants::{HangmanInvariants, InvariantSet};
use super::types::GameStatus;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), HangmanError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), HangmanError>;
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

/// Precondition for a new game: allowed letters only, length within bounds.
pub struct ValidWord;

impl ValidWord {
    /// Checks an already lowercased candidate word.
    #[instrument(skip_all)]
    pub fn check(word: &str, config: &HangmanConfig) -> Result<(), HangmanError> {
        let len = word.chars().count();
        let in_bounds = (config.min_word_len()..=config.max_word_len()).contains(&len);
        if !config.allowed_letters().contains_all(word) || !in_bounds {
            warn!(len, "Word rejected");
            return Err(HangmanError::invalid_word());
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round has not ended.
pub struct GameRunning;

impl GameRunning {
    /// Fails with `GameOver` once the game has ended.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), HangmanError> {
        match game.status() {
            GameStatus::Running => Ok(()),
            status => Err(HangmanError::GameOver(status)),
        }
    }
}

/// Precondition: a letter guess is not a repeat.
pub struct LetterNotGuessed;

impl LetterNotGuessed {
    /// Fails with `LetterAlreadyGuessed` on a repeat.
    #[instrument(skip(game))]
    pub fn check(letter: char, game: &Game) -> Result<(), HangmanError> {
        if game.guessed_letters().contains(letter) {
            Err(HangmanError::LetterAlreadyGuessed(letter))
        } else {
            Ok(())
        }
    }
}

/// Precondition: every character of the guess is in the alphabet.
///
/// Word guesses are not length-checked.
pub struct LettersAllowed;

impl LettersAllowed {
    /// Fails with `InvalidWordFormat` on any character outside the alphabet.
    #[instrument(skip(game))]
    pub fn check(guess: &Guess, game: &Game) -> Result<(), HangmanError> {
        let allowed = game.config().allowed_letters();
        match guess {
            Guess::Letter(letter) if !allowed.contains(*letter) => {
                Err(HangmanError::invalid_letter(*letter))
            }
            Guess::Word(value) if !allowed.contains_all(value) => {
                Err(HangmanError::invalid_value(value))
            }
            _ => Ok(()),
        }
    }
}

/// Composite precondition, checked in order: running, not a repeat, allowed.
pub struct LegalGuess;

impl LegalGuess {
    /// Validates all preconditions for a guess.
    #[instrument(skip(game))]
    pub fn check(guess: &Guess, game: &Game) -> Result<(), HangmanError> {
        GameRunning::check(game)?;
        if let Guess::Letter(letter) = guess {
            LetterNotGuessed::check(*letter, game)?;
        }
        LettersAllowed::check(guess, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guesses.
///
/// Preconditions:
/// - Game is running
/// - Letter was not guessed before
/// - All characters are allowed
///
/// Postconditions:
/// - Lives never increase
/// - Earlier guesses are kept, in order
/// - Game invariants hold
pub struct GuessContract;

impl Contract<Game, Guess> for GuessContract {
    fn pre(game: &Game, guess: &Guess) -> Result<(), HangmanError> {
        LegalGuess::check(guess, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), HangmanError> {
        if after.lives_remaining() > before.lives_remaining() {
            return Err(HangmanError::InvariantViolation(
                "Postcondition failed: lives increased".to_string(),
            ));
        }
        if !after
            .guessed_letters()
            .as_slice()
            .starts_with(before.guessed_letters().as_slice())
        {
            return Err(HangmanError::InvariantViolation(
                "Postcondition failed: guessed letters rewritten".to_string(),
            ));
        }

        HangmanInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HangmanError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::with_defaults("cat").unwrap()
    }

    #[test]
    fn test_precondition_fresh_letter() {
        assert!(GuessContract::pre(&game(), &Guess::Letter('c')).is_ok());
    }

    #[test]
    fn test_duplicate_checked_before_alphabet() {
        let mut game = game();
        game.guessed.push_unchecked('1');
        assert_eq!(
            GuessContract::pre(&game, &Guess::Letter('1')),
            Err(HangmanError::LetterAlreadyGuessed('1'))
        );
    }

    #[test]
    fn test_precondition_rejects_finished_game() {
        let mut game = game();
        game.status = GameStatus::Won;
        assert_eq!(
            GuessContract::pre(&game, &Guess::Letter('c')),
            Err(HangmanError::GameOver(GameStatus::Won))
        );
    }

    #[test]
    fn test_precondition_word_alphabet() {
        assert!(matches!(
            GuessContract::pre(&game(), &Guess::Word("c-t".to_string())),
            Err(HangmanError::InvalidWordFormat(_))
        ));
        assert!(GuessContract::pre(&game(), &Guess::Word(String::new())).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_guess() {
        let before = game();
        let mut after = before.clone();
        after.guess("z").unwrap();
        assert!(GuessContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_life_gain() {
        let before = game();
        let mut after = before.clone();
        after.lives_remaining += 1;
        assert!(matches!(
            GuessContract::post(&before, &after),
            Err(HangmanError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_reports_broken_invariants() {
        let before = game();
        let mut after = before.clone();
        after.status = GameStatus::Won;
        let err = GuessContract::post(&before, &after).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invariant violation: Postcondition failed: Won status matches a revealed or guessed word"
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_apply_returns_violation_from_corrupted_state() {
        let mut game = game();
        game.lives_remaining = game.config().lives() + 1;
        assert!(matches!(
            game.apply(Guess::Letter('c')),
            Err(HangmanError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_rewritten_history() {
        let mut before = game();
        before.guess("c").unwrap();
        let after = game();
        assert!(GuessContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_valid_word_bounds() {
        let config = HangmanConfig::default().with_min_word_len(2).with_max_word_len(3);
        assert!(ValidWord::check("ab", &config).is_ok());
        assert!(ValidWord::check("abc", &config).is_ok());
        assert!(ValidWord::check("a", &config).is_err());
        assert!(ValidWord::check("abcd", &config).is_err());
    }
}
