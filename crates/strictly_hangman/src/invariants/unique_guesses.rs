//! Guess history invariant: no repeats, nothing outside the alphabet.

use super::Invariant;
use crate::game::Game;
use std::collections::HashSet;

/// Invariant: guessed letters are unique and all allowed.
pub struct UniqueGuessesInvariant;

impl Invariant<Game> for UniqueGuessesInvariant {
    fn holds(game: &Game) -> bool {
        let allowed = game.config().allowed_letters();
        let mut seen = HashSet::new();
        game.guessed_letters()
            .iter()
            .all(|letter| allowed.contains(letter) && seen.insert(letter))
    }

    fn description() -> &'static str {
        "Guessed letters are unique and allowed"
    }
}
