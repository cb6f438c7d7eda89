//! Status invariant: a win is always earned.

use super::Invariant;
use crate::game::Game;
use crate::types::GameStatus;

/// Invariant: `Won` means the word is fully revealed or was guessed outright,
/// and only a won game can have been solved by a word guess.
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        match game.status() {
            GameStatus::Won => game.is_revealed() || game.solved_by_word,
            GameStatus::Running | GameStatus::Lost => !game.solved_by_word,
        }
    }

    fn description() -> &'static str {
        "Won status matches a revealed or guessed word"
    }
}
