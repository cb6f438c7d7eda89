//! Lives invariant: lives stay within range and agree with the status.

use super::Invariant;
use crate::game::Game;
use crate::types::GameStatus;

/// Invariant: `0 <= lives_remaining <= config.lives`, a lost game has no lives
/// left, and a running game has lives left unless it started with none.
pub struct LivesBoundedInvariant;

impl Invariant<Game> for LivesBoundedInvariant {
    fn holds(game: &Game) -> bool {
        let lives = game.lives_remaining();
        let start = game.config().lives();

        if lives > start {
            return false;
        }

        match game.status() {
            GameStatus::Lost => lives == 0,
            GameStatus::Running => lives > 0 || start == 0,
            GameStatus::Won => true,
        }
    }

    fn description() -> &'static str {
        "Lives stay within the configured range and match the status"
    }
}
