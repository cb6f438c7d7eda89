//! Terminal play loop.
//!
//! A [`Session`] drives one [`Game`] over any reader/writer pair: it prints
//! the board, reads a guess, reports the outcome, and repeats until the round
//! ends. Engine errors are shown and the player is asked again; they never
//! cost a life.

use crossterm::{
    cursor::MoveUp,
    queue,
    terminal::{Clear, ClearType},
};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::time::Duration;
use strictly_hangman::{Game, GameStatus, GuessOutcome, HangmanConfig};
use tracing::{debug, info, instrument, warn};

/// Lines printed per turn: three for the board, one for the prompt, one for
/// the outcome message.
const TURN_LINES: u16 = 5;

/// Error that ends a session early.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// Input ended before the round finished.
    #[display("Input closed before the game finished")]
    InputClosed,
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Presentation loop over an input and an output stream.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    pause: Duration,
    clear: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that pauses `pause` after each guess and erases the
    /// finished turn when `clear` is set.
    pub fn new(input: R, output: W, pause: Duration, clear: bool) -> Self {
        Self {
            input,
            output,
            pause,
            clear,
        }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks for the word until a valid one is entered.
    ///
    /// Each entered line is erased so the guesser cannot read it. The error
    /// for a rejected word stays up until the next word is entered, then goes
    /// with it.
    #[instrument(skip(self, config))]
    pub fn prompt_game(&mut self, config: &HangmanConfig) -> Result<Game, SessionError> {
        let mut error_shown = false;
        loop {
            let word = self.prompt("Enter Hangman word: ")?;
            if self.clear {
                self.clear_lines(if error_shown { 2 } else { 1 })?;
            }
            match Game::new(&word, config.clone()) {
                Ok(game) => return Ok(game),
                Err(e) => {
                    warn!(error = %e, "Word rejected, asking again");
                    writeln!(self.output, "{}", e)?;
                    error_shown = true;
                }
            }
        }
    }

    /// Plays `game` to the end and returns the final status.
    #[instrument(skip_all)]
    pub fn run(&mut self, game: &mut Game) -> Result<GameStatus, SessionError> {
        info!("Session started");
        loop {
            if let Some(message) = final_message(game) {
                writeln!(self.output, "\n{}", message)?;
                self.output.flush()?;
                info!(status = %game.status(), "Session finished");
                return Ok(game.status());
            }

            writeln!(self.output, "{}", game)?;
            let guess = self.prompt("Guess> ")?;

            let message = match game.guess(&guess) {
                Ok(outcome) => outcome_message(outcome, &guess),
                Err(e) => {
                    debug!(error = %e, "Guess refused");
                    e.to_string()
                }
            };
            writeln!(self.output, "{}", message)?;
            self.output.flush()?;

            if !self.pause.is_zero() {
                std::thread::sleep(self.pause);
            }
            if self.clear {
                self.clear_lines(TURN_LINES)?;
            }
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn clear_lines(&mut self, count: u16) -> Result<(), SessionError> {
        for _ in 0..count {
            queue!(self.output, MoveUp(1), Clear(ClearType::CurrentLine))?;
        }
        self.output.flush()?;
        Ok(())
    }
}

/// Message shown after an accepted guess.
pub fn outcome_message(outcome: GuessOutcome, guess: &str) -> String {
    match outcome {
        GuessOutcome::Incorrect => {
            format!("The guess {} wasn't in the word. You lose 1 life...", guess)
        }
        GuessOutcome::Correct => format!("The guess {} is correct. Nice!", guess),
        GuessOutcome::Won => "You solved the game! Congratulations!".to_string(),
    }
}

/// Closing message, or `None` while the round is still running.
pub fn final_message(game: &Game) -> Option<String> {
    match game.status() {
        GameStatus::Running => None,
        GameStatus::Won => Some("You solved the game! Congratulations!".to_string()),
        GameStatus::Lost => Some(format!("You lost... The word was {}", game.word())),
    }
}
