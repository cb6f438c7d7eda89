//! Game logic and rules for hangman.

use super::action::Guess;
use super::config::HangmanConfig;
use super::contracts::{Contract, GuessContract, ValidWord};
use super::error::HangmanError;
use super::types::{GameStatus, GuessOutcome, GuessedLetters};
use tracing::{debug, info, instrument};

/// Hangman game engine.
///
/// Holds one round: the hidden word, its own copy of the configuration, the
/// remaining lives, the letters guessed so far, and the status. All mutation
/// goes through [`Game::apply`] and its wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) word: String,
    pub(crate) config: HangmanConfig,
    pub(crate) lives_remaining: u32,
    pub(crate) guessed: GuessedLetters,
    pub(crate) status: GameStatus,
    /// Set when the round was won by an exact word guess.
    pub(crate) solved_by_word: bool,
}

impl Game {
    /// Starts a round for `word`.
    ///
    /// The word is lowercased, then must consist only of allowed letters and
    /// have a character count within the configured bounds.
    #[instrument(skip_all, fields(lives = config.lives()))]
    pub fn new(word: impl AsRef<str>, config: HangmanConfig) -> Result<Self, HangmanError> {
        let word = word.as_ref().to_lowercase();
        ValidWord::check(&word, &config)?;

        debug!(word_len = word.chars().count(), "Game created");
        Ok(Self {
            lives_remaining: config.lives(),
            word,
            config,
            guessed: GuessedLetters::new(),
            status: GameStatus::Running,
            solved_by_word: false,
        })
    }

    /// Starts a round with [`HangmanConfig::default`].
    pub fn with_defaults(word: impl AsRef<str>) -> Result<Self, HangmanError> {
        Self::new(word, HangmanConfig::default())
    }

    /// Parses raw input and applies it.
    ///
    /// One character is a letter guess; anything else is a word guess.
    #[instrument(skip(self))]
    pub fn guess(&mut self, value: &str) -> Result<GuessOutcome, HangmanError> {
        self.apply(Guess::parse(value))
    }

    /// Guesses a single letter.
    pub fn guess_letter(&mut self, letter: char) -> Result<GuessOutcome, HangmanError> {
        self.apply(Guess::letter(letter))
    }

    /// Guesses the whole word, even if `value` is one character long.
    pub fn guess_word(&mut self, value: &str) -> Result<GuessOutcome, HangmanError> {
        self.apply(Guess::word(value))
    }

    /// Applies a guess.
    ///
    /// Preconditions are checked before anything is touched, so a refused
    /// guess leaves the game exactly as it was. Once the round is over every
    /// guess fails with [`HangmanError::GameOver`]. Debug builds also check
    /// the postconditions and report a broken one as
    /// [`HangmanError::InvariantViolation`].
    #[instrument(skip(self), fields(status = %self.status, lives = self.lives_remaining))]
    pub fn apply(&mut self, guess: Guess) -> Result<GuessOutcome, HangmanError> {
        let guess = guess.canonical();

        #[cfg(debug_assertions)]
        let before = self.clone();

        GuessContract::pre(self, &guess)?;

        let outcome = match &guess {
            Guess::Letter(letter) => self.apply_letter(*letter),
            Guess::Word(value) => self.apply_word(value),
        };

        // Postcondition: verify contract in debug builds
        #[cfg(debug_assertions)]
        GuessContract::post(&before, self)?;

        debug!(%outcome, status = %self.status, lives = self.lives_remaining, "Guess applied");
        Ok(outcome)
    }

    fn apply_letter(&mut self, letter: char) -> GuessOutcome {
        self.guessed.insert(letter);

        if !self.word.contains(letter) {
            return self.lose_life();
        }

        if self.is_revealed() {
            info!("Word revealed letter by letter");
            self.status = GameStatus::Won;
            GuessOutcome::Won
        } else {
            GuessOutcome::Correct
        }
    }

    fn apply_word(&mut self, value: &str) -> GuessOutcome {
        if value == self.word {
            info!("Word guessed outright");
            self.status = GameStatus::Won;
            self.solved_by_word = true;
            GuessOutcome::Won
        } else {
            self.lose_life()
        }
    }

    fn lose_life(&mut self) -> GuessOutcome {
        self.lives_remaining = self.lives_remaining.saturating_sub(1);
        if self.lives_remaining == 0 {
            info!("Out of lives");
            self.status = GameStatus::Lost;
        }
        GuessOutcome::Incorrect
    }

    /// The hidden word, lowercased.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The configuration this round was started with.
    pub fn config(&self) -> &HangmanConfig {
        &self.config
    }

    /// Lives left.
    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    /// Letters guessed so far, in order.
    pub fn guessed_letters(&self) -> &GuessedLetters {
        &self.guessed
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the round is won or lost.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns true if every letter of the word has been guessed.
    pub fn is_revealed(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(c))
    }

    /// The word with unguessed letters hidden, separated by spaces.
    ///
    /// `"cat"` with `c` and `t` guessed renders as `"c _ t"`.
    pub fn masked_word(&self) -> String {
        let hidden = self.config.unknown_letter_repr();
        self.word
            .chars()
            .map(|c| if self.guessed.contains(c) { c } else { hidden })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Status screen: masked word, lives, and guessed letters.
    pub fn render(&self) -> String {
        let guessed = if self.guessed.is_empty() {
            "None".to_string()
        } else {
            self.guessed.to_string()
        };
        format!(
            "{}\nLives: {}\nGuessed: {}",
            self.masked_word(),
            self.lives_remaining,
            guessed
        )
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
