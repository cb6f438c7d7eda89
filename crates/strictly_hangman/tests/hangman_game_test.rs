//! Tests for the hangman game state machine.

use strictly_hangman::{
    Game, GameStatus, Guess, GuessOutcome, HangmanConfig, HangmanError,
};

#[test]
fn test_construction_respects_length_bounds() {
    let config = HangmanConfig::default().with_min_word_len(4).with_max_word_len(6);
    for len in 0..10 {
        let word = "q".repeat(len);
        let result = Game::new(&word, config.clone());
        if (4..=6).contains(&len) {
            assert!(result.is_ok(), "length {len} should be accepted");
        } else {
            assert!(
                matches!(result, Err(HangmanError::InvalidWordFormat(_))),
                "length {len} should be rejected"
            );
        }
    }
}

#[test]
fn test_construction_respects_alphabet() {
    let config = HangmanConfig::default().with_allowed_letters("ABC");
    assert!(Game::new("cab", config.clone()).is_ok());
    assert!(Game::new("CAB", config.clone()).is_ok());
    assert!(matches!(
        Game::new("cad", config),
        Err(HangmanError::InvalidWordFormat(_))
    ));
}

#[test]
fn test_fresh_game_state() {
    for lives in [1, 3, 10] {
        let game = Game::new("hangman", HangmanConfig::default().with_lives(lives)).unwrap();
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.lives_remaining(), lives);
        assert!(!game.is_over());
    }
}

#[test]
fn test_same_letter_twice() {
    for letter in ["c", "q"] {
        let mut game = Game::with_defaults("cat").unwrap();
        assert!(game.guess(letter).is_ok());
        let lives = game.lives_remaining();
        let status = game.status();

        let err = game.guess(letter).unwrap_err();
        assert_eq!(err, HangmanError::LetterAlreadyGuessed(letter.chars().next().unwrap()));
        assert_eq!(err.to_string(), format!("The letter {letter} has already been guessed."));
        assert_eq!(game.lives_remaining(), lives);
        assert_eq!(game.status(), status);
    }
}

#[test]
fn test_guessing_every_letter_wins() {
    let mut game = Game::with_defaults("banana").unwrap();
    assert_eq!(game.guess("b"), Ok(GuessOutcome::Correct));
    assert_eq!(game.guess("a"), Ok(GuessOutcome::Correct));
    assert_eq!(game.guess("n"), Ok(GuessOutcome::Won));
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.masked_word(), "b a n a n a");
}

#[test]
fn test_running_out_of_lives() {
    let lives = 4;
    let mut game = Game::new("cat", HangmanConfig::default().with_lives(lives)).unwrap();
    for (i, letter) in ['q', 'w', 'e', 'r'].into_iter().enumerate() {
        assert_eq!(game.guess_letter(letter), Ok(GuessOutcome::Incorrect));
        if i + 1 < lives as usize {
            assert_eq!(game.status(), GameStatus::Running);
        }
    }
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.lives_remaining(), 0);
}

#[test]
fn test_exact_word_wins_regardless_of_history() {
    let mut game = Game::with_defaults("kitten").unwrap();
    game.guess("k").unwrap();
    game.guess("z").unwrap();
    let guessed_before = game.guessed_letters().clone();

    assert_eq!(game.guess("kitten"), Ok(GuessOutcome::Won));
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.guessed_letters(), &guessed_before);
}

#[test]
fn test_scenario_cat_two_lives() {
    let mut game = Game::new("cat", HangmanConfig::default().with_lives(2)).unwrap();

    assert_eq!(game.guess("z"), Ok(GuessOutcome::Incorrect));
    assert_eq!(game.lives_remaining(), 1);
    assert_eq!(game.status(), GameStatus::Running);

    assert_eq!(game.guess("x"), Ok(GuessOutcome::Incorrect));
    assert_eq!(game.lives_remaining(), 0);
    assert_eq!(game.status(), GameStatus::Lost);

    // Finished rounds refuse further guesses and stay untouched.
    assert_eq!(game.guess("c"), Err(HangmanError::GameOver(GameStatus::Lost)));
    assert_eq!(game.lives_remaining(), 0);
    assert_eq!(game.guessed_letters().as_slice(), &['z', 'x']);
    assert_eq!(game.word(), "cat");
}

#[test]
fn test_scenario_mixed_case_word_guess() {
    let config = HangmanConfig::default().with_allowed_letters("abcdefghijklmnopqrstuvwxyz");
    let mut game = Game::new("dog", config).unwrap();
    assert_eq!(game.guess("DOG"), Ok(GuessOutcome::Won));
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_scenario_render_cat() {
    let mut game = Game::with_defaults("cat").unwrap();
    game.guess("c").unwrap();
    game.guess("t").unwrap();
    assert_eq!(game.masked_word(), "c _ t");
    assert!(game.render().starts_with("c _ t\n"));
}

#[test]
fn test_render_after_loss() {
    let mut game = Game::new("cat", HangmanConfig::default().with_lives(1)).unwrap();
    game.guess("a").unwrap();
    game.guess("z").unwrap();
    assert_eq!(game.render(), "_ a _\nLives: 0\nGuessed: a,z");
}

#[test]
fn test_invalid_letter_message() {
    let mut game = Game::with_defaults("cat").unwrap();
    let err = game.guess("?").unwrap_err();
    assert_eq!(err.to_string(), "? is not a valid letter. Check HangmanConfig.");
}

#[test]
fn test_apply_accepts_hand_built_guesses() {
    let mut game = Game::with_defaults("cat").unwrap();
    assert_eq!(game.apply(Guess::Letter('C')), Ok(GuessOutcome::Correct));
    assert_eq!(game.apply(Guess::Word("CAT".to_string())), Ok(GuessOutcome::Won));
}

#[test]
fn test_games_do_not_share_config() {
    let base = HangmanConfig::default();
    let a = Game::new("cat", base.clone().with_lives(1)).unwrap();
    let b = Game::new("cat", base.clone()).unwrap();
    assert_eq!(a.lives_remaining(), 1);
    assert_eq!(b.lives_remaining(), 5);
    assert_eq!(base.lives(), 5);
}
