//! Tests for the guessing state machine.

use eclipsed_sun::games::eclipsed_sun::game::HIDDEN;
use eclipsed_sun::{GameState, GameStatus, GuessOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_game_is_fully_hidden() {
    let game = GameState::new("JavaFX");
    assert_eq!(game.secret_word(), "javafx");
    assert_eq!(game.current_guess(), "______");
    assert_eq!(game.attempts(), 0);
    assert_eq!(game.max_attempts(), 5);
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(!game.is_game_over());
}

#[test]
fn test_winning_trace() {
    let mut game = GameState::new("cat");

    assert_eq!(game.guess('c'), GuessOutcome::Hit { revealed: 1 });
    assert_eq!(game.current_guess(), "c__");
    game.guess('a');
    assert_eq!(game.current_guess(), "ca_");
    game.guess('t');
    assert_eq!(game.current_guess(), "cat");

    assert_eq!(game.attempts(), 0);
    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_losing_trace() {
    let mut game = GameState::new("cat");

    for (i, letter) in ['x', 'y', 'z', 'w', 'v'].into_iter().enumerate() {
        assert!(!game.is_game_over());
        assert_eq!(game.guess(letter), GuessOutcome::Miss);
        assert_eq!(game.attempts(), i as u32 + 1);
    }

    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::Lost);
    assert_ne!(game.current_guess(), game.secret_word());
    assert_eq!(game.remaining_attempts(), 0);
}

#[test]
fn test_repeated_guess_changes_nothing() {
    let mut game = GameState::new("banana");

    game.guess('a');
    game.guess('q');
    let progress = game.current_guess();
    let attempts = game.attempts();

    assert_eq!(game.guess('a'), GuessOutcome::Ignored);
    assert_eq!(game.guess('A'), GuessOutcome::Ignored);
    assert_eq!(game.guess('q'), GuessOutcome::Ignored);
    assert_eq!(game.current_guess(), progress);
    assert_eq!(game.attempts(), attempts);
}

#[test]
fn test_hit_reveals_every_occurrence() {
    let mut game = GameState::new("banana");
    assert_eq!(game.guess('a'), GuessOutcome::Hit { revealed: 3 });
    assert_eq!(game.current_guess(), "_a_a_a");
    assert_eq!(game.guess('N'), GuessOutcome::Hit { revealed: 2 });
    assert_eq!(game.current_guess(), "_anana");
}

#[test]
fn test_accented_letter_is_displayed_as_written() {
    let mut game = GameState::new("café");

    assert_eq!(game.guess('e'), GuessOutcome::Hit { revealed: 1 });
    assert_eq!(game.current_guess(), "___é");

    game.guess('c');
    game.guess('a');
    game.guess('f');
    assert_eq!(game.current_guess(), "café");
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.attempts(), 0);
}

#[test]
fn test_accented_guess_matches_plain_letter() {
    let mut game = GameState::new("canción");

    assert_eq!(game.guess('ó'), GuessOutcome::Hit { revealed: 1 });
    assert_eq!(game.current_guess(), "_____ó_");
    assert_eq!(game.guess('o'), GuessOutcome::Ignored);
    assert_eq!(game.guess('Á'), GuessOutcome::Hit { revealed: 1 });
    assert_eq!(game.current_guess(), "_a___ó_");
    assert_eq!(game.attempts(), 0);
}

#[test]
fn test_terminal_state_is_frozen() {
    let mut game = GameState::new("cat");
    for letter in ['x', 'y', 'z', 'w', 'v'] {
        game.guess(letter);
    }
    let mut rng = StdRng::seed_from_u64(7);

    assert_eq!(game.guess('c'), GuessOutcome::Ignored);
    assert_eq!(game.guess('q'), GuessOutcome::Ignored);
    assert_eq!(game.reveal_letter(&mut rng), HIDDEN);
    assert_eq!(game.attempts(), 5);
    assert_eq!(game.current_guess(), "___");
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_progress_length_never_changes() {
    let mut game = GameState::new("mañana");
    let mut rng = StdRng::seed_from_u64(1);
    let len = game.secret_word().chars().count();

    for letter in ['z', 'n', 'm', 'x', 'k'] {
        game.guess(letter);
        assert_eq!(game.current_guess().chars().count(), len);
    }
    game.reveal_letter(&mut rng);
    assert_eq!(game.current_guess().chars().count(), len);
}

#[test]
fn test_custom_threshold() {
    let mut game = GameState::with_max_attempts("cat", 2);
    game.guess('x');
    assert!(!game.is_game_over());
    game.guess('y');
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_reveal_uncovers_a_hidden_letter() {
    let mut game = GameState::new("javafx");
    let mut rng = StdRng::seed_from_u64(42);

    let letter = game.reveal_letter(&mut rng);
    assert!("javafx".contains(letter));

    let progress = game.current_guess();
    for (shown, original) in progress.chars().zip("javafx".chars()) {
        if original == letter {
            assert_eq!(shown, original);
        } else {
            assert_eq!(shown, '_');
        }
    }
    assert_eq!(game.attempts(), 0);
}

#[test]
fn test_reveal_skips_guessed_letters() {
    let mut game = GameState::new("javafx");
    let mut rng = StdRng::seed_from_u64(3);
    for letter in ['j', 'a', 'v', 'f'] {
        game.guess(letter);
    }

    assert_eq!(game.reveal_letter(&mut rng), 'x');
    assert_eq!(game.current_guess(), "javafx");
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_reveal_keeps_accent_and_counts_as_guessed() {
    let mut game = GameState::new("café");
    let mut rng = StdRng::seed_from_u64(11);
    for letter in ['c', 'a', 'f'] {
        game.guess(letter);
    }

    assert_eq!(game.reveal_letter(&mut rng), 'é');
    assert_eq!(game.current_guess(), "café");
    assert!(game.guessed_letters().any(|c| c == 'e'));
}

#[test]
fn test_reveal_with_nothing_hidden_returns_sentinel() {
    let mut game = GameState::new("aa");
    game.guess('a');
    assert_eq!(game.current_guess(), "aa");

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(game.reveal_letter(&mut rng), '_');
    assert_eq!(game.current_guess(), "aa");
    assert_eq!(game.attempts(), 0);
}

#[test]
fn test_reveal_is_deterministic_for_a_seed() {
    let mut first = GameState::new("eclipse");
    let mut second = GameState::new("eclipse");
    let mut rng_a = StdRng::seed_from_u64(2024);
    let mut rng_b = StdRng::seed_from_u64(2024);

    for _ in 0..3 {
        assert_eq!(first.reveal_letter(&mut rng_a), second.reveal_letter(&mut rng_b));
        assert_eq!(first.current_guess(), second.current_guess());
    }
}

#[test]
fn test_guessed_letters_are_folded_and_sorted() {
    let mut game = GameState::new("café");
    game.guess('É');
    game.guess('z');
    game.guess('a');
    let guessed: String = game.guessed_letters().collect();
    assert_eq!(guessed, "aez");
}

#[test]
fn test_dotted_capital_i_word_can_be_won() {
    let mut game = GameState::new("İstanbul");
    assert_eq!(game.secret_word(), "istanbul");
    assert_eq!(game.current_guess(), "________");

    for letter in ['i', 's', 't', 'a', 'n', 'b', 'u', 'l'] {
        game.guess(letter);
    }
    assert_eq!(game.current_guess(), "istanbul");
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_decomposed_accents_are_composed() {
    let mut game = GameState::new("cafe\u{301}");
    assert_eq!(game.secret_word(), "café");
    assert_eq!(game.current_guess().chars().count(), 4);

    for letter in ['c', 'a', 'f', 'e'] {
        game.guess(letter);
    }
    assert_eq!(game.current_guess(), "café");
    assert_eq!(game.status(), GameStatus::Won);
}
