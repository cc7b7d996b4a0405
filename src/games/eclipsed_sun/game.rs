use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, info};

use super::fold::{fold, normalize_word};

/// Wrong guesses allowed before the sun is fully eclipsed.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Placeholder for an unrevealed letter, also returned when there is nothing left to reveal.
pub const HIDDEN: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// What a call to [`GameState::guess`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word; `revealed` positions were uncovered.
    Hit { revealed: usize },
    /// The letter is not in the word and cost an attempt.
    Miss,
    /// Already guessed, or the game is over. Nothing changed.
    Ignored,
}

/// State of one round: the secret word, what has been guessed and how many
/// wrong guesses were made.
///
/// Matching is done on folded letters (see [`fold`]) while the progress always
/// shows the word's own characters, so guessing `a` reveals `á` as `á`.
#[derive(Debug, Clone)]
pub struct GameState {
    secret_word: String,
    secret: Vec<char>,
    current_guess: Vec<char>,
    guessed: BTreeSet<char>,
    attempts: u32,
    max_attempts: u32,
}

impl GameState {
    pub fn new(secret_word: &str) -> Self {
        Self::with_max_attempts(secret_word, DEFAULT_MAX_ATTEMPTS)
    }

    pub fn with_max_attempts(secret_word: &str, max_attempts: u32) -> Self {
        let secret_word = normalize_word(secret_word);
        let secret: Vec<char> = secret_word.chars().collect();
        let current_guess = vec![HIDDEN; secret.len()];

        info!(length = secret.len(), max_attempts, "New game");

        Self {
            secret_word,
            secret,
            current_guess,
            guessed: BTreeSet::new(),
            attempts: 0,
            max_attempts,
        }
    }

    /// Submit a letter. Redundant guesses and guesses after the game ended are no-ops.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = fold(letter);

        if self.is_game_over() || self.guessed.contains(&letter) {
            return GuessOutcome::Ignored;
        }

        self.guessed.insert(letter);

        let revealed = self.uncover(letter);
        if revealed > 0 {
            debug!(%letter, revealed, "Correct guess");
            self.log_if_finished();
            GuessOutcome::Hit { revealed }
        } else {
            self.attempts += 1;
            debug!(%letter, attempts = self.attempts, "Wrong guess");
            self.log_if_finished();
            GuessOutcome::Miss
        }
    }

    /// Reveal a random hidden letter as a hint and return it as written in the word.
    ///
    /// Every hidden position is equally likely, so letters that occur more
    /// often are picked more often. Returns [`HIDDEN`] and changes nothing when
    /// no letter is left to reveal or the game is over.
    pub fn reveal_letter<R: Rng>(&mut self, rng: &mut R) -> char {
        if self.is_game_over() {
            return HIDDEN;
        }

        let candidates: Vec<char> = self
            .secret
            .iter()
            .copied()
            .filter(|c| !self.guessed.contains(&fold(*c)))
            .collect();

        if candidates.is_empty() {
            return HIDDEN;
        }

        let letter = candidates[rng.random_range(0..candidates.len())];
        let folded = fold(letter);
        self.guessed.insert(folded);
        let revealed = self.uncover(folded);

        debug!(%letter, revealed, "Revealed hint");
        self.log_if_finished();
        letter
    }

    pub fn is_game_over(&self) -> bool {
        self.attempts >= self.max_attempts || self.is_won()
    }

    pub fn is_won(&self) -> bool {
        self.current_guess == self.secret
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.attempts >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Progress so far, `_` for every letter still hidden.
    pub fn current_guess(&self) -> String {
        self.current_guess.iter().collect()
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Folded letters guessed or revealed so far, in alphabetical order.
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    /// Show every position whose folded letter is `folded`, keeping the original character.
    fn uncover(&mut self, folded: char) -> usize {
        let mut count = 0;
        for (slot, &original) in self.current_guess.iter_mut().zip(&self.secret) {
            if fold(original) == folded {
                *slot = original;
                count += 1;
            }
        }
        count
    }

    fn log_if_finished(&self) {
        match self.status() {
            GameStatus::Won => info!(attempts = self.attempts, "Game won"),
            GameStatus::Lost => info!(word = %self.secret_word, "Game lost"),
            GameStatus::Playing => {}
        }
    }
}
