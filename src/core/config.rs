//! Settings for one play session.

use anyhow::{ensure, Result};
use std::path::PathBuf;

use crate::games::eclipsed_sun::fold::normalize_word;
use crate::games::eclipsed_sun::game::DEFAULT_MAX_ATTEMPTS;

pub const DEFAULT_SECRET_WORD: &str = "javafx";
pub const DEFAULT_HINT_QUOTA: u32 = 1;
pub const DEFAULT_LOG_FILE: &str = "eclipsed_sun.log";

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Word to guess, reused on every restart
    pub secret_word: String,
    /// Wrong guesses before the game is lost
    pub max_attempts: u32,
    /// Hints available per game
    pub hint_quota: u32,
    /// Fixed seed for hint selection; random when absent
    pub seed: Option<u64>,
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            secret_word: DEFAULT_SECRET_WORD.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            hint_quota: DEFAULT_HINT_QUOTA,
            seed: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        let word = normalize_word(&self.secret_word);
        ensure!(!word.is_empty(), "secret word must not be empty");
        ensure!(
            word.chars().all(char::is_alphabetic),
            "secret word '{}' must contain letters only",
            self.secret_word
        );
        ensure!(self.max_attempts > 0, "max attempts must be at least 1");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.secret_word, "javafx");
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.hint_quota, 1);
    }

    #[test]
    fn test_accented_word_is_valid() {
        let config = GameConfig { secret_word: "canción".to_string(), ..GameConfig::default() };
        assert!(config.validate().is_ok());

        let dotted = GameConfig { secret_word: "İstanbul".to_string(), ..GameConfig::default() };
        assert!(dotted.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_words_and_threshold() {
        let empty = GameConfig { secret_word: String::new(), ..GameConfig::default() };
        assert!(empty.validate().is_err());

        let spaced = GameConfig { secret_word: "two words".to_string(), ..GameConfig::default() };
        assert!(spaced.validate().is_err());

        let marks_only = GameConfig { secret_word: "\u{301}\u{307}".to_string(), ..GameConfig::default() };
        assert!(marks_only.validate().is_err());

        let zero = GameConfig { max_attempts: 0, ..GameConfig::default() };
        assert!(zero.validate().is_err());
    }
}
