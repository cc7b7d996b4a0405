use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::core::config::GameConfig;
use crate::core::welcome::Player;
use crate::{Flow, Game};

use super::game::{GameState, GameStatus, GuessOutcome, HIDDEN};
use super::renderer::EclipsedSunRenderer;

const MAX_INPUT_LEN: usize = 8;

/// Why a line typed by the player is not a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    TooLong,
    NotALetter(char),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Empty | InputError::TooLong => write!(f, "Enter a single letter"),
            InputError::NotALetter(c) => write!(f, "'{}' is not a letter. Enter a single letter", c),
        }
    }
}

impl std::error::Error for InputError {}

/// Accept exactly one alphabetic character, ignoring surrounding whitespace.
pub fn parse_letter(line: &str) -> Result<char, InputError> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(InputError::Empty),
        (Some(_), Some(_)) => Err(InputError::TooLong),
        (Some(c), None) if c.is_alphabetic() => Ok(c),
        (Some(c), None) => Err(InputError::NotALetter(c)),
    }
}

/// One player's sitting at the game: the current round plus everything the
/// screen needs around it (hint quota, typed input, last feedback).
pub struct Session {
    secret_word: String,
    max_attempts: u32,
    hint_quota: u32,
    game: GameState,
    rng: StdRng,
    hints_left: u32,
    player: Player,
    input: String,
    message: String,
}

impl Session {
    pub fn new(config: &GameConfig, player: Player) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(nickname = %player.nickname, max_attempts = config.max_attempts, hints = config.hint_quota, "Session started");

        Self {
            secret_word: config.secret_word.clone(),
            max_attempts: config.max_attempts,
            hint_quota: config.hint_quota,
            game: GameState::with_max_attempts(&config.secret_word, config.max_attempts),
            rng,
            hints_left: config.hint_quota,
            player,
            input: String::new(),
            message: welcome_message(),
        }
    }

    /// Guess the letter typed on `line`. Nothing happens once the game is over.
    pub fn submit(&mut self, line: &str) -> Result<GuessOutcome, InputError> {
        if self.game.is_game_over() {
            return Ok(GuessOutcome::Ignored);
        }

        let letter = match parse_letter(line) {
            Ok(letter) => letter,
            Err(e) => {
                warn!(input = %line, error = %e, "Rejected input");
                self.message = e.to_string();
                return Err(e);
            }
        };

        let outcome = self.game.guess(letter);
        self.message = match outcome {
            GuessOutcome::Hit { .. } => format!("Good guess! '{}' is in the word.", letter),
            GuessOutcome::Miss => format!("Sorry, '{}' is not in the word.", letter),
            GuessOutcome::Ignored => format!("You already tried '{}'.", letter),
        };
        Ok(outcome)
    }

    /// Spend a hint to reveal one hidden letter. Returns the letter when a hint was used.
    pub fn request_help(&mut self) -> Option<char> {
        if self.game.is_game_over() {
            self.message = "The game is over. Restart to use help.".to_string();
            return None;
        }
        if self.hints_left == 0 {
            self.message = "No help left for this game.".to_string();
            return None;
        }

        let letter = self.game.reveal_letter(&mut self.rng);
        if letter == HIDDEN {
            self.message = "Nothing left to reveal.".to_string();
            return None;
        }

        self.hints_left -= 1;
        debug!(%letter, hints_left = self.hints_left, "Hint used");
        self.message = format!("Hint: the word contains '{}'.", letter);
        Some(letter)
    }

    /// Start a fresh round with the same word once the current one is over.
    pub fn restart(&mut self) -> bool {
        if !self.game.is_game_over() {
            return false;
        }

        self.game = GameState::with_max_attempts(&self.secret_word, self.max_attempts);
        self.hints_left = self.hint_quota;
        self.input.clear();
        self.message = welcome_message();
        info!("Game restarted");
        true
    }

    /// Win/loss banner, or the attempts still available while playing.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Playing => format!("Attempts remaining: {}", self.game.remaining_attempts()),
            GameStatus::Won => "You won!".to_string(),
            GameStatus::Lost => format!("You lost. The word was: {}", self.game.secret_word()),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hints_left(&self) -> u32 {
        self.hints_left
    }
}

impl Game for Session {
    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let over = self.game.is_game_over();

        match key.code {
            KeyCode::Char('q') if over => return Flow::Quit,
            KeyCode::Enter | KeyCode::Char('r') if over => {
                self.restart();
            }
            KeyCode::Enter => {
                let line = self.input.clone();
                if self.submit(&line).is_ok() {
                    self.input.clear();
                }
            }
            KeyCode::Tab => {
                self.request_help();
            }
            KeyCode::Backspace if !over => {
                self.input.pop();
            }
            KeyCode::Char(c) if !over && !c.is_control() => {
                if self.input.chars().count() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            _ => {}
        }

        Flow::Continue
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        EclipsedSunRenderer::render(frame, self);
    }
}

fn welcome_message() -> String {
    "Guess the word before the sun goes dark!".to_string()
}
