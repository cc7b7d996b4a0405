pub mod core {
	pub mod config;
	pub mod engine;
	pub mod game;
	pub mod logging;
	pub mod welcome;
}

pub mod cli;
pub mod games;

// Re-export for convenience
pub use crate::core::game::{Flow, Game};
pub use crate::games::eclipsed_sun::{GameState, GameStatus, GuessOutcome, InputError, Session, Shade, SunPoint};
