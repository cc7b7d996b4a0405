/// Eclipsed Sun - guess the word before the sun is eclipsed
pub mod fold;
pub mod game;
pub mod renderer;
pub mod session;
pub mod sun;

pub use game::{GameState, GameStatus, GuessOutcome};
pub use renderer::EclipsedSunRenderer;
pub use session::{InputError, Session};
pub use sun::{Shade, SunPoint};
