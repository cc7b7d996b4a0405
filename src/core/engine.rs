use crate::{Flow, Game};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run until the player presses Esc or the game asks to quit.
    /// Returns the game so the caller can inspect its final state.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        info!("Engine started");

        loop {
            terminal.draw(|f| self.game.render(f))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Esc {
                    debug!("Esc pressed");
                    break;
                }
                if self.game.handle_key(key) == Flow::Quit {
                    break;
                }
            }
        }

        info!("Engine stopped");
        Ok(self.game)
    }
}
