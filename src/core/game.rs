/// Core game interface driven by the engine loop
use crossterm::event::KeyEvent;

/// What the engine should do after a key was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main game trait that a screen must implement to be run by the engine.
/// Events are handled one at a time, then the whole screen is redrawn.
pub trait Game {
    /// Update state from a key press (Esc is handled by the engine)
    fn handle_key(&mut self, key: KeyEvent) -> Flow;

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
