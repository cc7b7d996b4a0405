use ratatui::{
    widgets::{Block, Borders, Paragraph},
    layout::{Layout, Constraint, Direction, Alignment},
    style::{Style, Color, Modifier},
    Frame,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use anyhow::Result;
use tracing::info;

const MAX_NICKNAME_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub nickname: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum WelcomeResult {
    Start(Player),
    Quit,
}

/// Nickname prompt shown before the first round
#[derive(Default)]
pub struct WelcomeScreen {
    pub nickname_input: String,
    pub hint: Option<&'static str>,
}

impl WelcomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<WelcomeResult> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(result) = self.handle_key(key) {
                        if let WelcomeResult::Start(player) = &result {
                            info!(nickname = %player.nickname, "Player joined");
                        }
                        return Ok(result);
                    }
                }
            }
        }
    }

    /// Returns a result once the player confirmed a name or gave up.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<WelcomeResult> {
        match key.code {
            KeyCode::Enter => {
                let nickname = self.nickname_input.trim();
                if nickname.is_empty() {
                    self.hint = Some("Please enter a nickname");
                    return None;
                }
                Some(WelcomeResult::Start(Player { nickname: nickname.to_string() }))
            }
            KeyCode::Esc => Some(WelcomeResult::Quit),
            KeyCode::Char(c) if !c.is_control() => {
                if self.nickname_input.chars().count() < MAX_NICKNAME_LEN {
                    self.nickname_input.push(c);
                }
                self.hint = None;
                None
            }
            KeyCode::Backspace => {
                self.nickname_input.pop();
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" ECLIPSED SUN ")
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            chunks[0]
        );

        let mut body = format!("What should we call you?\n\n > {}", self.nickname_input);
        if let Some(hint) = self.hint {
            body.push_str(&format!("\n\n{}", hint));
        }
        f.render_widget(
            Paragraph::new(body)
                .block(Block::default().title(" WELCOME ").borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[1]
        );

        f.render_widget(
            Paragraph::new("[Enter] Start  [Esc] Quit")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            chunks[2]
        );
    }
}
