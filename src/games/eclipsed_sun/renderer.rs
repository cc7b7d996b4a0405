/// Eclipsed Sun screen - pure drawing, no game logic
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders, Paragraph,
    },
};

use super::game::GameStatus;
use super::session::Session;
use super::sun::{self, Shade, DEFAULT_POINT_SIZE, DEFAULT_RADIUS};

const LIGHT: Color = Color::Yellow;
const DARK: Color = Color::DarkGray;

#[derive(Debug)]
pub struct EclipsedSunRenderer;

impl EclipsedSunRenderer {
    pub fn render(frame: &mut Frame, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Sun + word
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new(format!("☀ ═══ ECLIPSED SUN ═══ ☀   Player: {}", session.player().nickname))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(LIGHT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        Self::render_sun(frame, body[0], session.game().attempts());
        Self::render_board(frame, body[1], session);

        let footer_text = if session.game().is_game_over() {
            "[Enter/R] Play again  [Q/Esc] Quit"
        } else {
            "Type a letter + [Enter] Guess  [Tab] Help  [Esc] Quit"
        };
        let footer = Paragraph::new(footer_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(footer, chunks[2]);
    }

    fn render_sun(frame: &mut Frame, area: Rect, attempts: u32) {
        let points = sun::render(attempts, DEFAULT_RADIUS, DEFAULT_POINT_SIZE);
        let bound = DEFAULT_RADIUS + DEFAULT_POINT_SIZE;

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title(" Sun "))
            .marker(Marker::Braille)
            .x_bounds([-bound, bound])
            .y_bounds([-bound, bound])
            .paint(move |ctx| {
                for point in &points {
                    // canvas y points up
                    ctx.draw(&Circle {
                        x: point.x,
                        y: -point.y,
                        radius: point.size / 2.0,
                        color: match point.shade {
                            Shade::Light => LIGHT,
                            Shade::Dark => DARK,
                        },
                    });
                }
            });
        frame.render_widget(canvas, area);
    }

    fn render_board(frame: &mut Frame, area: Rect, session: &Session) {
        let game = session.game();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Word
                Constraint::Length(3), // Guessed letters
                Constraint::Length(3), // Status
                Constraint::Length(3), // Feedback
                Constraint::Length(3), // Input
                Constraint::Min(0),
            ])
            .split(area);

        let spaced: Vec<String> = game.current_guess().chars().map(String::from).collect();
        let word = Paragraph::new(spaced.join(" "))
            .block(Block::default().borders(Borders::ALL).title(" Word "))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(word, rows[0]);

        let guessed: Vec<String> = game.guessed_letters().map(String::from).collect();
        let guessed = Paragraph::new(guessed.join(", "))
            .block(Block::default().borders(Borders::ALL).title(" Guessed "));
        frame.render_widget(guessed, rows[1]);

        let status_color = match game.status() {
            GameStatus::Playing => Color::White,
            GameStatus::Won => Color::Green,
            GameStatus::Lost => Color::Red,
        };
        let status = Paragraph::new(format!("{}   Help left: {}", session.status_line(), session.hints_left()))
            .block(Block::default().borders(Borders::ALL).title(" Status "))
            .style(Style::default().fg(status_color));
        frame.render_widget(status, rows[2]);

        let message = Paragraph::new(session.message())
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(message, rows[3]);

        let input = Paragraph::new(format!("> {}", session.input()))
            .block(Block::default().borders(Borders::ALL).title(" Your guess "));
        frame.render_widget(input, rows[4]);

        if !game.is_game_over() {
            // after the border and the "> " prompt
            let x = rows[4].x + 3 + session.input().chars().count() as u16;
            frame.set_cursor_position((x, rows[4].y + 1));
        }
    }
}
