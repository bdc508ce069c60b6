//! Start screen implementation
//!
//! Title card shown before a session begins.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{help_line, vertical_split};

/// Title screen
#[derive(Debug, Default)]
pub struct StartScreen {
    rounds_per_session: u32,
}

impl StartScreen {
    pub fn new(rounds_per_session: u32) -> Self {
        Self { rounds_per_session }
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = vertical_split(f.size(), 5, 3);

        self.render_title(f, chunks[0]);
        self.render_body(f, chunks[1]);

        let help = Paragraph::new(help_line(&[("Enter", "Play"), ("Q", "Quit")]))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, chunks[2]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(area);

        let title = Paragraph::new("Guess the Flag")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new(format!("{} rounds per game", self.rounds_per_session))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_body(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from("Three flags are shown each round."),
            Line::from("Pick the one that belongs to the named country."),
            Line::from(""),
            Line::from("Press Enter to start"),
        ];
        let body = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(body, area);
    }
}
