//! Quiz screen implementation
//!
//! Shows the running score, the country to find and three flag panels.
//! Feedback from the last answer is drawn as a popup over the panels.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, help_line, vertical_split};
use crate::flags::{flag_or_placeholder, FlagArt};
use crate::quiz::{Feedback, Phase, QuizSnapshot, OPTIONS_PER_ROUND};

/// Quiz screen component with flag selection
#[derive(Debug, Default)]
pub struct QuizScreen {
    selected: usize,
    status: Option<String>,
}

impl QuizScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted flag
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + OPTIONS_PER_ROUND - 1) % OPTIONS_PER_ROUND;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % OPTIONS_PER_ROUND;
    }

    /// Back to the first flag, used when a new round is dealt
    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn render(&self, f: &mut Frame, snapshot: &QuizSnapshot) {
        let chunks = vertical_split(f.size(), 6, 3);

        self.render_header(f, chunks[0], snapshot);
        self.render_flags(f, chunks[1], snapshot);
        self.render_footer(f, chunks[2], snapshot);

        if let Some(feedback) = &snapshot.feedback {
            render_feedback(f, chunks[1], feedback);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect, snapshot: &QuizSnapshot) {
        let text = vec![
            Line::from(Span::styled(
                format!("Score: {}/{}", snapshot.score, snapshot.rounds_per_session),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Tap the flag of",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                snapshot.target.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let header = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Guess the Flag")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(header, area);
    }

    fn render_flags(&self, f: &mut Frame, area: Rect, snapshot: &QuizSnapshot) {
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let accepting = snapshot.phase == Phase::AwaitingAnswer;
        for (index, country) in snapshot.options.iter().enumerate() {
            let highlighted = accepting && index == self.selected;
            let border_style = if highlighted {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", index + 1))
                .border_style(border_style);
            let inner = block.inner(panels[index]);
            f.render_widget(block, panels[index]);

            let art = flag_or_placeholder(country);
            let flag_area = flag_area(inner);
            f.render_widget(Paragraph::new(flag_lines(&art, flag_area)), flag_area);
        }
    }

    fn render_footer(&self, f: &mut Frame, area: Rect, snapshot: &QuizSnapshot) {
        let line = match (&self.status, snapshot.phase) {
            (Some(status), _) => Line::from(Span::styled(
                status.clone(),
                Style::default().fg(Color::Red),
            )),
            (None, Phase::AwaitingAnswer) => help_line(&[
                ("1-3", "Pick"),
                ("←→", "Move"),
                ("Enter", "Select"),
                ("Esc", "Menu"),
                ("Q", "Quit"),
            ]),
            (None, _) => help_line(&[("Enter", "Dismiss"), ("Esc", "Menu"), ("Q", "Quit")]),
        };

        let footer = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(footer, area);
    }
}

fn render_feedback(f: &mut Frame, area: Rect, feedback: &Feedback) {
    let popup = centered_rect(52, 8, area);
    let title_color = if feedback.is_correct() {
        Color::Green
    } else {
        Color::Red
    };

    let text = vec![
        Line::from(Span::styled(
            feedback.title(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(feedback.message()),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", feedback.action_label()),
            Style::default().add_modifier(Modifier::REVERSED),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Centered drawing area inside a panel, roughly 3:1 in cells
fn flag_area(inner: Rect) -> Rect {
    let width = inner.width.saturating_sub(2);
    let height = (width / 3).clamp(1, inner.height.max(1));
    centered_rect(width, height, inner)
}

/// One line per row, consecutive cells of the same color merged into a span
fn flag_lines(art: &FlagArt, area: Rect) -> Vec<Line<'static>> {
    art.grid(area.width, area.height)
        .into_iter()
        .map(|row| {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run_color = None;
            let mut run_len = 0usize;

            for color in row {
                if Some(color) != run_color {
                    if let Some((r, g, b)) = run_color {
                        spans.push(Span::styled(
                            " ".repeat(run_len),
                            Style::default().bg(Color::Rgb(r, g, b)),
                        ));
                    }
                    run_color = Some(color);
                    run_len = 0;
                }
                run_len += 1;
            }
            if let Some((r, g, b)) = run_color {
                spans.push(Span::styled(
                    " ".repeat(run_len),
                    Style::default().bg(Color::Rgb(r, g, b)),
                ));
            }

            Line::from(spans)
        })
        .collect()
}
