//! TUI screen components
//!
//! Contains the individual screens the application switches between.

pub mod quiz;
pub mod start;

pub use quiz::QuizScreen;
pub use start::StartScreen;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Rectangle of the given size centered in `area`, clamped to fit
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Key help line: pairs of (key, description)
pub(crate) fn help_line(entries: &[(&'static str, &'static str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let spans: Vec<Span<'static>> = entries
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(*key, key_style),
                Span::raw(format!(" {}  ", desc)),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Split an area into a fixed-height header, flexible body and footer
pub(crate) fn vertical_split(area: Rect, header: u16, footer: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header),
            Constraint::Min(0),
            Constraint::Length(footer),
        ])
        .split(area)
}
