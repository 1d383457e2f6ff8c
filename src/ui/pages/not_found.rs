//! Catch-all page for unknown paths

use crate::ui::components::{render_button, ButtonLook, BUTTON_HEIGHT};
use crate::validation::truncate_text;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Longest requested path echoed back before it is cut
const MAX_PATH_DISPLAY: usize = 40;

const HOME_BUTTON: &str = "Go back to Home";

pub fn draw(frame: &mut Frame, area: Rect, path: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "404 - Page Not Found",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("The page you're looking for doesn't exist."),
        Line::from(Span::styled(
            format!("Requested: {}", truncate_text(path, MAX_PATH_DISPLAY)),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let button_area = Rect {
        width: (HOME_BUTTON.len() as u16 + 4).min(chunks[1].width),
        ..chunks[1]
    };
    render_button(frame, button_area, HOME_BUTTON, ButtonLook::Highlighted);
}
