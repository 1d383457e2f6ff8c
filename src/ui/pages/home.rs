//! Home page with the counter

use crate::state::Counter;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, counter: &Counter) {
    let button = |label: &'static str, color: Color| {
        Span::styled(
            format!(" {label} "),
            Style::default()
                .fg(Color::White)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Hello Ratatui",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            button("-", Color::Red),
            Span::styled(
                format!("  count is {}  ", counter.count),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            button("+", Color::Green),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press - or + to change the count",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
