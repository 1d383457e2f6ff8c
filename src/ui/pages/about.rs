//! About page

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const FEATURES: &[&str] = &[
    "Ratatui for immediate-mode terminal rendering",
    "Crossterm for portable input and screen control",
    "Tokio timers for the form reset countdown",
    "Browser-style history with back and forward",
    "Typed form schemas with serde records",
    "Structured logging with tracing",
];

pub fn draw(frame: &mut Frame, area: Rect) {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let mut lines = vec![
        heading("About Page"),
        Line::from("This is a Rust + Ratatui application with routing!"),
        Line::from("Built with Cargo for fast, reproducible builds."),
        Line::from(""),
        heading("Features:"),
    ];
    lines.extend(FEATURES.iter().map(|f| Line::from(format!("  • {f}"))));
    lines.push(Line::from(""));
    lines.push(heading("Tech Stack:"));
    lines.push(Line::from(
        "This application demonstrates terminal UI development in Rust using \
         Ratatui for rendering, an in-process router for navigation, and Tokio \
         for timers.",
    ));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
