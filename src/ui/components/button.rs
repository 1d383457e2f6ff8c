//! Bordered buttons and navigation links

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// How a button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLook {
    Normal,
    /// Current nav link or default action
    Highlighted,
    /// Action that would be blocked right now
    Dimmed,
}

impl ButtonLook {
    fn styles(self) -> (Style, Style) {
        match self {
            Self::Normal => (Style::default().fg(Color::DarkGray), Style::default()),
            Self::Highlighted => (
                Style::default().fg(Color::Cyan),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Self::Dimmed => (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            ),
        }
    }
}

pub fn render_button(frame: &mut Frame, area: Rect, label: &str, look: ButtonLook) {
    let (border, text) = look.styles();
    let button = Paragraph::new(label.to_string())
        .style(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}

/// Navigation link labelled with its shortcut digit
pub fn render_nav_button(frame: &mut Frame, area: Rect, key: usize, label: &str, is_current: bool) {
    let look = if is_current {
        ButtonLook::Highlighted
    } else {
        ButtonLook::Normal
    };
    render_button(frame, area, &format!("{key} {label}"), look);
}
