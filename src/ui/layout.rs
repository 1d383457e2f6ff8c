//! Layout components (navigation bar, status bar)

use super::components::{render_nav_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{AppState, Page, NAV_ROUTES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of a single navigation link
const NAV_BUTTON_WIDTH: u16 = 13;

/// Split the screen into navigation bar, page content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Navigation
            Constraint::Min(0),                // Page content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the navigation bar, highlighting the current route
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(NAV_BUTTON_WIDTH); NAV_ROUTES.len()];
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let current = app.state.current_route();
    for (idx, route) in NAV_ROUTES.iter().enumerate() {
        render_nav_button(frame, chunks[idx], idx + 1, route.label(), route == current);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let mut spans = vec![];

    // History indicators
    let arrow = |enabled: bool, glyph: &'static str| {
        let color = if enabled { Color::White } else { Color::Gray };
        Span::styled(glyph, Style::default().fg(color))
    };
    spans.push(Span::raw(" "));
    spans.push(arrow(state.history.can_go_back(), "◀"));
    spans.push(arrow(state.history.can_go_forward(), "▶"));
    spans.push(Span::raw(" "));

    spans.push(Span::styled(
        state.current_route().path().to_string(),
        Style::default().fg(Color::Blue),
    ));
    spans.push(Span::raw(" | "));

    match &state.status_message {
        Some(msg) => spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Red))),
        None => spans.push(Span::styled(
            view_hints(state),
            Style::default().fg(Color::Gray),
        )),
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for what currently has focus
fn view_hints(state: &AppState) -> &'static str {
    if state.address_bar.is_some() {
        return "Enter:go  Esc:cancel";
    }
    if state.is_typing() {
        return "Tab:next  Enter:submit  ^S:submit  Alt+1-5:nav  ^L:address";
    }
    if state.current_route().is_form() {
        return "Submitted  1-5:nav  b/f:history  ::address  q:quit";
    }
    match state.page {
        Page::Home(_) => "+/-:count  1-5:nav  b/f:history  ::address  q:quit",
        Page::NotFound(_) => "Enter:home  1-5:nav  b/f:history  ::address  q:quit",
        _ => "1-5:nav  b/f:history  ::address  q:quit",
    }
}
