//! Single-line prompt overlay

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_WIDTH: u16 = 60;
/// Border + input + blank + hint + border
const DIALOG_HEIGHT: u16 = 5;
const CURSOR: char = '▌';
const ELIDED: char = '…';

/// Render a centered one-line input box with a cursor at the end of `input`
pub fn render_input_dialog(frame: &mut Frame, title: &str, input: &str, hint: &str) {
    let area = frame.area();
    let width = DIALOG_WIDTH.min(area.width);
    let height = DIALOG_HEIGHT.min(area.height);
    let dialog_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    // One column each side for borders, one for the cursor
    let room = width.saturating_sub(3) as usize;
    let content = vec![
        Line::from(vec![
            Span::raw(visible_tail(input, room)),
            Span::styled(CURSOR.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Paragraph::new(content).block(block), dialog_area);
}

/// The last `room` chars of `input`, led by an ellipsis when the front is cut
fn visible_tail(input: &str, room: usize) -> String {
    let len = input.chars().count();
    if len <= room {
        return input.to_string();
    }
    if room == 0 {
        return String::new();
    }
    let keep = room - 1;
    std::iter::once(ELIDED)
        .chain(input.chars().skip(len - keep))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tests::render_with;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_input_is_untouched() {
        assert_eq!(visible_tail("/contact", 57), "/contact");
    }

    #[test]
    fn test_spaces_are_kept() {
        assert_eq!(visible_tail("/a  b   c", 57), "/a  b   c");
    }

    #[test]
    fn test_long_input_keeps_the_end() {
        let input = format!("/{}", "x".repeat(70));
        let shown = visible_tail(&input, 10);
        assert_eq!(shown, format!("…{}", "x".repeat(9)));
        assert_eq!(shown.chars().count(), 10);
    }

    #[test]
    fn test_no_room() {
        assert_eq!(visible_tail("/about", 0), "");
    }

    #[test]
    fn test_long_path_keeps_cursor_on_screen() {
        let input = format!("/{}end", "y".repeat(80));
        let screen = render_with(80, 20, |frame| {
            render_input_dialog(frame, "Go to path", &input, "Enter:go")
        });
        assert!(screen.contains("Go to path"));
        assert!(screen.contains("yyyend▌"));
        assert!(screen.contains("Enter:go"));
    }
}
