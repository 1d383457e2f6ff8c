//! Contact, Sign In and Sign Up pages

use super::field_renderer::{draw_field, field_height};
use crate::state::{FormFields, Page, SubmissionState};
use crate::ui::components::{render_button, ButtonLook, BUTTON_HEIGHT};
use crate::validation::validate_form;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Fixed text of a form page
struct FormCopy {
    title: &'static str,
    intro: &'static str,
    button: &'static str,
    aside_title: &'static str,
    aside: &'static [&'static str],
    done_title: &'static str,
    done_body: &'static str,
}

const CONTACT: FormCopy = FormCopy {
    title: "Contact Us",
    intro: "Get in touch with us using the form below:",
    button: "Send Message",
    aside_title: "Other Ways to Reach Us:",
    aside: &[
        "Email: contact@example.com",
        "Phone: (555) 123-4567",
        "Address: 123 Tech Street, Dev City, DC 12345",
    ],
    done_title: "Thank You!",
    done_body: "Your message has been submitted successfully. We'll get back to you soon!",
};

const SIGN_IN: FormCopy = FormCopy {
    title: "Sign In",
    intro: "Welcome back! Please sign in to your account:",
    button: "Sign In",
    aside_title: "Don't have an account?",
    aside: &["If you don't have an account, you can sign up here (press 5)."],
    done_title: "Welcome Back!",
    done_body: "You have successfully signed in to your account.",
};

const SIGN_UP: FormCopy = FormCopy {
    title: "Sign Up",
    intro: "Create your account using the form below:",
    button: "Sign Up",
    aside_title: "Already have an account?",
    aside: &["If you already have an account, you can sign in here (press 4)."],
    done_title: "Welcome!",
    done_body: "Your account has been created successfully. You can now sign in!",
};

/// Draw a form page, or its confirmation once submitted
pub fn draw(frame: &mut Frame, area: Rect, page: &Page) {
    let copy = match page {
        Page::Contact(_) => &CONTACT,
        Page::SignIn(_) => &SIGN_IN,
        Page::SignUp(_) => &SIGN_UP,
        _ => return,
    };
    let Some(fields) = page.form_fields().filter(|f| !f.is_empty()) else {
        return;
    };

    if page.submission_state() == Some(SubmissionState::Submitted) {
        draw_confirmation(frame, area, copy);
        return;
    }

    let hints = if matches!(page, Page::Contact(_)) {
        live_hints(fields)
    } else {
        Vec::new()
    };

    let mut constraints = vec![Constraint::Length(2)]; // Title + intro
    constraints.extend(fields.iter().map(|f| Constraint::Length(field_height(f))));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(hints.len() as u16));
    constraints.push(Constraint::Min(0)); // Aside

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header = Paragraph::new(vec![
        heading(copy.title),
        Line::from(Span::styled(copy.intro, Style::default().fg(Color::Gray))),
    ]);
    frame.render_widget(header, chunks[0]);

    for (idx, field) in fields.iter().enumerate() {
        draw_field(frame, chunks[idx + 1], field, idx == fields.active_field());
    }

    let button_idx = fields.len() + 1;
    let button_area = Rect {
        width: (copy.button.len() as u16 + 4).min(chunks[button_idx].width),
        ..chunks[button_idx]
    };
    let look = if fields.constraint_violations().is_empty() {
        ButtonLook::Normal
    } else {
        ButtonLook::Dimmed
    };
    render_button(frame, button_area, copy.button, look);

    if !hints.is_empty() {
        let lines: Vec<Line> = hints
            .into_iter()
            .map(|h| Line::from(Span::styled(h, Style::default().fg(Color::Yellow))))
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[button_idx + 1]);
    }

    let mut aside = vec![Line::from(""), heading(copy.aside_title)];
    aside.extend(copy.aside.iter().map(|line| Line::from(*line)));
    frame.render_widget(
        Paragraph::new(aside).wrap(Wrap { trim: false }),
        chunks[button_idx + 2],
    );
}

/// Helper validation messages, shown once anything has been typed
fn live_hints(fields: &FormFields) -> Vec<String> {
    if !fields.has_input() {
        return Vec::new();
    }
    let result = validate_form(
        fields.value("name"),
        fields.value("email"),
        fields.value("message"),
    );
    if result.is_valid {
        return Vec::new();
    }
    result.errors.into_iter().map(|e| format!("• {e}")).collect()
}

fn draw_confirmation(frame: &mut Frame, area: Rect, copy: &FormCopy) {
    let text = vec![
        heading(copy.done_title),
        Line::from(""),
        Line::from(copy.done_body),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}
