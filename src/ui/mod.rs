//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod pages;

use crate::app::App;
use crate::state::Page;
use components::render_input_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (nav_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_nav_bar(frame, nav_area, app);

    match &app.state.page {
        Page::Home(counter) => pages::home::draw(frame, main_area, counter),
        Page::About => pages::about::draw(frame, main_area),
        Page::Contact(_) | Page::SignIn(_) | Page::SignUp(_) => {
            forms::form_page::draw(frame, main_area, &app.state.page)
        }
        Page::NotFound(path) => pages::not_found::draw(frame, main_area, path),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(bar) = &app.state.address_bar {
        render_input_dialog(frame, "Go to path", &bar.input, "Enter:go  Esc:cancel");
    }
}
