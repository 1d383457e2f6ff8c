//! Application state and core logic

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::state::{
    AddressBar, AppState, FormContext, History, Page, Route, SubmitOutcome, TimerEvent,
    NAV_ROUTES,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Handed to every form page on mount
    form_ctx: FormContext,
    /// Expired reset timers, drained by [`App::tick`]
    timer_rx: UnboundedReceiver<TimerEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance showing the configured start route
    pub fn new(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let form_ctx = FormContext {
            timer_tx,
            reset_delay: config.reset_delay(),
            clock,
        };

        let route = Route::parse(config.initial_path());
        let page = Page::mount(&route, &form_ctx);
        tracing::info!(path = route.path(), "starting");

        Self {
            state: AppState::new(History::new(route), page),
            form_ctx,
            timer_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Deliver expired reset timers to the mounted page.
    /// Returns the number of events drained.
    pub fn tick(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.timer_rx.try_recv() {
            drained += 1;
            if !self.state.page.on_timer_fired(event.ticket) {
                tracing::debug!(ticket = %event.ticket, "timer event for an unmounted form");
            }
        }
        drained
    }

    /// Navigate to a new route, pushing it onto the history
    pub fn navigate(&mut self, route: Route) {
        if self.state.history.push(route) {
            self.remount();
        }
    }

    /// Navigate to whatever a raw path resolves to
    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::parse(path));
    }

    /// Go back to the previous route
    pub fn go_back(&mut self) {
        if self.state.history.back().is_some() {
            self.remount();
        }
    }

    pub fn go_forward(&mut self) {
        if self.state.history.forward().is_some() {
            self.remount();
        }
    }

    /// Replace the mounted page; the old page (and any pending reset) is dropped
    fn remount(&mut self) {
        let route = self.state.history.current();
        tracing::info!(path = route.path(), "navigate");
        self.state.page = Page::mount(route, &self.form_ctx);
    }

    /// Apply an input-change event to the mounted form
    pub fn change_field(&mut self, name: &str, value: String) {
        if let Err(e) = self.state.page.set_field(name, value) {
            tracing::warn!(error = %e, "rejected field update");
            self.state.set_status(e.to_string());
        }
    }

    /// Submit the mounted form if the view-level checks pass
    pub fn submit(&mut self) {
        match self.state.page.try_submit() {
            SubmitOutcome::Submitted => self.state.clear_status(),
            SubmitOutcome::Blocked(reason) => self.state.set_status(reason),
            SubmitOutcome::Ignored => {}
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if self.state.address_bar.is_some() {
            self.handle_address_bar_key(key);
            return;
        }

        // Clear any status messages on key press
        self.state.clear_status();

        if self.handle_global_key(key) {
            return;
        }

        if self.state.page.is_editing() {
            self.handle_form_key(key);
        } else {
            self.handle_page_key(key);
        }
    }

    /// Shortcuts that work on every page, including while typing
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('l') {
            self.open_address_bar();
            return true;
        }

        if !key.modifiers.contains(KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Left => self.go_back(),
            KeyCode::Right => self.go_forward(),
            KeyCode::Char(c) => match nav_index(c) {
                Some(idx) => self.navigate(NAV_ROUTES[idx].clone()),
                None => return false,
            },
            _ => return false,
        }
        true
    }

    /// Keys for a form that is accepting input
    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(active) = self.state.page.form_fields().and_then(|f| f.active()) else {
            return;
        };
        let name = active.name();
        let multiline = active.is_multiline();

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => {
                if let Some(value) = active.with_char(c) {
                    self.change_field(name, value);
                }
            }
            KeyCode::Backspace => {
                let value = active.without_last_char();
                self.change_field(name, value);
            }
            KeyCode::Enter if multiline => {
                if let Some(value) = active.with_char('\n') {
                    self.change_field(name, value);
                }
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                if let Some(fields) = self.state.page.form_fields_mut() {
                    fields.next_field();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(fields) = self.state.page.form_fields_mut() {
                    fields.prev_field();
                }
            }
            _ => {}
        }
    }

    /// Keys for pages without an editable form
    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(':') => self.open_address_bar(),
            KeyCode::Char('b') | KeyCode::Left => self.go_back(),
            KeyCode::Char('f') | KeyCode::Right => self.go_forward(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(counter) = self.state.page.counter_mut() {
                    counter.increment();
                }
            }
            KeyCode::Char('-') => {
                if let Some(counter) = self.state.page.counter_mut() {
                    counter.decrement();
                }
            }
            KeyCode::Enter | KeyCode::Char('h')
                if matches!(self.state.page, Page::NotFound(_)) =>
            {
                self.navigate(Route::Home);
            }
            KeyCode::Char(c) => {
                if let Some(idx) = nav_index(c) {
                    self.navigate(NAV_ROUTES[idx].clone());
                }
            }
            _ => {}
        }
    }

    fn open_address_bar(&mut self) {
        self.state.address_bar = Some(AddressBar {
            input: self.state.current_route().path().to_string(),
        });
    }

    fn handle_address_bar_key(&mut self, key: KeyEvent) {
        let Some(bar) = self.state.address_bar.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.state.address_bar = None,
            KeyCode::Enter => {
                let path = std::mem::take(&mut bar.input);
                self.state.address_bar = None;
                self.navigate_path(&path);
            }
            KeyCode::Backspace => {
                bar.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                bar.input.push(c);
            }
            _ => {}
        }
    }
}

/// Map '1'..='5' to a navigation bar index
fn nav_index(c: char) -> Option<usize> {
    c.to_digit(10)
        .map(|d| d as usize)
        .filter(|d| (1..=NAV_ROUTES.len()).contains(d))
        .map(|d| d - 1)
}
