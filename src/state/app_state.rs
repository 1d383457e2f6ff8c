//! Application state definitions

use super::page::Page;
use super::router::{History, Route};

/// Address bar prompt opened with Ctrl+L or `:`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBar {
    pub input: String,
}

/// Everything the renderer needs to draw a frame
pub struct AppState {
    pub history: History,
    /// State of the page for `history.current()`
    pub page: Page,
    pub address_bar: Option<AddressBar>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(history: History, page: Page) -> Self {
        Self {
            history,
            page,
            address_bar: None,
            status_message: None,
        }
    }

    pub fn current_route(&self) -> &Route {
        self.history.current()
    }

    /// Keys go to the focused form field rather than to page shortcuts
    pub fn is_typing(&self) -> bool {
        self.address_bar.is_some() || self.page.is_editing()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
