//! Route table and browser-like navigation history

/// A page the app can show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Contact,
    SignIn,
    SignUp,
    /// Catch-all; carries the path that matched nothing
    NotFound(String),
}

/// Entries of the navigation bar, in display order
pub const NAV_ROUTES: [Route; 5] = [
    Route::Home,
    Route::About,
    Route::Contact,
    Route::SignIn,
    Route::SignUp,
];

impl Route {
    /// Resolve a path. Matching ignores case, a trailing slash, the query and the fragment.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let without_suffix = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let normalized = without_suffix.trim_end_matches('/').to_ascii_lowercase();

        match normalized.as_str() {
            "" => Self::Home,
            "/about" => Self::About,
            "/contact" => Self::Contact,
            "/signin" => Self::SignIn,
            "/signup" => Self::SignUp,
            _ => Self::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::SignIn => "/signin",
            Self::SignUp => "/signup",
            Self::NotFound(path) => path,
        }
    }

    /// Navigation bar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::NotFound(_) => "Not Found",
        }
    }

    /// Whether the page owns an editable form
    pub fn is_form(&self) -> bool {
        matches!(self, Self::Contact | Self::SignIn | Self::SignUp)
    }
}

/// Back/forward stack with a cursor, like a browser session history
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Route>,
    index: usize,
}

impl History {
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Route {
        &self.entries[self.index]
    }

    /// Push a route, dropping forward entries. Returns false when it is already current.
    pub fn push(&mut self, route: Route) -> bool {
        if *self.current() == route {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(route);
        self.index += 1;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> Option<&Route> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&Route> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
