//! Per-page state, created on mount and dropped on navigation

use super::forms::{
    ContactForm, FormContext, FormError, FormFields, SignInForm, SignUpForm, Submission,
    SubmissionState,
};
use super::router::Route;
use uuid::Uuid;

/// Home page counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub count: i64,
}

impl Counter {
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }
}

/// The mounted page and the state it owns
pub enum Page {
    Home(Counter),
    About,
    Contact(Submission<ContactForm>),
    SignIn(Submission<SignInForm>),
    SignUp(Submission<SignUpForm>),
    NotFound(String),
}

/// What a submit attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// The view-level constraint check failed; carries the first violation
    Blocked(String),
    /// Already showing the confirmation, or the page has no form
    Ignored,
}

impl Page {
    /// Fresh state for a route
    pub fn mount(route: &Route, ctx: &FormContext) -> Self {
        match route {
            Route::Home => Self::Home(Counter::default()),
            Route::About => Self::About,
            Route::Contact => Self::Contact(Submission::new(ctx.clone())),
            Route::SignIn => Self::SignIn(Submission::new(ctx.clone())),
            Route::SignUp => Self::SignUp(Submission::new(ctx.clone())),
            Route::NotFound(path) => Self::NotFound(path.clone()),
        }
    }

    pub fn counter_mut(&mut self) -> Option<&mut Counter> {
        match self {
            Self::Home(counter) => Some(counter),
            _ => None,
        }
    }

    /// Field values of the page's form, if it has one
    pub fn form_fields(&self) -> Option<&FormFields> {
        match self {
            Self::Contact(form) => Some(form.fields()),
            Self::SignIn(form) => Some(form.fields()),
            Self::SignUp(form) => Some(form.fields()),
            _ => None,
        }
    }

    /// Editable field values; `None` without a form or while submitted
    pub fn form_fields_mut(&mut self) -> Option<&mut FormFields> {
        match self {
            Self::Contact(form) => form.fields_mut(),
            Self::SignIn(form) => form.fields_mut(),
            Self::SignUp(form) => form.fields_mut(),
            _ => None,
        }
    }

    pub fn submission_state(&self) -> Option<SubmissionState> {
        match self {
            Self::Contact(form) => Some(form.state()),
            Self::SignIn(form) => Some(form.state()),
            Self::SignUp(form) => Some(form.state()),
            _ => None,
        }
    }

    /// True when an editable form is showing
    pub fn is_editing(&self) -> bool {
        self.submission_state() == Some(SubmissionState::Idle)
    }

    /// Route an input-change event to the page's form
    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        match self {
            Self::Contact(form) => form.set_field(name, value),
            Self::SignIn(form) => form.set_field(name, value),
            Self::SignUp(form) => form.set_field(name, value),
            _ => Err(FormError::UnknownField {
                form: "none",
                field: name.to_string(),
            }),
        }
    }

    /// Check constraints, then hand the fields to the state machine
    pub fn try_submit(&mut self) -> SubmitOutcome {
        if !self.is_editing() {
            return SubmitOutcome::Ignored;
        }
        if let Some(violation) = self
            .form_fields()
            .and_then(|fields| fields.constraint_violations().into_iter().next())
        {
            return SubmitOutcome::Blocked(violation);
        }

        let submitted = match self {
            Self::Contact(form) => form.submit().is_some(),
            Self::SignIn(form) => form.submit().is_some(),
            Self::SignUp(form) => form.submit().is_some(),
            _ => false,
        };
        if submitted {
            SubmitOutcome::Submitted
        } else {
            SubmitOutcome::Ignored
        }
    }

    pub fn on_timer_fired(&mut self, ticket: Uuid) -> bool {
        match self {
            Self::Contact(form) => form.on_timer_fired(ticket),
            Self::SignIn(form) => form.on_timer_fired(ticket),
            Self::SignUp(form) => form.on_timer_fired(ticket),
            _ => false,
        }
    }
}
