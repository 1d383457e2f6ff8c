//! Form domain layer
//!
//! Field model, the three form shapes and the submit/reset state machine
//! shared by the Contact, Sign In and Sign Up pages.

mod field;
mod form_state;
mod schema;
mod submission;

pub use field::FormField;
pub use form_state::{FormError, FormFields};
pub use schema::{ContactForm, SignInForm, SignUpForm};
pub use submission::{FormContext, Submission, SubmissionState, TimerEvent, DEFAULT_RESET_DELAY};
