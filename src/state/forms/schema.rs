//! Field-set shapes of the three form pages

use super::field::{FieldKind, FieldSpec};
use super::form_state::FormFields;
use crate::clock::{iso_timestamp, Clock};
use crate::validation::{format_contact_info, ContactRecord};
use serde::Serialize;
use std::fmt::Debug;

/// Shape of a form: its fields and the record it emits on submit
pub trait FormSchema {
    /// Identifier used in logs and errors
    const NAME: &'static str;
    const FIELDS: &'static [FieldSpec];

    /// Observational snapshot emitted when the form is submitted
    type Record: Serialize + Debug + Clone;

    fn record(fields: &FormFields, clock: &dyn Clock) -> Self::Record;
}

/// Sign-in / sign-up snapshot. The password is never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRecord {
    pub email: String,
    pub timestamp: String,
}

impl AccountRecord {
    fn from_fields(fields: &FormFields, clock: &dyn Clock) -> Self {
        Self {
            email: fields.value("email").trim().to_lowercase(),
            timestamp: iso_timestamp(clock.now()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContactForm;

impl FormSchema for ContactForm {
    const NAME: &'static str = "contact";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", "Name", FieldKind::Text),
        FieldSpec::required("email", "Email", FieldKind::Email),
        FieldSpec::required("message", "Message", FieldKind::Multiline),
    ];

    type Record = ContactRecord;

    fn record(fields: &FormFields, clock: &dyn Clock) -> ContactRecord {
        format_contact_info(
            fields.value("name"),
            fields.value("email"),
            fields.value("message"),
            clock,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SignInForm;

impl FormSchema for SignInForm {
    const NAME: &'static str = "sign-in";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("email", "Email", FieldKind::Email),
        FieldSpec::required("password", "Password", FieldKind::Password).with_min_length(6),
    ];

    type Record = AccountRecord;

    fn record(fields: &FormFields, clock: &dyn Clock) -> AccountRecord {
        AccountRecord::from_fields(fields, clock)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SignUpForm;

impl FormSchema for SignUpForm {
    const NAME: &'static str = "sign-up";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("email", "Email", FieldKind::Email),
        FieldSpec::required("password", "Password", FieldKind::Password),
    ];

    type Record = AccountRecord;

    fn record(fields: &FormFields, clock: &dyn Clock) -> AccountRecord {
        AccountRecord::from_fields(fields, clock)
    }
}
