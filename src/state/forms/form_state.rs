//! Live field values of a single form instance

use super::field::{FieldSpec, FormField};
use thiserror::Error;

/// Errors raised when a field update cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form '{form}' has no field named '{field}'")]
    UnknownField { form: &'static str, field: String },
    #[error("form '{form}' is showing its confirmation and cannot be edited")]
    Locked { form: &'static str },
}

/// Ordered mapping from field name to value, plus the focused field
#[derive(Debug, Clone)]
pub struct FormFields {
    form: &'static str,
    fields: Vec<FormField>,
    active_field_index: usize,
}

impl FormFields {
    pub fn new(form: &'static str, specs: &[FieldSpec]) -> Self {
        Self {
            form,
            fields: specs.iter().copied().map(FormField::new).collect(),
            active_field_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value of a field, `None` if the form has no such field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.field(name).map(FormField::as_text)
    }

    /// Value of a field that the schema guarantees exists
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Apply an input-change event
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let form = self.form;
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name() == name)
            .ok_or_else(|| FormError::UnknownField {
                form,
                field: name.to_string(),
            })?;
        field.set_text(value.into());
        Ok(())
    }

    /// Reset every value to the empty string and focus the first field
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.set_active_field(0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    pub fn has_input(&self) -> bool {
        self.fields.iter().any(|f| !f.as_text().is_empty())
    }

    /// Constraint failures in field order
    pub fn constraint_violations(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter_map(FormField::constraint_violation)
            .collect()
    }

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    pub fn active(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }

    pub fn next_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.active_field_index = (self.active_field_index + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        if self.active_field_index == 0 {
            self.active_field_index = self.fields.len() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }
}
