//! Form field value objects

use crate::validation::validate_email;

/// Input flavor of a field, mirrors the HTML input types the pages use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Multiline,
}

/// Static description of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            min_length: None,
        }
    }

    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }
}

/// A single live field: its spec plus the current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
}

impl FormField {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn is_multiline(&self) -> bool {
        self.spec.kind == FieldKind::Multiline
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Value after typing `c`; `None` when the field does not accept it
    pub fn with_char(&self, c: char) -> Option<String> {
        if c == '\n' && !self.is_multiline() {
            return None;
        }
        let mut value = self.value.clone();
        value.push(c);
        Some(value)
    }

    /// Value after a backspace
    pub fn without_last_char(&self) -> String {
        let mut value = self.value.clone();
        value.pop();
        value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Value as rendered; passwords are masked
    pub fn display_value(&self) -> String {
        match self.spec.kind {
            FieldKind::Password => "•".repeat(self.value.chars().count()),
            _ => self.value.clone(),
        }
    }

    /// Browser-style constraint check run by the view before submitting
    pub fn constraint_violation(&self) -> Option<String> {
        if self.value.is_empty() {
            return self
                .spec
                .required
                .then(|| format!("Please fill out the {} field", self.spec.label));
        }

        if self.spec.kind == FieldKind::Email && !validate_email(&self.value) {
            return Some("Please enter a valid email address".to_string());
        }

        match self.spec.min_length {
            Some(min) if self.value.chars().count() < min => Some(format!(
                "{} must be at least {min} characters",
                self.spec.label
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NAME: FieldSpec = FieldSpec::required("name", "Name", FieldKind::Text);
    const EMAIL: FieldSpec = FieldSpec::required("email", "Email", FieldKind::Email);
    const PASSWORD: FieldSpec =
        FieldSpec::required("password", "Password", FieldKind::Password).with_min_length(6);
    const MESSAGE: FieldSpec = FieldSpec::required("message", "Message", FieldKind::Multiline);

    #[test]
    fn test_new_field_is_empty() {
        let field = FormField::new(NAME);
        assert_eq!(field.as_text(), "");
        assert_eq!(field.name(), "name");
        assert_eq!(field.label(), "Name");
    }

    #[test]
    fn test_with_char_and_without_last_char() {
        let mut field = FormField::new(NAME);
        field.set_text("Jo".to_string());
        assert_eq!(field.with_char('e').as_deref(), Some("Joe"));
        assert_eq!(field.without_last_char(), "J");
        // The field itself is untouched
        assert_eq!(field.as_text(), "Jo");
    }

    #[test]
    fn test_without_last_char_on_empty() {
        let field = FormField::new(NAME);
        assert_eq!(field.without_last_char(), "");
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let single = FormField::new(NAME);
        assert_eq!(single.with_char('\n'), None);

        let mut multi = FormField::new(MESSAGE);
        multi.set_text("a".to_string());
        assert_eq!(multi.with_char('\n').as_deref(), Some("a\n"));
        assert!(multi.is_multiline());
    }

    #[test]
    fn test_password_is_masked() {
        let mut field = FormField::new(PASSWORD);
        field.set_text("secret".to_string());
        assert_eq!(field.display_value(), "••••••");
        assert_eq!(field.as_text(), "secret");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::new(EMAIL);
        field.set_text("a@b.c".to_string());
        field.clear();
        assert_eq!(field.as_text(), "");
    }

    mod constraint_violation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_empty() {
            let field = FormField::new(NAME);
            assert_eq!(
                field.constraint_violation().as_deref(),
                Some("Please fill out the Name field")
            );
        }

        #[test]
        fn test_optional_empty_passes() {
            let field = FormField::new(FieldSpec {
                required: false,
                ..NAME
            });
            assert!(field.constraint_violation().is_none());
        }

        #[test]
        fn test_email_format() {
            let mut field = FormField::new(EMAIL);
            field.set_text("missing@domain".to_string());
            assert_eq!(
                field.constraint_violation().as_deref(),
                Some("Please enter a valid email address")
            );
            field.set_text("john@example.com".to_string());
            assert!(field.constraint_violation().is_none());
        }

        #[test]
        fn test_min_length() {
            let mut field = FormField::new(PASSWORD);
            field.set_text("12345".to_string());
            assert_eq!(
                field.constraint_violation().as_deref(),
                Some("Password must be at least 6 characters")
            );
            field.set_text("123456".to_string());
            assert!(field.constraint_violation().is_none());
        }

        #[test]
        fn test_whitespace_counts_as_present() {
            let mut field = FormField::new(NAME);
            field.set_text("  ".to_string());
            assert!(field.constraint_violation().is_none());
        }
    }
}
