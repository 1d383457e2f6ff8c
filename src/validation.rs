//! Form validation and formatting helpers
//!
//! Everything here is pure: no shared state, no side effects, and every
//! input (including empty strings) produces a defined output. Validation
//! problems are reported as data in [`ValidationResult`], never as errors.

use crate::clock::{iso_timestamp, Clock};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// local-part @ domain-part . tld-part, none of them empty or containing whitespace/`@`
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Minimum trimmed message length accepted by [`validate_form`]
pub const MIN_MESSAGE_LEN: usize = 10;

/// Suffix appended by [`truncate_text`]
const ELLIPSIS: &str = "...";

/// Outcome of [`validate_form`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Messages in check order: name, email, message
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Snapshot of a contact submission, emitted to the diagnostic log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

/// Syntactic email check. Not RFC 5322 and not a deliverability check.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a contact form. All three checks run; failures accumulate.
pub fn validate_form(name: &str, email: &str, message: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }

    if email.trim().is_empty() {
        errors.push("Email is required".to_string());
    } else if !validate_email(email) {
        errors.push("Please enter a valid email address".to_string());
    }

    let message = message.trim();
    if message.is_empty() {
        errors.push("Message is required".to_string());
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.push(format!(
            "Message must be at least {MIN_MESSAGE_LEN} characters long"
        ));
    }

    ValidationResult::from_errors(errors)
}

/// Normalize contact details and stamp them with the clock's current instant.
/// Performs no validation.
pub fn format_contact_info(
    name: &str,
    email: &str,
    message: &str,
    clock: &dyn Clock,
) -> ContactRecord {
    ContactRecord {
        name: name.trim().to_string(),
        email: email.to_lowercase().trim().to_string(),
        message: message.trim().to_string(),
        timestamp: iso_timestamp(clock.now()),
    }
}

/// Cut `text` to `max_length` chars and append `"..."`.
///
/// The suffix is not counted against `max_length`, so a truncated result is
/// `max_length + 3` chars long.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_length).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn fixed_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .return_const(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
        clock
    }

    mod validate_email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_valid_addresses() {
            assert!(validate_email("test@example.com"));
            assert!(validate_email("user.name@domain.co.uk"));
            assert!(validate_email("user+tag@example.org"));
        }

        #[test]
        fn test_rejects_invalid_addresses() {
            assert!(!validate_email("invalid-email"));
            assert!(!validate_email("missing@domain"));
            assert!(!validate_email("@domain.com"));
            assert!(!validate_email("user@"));
            assert!(!validate_email(""));
        }

        #[test]
        fn test_rejects_whitespace_and_double_at() {
            assert!(!validate_email("user name@example.com"));
            assert!(!validate_email(" user@example.com"));
            assert!(!validate_email("user@exa mple.com"));
            assert!(!validate_email("user@@example.com"));
            assert!(!validate_email("a@b@example.com"));
        }

        #[test]
        fn test_rejects_empty_tld() {
            assert!(!validate_email("user@example."));
        }
    }

    mod validate_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_has_no_errors() {
            let result = validate_form(
                "John Doe",
                "john@example.com",
                "This is a valid message with enough characters",
            );
            assert!(result.is_valid);
            assert!(result.errors.is_empty());
        }

        #[test]
        fn test_empty_name() {
            let result = validate_form("", "john@example.com", "Valid message here");
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec!["Name is required"]);
        }

        #[test]
        fn test_whitespace_only_name_counts_as_empty() {
            let result = validate_form("   ", "john@example.com", "Valid message here");
            assert_eq!(result.errors, vec!["Name is required"]);
        }

        #[test]
        fn test_empty_email() {
            let result = validate_form("John Doe", "", "Valid message here");
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec!["Email is required"]);
        }

        #[test]
        fn test_invalid_email() {
            let result = validate_form("John Doe", "invalid-email", "Valid message here");
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec!["Please enter a valid email address"]);
        }

        #[test]
        fn test_email_with_padding_is_invalid() {
            let result = validate_form("John Doe", " john@example.com ", "Valid message here");
            assert_eq!(result.errors, vec!["Please enter a valid email address"]);
        }

        #[test]
        fn test_empty_message() {
            let result = validate_form("John Doe", "john@example.com", "");
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec!["Message is required"]);
        }

        #[test]
        fn test_short_message() {
            let result = validate_form("John Doe", "john@example.com", "Short");
            assert!(!result.is_valid);
            assert_eq!(
                result.errors,
                vec!["Message must be at least 10 characters long"]
            );
        }

        #[test]
        fn test_message_length_is_measured_after_trim() {
            let result = validate_form("John Doe", "john@example.com", "   123456789   ");
            assert_eq!(
                result.errors,
                vec!["Message must be at least 10 characters long"]
            );

            let result = validate_form("John Doe", "john@example.com", "  1234567890  ");
            assert!(result.is_valid);
        }

        #[test]
        fn test_multiple_errors_keep_check_order() {
            let result = validate_form("", "invalid-email", "Short");
            assert!(!result.is_valid);
            assert_eq!(
                result.errors,
                vec![
                    "Name is required",
                    "Please enter a valid email address",
                    "Message must be at least 10 characters long",
                ]
            );
        }

        #[test]
        fn test_all_empty() {
            let result = validate_form("", "", "");
            assert_eq!(
                result.errors,
                vec!["Name is required", "Email is required", "Message is required"]
            );
        }

        #[test]
        fn test_is_valid_matches_error_count() {
            let cases = [
                ("", "", ""),
                ("a", "a@b.c", "0123456789"),
                ("a", "bad", "0123456789"),
                ("  ", "a@b.c", "short"),
            ];
            for (name, email, message) in cases {
                let result = validate_form(name, email, message);
                assert_eq!(result.is_valid, result.errors.is_empty());
            }
        }

        #[test]
        fn test_message_length_counts_chars() {
            // Five emoji are five chars, below the minimum of ten
            let result = validate_form("Jo", "jo@example.com", "😀😀😀😀😀");
            assert_eq!(
                result.errors,
                vec!["Message must be at least 10 characters long"]
            );
            assert!(validate_form("Jo", "jo@example.com", "ñññññññññç").is_valid);
        }
    }

    mod format_contact_info {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_trims_and_lowercases() {
            let record = format_contact_info(
                "  John Doe  ",
                "  JOHN@EXAMPLE.COM  ",
                "  Hello World  ",
                &fixed_clock(),
            );
            assert_eq!(
                record,
                ContactRecord {
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    message: "Hello World".to_string(),
                    timestamp: "2024-03-01T09:30:00.000Z".to_string(),
                }
            );
        }

        #[test]
        fn test_handles_empty_strings() {
            let record = format_contact_info("", "", "", &fixed_clock());
            assert_eq!(record.name, "");
            assert_eq!(record.email, "");
            assert_eq!(record.message, "");
            assert!(!record.timestamp.is_empty());
        }

        #[test]
        fn test_does_not_validate() {
            let record = format_contact_info("x", "NOT-AN-EMAIL", "hi", &fixed_clock());
            assert_eq!(record.email, "not-an-email");
            assert_eq!(record.message, "hi");
        }

        #[test]
        fn test_serializes_as_flat_json() {
            let record = format_contact_info("Jane", "jane@example.com", "Hello", &fixed_clock());
            let json = serde_json::to_value(&record).unwrap();
            assert_eq!(json["name"], "Jane");
            assert_eq!(json["email"], "jane@example.com");
            assert_eq!(json["timestamp"], "2024-03-01T09:30:00.000Z");
        }
    }

    mod truncate_text {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_truncates_long_text() {
            let result = truncate_text("This is a very long text that should be truncated", 20);
            assert_eq!(result, "This is a very long ...");
            assert_eq!(result.chars().count(), 23);
        }

        #[test]
        fn test_short_text_unchanged() {
            assert_eq!(truncate_text("Short text", 20), "Short text");
        }

        #[test]
        fn test_text_equal_to_max_unchanged() {
            assert_eq!(
                truncate_text("Exactly twenty chars", 20),
                "Exactly twenty chars"
            );
        }

        #[test]
        fn test_empty_string() {
            assert_eq!(truncate_text("", 10), "");
        }

        #[test]
        fn test_zero_max_length() {
            assert_eq!(truncate_text("abc", 0), "...");
        }

        #[test]
        fn test_counts_chars_not_bytes() {
            assert_eq!(truncate_text("héllo", 5), "héllo");
            assert_eq!(truncate_text("héllo wörld", 7), "héllo w...");
        }

        #[test]
        fn test_length_rule() {
            let text = "abcdefghijklmnopqrstuvwxyz";
            for n in 0..30 {
                let out = truncate_text(text, n);
                if text.len() <= n {
                    assert!(out.chars().count() <= n);
                } else {
                    assert_eq!(out.chars().count(), n + 3);
                }
            }
        }

        #[test]
        fn test_retruncating_with_same_limit() {
            let once = truncate_text("abcdefghij", 4);
            assert_eq!(once, "abcd...");
            // The overshoot means a second pass truncates again.
            assert_eq!(truncate_text(&once, 4), "abcd...");
        }
    }
}
