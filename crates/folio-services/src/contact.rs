//! Contact form validation and local submission.
//!
//! Submissions are acknowledged and logged only; there is no delivery channel.

use chrono::{DateTime, Utc};
use folio_core::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Message shown after a successful submission
pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! I will get back to you soon.";

// One '@', something on each side, a dot after it, no whitespace
#[allow(clippy::expect_used)]
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn all() -> &'static [ContactField] {
        &[ContactField::Name, ContactField::Email, ContactField::Message]
    }

    /// Capitalized label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

/// True when the value has non-whitespace content
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Email shape check (deliberately loose, no whitespace anywhere)
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validate one field's raw value.
///
/// # Errors
///
/// Returns the field-specific [`ValidationError`] when the value fails.
pub fn validate_field(field: ContactField, value: &str) -> Result<(), ValidationError> {
    if !is_non_empty(value) {
        return Err(ValidationError::Required {
            field: field.label().to_string(),
        });
    }
    if field == ContactField::Email && !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail {
            field: field.label().to_string(),
        });
    }
    Ok(())
}

/// Raw form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Every failing field with its error, in form order
    pub fn validate(&self) -> Vec<(ContactField, ValidationError)> {
        ContactField::all()
            .iter()
            .filter_map(|field| {
                validate_field(*field, self.value(*field))
                    .err()
                    .map(|e| (*field, e))
            })
            .collect()
    }

    /// Validate all three fields and build the submission.
    ///
    /// # Errors
    ///
    /// Returns every failing field when any field is invalid.
    pub fn submit(&self) -> Result<ContactSubmission, Vec<(ContactField, ValidationError)>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let submission = ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            timestamp: Utc::now(),
        };
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            timestamp = %submission.timestamp.to_rfc3339(),
            "Form submitted"
        );
        Ok(submission)
    }
}

/// A validated, trimmed submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Ada  ".to_string(),
            email: "ada@example.com".to_string(),
            message: " Hello there ".to_string(),
        }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn test_is_non_empty() {
        assert!(is_non_empty("x"));
        assert!(!is_non_empty(""));
        assert!(!is_non_empty("   \t"));
    }

    #[test]
    fn test_field_messages() {
        let err = validate_field(ContactField::Name, " ").unwrap_err();
        assert_eq!(err.to_string(), "Name is required");

        let err = validate_field(ContactField::Email, "").unwrap_err();
        assert_eq!(err.to_string(), "Email is required");

        let err = validate_field(ContactField::Email, "nope").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address");

        let err = validate_field(ContactField::Message, "").unwrap_err();
        assert_eq!(err.to_string(), "Message is required");

        assert!(validate_field(ContactField::Message, "hi").is_ok());
    }

    #[test]
    fn test_submit_trims_values() {
        let submission = filled().submit().unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.message, "Hello there");
    }

    #[test]
    fn test_submit_reports_every_failing_field() {
        let form = ContactForm {
            name: String::new(),
            email: "bad".to_string(),
            message: "ok".to_string(),
        };

        let errors = form.submit().unwrap_err();
        let fields: Vec<ContactField> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![ContactField::Name, ContactField::Email]);
    }
}
