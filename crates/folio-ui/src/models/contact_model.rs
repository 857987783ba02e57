use std::collections::BTreeMap;

use folio_services::contact::validate_field;
use folio_services::{ContactField, ContactForm, ContactSubmission};

/// Contact form values plus one inline error slot per field
#[derive(Debug, Clone, Default)]
pub struct ContactModel {
    form: ContactForm,
    errors: BTreeMap<ContactField, String>,
}

impl ContactModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a field value without validating it
    pub fn set_value(&mut self, field: ContactField, value: &str) {
        let slot = match field {
            ContactField::Name => &mut self.form.name,
            ContactField::Email => &mut self.form.email,
            ContactField::Message => &mut self.form.message,
        };
        *slot = value.to_string();
    }

    /// Validate one field as it loses focus; shows or clears its message
    pub fn blur(&mut self, field: ContactField) -> bool {
        match validate_field(field, self.form.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(e) => {
                self.errors.insert(field, e.to_string());
                false
            }
        }
    }

    /// Validate every field; on success reset the form and return the
    /// submission, otherwise leave the values and show the errors.
    pub fn submit(&mut self) -> Option<ContactSubmission> {
        match self.form.submit() {
            Ok(submission) => {
                self.form = ContactForm::default();
                self.errors.clear();
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors
                    .into_iter()
                    .map(|(field, e)| (field, e.to_string()))
                    .collect();
                None
            }
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.form.value(field)
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn blur_shows_then_clears_error() {
        let mut model = ContactModel::new();
        model.set_value(ContactField::Email, "bad");
        assert!(!model.blur(ContactField::Email));
        assert_eq!(
            model.error(ContactField::Email),
            Some("Please enter a valid email address")
        );

        model.set_value(ContactField::Email, "a@b.co");
        assert!(model.blur(ContactField::Email));
        assert!(model.error(ContactField::Email).is_none());
    }

    #[test]
    fn failed_submit_keeps_values() {
        let mut model = ContactModel::new();
        model.set_value(ContactField::Name, "Ada");

        assert!(model.submit().is_none());
        assert_eq!(model.value(ContactField::Name), "Ada");
        assert!(model.error(ContactField::Name).is_none());
        assert_eq!(model.error(ContactField::Email), Some("Email is required"));
        assert_eq!(model.error(ContactField::Message), Some("Message is required"));
    }

    #[test]
    fn successful_submit_resets_form() {
        let mut model = ContactModel::new();
        model.set_value(ContactField::Name, "Ada");
        model.set_value(ContactField::Email, "ada@example.com");
        model.set_value(ContactField::Message, "Hi");

        let submission = model.submit().unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(model.value(ContactField::Name), "");
        assert!(ContactField::all().iter().all(|f| model.error(*f).is_none()));
    }
}
