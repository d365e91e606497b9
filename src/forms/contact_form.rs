//! The contact form: binding, validation and pre-filling.

use crate::domain::{EmailAddress, Title};
use crate::models::ContactDetails;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Longest accepted single-line value, in characters.
pub const MAX_LINE_LEN: usize = 255;

/// Longest accepted message, in characters.
pub const MAX_MESSAGE_LEN: usize = 5000;

/// Raw contact form fields as submitted.
///
/// Every field defaults to empty so a partially filled or tampered request
/// still binds and gets reported through validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub title: String,
    pub name: String,
    pub company: String,
    pub telephone: String,
    pub email: String,
    pub message: String,
}

impl ContactInput {
    /// Pre-fill the form from stored details.
    pub fn from_details(details: &ContactDetails) -> Self {
        Self {
            title: details.title.key().to_string(),
            name: details.name.clone(),
            company: details.company.clone().unwrap_or_default(),
            telephone: details.telephone.clone().unwrap_or_default(),
            email: details.email.to_string(),
            message: details.message.clone(),
        }
    }
}

/// Field name → message keys for every rule a submission broke.
///
/// Message keys are resolved through the translator when the form is
/// rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, Vec<&'static str>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a broken rule on a field.
    pub fn add(&mut self, field: &'static str, message_key: &'static str) {
        self.fields.entry(field).or_default().push(message_key);
    }

    /// Message keys for one field, empty when the field is valid.
    pub fn for_field(&self, field: &str) -> &[&'static str] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of the invalid fields, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }
}

/// Validation rules of the contact form.
pub struct ContactForm;

impl ContactForm {
    /// Bind raw input and validate it.
    ///
    /// Values are trimmed; empty optional values become `None`. On failure
    /// every broken rule is reported, not just the first.
    pub fn bind(input: &ContactInput) -> Result<ContactDetails, FormErrors> {
        let mut errors = FormErrors::new();

        let title = match input.title.trim() {
            "" => {
                errors.add("title", "contact.title.blank");
                None
            }
            raw => match raw.parse::<Title>() {
                Ok(title) => Some(title),
                Err(_) => {
                    errors.add("title", "contact.title.invalid");
                    None
                }
            },
        };

        let name = required_line(&mut errors, "name", &input.name);
        let company = optional_line(&mut errors, "company", &input.company);
        let telephone = optional_line(&mut errors, "telephone", &input.telephone);

        let email = match required_line(&mut errors, "email", &input.email) {
            Some(raw) => match EmailAddress::new(raw) {
                Ok(email) => Some(email),
                Err(_) => {
                    errors.add("email", "contact.email.invalid");
                    None
                }
            },
            None => None,
        };

        let message = input.message.trim();
        if message.is_empty() {
            errors.add("message", "contact.message.blank");
        } else if message.chars().count() > MAX_MESSAGE_LEN {
            errors.add("message", "contact.message.too_long");
        }

        match (title, name, email) {
            (Some(title), Some(name), Some(email)) if errors.is_empty() => Ok(ContactDetails {
                title,
                name,
                company,
                telephone,
                email,
                message: message.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

fn required_line(errors: &mut FormErrors, field: &'static str, raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        errors.add(field, blank_key(field));
        return None;
    }
    if value.chars().count() > MAX_LINE_LEN {
        errors.add(field, "contact.field.too_long");
        return None;
    }
    Some(value.to_string())
}

fn optional_line(errors: &mut FormErrors, field: &'static str, raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if value.chars().count() > MAX_LINE_LEN {
        errors.add(field, "contact.field.too_long");
        return None;
    }
    Some(value.to_string())
}

fn blank_key(field: &str) -> &'static str {
    match field {
        "name" => "contact.name.blank",
        "email" => "contact.email.blank",
        _ => "contact.field.blank",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ContactInput {
        ContactInput {
            title: "mr".to_string(),
            name: "Jane Doe".to_string(),
            company: String::new(),
            telephone: String::new(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_bind_valid_input() {
        let details = ContactForm::bind(&valid_input()).unwrap();
        assert_eq!(details.title, Title::Mr);
        assert_eq!(details.name, "Jane Doe");
        assert_eq!(details.company, None);
        assert_eq!(details.telephone, None);
        assert_eq!(details.email.as_str(), "jane@example.com");
        assert_eq!(details.message, "Hello");
    }

    #[test]
    fn test_bind_trims_values() {
        let input = ContactInput {
            name: "  Jane Doe ".to_string(),
            company: "  Acme  ".to_string(),
            telephone: "   ".to_string(),
            email: " jane@example.com ".to_string(),
            ..valid_input()
        };
        let details = ContactForm::bind(&input).unwrap();
        assert_eq!(details.name, "Jane Doe");
        assert_eq!(details.company.as_deref(), Some("Acme"));
        assert_eq!(details.telephone, None);
        assert_eq!(details.email.as_str(), "jane@example.com");
    }

    #[test]
    fn test_bind_rejects_addresses_mail_headers_cannot_carry() {
        for raw in ["a..b@example.com", "a,b@example.com"] {
            let input = ContactInput {
                email: raw.to_string(),
                ..valid_input()
            };
            let errors = ContactForm::bind(&input).unwrap_err();
            assert_eq!(errors.for_field("email"), &["contact.email.invalid"], "{}", raw);
        }
    }

    #[test]
    fn test_bind_empty_input_reports_every_required_field() {
        let errors = ContactForm::bind(&ContactInput::default()).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["email", "message", "name", "title"]);
        assert_eq!(errors.for_field("email"), ["contact.email.blank"]);
        assert!(errors.for_field("company").is_empty());
    }

    #[test]
    fn test_bind_rejects_malformed_email() {
        let input = ContactInput {
            email: "not-an-email".to_string(),
            ..valid_input()
        };
        let errors = ContactForm::bind(&input).unwrap_err();
        assert_eq!(errors.for_field("email"), ["contact.email.invalid"]);
        assert!(!errors.has_field("name"));
    }

    #[test]
    fn test_bind_rejects_unknown_title() {
        let input = ContactInput {
            title: "sir".to_string(),
            ..valid_input()
        };
        let errors = ContactForm::bind(&input).unwrap_err();
        assert_eq!(errors.for_field("title"), ["contact.title.invalid"]);
    }

    #[test]
    fn test_bind_rejects_overlong_values() {
        let input = ContactInput {
            company: "x".repeat(MAX_LINE_LEN + 1),
            message: "y".repeat(MAX_MESSAGE_LEN + 1),
            ..valid_input()
        };
        let errors = ContactForm::bind(&input).unwrap_err();
        assert_eq!(errors.for_field("company"), ["contact.field.too_long"]);
        assert_eq!(errors.for_field("message"), ["contact.message.too_long"]);
    }

    #[test]
    fn test_from_details_round_trips() {
        let input = ContactInput {
            company: "Acme".to_string(),
            telephone: "555-0100".to_string(),
            message: "Line one\nLine two".to_string(),
            ..valid_input()
        };
        let details = ContactForm::bind(&input).unwrap();
        assert_eq!(ContactInput::from_details(&details), input);
    }
}
