//! Contact model representing one contact form submission.

use crate::domain::{ContactId, EmailAddress, Title};
use serde::{Deserialize, Serialize};

/// The submitted fields of a contact, without the store identifier.
///
/// Produced by form binding; a value of this type has already passed
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    /// Honorific
    pub title: Title,

    /// Full name
    pub name: String,

    /// Company/organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Telephone number, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    /// Address the submitter wants replies sent to
    pub email: EmailAddress,

    /// Multi-line message body
    pub message: String,
}

/// A stored contact submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Identifier assigned by the repository
    pub id: ContactId,

    /// Submitted fields
    pub details: ContactDetails,
}

impl Contact {
    /// Attach an identifier to validated details.
    pub fn new(id: ContactId, details: ContactDetails) -> Self {
        Self { id, details }
    }

    /// Replace the submitted fields, keeping the identifier.
    pub fn with_details(self, details: ContactDetails) -> Self {
        Self {
            id: self.id,
            details,
        }
    }

    /// Title label followed by the name, e.g. "Mrs Jane Doe".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.details.title.label(), self.details.name)
    }

    pub fn email(&self) -> &EmailAddress {
        &self.details.email
    }
}
