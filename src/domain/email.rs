//! EmailAddress value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for email addresses.
///
/// Submitted addresses end up in mail headers (as the notification sender and
/// the confirmation recipient), so they are validated at construction time.
///
/// # Example
///
/// ```
/// use contact_desk::domain::EmailAddress;
///
/// let email = EmailAddress::new("jane@example.com").unwrap();
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain exactly one '@' symbol
    /// - Must have a local part before '@'
    /// - Must have a domain part after '@' with at least one '.'
    /// - Must not contain whitespace or control characters
    /// - Must be usable as a mail header address (checked by lettre)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Check the address format without constructing a value.
    pub fn is_valid(email: &str) -> bool {
        if email
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain.split('.').all(|part| !part.is_empty()) {
            return false;
        }

        lettre::Address::from_str(email).is_ok()
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0
            .split_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
