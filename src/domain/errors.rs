//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided identifier is not a positive integer.
    InvalidId(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided title is not one of the known honorifics.
    UnknownTitle(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "Invalid contact id: {}", id),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::UnknownTitle(title) => write!(f, "Unknown title: {}", title),
        }
    }
}

impl std::error::Error for ValidationError {}
