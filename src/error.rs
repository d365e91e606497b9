//! Error types for the contact desk.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ContactId;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to read a file named by the configuration
    #[error("Failed to read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

/// Errors raised by a contact repository.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record with this id
    #[error("Contact {0} not found")]
    NotFound(ContactId),

    /// The id counter cannot advance any further
    #[error("No contact ids left to assign")]
    IdsExhausted,

    /// Backing file could not be read or written
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file holds malformed data
    #[error("Store data error: {0}")]
    Data(#[from] serde_json::Error),
}

/// Errors that can occur while rendering a template.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No renderer registered under this key
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// The template engine failed
    #[error("Template rendering failed: {0}")]
    Askama(#[from] askama::Error),
}

/// Errors that can occur while composing or sending an email.
#[derive(Error, Debug)]
pub enum MailError {
    /// An address could not be used in a mail header
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// The message could not be assembled
    #[error("Failed to build message: {0}")]
    Build(String),

    /// The transport refused or failed to deliver
    #[error("SMTP error: {0}")]
    Transport(String),

    /// Body rendering failed before anything was sent
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors surfaced by the contact services to the HTTP layer.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Requested record does not exist
    #[error("Unable to find contact {0}")]
    NotFound(String),

    /// Persistence failed
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ContactError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ContactError::NotFound(id.to_string()),
            other => ContactError::Store(other),
        }
    }
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with RenderError
pub type RenderResult<T> = Result<T, RenderError>;

/// Convenience type alias for Results with MailError
pub type MailResult<T> = Result<T, MailError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;
