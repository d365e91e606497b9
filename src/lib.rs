//! Contact Desk - a contact form with a submission store, notification emails
//! and an admin screen.
//!
//! Visitors fill in a public form; each valid submission is stored, the site
//! operators are notified by email and the submitter receives a confirmation.
//! An admin screen lists, shows, creates, edits and deletes stored records.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (ids, email addresses, titles)
//! - **models**: The stored contact record
//! - **forms**: Binding and validation of submitted form data
//! - **repositories**: Contact persistence (in-memory or JSON file)
//! - **templates**: Askama pages and email bodies, keyed template registry
//! - **i18n**: Message catalog with parameter substitution
//! - **mail**: Outbound email through SMTP or the log
//! - **services**: Submission, notification and admin flows
//! - **server**: Axum routes for the public page and admin screen
//! - **config**: Configuration from environment variables
//! - **metrics**: In-process counters

pub mod config;
pub mod domain;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod mail;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod templates;

// Re-export commonly used types
pub use config::{Config, ContactSettings, SettingsOverrides};
pub use error::{ConfigError, ContactError, MailError, RenderError, StoreError};
pub use forms::{ContactForm, ContactInput, DeleteInput, FormErrors};
pub use i18n::{Catalog, Translator};
pub use mail::{LogMailer, Mailer, OutgoingEmail, SmtpMailer};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Contact, ContactDetails};
pub use server::{build_router, run_server, AppState};
pub use services::{
    ContactAdminService, ContactAdminServiceImpl, ContactFormService, ContactFormServiceImpl,
    NotificationService, NotificationServiceImpl,
};
pub use templates::{TemplateRegistry, TemplateRenderer};
