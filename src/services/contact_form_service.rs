//! Public contact form flow.

use crate::config::{ContactSettings, SettingsOverrides};
use crate::error::{ContactResult, MailError};
use crate::forms::{ContactForm, ContactInput, FormErrors};
use crate::i18n::Translator;
use crate::metrics::Metrics;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use crate::services::NotificationService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of a public submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was stored or sent.
    Invalid {
        input: ContactInput,
        errors: FormErrors,
    },

    /// The submission was stored; emails were attempted.
    Accepted(Submission),
}

/// A stored submission and what happened to its emails.
#[derive(Debug)]
pub struct Submission {
    pub contact: Contact,
    pub thanks_message: String,
    pub delivery: DeliveryReport,
}

/// Per-message delivery result.
///
/// A failed send does not undo the stored record.
#[derive(Debug)]
pub struct DeliveryReport {
    pub notification: Result<(), MailError>,
    pub confirmation: Result<(), MailError>,
}

impl DeliveryReport {
    /// Both messages were handed to the mailer.
    pub fn is_complete(&self) -> bool {
        self.notification.is_ok() && self.confirmation.is_ok()
    }
}

/// Contact form service trait for the public pages.
#[async_trait]
pub trait ContactFormService: Send + Sync {
    /// An empty, unbound form.
    fn display_form(&self) -> ContactInput;

    /// Translated message shown after a successful submission.
    fn thanks_message(&self, overrides: &SettingsOverrides) -> String;

    /// Validate, store, then notify operators and confirm to the submitter.
    async fn submit(
        &self,
        input: ContactInput,
        overrides: &SettingsOverrides,
    ) -> ContactResult<SubmitOutcome>;
}

/// Default implementation of ContactFormService.
pub struct ContactFormServiceImpl {
    contact_repo: Arc<dyn ContactRepository>,
    notifications: Arc<dyn NotificationService>,
    translator: Arc<dyn Translator>,
    settings: Arc<ContactSettings>,
    metrics: Metrics,
}

impl ContactFormServiceImpl {
    /// Create a new contact form service.
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        notifications: Arc<dyn NotificationService>,
        translator: Arc<dyn Translator>,
        settings: Arc<ContactSettings>,
        metrics: Metrics,
    ) -> Self {
        Self {
            contact_repo,
            notifications,
            translator,
            settings,
            metrics,
        }
    }

    fn record_delivery(&self, contact: &Contact, kind: &str, result: &Result<(), MailError>) {
        match result {
            Ok(()) => self.metrics.record_email_sent(),
            Err(e) => {
                self.metrics.record_email_failure();
                warn!(contact_id = %contact.id, "{} email failed: {}", kind, e);
            }
        }
    }
}

#[async_trait]
impl ContactFormService for ContactFormServiceImpl {
    fn display_form(&self) -> ContactInput {
        ContactInput::default()
    }

    fn thanks_message(&self, overrides: &SettingsOverrides) -> String {
        let settings = self.settings.resolve(overrides);
        self.translator
            .trans("ContactThanksMessage", &settings.contact_thanks_message)
    }

    async fn submit(
        &self,
        input: ContactInput,
        overrides: &SettingsOverrides,
    ) -> ContactResult<SubmitOutcome> {
        let details = match ContactForm::bind(&input) {
            Ok(details) => details,
            Err(errors) => {
                self.metrics.record_submission_rejected();
                info!(
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "Contact submission rejected"
                );
                return Ok(SubmitOutcome::Invalid { input, errors });
            }
        };

        let contact = self.contact_repo.insert(details).await?;
        self.metrics.record_submission_accepted();
        info!(contact_id = %contact.id, "Contact submission stored");

        let settings = self.settings.resolve(overrides);

        // The record is already stored; both sends are attempted regardless
        // of the other's result.
        let notification = self.notifications.notify(&contact, &settings).await;
        self.record_delivery(&contact, "Notification", &notification);

        let confirmation = self.notifications.confirm(&contact, &settings).await;
        self.record_delivery(&contact, "Confirmation", &confirmation);

        let thanks_message = self
            .translator
            .trans("ContactThanksMessage", &settings.contact_thanks_message);

        Ok(SubmitOutcome::Accepted(Submission {
            contact,
            thanks_message,
            delivery: DeliveryReport {
                notification,
                confirmation,
            },
        }))
    }
}
