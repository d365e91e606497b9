//! Notification and confirmation emails for a stored submission.

use crate::config::ContactSettings;
use crate::error::MailResult;
use crate::i18n::Translator;
use crate::mail::{Mailer, OutgoingEmail};
use crate::models::Contact;
use crate::templates::TemplateRenderer;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Composes and sends the two messages that follow a submission.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Tell the site operators about a new submission.
    ///
    /// Sent to every notification address, from the submitter's address.
    async fn notify(&self, contact: &Contact, settings: &ContactSettings) -> MailResult<()>;

    /// Acknowledge receipt to the submitter.
    ///
    /// Sent to the submitter, from the configured confirmation address.
    async fn confirm(&self, contact: &Contact, settings: &ContactSettings) -> MailResult<()>;
}

/// Default implementation of NotificationService.
pub struct NotificationServiceImpl {
    renderer: Arc<dyn TemplateRenderer>,
    translator: Arc<dyn Translator>,
    mailer: Arc<dyn Mailer>,
}

impl NotificationServiceImpl {
    /// Create a new notification service.
    pub fn new(
        renderer: Arc<dyn TemplateRenderer>,
        translator: Arc<dyn Translator>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            renderer,
            translator,
            mailer,
        }
    }

    /// Build the operator notification without sending it.
    pub fn compose_notification(
        &self,
        contact: &Contact,
        settings: &ContactSettings,
    ) -> MailResult<OutgoingEmail> {
        let html_body = self
            .renderer
            .render(&settings.notification_template, contact)?;

        Ok(OutgoingEmail {
            from: contact.email().clone(),
            to: settings.notification_addresses.clone(),
            subject: self
                .translator
                .trans("ContactNotificationSubject", &settings.notification_subject),
            html_body,
        })
    }

    /// Build the submitter confirmation without sending it.
    pub fn compose_confirmation(
        &self,
        contact: &Contact,
        settings: &ContactSettings,
    ) -> MailResult<OutgoingEmail> {
        let html_body = self
            .renderer
            .render(&settings.confirmation_template, contact)?;

        Ok(OutgoingEmail {
            from: settings.confirmation_from_address.clone(),
            to: vec![contact.email().clone()],
            subject: self
                .translator
                .trans("ContactConfirmationSubject", &settings.confirmation_subject),
            html_body,
        })
    }
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn notify(&self, contact: &Contact, settings: &ContactSettings) -> MailResult<()> {
        let email = self.compose_notification(contact, settings)?;
        self.mailer.send(&email).await?;

        info!(contact_id = %contact.id, to = %email.recipients(), "Notification email sent");
        Ok(())
    }

    async fn confirm(&self, contact: &Contact, settings: &ContactSettings) -> MailResult<()> {
        let email = self.compose_confirmation(contact, settings)?;
        self.mailer.send(&email).await?;

        info!(contact_id = %contact.id, to = %email.recipients(), "Confirmation email sent");
        Ok(())
    }
}
