use super::{Mailer, OutgoingEmail};
use crate::error::MailResult;
use async_trait::async_trait;
use tracing::info;

/// Mailer that only logs the envelope; nothing leaves the process.
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()> {
        info!(
            from = %email.from,
            to = %email.recipients(),
            subject = %email.subject,
            body_bytes = email.html_body.len(),
            "Email not sent (no SMTP host configured)"
        );
        Ok(())
    }
}
