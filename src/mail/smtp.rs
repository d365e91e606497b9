use super::{Mailer, OutgoingEmail};
use crate::domain::EmailAddress;
use crate::error::{MailError, MailResult};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::str::FromStr;
use tracing::debug;

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmtpTls {
    /// Plain connection upgraded with STARTTLS
    #[default]
    StartTls,
    /// TLS from the first byte
    Tls,
    /// No encryption; only for a relay on a trusted network
    None,
}

impl FromStr for SmtpTls {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starttls" => Ok(SmtpTls::StartTls),
            "tls" => Ok(SmtpTls::Tls),
            "none" => Ok(SmtpTls::None),
            other => Err(format!(
                "Must be one of starttls, tls, none, got: {}",
                other
            )),
        }
    }
}

/// SMTP connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub credentials: Option<(String, String)>,
    pub tls: SmtpTls,
}

/// Mailer delivering through an SMTP relay.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the transport. No connection is opened until the first send.
    pub fn new(settings: &SmtpSettings) -> MailResult<Self> {
        let builder = match settings.tls {
            SmtpTls::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                    .map_err(|e| MailError::Transport(e.to_string()))?
            }
            SmtpTls::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .map_err(|e| MailError::Transport(e.to_string()))?,
            SmtpTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host),
        };

        let mut builder = builder.port(settings.port);
        if let Some((user, password)) = &settings.credentials {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }

    /// Convert into a lettre message.
    fn build_message(email: &OutgoingEmail) -> MailResult<Message> {
        let mut builder = Message::builder()
            .from(mailbox(&email.from)?)
            .subject(email.subject.clone());

        for to in &email.to {
            builder = builder.to(mailbox(to)?);
        }

        builder
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

fn mailbox(address: &EmailAddress) -> MailResult<Mailbox> {
    address
        .as_str()
        .parse::<Mailbox>()
        .map_err(|_| MailError::InvalidAddress(address.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()> {
        let message = Self::build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        debug!(to = %email.recipients(), "SMTP relay accepted message");
        Ok(())
    }
}
