//! Outbound email.
//!
//! A thin seam over [lettre](https://lettre.rs): services compose an
//! [`OutgoingEmail`] and hand it to whichever [`Mailer`] was configured.
//!
//! | Mailer | Used when |
//! |--------|-----------|
//! | [`SmtpMailer`] | `SMTP_HOST` is set |
//! | [`LogMailer`] | no SMTP host configured (development) |

mod log_mailer;
mod message;
mod smtp;

pub use log_mailer::LogMailer;
pub use message::OutgoingEmail;
pub use smtp::{SmtpMailer, SmtpSettings, SmtpTls};

use crate::error::MailResult;
use async_trait::async_trait;

/// Delivers composed messages.
///
/// Delivery is attempted once; retry policy, if any, belongs to the transport.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()>;
}
