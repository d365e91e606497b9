use async_trait::async_trait;
use contact_desk::error::{MailError, MailResult};
use contact_desk::mail::{Mailer, OutgoingEmail};
use std::sync::{Arc, Mutex};

/// Mock mailer for testing.
///
/// Records every message it is asked to send. When failing, the message is
/// still recorded but the send reports a transport error.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    fail_subjects: Arc<Mutex<Vec<String>>>,
    fail_all: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every send.
    pub fn fail_all(&self) {
        *self.fail_all.lock().unwrap() = true;
    }

    /// Fail sends whose subject equals `subject`.
    pub fn fail_subject(&self, subject: &str) {
        self.fail_subjects.lock().unwrap().push(subject.to_string());
    }

    /// All messages handed to the mailer, in order.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()> {
        self.sent.lock().unwrap().push(email.clone());

        let failing = *self.fail_all.lock().unwrap()
            || self
                .fail_subjects
                .lock()
                .unwrap()
                .iter()
                .any(|subject| *subject == email.subject);
        if failing {
            return Err(MailError::Transport("mock transport down".to_string()));
        }
        Ok(())
    }
}
