use super::pages::ContactView;
use askama::Template;

/// Body of the message sent to site operators for a new submission.
#[derive(Template)]
#[template(path = "email/notification.html")]
pub struct NotificationEmail {
    pub contact: ContactView,
}

/// Body of the acknowledgement sent back to the submitter.
#[derive(Template)]
#[template(path = "email/confirmation.html")]
pub struct ConfirmationEmail {
    pub contact: ContactView,
}
