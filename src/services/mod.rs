//! Application service layer.
//!
//! Services hold the contact flows and orchestrate the repository, the
//! templates and the mailer. They are the boundary between the HTTP handlers
//! and the collaborators.

mod contact_admin_service;
mod contact_form_service;
mod notification_service;

pub use contact_admin_service::{
    ContactAdminService, ContactAdminServiceImpl, DeleteOutcome, FormOutcome,
};
pub use contact_form_service::{
    ContactFormService, ContactFormServiceImpl, DeliveryReport, SubmitOutcome, Submission,
};
pub use notification_service::{NotificationService, NotificationServiceImpl};
