//! Test doubles for the service layer.

pub mod mock_contact_repository;
pub mod mock_mailer;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_mailer::MockMailer;
