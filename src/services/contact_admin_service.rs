//! Administrative CRUD over stored submissions.

use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::forms::{ContactForm, ContactInput, DeleteForm, DeleteInput, FormErrors};
use crate::metrics::Metrics;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of a create or update.
#[derive(Debug)]
pub enum FormOutcome {
    /// Validation passed and the record was written.
    Saved(Contact),

    /// Validation failed; the store was not touched.
    Invalid {
        input: ContactInput,
        errors: FormErrors,
    },
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The confirmation token was missing or named another record.
    Rejected,
}

/// Admin service trait for the contact screens.
///
/// Identifiers are taken as raw path segments; anything that does not name a
/// stored record fails with `ContactError::NotFound`.
#[async_trait]
pub trait ContactAdminService: Send + Sync {
    /// Every stored contact, ascending by id.
    async fn list(&self) -> ContactResult<Vec<Contact>>;

    /// One stored contact.
    async fn show(&self, id: &str) -> ContactResult<Contact>;

    /// An empty form for a new record.
    fn new_form(&self) -> ContactInput;

    /// Validate and store a new record.
    async fn create(&self, input: ContactInput) -> ContactResult<FormOutcome>;

    /// A stored contact and its pre-filled form.
    async fn edit(&self, id: &str) -> ContactResult<(Contact, ContactInput)>;

    /// Validate and replace the fields of a stored record.
    async fn update(&self, id: &str, input: ContactInput) -> ContactResult<FormOutcome>;

    /// Delete a stored record if the confirmation token names it.
    async fn delete(&self, id: &str, token: &DeleteInput) -> ContactResult<DeleteOutcome>;
}

/// Default implementation of ContactAdminService.
pub struct ContactAdminServiceImpl {
    contact_repo: Arc<dyn ContactRepository>,
    metrics: Metrics,
}

impl ContactAdminServiceImpl {
    /// Create a new admin service.
    pub fn new(contact_repo: Arc<dyn ContactRepository>, metrics: Metrics) -> Self {
        Self {
            contact_repo,
            metrics,
        }
    }

    /// Parse a path segment; an unparseable id cannot name a record.
    fn parse_id(raw: &str) -> ContactResult<ContactId> {
        raw.parse::<ContactId>()
            .map_err(|_| ContactError::NotFound(raw.to_string()))
    }

    async fn load(&self, id: ContactId) -> ContactResult<Contact> {
        self.contact_repo
            .find(id)
            .await?
            .ok_or_else(|| ContactError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ContactAdminService for ContactAdminServiceImpl {
    async fn list(&self) -> ContactResult<Vec<Contact>> {
        Ok(self.contact_repo.find_all().await?)
    }

    async fn show(&self, id: &str) -> ContactResult<Contact> {
        let id = Self::parse_id(id)?;
        self.load(id).await
    }

    fn new_form(&self) -> ContactInput {
        ContactInput::default()
    }

    async fn create(&self, input: ContactInput) -> ContactResult<FormOutcome> {
        let details = match ContactForm::bind(&input) {
            Ok(details) => details,
            Err(errors) => return Ok(FormOutcome::Invalid { input, errors }),
        };

        let contact = self.contact_repo.insert(details).await?;
        self.metrics.record_created();
        info!(contact_id = %contact.id, "Contact created");

        Ok(FormOutcome::Saved(contact))
    }

    async fn edit(&self, id: &str) -> ContactResult<(Contact, ContactInput)> {
        let contact = self.show(id).await?;
        let input = ContactInput::from_details(&contact.details);
        Ok((contact, input))
    }

    async fn update(&self, id: &str, input: ContactInput) -> ContactResult<FormOutcome> {
        let id = Self::parse_id(id)?;
        let existing = self.load(id).await?;

        let details = match ContactForm::bind(&input) {
            Ok(details) => details,
            Err(errors) => return Ok(FormOutcome::Invalid { input, errors }),
        };

        let contact = self
            .contact_repo
            .update(&existing.with_details(details))
            .await?;
        self.metrics.record_updated();
        info!(contact_id = %contact.id, "Contact updated");

        Ok(FormOutcome::Saved(contact))
    }

    async fn delete(&self, id: &str, token: &DeleteInput) -> ContactResult<DeleteOutcome> {
        let id = Self::parse_id(id)?;

        if !DeleteForm::is_valid(token, id) {
            warn!(contact_id = %id, "Delete rejected: confirmation token mismatch");
            return Ok(DeleteOutcome::Rejected);
        }

        self.contact_repo.delete(id).await?;
        self.metrics.record_deleted();
        info!(contact_id = %id, "Contact deleted");

        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryContactRepository;

    fn service() -> ContactAdminServiceImpl {
        ContactAdminServiceImpl::new(Arc::new(InMemoryContactRepository::new()), Metrics::new())
    }

    fn input(name: &str) -> ContactInput {
        ContactInput {
            title: "dr".to_string(),
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            message: "Hi".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_id_maps_to_not_found() {
        assert!(ContactAdminServiceImpl::parse_id("5").is_ok());
        assert!(matches!(
            ContactAdminServiceImpl::parse_id("five"),
            Err(ContactError::NotFound(raw)) if raw == "five"
        ));
    }

    #[tokio::test]
    async fn test_edit_prefills_form() {
        let service = service();
        let FormOutcome::Saved(created) = service.create(input("Ada")).await.unwrap() else {
            panic!("expected the record to be saved");
        };

        let (contact, form) = service.edit(&created.id.to_string()).await.unwrap();
        assert_eq!(contact, created);
        assert_eq!(form, input("Ada"));
    }
}
