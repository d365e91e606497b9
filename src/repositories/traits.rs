use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactDetails};
use async_trait::async_trait;

/// Repository for stored contact submissions.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (in-memory, file-backed, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve a single contact by ID, `None` when absent.
    async fn find(&self, id: ContactId) -> StoreResult<Option<Contact>>;

    /// Retrieve every contact in ascending ID order.
    async fn find_all(&self) -> StoreResult<Vec<Contact>>;

    /// Store new details under a freshly assigned ID.
    async fn insert(&self, details: ContactDetails) -> StoreResult<Contact>;

    /// Replace the details of an existing contact.
    ///
    /// Fails with `StoreError::NotFound` if the ID is not stored.
    async fn update(&self, contact: &Contact) -> StoreResult<Contact>;

    /// Remove a contact permanently.
    ///
    /// Fails with `StoreError::NotFound` if the ID is not stored.
    async fn delete(&self, id: ContactId) -> StoreResult<()>;
}
