use super::contact_table::ContactTable;
use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactDetails};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Contact repository held entirely in process memory.
///
/// Contents are lost on restart; used for development and tests.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    table: RwLock<ContactTable>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        Ok(self.table.read().await.get(id))
    }

    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.table.read().await.all())
    }

    async fn insert(&self, details: ContactDetails) -> StoreResult<Contact> {
        self.table.write().await.insert(details)
    }

    async fn update(&self, contact: &Contact) -> StoreResult<Contact> {
        self.table.write().await.update(contact)
    }

    async fn delete(&self, id: ContactId) -> StoreResult<()> {
        self.table.write().await.remove(id)
    }
}
