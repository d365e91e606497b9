use super::contact_table::{ContactTable, TableSnapshot};
use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactDetails};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Contact repository persisted to a single JSON file.
///
/// The whole table is held in memory and the file is rewritten after every
/// mutation. A mutation only becomes visible once the file write succeeded,
/// so a failed write leaves both the file and the in-memory view unchanged.
#[derive(Debug)]
pub struct FileContactRepository {
    path: PathBuf,
    table: RwLock<ContactTable>,
}

impl FileContactRepository {
    /// Open the store at `path`, starting empty if the file does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let table = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let snapshot: TableSnapshot = serde_json::from_slice(&bytes)?;
                ContactTable::from_snapshot(snapshot)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No contact store at {}, starting empty", path.display());
                ContactTable::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    /// Write the table next to the target file, then rename it into place.
    async fn persist(&self, table: &ContactTable) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&table.snapshot())?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!("Contact store written to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for FileContactRepository {
    async fn find(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        Ok(self.table.read().await.get(id))
    }

    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.table.read().await.all())
    }

    async fn insert(&self, details: ContactDetails) -> StoreResult<Contact> {
        let mut guard = self.table.write().await;
        let mut next = guard.clone();
        let contact = next.insert(details)?;

        self.persist(&next).await?;
        *guard = next;
        Ok(contact)
    }

    async fn update(&self, contact: &Contact) -> StoreResult<Contact> {
        let mut guard = self.table.write().await;
        let mut next = guard.clone();
        let updated = next.update(contact)?;

        self.persist(&next).await?;
        *guard = next;
        Ok(updated)
    }

    async fn delete(&self, id: ContactId) -> StoreResult<()> {
        let mut guard = self.table.write().await;
        let mut next = guard.clone();
        next.remove(id)?;

        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }
}
