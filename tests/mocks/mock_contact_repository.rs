use async_trait::async_trait;
use contact_desk::domain::ContactId;
use contact_desk::error::{StoreError, StoreResult};
use contact_desk::models::{Contact, ContactDetails};
use contact_desk::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps records in memory, tracks method calls for verification and can be
/// told to fail writes.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<BTreeMap<ContactId, Contact>>>,
    next_id: Arc<Mutex<ContactId>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_writes: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(ContactId::first())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_writes: Arc::new(Mutex::new(false)),
        }
    }

    /// Add a contact with a fixed id.
    pub fn add_contact(&self, contact: Contact) {
        let mut next_id = self.next_id.lock().unwrap();
        if contact.id >= *next_id {
            *next_id = contact.id.next().unwrap();
        }
        self.contacts.lock().unwrap().insert(contact.id, contact);
    }

    /// Make every insert, update and delete fail with an I/O error.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Snapshot of all stored contacts, ascending by id.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().values().cloned().collect()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_writable(&self) -> StoreResult<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "mock store is read-only",
            )));
        }
        Ok(())
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        self.track_call("find");
        Ok(self.contacts.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("find_all");
        Ok(self.contacts())
    }

    async fn insert(&self, details: ContactDetails) -> StoreResult<Contact> {
        self.track_call("insert");
        self.check_writable()?;

        let mut next_id = self.next_id.lock().unwrap();
        let contact = Contact::new(*next_id, details);
        *next_id = next_id.next().ok_or(StoreError::IdsExhausted)?;

        self.contacts
            .lock()
            .unwrap()
            .insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn update(&self, contact: &Contact) -> StoreResult<Contact> {
        self.track_call("update");
        self.check_writable()?;

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.get_mut(&contact.id) {
            Some(stored) => {
                *stored = contact.clone();
                Ok(contact.clone())
            }
            None => Err(StoreError::NotFound(contact.id)),
        }
    }

    async fn delete(&self, id: ContactId) -> StoreResult<()> {
        self.track_call("delete");
        self.check_writable()?;

        self.contacts
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
