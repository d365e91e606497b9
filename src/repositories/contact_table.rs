use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactDetails};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rows plus the id counter, shared by the store implementations.
#[derive(Debug, Clone)]
pub(crate) struct ContactTable {
    next_id: ContactId,
    rows: BTreeMap<ContactId, Contact>,
}

/// On-disk layout of a [`ContactTable`].
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TableSnapshot {
    next_id: ContactId,
    contacts: Vec<Contact>,
}

impl Default for ContactTable {
    fn default() -> Self {
        Self {
            next_id: ContactId::first(),
            rows: BTreeMap::new(),
        }
    }
}

impl ContactTable {
    pub(crate) fn get(&self, id: ContactId) -> Option<Contact> {
        self.rows.get(&id).cloned()
    }

    pub(crate) fn all(&self) -> Vec<Contact> {
        self.rows.values().cloned().collect()
    }

    pub(crate) fn insert(&mut self, details: ContactDetails) -> StoreResult<Contact> {
        let id = self.next_id;
        self.next_id = id.next().ok_or(StoreError::IdsExhausted)?;

        let contact = Contact::new(id, details);
        self.rows.insert(id, contact.clone());
        Ok(contact)
    }

    pub(crate) fn update(&mut self, contact: &Contact) -> StoreResult<Contact> {
        let row = self
            .rows
            .get_mut(&contact.id)
            .ok_or(StoreError::NotFound(contact.id))?;
        *row = contact.clone();
        Ok(contact.clone())
    }

    pub(crate) fn remove(&mut self, id: ContactId) -> StoreResult<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub(crate) fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            next_id: self.next_id,
            contacts: self.all(),
        }
    }

    /// Rebuild from a snapshot. The counter never moves backwards past a
    /// stored id, even if the snapshot was edited by hand.
    ///
    /// Fails when the highest stored id leaves no id to hand out next.
    pub(crate) fn from_snapshot(snapshot: TableSnapshot) -> StoreResult<Self> {
        let rows: BTreeMap<ContactId, Contact> = snapshot
            .contacts
            .into_iter()
            .map(|contact| (contact.id, contact))
            .collect();

        let next_id = match rows.keys().next_back() {
            Some(last) => last
                .next()
                .ok_or(StoreError::IdsExhausted)?
                .max(snapshot.next_id),
            None => snapshot.next_id,
        };

        Ok(Self { next_id, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, Title};

    fn contact(id: u64) -> Contact {
        Contact::new(
            ContactId::new(id).unwrap(),
            ContactDetails {
                title: Title::Mr,
                name: "Sam".to_string(),
                company: None,
                telephone: None,
                email: EmailAddress::new("sam@example.com").unwrap(),
                message: "Hi".to_string(),
            },
        )
    }

    #[test]
    fn test_snapshot_counter_never_moves_backwards() {
        let table = ContactTable::from_snapshot(TableSnapshot {
            next_id: ContactId::first(),
            contacts: vec![contact(7)],
        })
        .unwrap();
        assert_eq!(table.next_id.get(), 8);
    }

    #[test]
    fn test_snapshot_at_max_id_is_an_error() {
        let result = ContactTable::from_snapshot(TableSnapshot {
            next_id: ContactId::first(),
            contacts: vec![contact(u64::MAX)],
        });
        assert!(matches!(result, Err(StoreError::IdsExhausted)));
    }

    #[test]
    fn test_insert_fails_when_ids_run_out() {
        let mut table = ContactTable {
            next_id: ContactId::new(u64::MAX).unwrap(),
            rows: BTreeMap::new(),
        };
        let details = contact(1).details;

        assert!(matches!(
            table.insert(details),
            Err(StoreError::IdsExhausted)
        ));
        assert!(table.all().is_empty());
    }
}
