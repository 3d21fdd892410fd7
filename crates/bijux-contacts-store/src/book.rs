// SPDX-License-Identifier: Apache-2.0

use crate::{ContactStore, StoreError, StoreErrorCode};
use bijux_contacts_model::{Contact, ContactId, ContactInput};
use std::sync::Arc;
use tracing::{debug, info};

/// CRUD over a [`ContactStore`].
///
/// Every operation re-reads the whole collection and every mutation rewrites
/// it; nothing is cached between calls.
#[derive(Clone)]
pub struct ContactBook {
    store: Arc<dyn ContactStore>,
}

impl ContactBook {
    #[must_use]
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn backend_tag(&self) -> &'static str {
        self.store.backend_tag()
    }

    pub fn load(&self) -> Result<Vec<Contact>, StoreError> {
        let contacts = self.store.load()?;
        debug!(
            backend = self.store.backend_tag(),
            count = contacts.len(),
            "contacts loaded"
        );
        Ok(contacts)
    }

    /// Persists `contacts` in ascending id order.
    pub fn save(&self, mut contacts: Vec<Contact>) -> Result<(), StoreError> {
        contacts.sort_by_key(|c| c.id);
        self.store.save(&contacts)
    }

    pub fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, StoreError> {
        Ok(self.load()?.into_iter().find(|c| c.id == id))
    }

    /// First contact whose name is exactly `name` (case-sensitive).
    pub fn check_duplicate_name(&self, name: &str) -> Result<Option<Contact>, StoreError> {
        Ok(self.load()?.into_iter().find(|c| c.nama == name))
    }

    /// Appends a new contact with id `max + 1` (or 1 on an empty store).
    /// Fails without saving once `max` is `i64::MAX`.
    pub fn add(&self, input: &ContactInput) -> Result<Contact, StoreError> {
        let mut contacts = self.load()?;
        let id = match contacts.iter().map(|c| c.id).max() {
            None => ContactId::FIRST,
            Some(max) => max.next().ok_or_else(|| {
                StoreError::new(
                    StoreErrorCode::Internal,
                    format!("contact id space exhausted after {max}"),
                )
            })?,
        };
        let contact = Contact::new(id, input.clone());
        contacts.push(contact.clone());
        self.save(contacts)?;
        info!(id = %id, "contact added");
        Ok(contact)
    }

    pub fn delete(&self, id: ContactId) -> Result<(), StoreError> {
        let contacts = self.load()?;
        let before = contacts.len();
        let remaining: Vec<Contact> = contacts.into_iter().filter(|c| c.id != id).collect();
        let removed = before - remaining.len();
        self.save(remaining)?;
        info!(id = %id, removed, "contact deleted");
        Ok(())
    }

    /// Replaces the record carrying `contact.id` with `contact` as a whole.
    pub fn update(&self, contact: Contact) -> Result<(), StoreError> {
        let id = contact.id;
        let mut contacts: Vec<Contact> = self
            .load()?
            .into_iter()
            .filter(|c| c.id != id)
            .collect();
        contacts.push(contact);
        self.save(contacts)?;
        info!(id = %id, "contact updated");
        Ok(())
    }
}
