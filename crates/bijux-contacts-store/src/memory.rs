// SPDX-License-Identifier: Apache-2.0

use crate::{ContactStore, StoreError, StoreErrorCode};
use bijux_contacts_model::Contact;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

/// In-memory store for tests and benches.
///
/// Keeps whatever order it was handed, like the file backend, and can be
/// switched into failure modes to exercise error paths.
#[derive(Default)]
pub struct MemoryStore {
    contacts: Mutex<Vec<Contact>>,
    pub fail_loads: AtomicBool,
    pub fail_saves: AtomicBool,
    pub save_calls: AtomicU64,
}

impl MemoryStore {
    #[must_use]
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
            ..Self::default()
        }
    }

    /// Current contents without going through the failure switches.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

impl ContactStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    fn load(&self) -> Result<Vec<Contact>, StoreError> {
        if self.fail_loads.load(Ordering::Relaxed) {
            return Err(StoreError::new(
                StoreErrorCode::Read,
                "memory store configured to fail loads",
            ));
        }
        self.contacts
            .lock()
            .map(|c| c.clone())
            .map_err(|_| StoreError::new(StoreErrorCode::Internal, "memory store lock poisoned"))
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), StoreError> {
        self.save_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(StoreError::new(
                StoreErrorCode::Write,
                "memory store configured to fail saves",
            ));
        }
        let mut guard = self
            .contacts
            .lock()
            .map_err(|_| StoreError::new(StoreErrorCode::Internal, "memory store lock poisoned"))?;
        *guard = contacts.to_vec();
        Ok(())
    }
}
