// SPDX-License-Identifier: Apache-2.0

use crate::{ContactStore, StoreError, StoreErrorCode};
use bijux_contacts_model::Contact;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_DATA_PATH: &str = "data/contacts.json";
pub const EMPTY_STORE_BYTES: &[u8] = b"[]";

/// Contacts persisted as one JSON array in a single file.
///
/// Saves overwrite the file in place; a crash mid-write can leave it
/// truncated.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and an empty array file when absent.
    /// An existing file is left untouched, even if it is not valid JSON.
    pub fn init(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::new(
                    StoreErrorCode::Write,
                    format!("create {}: {e}", parent.display()),
                )
            })?;
        }
        if !self.path.exists() {
            fs::write(&self.path, EMPTY_STORE_BYTES).map_err(|e| {
                StoreError::new(
                    StoreErrorCode::Write,
                    format!("create {}: {e}", self.path.display()),
                )
            })?;
            info!(path = %self.path.display(), "initialized empty contact store");
        }
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

impl ContactStore for JsonFileStore {
    fn backend_tag(&self) -> &'static str {
        "json-file"
    }

    fn load(&self) -> Result<Vec<Contact>, StoreError> {
        let raw = fs::read(&self.path).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Read,
                format!("read {}: {e}", self.path.display()),
            )
        })?;
        serde_json::from_slice(&raw).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Parse,
                format!("parse {}: {e}", self.path.display()),
            )
        })
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(contacts)
            .map_err(|e| StoreError::new(StoreErrorCode::Serialize, e.to_string()))?;
        fs::write(&self.path, bytes).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Write,
                format!("write {}: {e}", self.path.display()),
            )
        })
    }
}
