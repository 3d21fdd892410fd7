#![forbid(unsafe_code)]

use bijux_contacts_model::Contact;
use std::fmt::{Display, Formatter};

mod book;
mod json_file;
mod memory;

pub use book::ContactBook;
pub use json_file::{JsonFileStore, DEFAULT_DATA_PATH, EMPTY_STORE_BYTES};
pub use memory::MemoryStore;

pub const CRATE_NAME: &str = "bijux-contacts-store";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorCode {
    Read,
    Parse,
    Serialize,
    Write,
    Internal,
}

impl StoreErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read_error",
            Self::Parse => "parse_error",
            Self::Serialize => "serialize_error",
            Self::Write => "write_error",
            Self::Internal => "internal_error",
        }
    }

    /// True when the failure happened while materializing the collection
    /// rather than while persisting it.
    #[must_use]
    pub const fn is_load_failure(self) -> bool {
        matches!(self, Self::Read | Self::Parse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for StoreError {}

/// Whole-collection persistence for contacts.
///
/// Implementations read and write the full list on every call; ordering is
/// the caller's concern (see [`ContactBook::save`]).
pub trait ContactStore: Send + Sync + 'static {
    fn backend_tag(&self) -> &'static str;
    fn load(&self) -> Result<Vec<Contact>, StoreError>;
    fn save(&self, contacts: &[Contact]) -> Result<(), StoreError>;
}
