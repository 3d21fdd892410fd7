#![forbid(unsafe_code)]
//! Contact records shared by the store, API and server crates.

mod contact;

pub use contact::{Contact, ContactId, ContactInput, ValidationError};

pub const CRATE_NAME: &str = "bijux-contacts-model";
