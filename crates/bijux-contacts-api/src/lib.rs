#![forbid(unsafe_code)]

mod error_mapping;
mod errors;
pub mod messages;
pub mod params;
mod responses;
pub mod validate;

pub use error_mapping::status_code;
pub use errors::{ApiError, ApiErrorCode};
pub use params::parse_contact_id;
pub use responses::{
    ContactCreatedResponse, ContactListResponse, ContactResponse, ContactUpdatedResponse,
};
pub use validate::{validate_contact, ValidationContext};

pub const CRATE_NAME: &str = "bijux-contacts-api";
