// SPDX-License-Identifier: Apache-2.0

use crate::messages;
use bijux_contacts_model::Contact;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactListResponse {
    pub success: bool,
    pub data: Vec<Contact>,
    pub message: String,
}

impl ContactListResponse {
    #[must_use]
    pub fn new(data: Vec<Contact>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub data: Contact,
    pub message: String,
}

impl ContactResponse {
    #[must_use]
    pub fn new(data: Contact) -> Self {
        let message = messages::get_ok(data.id);
        Self {
            success: true,
            data,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreatedResponse {
    pub success: bool,
    pub data: Vec<Contact>,
    pub message: String,
    pub new_contact: Contact,
}

impl ContactCreatedResponse {
    #[must_use]
    pub fn new(data: Vec<Contact>, new_contact: Contact) -> Self {
        Self {
            success: true,
            data,
            message: messages::CREATE_OK.to_string(),
            new_contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdatedResponse {
    pub success: bool,
    pub updated_contact: Contact,
    pub message: String,
}

impl ContactUpdatedResponse {
    #[must_use]
    pub fn new(updated_contact: Contact) -> Self {
        let message = messages::update_ok(updated_contact.id);
        Self {
            success: true,
            updated_contact,
            message,
        }
    }
}
