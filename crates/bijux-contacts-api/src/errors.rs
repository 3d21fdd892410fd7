// SPDX-License-Identifier: Apache-2.0

use crate::messages;
use bijux_contacts_model::ValidationError;
use serde_json::{json, Value};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiErrorCode {
    ValidationFailed,
    InvalidBody,
    ContactNotFound,
    StoreUnavailable,
}

impl ApiErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationFailed => "validation_failed",
            Self::InvalidBody => "invalid_body",
            Self::ContactNotFound => "contact_not_found",
            Self::StoreUnavailable => "store_unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub errors: Vec<String>,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors,
        }
    }

    #[must_use]
    pub fn validation_failed(errors: Vec<ValidationError>) -> Self {
        Self::new(
            ApiErrorCode::ValidationFailed,
            "validation failed",
            errors.into_iter().map(|e| e.0).collect(),
        )
    }

    #[must_use]
    pub fn invalid_body(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::new(ApiErrorCode::InvalidBody, "invalid body", vec![reason])
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::new(
            ApiErrorCode::ContactNotFound,
            messages::CONTACT_NOT_FOUND,
            Vec::new(),
        )
    }

    #[must_use]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::StoreUnavailable, message, Vec::new())
    }

    /// JSON body for this error: `{errors}` for rejected input, `{message}`
    /// for unknown ids and `{error}` for storage failures.
    #[must_use]
    pub fn body(&self) -> Value {
        match self.code {
            ApiErrorCode::ValidationFailed | ApiErrorCode::InvalidBody => {
                json!({ "errors": self.errors })
            }
            ApiErrorCode::ContactNotFound => json!({ "message": self.message }),
            ApiErrorCode::StoreUnavailable => json!({ "error": self.message }),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            write!(f, "{}: {}", self.code.as_str(), self.message)
        } else {
            write!(
                f,
                "{}: {} ({})",
                self.code.as_str(),
                self.message,
                self.errors.join("; ")
            )
        }
    }
}

impl std::error::Error for ApiError {}
