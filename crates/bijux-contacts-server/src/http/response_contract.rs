// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bijux_contacts_api::{messages, status_code, ApiError};
use bijux_contacts_store::StoreError;
use tracing::error;

#[must_use]
pub(crate) fn api_error_response(err: &ApiError) -> Response {
    let status =
        StatusCode::from_u16(status_code(err)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.body())).into_response()
}

/// Logs the underlying cause and returns the generic client-facing error.
#[must_use]
pub(crate) fn store_failure(err: StoreError) -> ApiError {
    error!(code = err.code.as_str(), error = %err, "contact store failure");
    let message = if err.code.is_load_failure() {
        messages::LOAD_FAILED
    } else {
        messages::SAVE_FAILED
    };
    ApiError::store_unavailable(message)
}

#[must_use]
pub(crate) fn respond(result: Result<Response, ApiError>) -> Response {
    result.unwrap_or_else(|err| api_error_response(&err))
}
