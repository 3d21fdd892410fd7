// SPDX-License-Identifier: Apache-2.0

use crate::http::body::ContactPayload;
use crate::http::response_contract::{respond, store_failure};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bijux_contacts_api::{
    messages, parse_contact_id, validate_contact, ApiError, ContactCreatedResponse,
    ContactListResponse, ContactResponse, ContactUpdatedResponse, ValidationContext,
};
use bijux_contacts_model::{Contact, ContactInput};
use std::sync::Arc;
use tracing::{debug, error, Span};

/// Runs synchronous store work on the blocking pool, inside the caller's
/// request span.
async fn run_blocking<F>(work: F) -> Result<Response, ApiError>
where
    F: FnOnce() -> Result<Response, ApiError> + Send + 'static,
{
    let span = Span::current();
    tokio::task::spawn_blocking(move || span.in_scope(work))
        .await
        .map_err(|e| {
            error!(error = %e, "contact store task failed");
            ApiError::store_unavailable(messages::LOAD_FAILED)
        })?
}

pub(crate) async fn list_contacts_handler(State(state): State<AppState>) -> Response {
    respond(run_blocking(move || list_contacts(&state)).await)
}

pub(crate) async fn get_contact_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    respond(run_blocking(move || get_contact(&state, &raw_id)).await)
}

/// `GET /contacts/add`: the literal `add` segment shadows `:id`, so the
/// lookup runs with `add` as the id and reports not-found.
pub(crate) async fn get_add_segment_handler(State(state): State<AppState>) -> Response {
    respond(run_blocking(move || get_contact(&state, "add")).await)
}

pub(crate) async fn create_contact_handler(
    State(state): State<AppState>,
    ContactPayload(input): ContactPayload,
) -> Response {
    let _gate = Arc::clone(&state.write_gate).lock_owned().await;
    respond(run_blocking(move || create_contact(&state, &input)).await)
}

pub(crate) async fn delete_contact_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let _gate = Arc::clone(&state.write_gate).lock_owned().await;
    respond(run_blocking(move || delete_contact(&state, &raw_id)).await)
}

pub(crate) async fn update_contact_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ContactPayload(input): ContactPayload,
) -> Response {
    let _gate = Arc::clone(&state.write_gate).lock_owned().await;
    respond(run_blocking(move || update_contact(&state, &raw_id, input)).await)
}

pub(crate) async fn route_not_found_handler() -> Response {
    (StatusCode::NOT_FOUND, messages::ROUTE_NOT_FOUND).into_response()
}

fn list_contacts(state: &AppState) -> Result<Response, ApiError> {
    let contacts = state.book.load().map_err(store_failure)?;
    Ok(Json(ContactListResponse::new(contacts, messages::LIST_OK)).into_response())
}

fn get_contact(state: &AppState, raw_id: &str) -> Result<Response, ApiError> {
    let id = parse_contact_id(raw_id).ok_or_else(ApiError::not_found)?;
    let contact = state
        .book
        .find_by_id(id)
        .map_err(store_failure)?
        .ok_or_else(ApiError::not_found)?;
    Ok(Json(ContactResponse::new(contact)).into_response())
}

fn create_contact(state: &AppState, input: &ContactInput) -> Result<Response, ApiError> {
    let duplicate = state
        .book
        .check_duplicate_name(&input.nama)
        .map_err(store_failure)?;
    validate_contact(input, &ValidationContext::for_create(duplicate.as_ref())).map_err(
        |errors| {
            debug!(rejected = errors.len(), "create rejected by validation");
            ApiError::validation_failed(errors)
        },
    )?;

    let created = state.book.add(input).map_err(store_failure)?;
    let contacts = state.book.load().map_err(store_failure)?;
    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse::new(contacts, created)),
    )
        .into_response())
}

fn delete_contact(state: &AppState, raw_id: &str) -> Result<Response, ApiError> {
    let id = parse_contact_id(raw_id).ok_or_else(ApiError::not_found)?;
    if state
        .book
        .find_by_id(id)
        .map_err(store_failure)?
        .is_none()
    {
        return Err(ApiError::not_found());
    }

    state.book.delete(id).map_err(store_failure)?;
    let contacts = state.book.load().map_err(store_failure)?;
    Ok(Json(ContactListResponse::new(contacts, messages::delete_ok(id))).into_response())
}

fn update_contact(
    state: &AppState,
    raw_id: &str,
    input: ContactInput,
) -> Result<Response, ApiError> {
    let id = parse_contact_id(raw_id).ok_or_else(ApiError::not_found)?;
    // Unknown ids are reported before the payload is looked at.
    let existing = state
        .book
        .find_by_id(id)
        .map_err(store_failure)?
        .ok_or_else(ApiError::not_found)?;
    let duplicate = state
        .book
        .check_duplicate_name(&input.nama)
        .map_err(store_failure)?;
    validate_contact(
        &input,
        &ValidationContext::for_update(&existing, duplicate.as_ref()),
    )
    .map_err(|errors| {
        debug!(id = %id, rejected = errors.len(), "update rejected by validation");
        ApiError::validation_failed(errors)
    })?;

    let updated = Contact::new(id, input);
    state.book.update(updated.clone()).map_err(store_failure)?;
    Ok(Json(ContactUpdatedResponse::new(updated)).into_response())
}
