// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::api_error_response;
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use bijux_contacts_api::ApiError;
use bijux_contacts_model::ContactInput;

/// Create/update payload accepted as JSON or as an urlencoded form.
///
/// An empty body is an empty payload, so every field is reported by the
/// validators instead of failing here.
#[derive(Debug)]
pub(crate) struct ContactPayload(pub ContactInput);

const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Media types are case-insensitive; parameters such as `charset` are ignored.
fn is_form_content_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(FORM_MEDIA_TYPE))
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(is_form_content_type)
}

#[async_trait]
impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            // Form's own content-type check is case-sensitive.
            let (mut parts, body) = req.into_parts();
            parts
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_MEDIA_TYPE));
            let req = Request::from_parts(parts, body);
            return match Form::<ContactInput>::from_request(req, state).await {
                Ok(Form(input)) => Ok(Self(input)),
                Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                    Err(rejection.into_response())
                }
                Err(rejection) => Err(api_error_response(&ApiError::invalid_body(
                    rejection.body_text(),
                ))),
            };
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(ContactInput::default()));
        }
        serde_json::from_slice::<ContactInput>(&bytes)
            .map(Self)
            .map_err(|e| api_error_response(&ApiError::invalid_body(e.to_string())))
    }
}
