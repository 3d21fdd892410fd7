// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[must_use]
pub fn status_code(error: &ApiError) -> u16 {
    match error.code {
        ApiErrorCode::ValidationFailed | ApiErrorCode::InvalidBody => 400,
        ApiErrorCode::ContactNotFound => 404,
        ApiErrorCode::StoreUnavailable => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bijux_contacts_model::ValidationError;

    #[test]
    fn every_error_kind_maps_to_its_status_and_body_shape() {
        let validation =
            ApiError::validation_failed(vec![ValidationError::new("Email tidak valid")]);
        assert_eq!(status_code(&validation), 400);
        assert_eq!(validation.body()["errors"][0], "Email tidak valid");

        let body = ApiError::invalid_body("expected value at line 1");
        assert_eq!(status_code(&body), 400);
        assert_eq!(body.body()["errors"][0], "expected value at line 1");

        let missing = ApiError::not_found();
        assert_eq!(status_code(&missing), 404);
        assert_eq!(missing.body()["message"], "Kontak tidak ditemukan");

        let store = ApiError::store_unavailable("Gagal memuat data kontak");
        assert_eq!(status_code(&store), 500);
        assert_eq!(store.body()["error"], "Gagal memuat data kontak");
    }
}
