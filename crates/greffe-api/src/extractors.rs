//! JSON body extraction helpers.
//!
//! Handlers take `Result<Json<T>, JsonRejection>` instead of a bare
//! `Json<T>` so a malformed body surfaces as our structured 422 error
//! body rather than Axum's default plain-text rejection. Field-level
//! validation happens in the registry, not here.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Unwrap an Axum JSON extraction, mapping rejections to [`AppError`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match result {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[allow(dead_code)]
        name: String,
    }

    #[test]
    fn ok_body_passes_through() {
        let result: Result<Json<Probe>, JsonRejection> = Ok(Json(Probe {
            name: "greffe".to_string(),
        }));
        assert!(extract_json(result).is_ok());
    }
}
