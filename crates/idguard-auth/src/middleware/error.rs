//! Error responses for rejected requests.
//!
//! Every rejection is `403 Forbidden` with a one-field JSON body. The body
//! only says whether the header or the token was at fault; the detailed
//! reason is logged, never returned.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::IdguardError;

/// Body message for header failures.
pub const INVALID_HEADER_MESSAGE: &str = "invalid Authorization header";

/// Body message for every other failure.
pub const INVALID_TOKEN_MESSAGE: &str = "invalid token";

impl IntoResponse for IdguardError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Header(_) => INVALID_HEADER_MESSAGE,
            _ => INVALID_TOKEN_MESSAGE,
        };
        (StatusCode::FORBIDDEN, Json(json!({ "message": message }))).into_response()
    }
}
