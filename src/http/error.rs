//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type for HTTP handlers.
///
/// Per-body upstream failures never reach this type; they degrade to the
/// `"Error"` marker inside an otherwise successful response. Only client
/// input errors fail the whole request.
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    /// One of the required query parameters is absent.
    MissingParameters,
    /// A parameter is present but unusable.
    BadRequest(String),
}

impl AppError {
    /// Exact message the API contract fixes for absent parameters.
    pub const MISSING_PARAMETERS: &'static str = "Missing parameters: birth, lat, lon required";
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::MissingParameters => Self::MISSING_PARAMETERS.to_string(),
            AppError::BadRequest(msg) => msg,
        };
        (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
    }
}
