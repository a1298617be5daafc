use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::app_error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Server configuration error" })),
            )
                .into_response(),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method not allowed" })),
            )
                .into_response(),
            AppError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::AlreadyRegistered => (
                StatusCode::CONFLICT,
                Json(json!({ "error": "This email is already on our waitlist" })),
            )
                .into_response(),
            AppError::EmailProvider {
                details: Some(details),
            } => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Failed to send email", "details": details })),
            )
                .into_response(),
            AppError::EmailProvider { details: None } => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Failed to send email" })),
            )
                .into_response(),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Database error" })),
            )
                .into_response(),
        }
    }
}
