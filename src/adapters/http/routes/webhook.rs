use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use serde_json::json;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::confirmation::{ConfirmationOutcome, WebhookNotification},
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/waitlist",
        post(receive)
            .options(preflight)
            .fallback(unsupported_method),
    )
}

/// Database webhook target for INSERTs into public.waitlist.
///
/// The body is taken as a raw string so malformed JSON maps to a 400 with
/// the contract's `{error}` shape instead of a framework rejection.
async fn receive(State(app_state): State<AppState>, body: String) -> AppResult<impl IntoResponse> {
    let confirmation = app_state
        .confirmation
        .as_ref()
        .ok_or(AppError::Configuration)?;

    let notification: WebhookNotification =
        serde_json::from_str(&body).map_err(|_| AppError::InvalidInput("Invalid JSON".into()))?;

    let payload = match confirmation.handle(notification).await? {
        ConfirmationOutcome::Sent { id } => json!({ "ok": true, "id": id }),
        ConfirmationOutcome::Ignored => json!({ "error": "Ignored: not a waitlist insert" }),
    };
    Ok(Json(payload))
}

async fn preflight() -> &'static str {
    "ok"
}

/// The credential check outranks the method check: without it, every
/// non-preflight request fails fast.
async fn unsupported_method(State(app_state): State<AppState>) -> AppError {
    if app_state.confirmation.is_none() {
        return AppError::Configuration;
    }
    AppError::MethodNotAllowed
}
