use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::errors::AppError;
use crate::models::{SendRequest, SendResponse};
use crate::services::relay;
use crate::state::AppState;

// POST /send-sms
pub async fn send_sms(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match handle(&state, &headers, &body).await {
        Ok(provider_response) => Json(SendResponse::success(provider_response)).into_response(),
        Err(e) => {
            if let AppError::Internal(msg) = &e {
                tracing::error!(error = %msg, "send-sms failed");
            } else {
                tracing::info!(status = %e.status(), reason = %e, "send-sms rejected");
            }
            e.into_response()
        }
    }
}

async fn handle(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<serde_json::Value, AppError> {
    // Credentials are checked before the body is even parsed.
    relay::authorize(&state.config, headers)?;

    let request: SendRequest = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;

    relay::relay_sms(state, request).await
}
