use axum::http::HeaderMap;

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{provider_rejected, SendRequest};
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_SECRET_HEADER: &str = "x-api-secret";

/// Compares the client credential headers against the configured pair.
/// An unconfigured credential requires its header to be absent.
pub fn authorize(config: &AppConfig, headers: &HeaderMap) -> AppResult<()> {
    let key = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    let secret = headers.get(API_SECRET_HEADER).and_then(|v| v.to_str().ok());

    if key != config.client_api_key.as_deref() || secret != config.client_api_secret.as_deref() {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

/// Validates the token, resolves the recipient and forwards the message.
/// Returns the provider's response untouched.
pub async fn relay_sms(state: &AppState, request: SendRequest) -> AppResult<serde_json::Value> {
    let token = request.token.as_deref().filter(|t| !t.is_empty());
    let message = request.message.as_deref().filter(|m| !m.is_empty());
    let (Some(token), Some(message)) = (token, message) else {
        return Err(AppError::BadRequest("Missing 'token' or 'message'".to_string()));
    };

    let record = match state.token_store.fetch(token).await {
        Ok(Some(record)) => record,
        Ok(None) => return Err(AppError::InvalidToken),
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "token lookup failed");
            return Err(AppError::InvalidToken);
        }
    };

    if state.config.quota_enforced && record.quota_exhausted() {
        tracing::info!(used = record.used(), quota = ?record.quota, "quota exhausted");
        return Err(AppError::QuotaExceeded);
    }

    let to = request
        .recipient()
        .or_else(|| record.stored_phone())
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest("Missing phone number".to_string()))?;

    let response = state.sms.send_sms(&to, message).await?;
    tracing::info!(to = %to, "SMS forwarded to provider");

    // Awaited so the counter is written before the reply; a failure is only logged.
    if state.config.quota_enforced {
        if provider_rejected(&response) {
            tracing::warn!(to = %to, "provider rejected message, quota not charged");
        } else if let Err(e) = state.token_store.record_use(token, record.used() + 1).await {
            tracing::warn!(error = %format!("{e:#}"), "failed to update token usage");
        }
    }

    Ok(response)
}
