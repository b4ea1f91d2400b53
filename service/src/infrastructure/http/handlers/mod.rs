use axum::http::{HeaderMap, StatusCode, header};

use crate::domain::AppState;
use crate::domain::auth::AuthGate;
use crate::infrastructure::http::api::ApiError;

pub mod agenda;
pub mod articles;
pub mod auth;
pub mod authorizations;
pub mod info;
pub mod live;
pub mod stats;
pub mod videos;
pub mod webradio;

// health check handler
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Who a staff credential belongs to.
pub(crate) enum Staff {
    Admin,
    Manager(String),
}

pub(crate) fn bearer_token(headers: &HeaderMap) -> &str {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or("")
}

pub(crate) fn require_admin<S: AppState>(state: &S, headers: &HeaderMap) -> Result<(), ApiError> {
    if state.gate().is_admin(bearer_token(headers)) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

/// Admin or manager; managers come back with their roster id.
pub(crate) fn require_staff<S: AppState>(
    state: &S,
    headers: &HeaderMap,
) -> Result<Staff, ApiError> {
    let token = bearer_token(headers);
    if state.gate().is_admin(token) {
        return Ok(Staff::Admin);
    }
    if let Some(manager_id) = state.gate().manager_id(token) {
        return Ok(Staff::Manager(manager_id));
    }
    Err(ApiError::Unauthorized)
}

pub(crate) fn is_admin<S: AppState>(state: &S, headers: &HeaderMap) -> bool {
    state.gate().is_admin(bearer_token(headers))
}
